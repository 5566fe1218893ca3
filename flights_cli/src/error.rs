use shared::client::ClientError;
use shared::error::InitializationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Init(#[from] InitializationError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed before a value for {0} was given")]
    InputClosed(String),
}
