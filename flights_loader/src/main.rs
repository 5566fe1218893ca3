mod load;
mod row;

use crate::load::load_rows;
use crate::row::reader_builder;
use clap::Parser;
use shared::client::FlightsClient;
use shared::error::InitializationError;
use shared::{init_tracing, load_config, shutdown_listener};
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "flights_loader", about = "Bulk-load flight passengers from a CSV file")]
struct Args {
    /// CSV file with one flight segment per row
    #[arg(long, default_value = "flight_passengers.csv")]
    file: PathBuf,
}

#[derive(Debug, Error)]
enum LoaderError {
    #[error(transparent)]
    Init(#[from] InitializationError),
    #[error("failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: csv::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[tokio::main]
async fn main() -> Result<(), LoaderError> {
    let args = Args::parse();
    init_tracing()?;
    let config = load_config().map_err(InitializationError::from)?;

    let reader = reader_builder()
        .from_path(&args.file)
        .map_err(|source| LoaderError::Open {
            path: args.file.clone(),
            source,
        })?;
    let client = FlightsClient::new(reqwest::Client::new(), config.client.base_url);
    info!(file = %args.file.display(), base_url = client.base_url(), "loading flights");

    let token = CancellationToken::new();
    tokio::spawn(shutdown_listener(Some(token.clone())));

    let summary = load_rows(&client, reader, &mut io::stdout(), &token).await?;
    info!(posted = summary.posted, failed = summary.failed, "flight load finished");

    Ok(())
}
