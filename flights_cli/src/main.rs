mod cli;
mod error;
mod output;
mod prompt;

use crate::cli::{Action, Cli};
use crate::error::CliError;
use crate::prompt::Prompter;
use clap::Parser;
use shared::client::{ClientError, FlightsClient};
use shared::error::InitializationError;
use shared::{ClientConfig, Config, default_env_filter, load_config};
use std::fs::{File, OpenOptions};
use std::io;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "flights command failed");
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    // Logging starts before the config result is checked.
    let loaded = load_config();
    let default_log = ClientConfig::default().log_file;
    init_file_logging(log_path(&loaded, &default_log), &default_log)?;
    let config = loaded.map_err(InitializationError::from)?;
    info!(
        base_url = %config.client.base_url,
        command = ?cli.command,
        "flights catalog client invoked"
    );

    let action = {
        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
        cli.command.resolve(&mut prompter)?
    };

    let client = FlightsClient::new(reqwest::Client::new(), config.client.base_url);
    let printed = execute(&client, &action).await?;
    print!("{printed}");
    Ok(())
}

async fn execute(client: &FlightsClient, action: &Action) -> Result<String, ClientError> {
    Ok(match action {
        Action::Search { age, limit } => output::flights(&client.list_flights(*age, *limit).await?),
        Action::Busiest { num_airports } => {
            output::airports(&client.busiest_airports(*num_airports).await?)
        }
        Action::Months {
            airport_code,
            num_months,
        } => output::busiest_months(
            airport_code,
            &client
                .busiest_airport_months(airport_code, *num_months)
                .await?,
        ),
        Action::Airlines {
            airport_code,
            airline_name,
        } => output::airline_months(
            airport_code,
            airline_name,
            &client.most_active_months(airport_code, airline_name).await?,
        ),
        Action::Vacation { airport_code } => {
            output::vacation_months(airport_code, &client.vacation_months(airport_code).await?)
        }
    })
}

fn log_path<'a, E>(loaded: &'a Result<Config, E>, fallback: &'a str) -> &'a str {
    match loaded {
        Ok(config) => &config.client.log_file,
        Err(_) => fallback,
    }
}

/// Opens `path` for appending, or `fallback` when `path` cannot be opened.
/// The error for `path` is handed back alongside a fallback file so it can be logged.
fn open_log_file(
    path: &str,
    fallback: &str,
) -> Result<(File, Option<InitializationError>), InitializationError> {
    let open = |p: &str| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(p)
            .map_err(|source| InitializationError::LogFile {
                path: p.to_string(),
                source,
            })
    };
    match open(path) {
        Ok(file) => Ok((file, None)),
        Err(e) if path != fallback => Ok((open(fallback)?, Some(e))),
        Err(e) => Err(e),
    }
}

/// Appends this invocation's log lines, timestamped, to `path`.
fn init_file_logging(path: &str, fallback: &str) -> Result<(), InitializationError> {
    let (file, unavailable) = open_log_file(path, fallback)?;

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .with_env_filter(default_env_filter())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    if let Some(e) = unavailable {
        warn!(error = %e, fallback, "log file unavailable, using fallback");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn scratch_log() -> PathBuf {
        std::env::temp_dir().join(format!("flights-{}.log", Uuid::new_v4()))
    }

    #[test]
    fn unreadable_config_logs_to_default_file() {
        let loaded: Result<Config, ()> = Err(());
        assert_eq!(log_path(&loaded, "flights.log"), "flights.log");

        let mut config = Config::default();
        config.client.log_file = "custom.log".to_string();
        let loaded: Result<Config, ()> = Ok(config);
        assert_eq!(log_path(&loaded, "flights.log"), "custom.log");
    }

    #[test]
    fn unopenable_log_file_falls_back() {
        let fallback = scratch_log();
        let fallback = fallback.to_str().unwrap();
        let missing_dir = std::env::temp_dir()
            .join(Uuid::new_v4().to_string())
            .join("flights.log");

        let (_, unavailable) = open_log_file(missing_dir.to_str().unwrap(), fallback).unwrap();
        assert!(matches!(
            unavailable,
            Some(InitializationError::LogFile { .. })
        ));
        assert!(std::path::Path::new(fallback).exists());
        std::fs::remove_file(fallback).unwrap();
    }

    #[test]
    fn unopenable_fallback_is_an_error() {
        let missing = std::env::temp_dir()
            .join(Uuid::new_v4().to_string())
            .join("flights.log");
        let missing = missing.to_str().unwrap();
        assert!(matches!(
            open_log_file(missing, missing),
            Err(InitializationError::LogFile { .. })
        ));
    }
}
