use crate::error::CliError;
use crate::prompt::Prompter;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};

#[derive(Debug, Parser)]
#[command(name = "flights", version, about = "Query the flights catalog API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List flights whose passengers are at least AGE years old
    Search {
        #[arg(long, default_value_t = 0)]
        age: i32,
        /// Maximum number of flights to list, 0 for all of them
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// List the busiest airports by departures plus arrivals
    #[command(alias = "bussiest")]
    Busiest {
        #[arg(long)]
        num_airports: Option<u32>,
    },
    /// List the busiest months of an airport
    Months {
        #[arg(long)]
        airport_code: Option<String>,
        #[arg(long)]
        num_months: Option<u32>,
    },
    /// List the most active months of an airline departing from an airport
    Airlines {
        #[arg(long)]
        airport_code: Option<String>,
        #[arg(long)]
        airline_name: Option<String>,
    },
    /// List the busiest vacation/pleasure months of an airport
    Vacation {
        #[arg(long)]
        airport_code: Option<String>,
    },
}

/// A [`Command`] with every parameter known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Search { age: i32, limit: u32 },
    Busiest { num_airports: u32 },
    Months { airport_code: String, num_months: u32 },
    Airlines { airport_code: String, airline_name: String },
    Vacation { airport_code: String },
}

impl Command {
    /// Fills in missing parameters by prompting for them.
    pub fn resolve<R: BufRead, W: Write>(
        self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Action, CliError> {
        Ok(match self {
            Command::Search { age, limit } => Action::Search { age, limit },
            Command::Busiest { num_airports } => Action::Busiest {
                num_airports: prompter
                    .or_ask(num_airports, "Please specify the number of airports to list")?,
            },
            Command::Months {
                airport_code,
                num_months,
            } => Action::Months {
                airport_code: prompter.or_ask(airport_code, "Please specify the airport to use")?,
                num_months: prompter
                    .or_ask(num_months, "Please specify the number of months to list")?,
            },
            Command::Airlines {
                airport_code,
                airline_name,
            } => Action::Airlines {
                airport_code: prompter.or_ask(airport_code, "Please specify the airport to use")?,
                airline_name: prompter
                    .or_ask(airline_name, "Please specify the airline to search")?,
            },
            Command::Vacation { airport_code } => Action::Vacation {
                airport_code: prompter.or_ask(airport_code, "Please specify the airport to use")?,
            },
        })
    }
}
