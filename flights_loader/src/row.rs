use csv::{StringRecord, Trim};
use serde::Deserialize;
use shared::flight::NewFlight;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RowError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("{field} must be a yes/no value, got {value:?}")]
    InvalidFlag { field: &'static str, value: String },
}

/// One line of the passengers CSV. Flags stay text until [`parse_flag`] reads them.
#[derive(Debug, Deserialize)]
struct CsvFlightRow {
    airline: String,
    from: String,
    to: String,
    day: i32,
    month: i32,
    year: i32,
    duration: i32,
    age: i32,
    gender: String,
    reason: String,
    stay: String,
    connection: String,
    wait: i32,
    ticket: String,
    checked_bags: i32,
    carry_on: String,
}

/// Header names are trimmed; field values reach the API exactly as written.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(Trim::Headers);
    builder
}

pub fn parse_row(headers: &StringRecord, record: &StringRecord) -> Result<NewFlight, RowError> {
    let row: CsvFlightRow = record.deserialize(Some(headers))?;
    Ok(NewFlight {
        airline: row.airline,
        origin: row.from,
        destination: row.to,
        day: row.day,
        month: row.month,
        year: row.year,
        duration: row.duration,
        age: row.age,
        gender: row.gender,
        reason: row.reason,
        stay: row.stay,
        connection: parse_flag("connection", &row.connection)?,
        wait: row.wait,
        ticket: row.ticket,
        checked_bags: row.checked_bags,
        carry_on: parse_flag("carry_on", &row.carry_on)?,
    })
}

/// Renders a row as `header=value` pairs for diagnostics.
pub fn describe(headers: &StringRecord, record: &StringRecord) -> String {
    headers
        .iter()
        .zip(record.iter())
        .map(|(h, v)| format!("{h}={v}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn parse_flag(field: &'static str, value: &str) -> Result<bool, RowError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(RowError::InvalidFlag {
            field,
            value: value.to_string(),
        }),
    }
}
