use crate::row::{describe, parse_row};
use shared::client::{ClientError, FlightsClient};
use std::io::{Read, Write};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub posted: usize,
    pub failed: usize,
}

/// Posts every row of `reader` to the API, one at a time.
///
/// Rows that cannot be read, parsed or stored are reported on `out` and
/// skipped. Stops before the next row once `token` is cancelled.
pub async fn load_rows<R: Read, W: Write>(
    client: &FlightsClient,
    mut reader: csv::Reader<R>,
    out: &mut W,
    token: &CancellationToken,
) -> Result<LoadSummary, std::io::Error> {
    let mut summary = LoadSummary::default();
    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            writeln!(out, "Failed to read CSV headers - Error: {e}")?;
            return Ok(summary);
        }
    };

    for (index, result) in reader.records().enumerate() {
        if token.is_cancelled() {
            warn!(rows_seen = index, "load cancelled");
            break;
        }

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                writeln!(out, "Failed to read row {} - Error: {e}", index + 1)?;
                summary.failed += 1;
                continue;
            }
        };
        let data = describe(&headers, &record);

        let flight = match parse_row(&headers, &record) {
            Ok(flight) => flight,
            Err(e) => {
                writeln!(out, "Failed to parse flight - Error: {e}, Data: {data}")?;
                summary.failed += 1;
                continue;
            }
        };

        match client.create_flight(&flight).await {
            Ok(created) => {
                debug!(id = %created.id, "flight posted");
                summary.posted += 1;
            }
            Err(ClientError::Status { status, .. }) => {
                writeln!(
                    out,
                    "Failed to post flight - Status code: {}, Data: {data}",
                    status.as_u16()
                )?;
                summary.failed += 1;
            }
            Err(e) => {
                writeln!(out, "Failed to post flight - Error: {e}, Data: {data}")?;
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
