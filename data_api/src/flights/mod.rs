pub mod db;
mod error;
mod extractors;
mod handlers;
mod params;
mod router;

pub use db::store::{FlightStore, PgFlightStore};
pub use error::{ApiError, ErrorMessage};
pub use router::router;
