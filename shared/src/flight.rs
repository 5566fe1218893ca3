use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Travel reason that marks a segment as vacation travel. Matched exactly.
pub const VACATION_REASON: &str = "On vacation/Pleasure";

/// A flight segment as submitted for insertion. Every field is required.
///
/// `from` and `to` are reserved words in SQL, so they are stored in the
/// `origin` and `destination` columns while keeping their public JSON names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct NewFlight {
    pub airline: String,
    #[serde(rename = "from")]
    pub origin: String,
    #[serde(rename = "to")]
    pub destination: String,
    pub day: i32,
    pub month: i32,
    pub year: i32,
    /// Minutes.
    pub duration: i32,
    pub age: i32,
    pub gender: String,
    pub reason: String,
    pub stay: String,
    pub connection: bool,
    /// Minutes.
    pub wait: i32,
    pub ticket: String,
    pub checked_bags: i32,
    pub carry_on: bool,
}

/// A persisted flight segment with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct FlightRecord {
    pub id: Uuid,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub flight: NewFlight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AirportTraffic {
    pub code: String,
    pub total_passengers: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MonthCount {
    pub month: i32,
    pub count: i64,
}
