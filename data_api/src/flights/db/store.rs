use crate::flights::db::queries::{FLIGHT_COLUMNS, FlightQuery, Limit, MonthlyTraffic, QueryError};
use async_trait::async_trait;
use shared::flight::{AirportTraffic, FlightRecord, MonthCount, NewFlight};
use sqlx::{Pool, Postgres};
use tracing::debug;

/// Persistence for flight records. Every call is a single store round-trip.
#[async_trait]
pub trait FlightStore: Send + Sync {
    /// Persists the flight and returns it as stored, including the assigned id.
    async fn insert_flight(&self, flight: &NewFlight) -> Result<FlightRecord, QueryError>;

    async fn flights_by_min_age(&self, age: i32, limit: Limit)
    -> Result<Vec<FlightRecord>, QueryError>;

    async fn busiest_airports(&self, limit: Limit) -> Result<Vec<AirportTraffic>, QueryError>;

    async fn monthly_traffic(&self, query: &MonthlyTraffic) -> Result<Vec<MonthCount>, QueryError>;
}

pub struct PgFlightStore {
    pool: Pool<Postgres>,
}

impl PgFlightStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FlightStore for PgFlightStore {
    async fn insert_flight(&self, flight: &NewFlight) -> Result<FlightRecord, QueryError> {
        let query = format!(
            r"
            INSERT INTO flights (airline, origin, destination, day, month, year, duration, age,
                                 gender, reason, stay, connection, wait, ticket, checked_bags, carry_on)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING {FLIGHT_COLUMNS}
            "
        );

        let record = sqlx::query_as::<_, FlightRecord>(&query)
            .bind(&flight.airline)
            .bind(&flight.origin)
            .bind(&flight.destination)
            .bind(flight.day)
            .bind(flight.month)
            .bind(flight.year)
            .bind(flight.duration)
            .bind(flight.age)
            .bind(&flight.gender)
            .bind(&flight.reason)
            .bind(&flight.stay)
            .bind(flight.connection)
            .bind(flight.wait)
            .bind(&flight.ticket)
            .bind(flight.checked_bags)
            .bind(flight.carry_on)
            .fetch_one(&self.pool)
            .await?;

        debug!(id = %record.id, "flight inserted");
        Ok(record)
    }

    async fn flights_by_min_age(
        &self,
        age: i32,
        limit: Limit,
    ) -> Result<Vec<FlightRecord>, QueryError> {
        let mut builder = FlightQuery::MinAge { age, limit }.build();
        Ok(builder
            .build_query_as::<FlightRecord>()
            .fetch_all(&self.pool)
            .await?)
    }

    async fn busiest_airports(&self, limit: Limit) -> Result<Vec<AirportTraffic>, QueryError> {
        let mut builder = FlightQuery::BusiestAirports { limit }.build();
        Ok(builder
            .build_query_as::<AirportTraffic>()
            .fetch_all(&self.pool)
            .await?)
    }

    async fn monthly_traffic(&self, query: &MonthlyTraffic) -> Result<Vec<MonthCount>, QueryError> {
        let mut builder = FlightQuery::Months(query.clone()).build();
        Ok(builder
            .build_query_as::<MonthCount>()
            .fetch_all(&self.pool)
            .await?)
    }
}
