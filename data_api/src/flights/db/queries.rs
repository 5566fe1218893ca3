use shared::flight::VACATION_REASON;
use sqlx::{Postgres, QueryBuilder};

/// Columns of a persisted flight, in the order [`shared::flight::FlightRecord`] reads them.
pub const FLIGHT_COLUMNS: &str = "id, airline, origin, destination, day, month, year, duration, age, \
     gender, reason, stay, connection, wait, ticket, checked_bags, carry_on";

const BUSIEST_AIRPORTS_SQL: &str = r"
        SELECT code, COUNT(*) AS total_passengers
        FROM (
            SELECT origin AS code FROM flights
            UNION ALL
            SELECT destination AS code FROM flights
        ) AS traffic
        GROUP BY code
        ORDER BY total_passengers DESC, code ASC";

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Sql(#[from] sqlx::Error),
}

/// Maximum number of rows a query returns. A requested limit of 0 means no cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Unbounded,
    AtMost(u32),
}

impl From<u32> for Limit {
    fn from(value: u32) -> Self {
        match value {
            0 => Self::Unbounded,
            n => Self::AtMost(n),
        }
    }
}

impl Limit {
    fn push_to(self, builder: &mut QueryBuilder<'static, Postgres>) {
        if let Self::AtMost(n) = self {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(n));
        }
    }
}

/// Per-month segment counts over a filtered subset of flights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthlyTraffic {
    /// Segments departing from or arriving at the airport.
    Airport { airport_code: String, limit: Limit },
    /// Segments of one airline departing from the airport.
    AirlineDepartures {
        airport_code: String,
        airline: String,
    },
    /// Vacation segments departing from or arriving at the airport.
    Vacation { airport_code: String },
}

impl MonthlyTraffic {
    pub fn limit(&self) -> Limit {
        match self {
            Self::Airport { limit, .. } => *limit,
            Self::AirlineDepartures { .. } | Self::Vacation { .. } => Limit::Unbounded,
        }
    }

    fn push_predicate(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        match self {
            Self::Airport { airport_code, .. } => push_touches_airport(builder, airport_code),
            Self::AirlineDepartures {
                airport_code,
                airline,
            } => {
                builder.push("origin = ");
                builder.push_bind(airport_code.clone());
                builder.push(" AND airline = ");
                builder.push_bind(airline.clone());
            }
            Self::Vacation { airport_code } => {
                push_touches_airport(builder, airport_code);
                builder.push(" AND reason = ");
                builder.push_bind(VACATION_REASON);
            }
        }
    }
}

fn push_touches_airport(builder: &mut QueryBuilder<'static, Postgres>, airport_code: &str) {
    builder.push("(origin = ");
    builder.push_bind(airport_code.to_owned());
    builder.push(" OR destination = ");
    builder.push_bind(airport_code.to_owned());
    builder.push(")");
}

/// Read queries over the `flights` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlightQuery {
    /// Flights whose passenger is at least `age` years old. Store order.
    MinAge { age: i32, limit: Limit },
    /// Airports by departures plus arrivals, busiest first, ties by code.
    BusiestAirports { limit: Limit },
    /// Months by segment count, busiest first, ties by month.
    Months(MonthlyTraffic),
}

impl FlightQuery {
    pub fn build(&self) -> QueryBuilder<'static, Postgres> {
        match self {
            Self::MinAge { age, limit } => {
                let mut builder =
                    QueryBuilder::new(format!("SELECT {FLIGHT_COLUMNS} FROM flights WHERE age >= "));
                builder.push_bind(*age);
                limit.push_to(&mut builder);
                builder
            }
            Self::BusiestAirports { limit } => {
                let mut builder = QueryBuilder::new(BUSIEST_AIRPORTS_SQL);
                limit.push_to(&mut builder);
                builder
            }
            Self::Months(traffic) => {
                let mut builder =
                    QueryBuilder::new("SELECT month, COUNT(*) AS count FROM flights WHERE ");
                traffic.push_predicate(&mut builder);
                builder.push(" GROUP BY month ORDER BY count DESC, month ASC");
                traffic.limit().push_to(&mut builder);
                builder
            }
        }
    }
}
