use crate::flights::db::queries::{Limit, MonthlyTraffic, QueryError};
use crate::flights::db::store::FlightStore;
use async_trait::async_trait;
use shared::flight::{AirportTraffic, FlightRecord, MonthCount, NewFlight, VACATION_REASON};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use uuid::Uuid;

/// In-memory [`FlightStore`] with the same grouping and ordering rules as the SQL queries.
#[derive(Default)]
pub struct MemoryFlightStore {
    flights: Mutex<Vec<FlightRecord>>,
}

fn truncate<T>(limit: Limit, mut rows: Vec<T>) -> Vec<T> {
    if let Limit::AtMost(n) = limit {
        rows.truncate(n as usize);
    }
    rows
}

fn touches_airport(flight: &NewFlight, airport_code: &str) -> bool {
    flight.origin == airport_code || flight.destination == airport_code
}

/// Evaluates the filter against a single flight, mirroring the SQL predicate.
fn matches(query: &MonthlyTraffic, flight: &NewFlight) -> bool {
    match query {
        MonthlyTraffic::Airport { airport_code, .. } => touches_airport(flight, airport_code),
        MonthlyTraffic::AirlineDepartures {
            airport_code,
            airline,
        } => flight.origin == *airport_code && flight.airline == *airline,
        MonthlyTraffic::Vacation { airport_code } => {
            touches_airport(flight, airport_code) && flight.reason == VACATION_REASON
        }
    }
}

impl MemoryFlightStore {
    pub fn with_flights(flights: impl IntoIterator<Item = NewFlight>) -> Self {
        let records = flights
            .into_iter()
            .map(|flight| FlightRecord {
                id: Uuid::now_v7(),
                flight,
            })
            .collect();
        Self {
            flights: Mutex::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.flights.lock().unwrap().len()
    }
}

#[async_trait]
impl FlightStore for MemoryFlightStore {
    async fn insert_flight(&self, flight: &NewFlight) -> Result<FlightRecord, QueryError> {
        let record = FlightRecord {
            id: Uuid::now_v7(),
            flight: flight.clone(),
        };
        self.flights.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn flights_by_min_age(
        &self,
        age: i32,
        limit: Limit,
    ) -> Result<Vec<FlightRecord>, QueryError> {
        let rows = self
            .flights
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.flight.age >= age)
            .cloned()
            .collect();
        Ok(truncate(limit, rows))
    }

    async fn busiest_airports(&self, limit: Limit) -> Result<Vec<AirportTraffic>, QueryError> {
        let mut totals: HashMap<String, i64> = HashMap::new();
        for record in self.flights.lock().unwrap().iter() {
            *totals.entry(record.flight.origin.clone()).or_default() += 1;
            *totals.entry(record.flight.destination.clone()).or_default() += 1;
        }

        let mut rows = totals
            .into_iter()
            .map(|(code, total_passengers)| AirportTraffic {
                code,
                total_passengers,
            })
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| {
            b.total_passengers
                .cmp(&a.total_passengers)
                .then_with(|| a.code.cmp(&b.code))
        });
        Ok(truncate(limit, rows))
    }

    async fn monthly_traffic(&self, query: &MonthlyTraffic) -> Result<Vec<MonthCount>, QueryError> {
        let mut counts: BTreeMap<i32, i64> = BTreeMap::new();
        for record in self.flights.lock().unwrap().iter() {
            if matches(query, &record.flight) {
                *counts.entry(record.flight.month).or_default() += 1;
            }
        }

        // BTreeMap iteration is month-ascending and the sort is stable.
        let mut rows = counts
            .into_iter()
            .map(|(month, count)| MonthCount { month, count })
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        Ok(truncate(query.limit(), rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business_flight() -> NewFlight {
        NewFlight {
            airline: "Delta".to_string(),
            origin: "SJC".to_string(),
            destination: "JFK".to_string(),
            day: 1,
            month: 3,
            year: 2022,
            duration: 300,
            age: 40,
            gender: "male".to_string(),
            reason: "Business/Work".to_string(),
            stay: "Hotel".to_string(),
            connection: false,
            wait: 0,
            ticket: "Economy".to_string(),
            checked_bags: 1,
            carry_on: true,
        }
    }

    #[test]
    fn truncate_respects_limit() {
        assert_eq!(truncate(Limit::Unbounded, vec![1, 2, 3]), vec![1, 2, 3]);
        assert_eq!(truncate(Limit::AtMost(2), vec![1, 2, 3]), vec![1, 2]);
    }

    #[test]
    fn filters_agree_with_predicates() {
        let flight = business_flight();
        let airport = MonthlyTraffic::Airport {
            airport_code: "JFK".to_string(),
            limit: Limit::Unbounded,
        };
        let departures = MonthlyTraffic::AirlineDepartures {
            airport_code: "JFK".to_string(),
            airline: "Delta".to_string(),
        };
        let vacation = MonthlyTraffic::Vacation {
            airport_code: "JFK".to_string(),
        };

        assert!(matches(&airport, &flight));
        assert!(!matches(&departures, &flight));
        assert!(!matches(&vacation, &flight));
    }

    #[test]
    fn vacation_reason_is_case_sensitive() {
        let vacation = MonthlyTraffic::Vacation {
            airport_code: "JFK".to_string(),
        };
        let mut flight = business_flight();
        flight.reason = VACATION_REASON.to_string();
        assert!(matches(&vacation, &flight));
        flight.reason = "on vacation/pleasure".to_string();
        assert!(!matches(&vacation, &flight));
    }
}
