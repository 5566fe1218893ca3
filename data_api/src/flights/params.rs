use crate::flights::db::queries::{Limit, MonthlyTraffic};
use serde::Deserialize;

const DEFAULT_LIMIT: u32 = 10;

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct ListFlightsParams {
    #[serde(default)]
    pub age: i32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

#[derive(Debug, Deserialize)]
pub struct BusiestAirportsParams {
    #[serde(default = "default_limit")]
    pub num_airports: u32,
}

#[derive(Debug, Deserialize)]
pub struct BusiestMonthsParams {
    pub airport_code: String,
    #[serde(default = "default_limit")]
    pub num_months: u32,
}

#[derive(Debug, Deserialize)]
pub struct AirlineMonthsParams {
    pub airport_code: String,
    pub airline_name: String,
}

#[derive(Debug, Deserialize)]
pub struct VacationMonthsParams {
    pub airport_code: String,
}

impl From<BusiestMonthsParams> for MonthlyTraffic {
    fn from(params: BusiestMonthsParams) -> Self {
        Self::Airport {
            airport_code: params.airport_code,
            limit: Limit::from(params.num_months),
        }
    }
}

impl From<AirlineMonthsParams> for MonthlyTraffic {
    fn from(params: AirlineMonthsParams) -> Self {
        Self::AirlineDepartures {
            airport_code: params.airport_code,
            airline: params.airline_name,
        }
    }
}

impl From<VacationMonthsParams> for MonthlyTraffic {
    fn from(params: VacationMonthsParams) -> Self {
        Self::Vacation {
            airport_code: params.airport_code,
        }
    }
}
