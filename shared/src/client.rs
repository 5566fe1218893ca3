use crate::flight::{AirportTraffic, FlightRecord, MonthCount, NewFlight};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{status} {body}")]
    Status { status: StatusCode, body: String },
}

/// HTTP client for the flights API.
#[derive(Debug, Clone)]
pub struct FlightsClient {
    http: Client,
    base_url: String,
}

impl FlightsClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn create_flight(&self, flight: &NewFlight) -> Result<FlightRecord, ClientError> {
        let resp = self
            .http
            .post(self.endpoint("/flight"))
            .json(flight)
            .send()
            .await?;
        Self::read_json(resp).await
    }

    pub async fn list_flights(&self, age: i32, limit: u32) -> Result<Vec<FlightRecord>, ClientError> {
        self.get_json(
            "/flight",
            &[("age", age.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    pub async fn busiest_airports(
        &self,
        num_airports: u32,
    ) -> Result<Vec<AirportTraffic>, ClientError> {
        self.get_json(
            "/flight/busiest_airports",
            &[("num_airports", num_airports.to_string())],
        )
        .await
    }

    pub async fn busiest_airport_months(
        &self,
        airport_code: &str,
        num_months: u32,
    ) -> Result<Vec<MonthCount>, ClientError> {
        self.get_json(
            "/flight/busiest_airports/months",
            &[
                ("airport_code", airport_code.to_string()),
                ("num_months", num_months.to_string()),
            ],
        )
        .await
    }

    pub async fn most_active_months(
        &self,
        airport_code: &str,
        airline_name: &str,
    ) -> Result<Vec<MonthCount>, ClientError> {
        self.get_json(
            "/flight/most_active_months",
            &[
                ("airport_code", airport_code.to_string()),
                ("airline_name", airline_name.to_string()),
            ],
        )
        .await
    }

    pub async fn vacation_months(&self, airport_code: &str) -> Result<Vec<MonthCount>, ClientError> {
        self.get_json(
            "/flight/vacation_months",
            &[("airport_code", airport_code.to_string())],
        )
        .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = self.endpoint(path);
        debug!(url = %url, ?params, "requesting flights API");
        let resp = self.http.get(url).query(params).send().await?;
        Self::read_json(resp).await
    }

    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }
        Ok(resp.json::<T>().await?)
    }
}
