use crate::flights::db::queries::{Limit, MonthlyTraffic};
use crate::flights::error::ApiError;
use crate::flights::extractors::{ValidJson, ValidQuery};
use crate::flights::params::{
    AirlineMonthsParams, BusiestAirportsParams, BusiestMonthsParams, ListFlightsParams,
    VacationMonthsParams,
};
use crate::state::Db;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use shared::flight::{AirportTraffic, FlightRecord, MonthCount, NewFlight};
use tracing::{debug, info};

/// On success, returns [`StatusCode::CREATED`] and the stored [`FlightRecord`] as JSON
pub async fn create_flight(
    State(db): State<Db>,
    ValidJson(flight): ValidJson<NewFlight>,
) -> Result<impl IntoResponse, ApiError> {
    let record = db.store.insert_flight(&flight).await?;
    info!(id = %record.id, airline = %record.flight.airline, "flight created");
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list_flights(
    State(db): State<Db>,
    ValidQuery(params): ValidQuery<ListFlightsParams>,
) -> Result<Json<Vec<FlightRecord>>, ApiError> {
    let flights = db
        .store
        .flights_by_min_age(params.age, Limit::from(params.limit))
        .await?;
    debug!(age = params.age, limit = params.limit, count = flights.len(), "listed flights");
    Ok(Json(flights))
}

pub async fn get_busiest_airports(
    State(db): State<Db>,
    ValidQuery(params): ValidQuery<BusiestAirportsParams>,
) -> Result<Json<Vec<AirportTraffic>>, ApiError> {
    let airports = db
        .store
        .busiest_airports(Limit::from(params.num_airports))
        .await?;
    Ok(Json(airports))
}

pub async fn get_busiest_airport_months(
    State(db): State<Db>,
    ValidQuery(params): ValidQuery<BusiestMonthsParams>,
) -> Result<Json<Vec<MonthCount>>, ApiError> {
    monthly_traffic(&db, params.into()).await
}

pub async fn get_most_active_months(
    State(db): State<Db>,
    ValidQuery(params): ValidQuery<AirlineMonthsParams>,
) -> Result<Json<Vec<MonthCount>>, ApiError> {
    monthly_traffic(&db, params.into()).await
}

pub async fn get_vacation_months(
    State(db): State<Db>,
    ValidQuery(params): ValidQuery<VacationMonthsParams>,
) -> Result<Json<Vec<MonthCount>>, ApiError> {
    monthly_traffic(&db, params.into()).await
}

async fn monthly_traffic(db: &Db, query: MonthlyTraffic) -> Result<Json<Vec<MonthCount>>, ApiError> {
    let months = db.store.monthly_traffic(&query).await?;
    debug!(query = ?query, count = months.len(), "computed monthly traffic");
    Ok(Json(months))
}
