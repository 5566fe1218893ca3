use crate::flights::handlers::{
    create_flight, get_busiest_airport_months, get_busiest_airports, get_most_active_months,
    get_vacation_months, list_flights,
};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

pub fn router() -> Router<AppState> {
    Router::<AppState>::new()
        .route("/flight", get(list_flights).post(create_flight))
        .route("/flight/busiest_airports", get(get_busiest_airports))
        .route(
            "/flight/busiest_airports/months",
            get(get_busiest_airport_months),
        )
        .route("/flight/most_active_months", get(get_most_active_months))
        .route("/flight/vacation_months", get(get_vacation_months))
}
