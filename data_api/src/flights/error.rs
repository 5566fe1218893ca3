use crate::flights::db::queries::QueryError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::warn;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    #[serde(serialize_with = "serialize_status")]
    pub status_code: StatusCode,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
    #[error(transparent)]
    InvalidParams(#[from] QueryRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Query(QueryError::Sql(e)) => {
                warn!(error = ?e, "sql error");
                ErrorMessage::from((StatusCode::INTERNAL_SERVER_ERROR, "")).into_response()
            }
            ApiError::InvalidBody(rejection) => {
                warn!(error = %rejection.body_text(), "rejected flight body");
                ErrorMessage::from((rejection.status(), rejection.body_text())).into_response()
            }
            ApiError::InvalidParams(rejection) => {
                warn!(error = %rejection.body_text(), "rejected query parameters");
                ErrorMessage::from((StatusCode::BAD_REQUEST, rejection.body_text())).into_response()
            }
        }
    }
}

fn serialize_status<S>(value: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(value.as_u16())
}

impl From<(StatusCode, String)> for ErrorMessage {
    fn from((status_code, message): (StatusCode, String)) -> Self {
        Self {
            status_code,
            message,
        }
    }
}

impl From<(StatusCode, &str)> for ErrorMessage {
    fn from((status_code, message): (StatusCode, &str)) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }
}

impl IntoResponse for ErrorMessage {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}
