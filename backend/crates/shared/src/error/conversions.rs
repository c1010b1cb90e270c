//! Error conversions - HTTP rendering of [`AppError`]
//!
//! Every error leaves the API as `{"error": "<message>"}` with the status
//! code of its [`ErrorKind`](super::kind::ErrorKind).

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::app_error::AppError;
use super::body::ErrorBody;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(kind = %self.kind(), message = self.message(), "Request rejected");

        let status = StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
        let body = ErrorBody {
            error: self.message().to_owned(),
        };

        (status, Json(body)).into_response()
    }
}
