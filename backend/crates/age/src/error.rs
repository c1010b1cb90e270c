//! Age Error Types
//!
//! This module provides age-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::QueryRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Age-specific result type alias
pub type AgeResult<T> = Result<T, AgeError>;

/// Age-specific error variants
///
/// Both variants are client errors detected at the boundary; the
/// calculation itself is total over valid input.
#[derive(Debug, Error)]
pub enum AgeError {
    /// Birthdate lies after today
    #[error("Birthdate cannot be in the future")]
    FutureBirthdate,

    /// Missing or malformed `birthdate` / `gender` query parameter
    #[error("{0}")]
    InvalidQuery(#[from] QueryRejection),
}

impl AgeError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AgeError::FutureBirthdate | AgeError::InvalidQuery(_) => ErrorKind::BadRequest,
        }
    }

    fn log(&self) {
        match self {
            AgeError::FutureBirthdate => {
                tracing::debug!("Rejected future birthdate");
            }
            AgeError::InvalidQuery(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "Rejected age query");
            }
        }
    }
}

impl From<AgeError> for AppError {
    fn from(err: AgeError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            AgeError::InvalidQuery(rejection) => AppError::new(kind, message).with_source(rejection),
            AgeError::FutureBirthdate => AppError::new(kind, message),
        }
    }
}

impl IntoResponse for AgeError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
