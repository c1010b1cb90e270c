//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" shared by the age and weather
//! domains:
//! - Common error types and the JSON error body
//! - The clock abstraction that supplies "today"
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod body;
    #[cfg(feature = "axum")]
    pub mod conversions;
    pub mod kind;
}
pub mod clock;
