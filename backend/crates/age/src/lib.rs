//! Age (Age & Life Expectancy) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Calendar arithmetic, value objects, the expectancy table
//! - `application/` - Use cases
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Estimation Model
//! - Age is the number of full anniversaries between birthdate and today
//! - Remaining time counts down to a fixed, gender-specific horizon and
//!   never goes negative
//! - "Today" always comes from an injected `kernel::clock::Clock`

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use domain::entities::{AgeData, TimeRemaining};
pub use domain::value_objects::{Birthdate, Gender};
pub use error::{AgeError, AgeResult};
pub use presentation::openapi::AgeApiDoc;
pub use presentation::router::age_router;

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}
