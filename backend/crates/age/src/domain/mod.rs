//! Domain Layer - Calendar arithmetic and value types
//!
//! This layer contains:
//! - Domain entities (AgeData, TimeRemaining)
//! - Domain value objects (Birthdate, Gender)
//! - Calendar period arithmetic
//! - Domain services (age and remaining-time calculation)

pub mod entities;
pub mod period;
pub mod services;
pub mod value_objects;
