//! Application Layer - Use Cases
//!
//! This layer validates boundary input and orchestrates the domain
//! services with the injected clock.

pub mod calculate_age;
