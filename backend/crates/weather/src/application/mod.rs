//! Application Layer - Use Cases

pub mod get_weather;
