//! Presentation Layer
//!
//! HTTP handlers, DTOs and the OpenAPI description for the API.

pub mod dto;
pub mod handlers;
pub mod openapi;
pub mod router;
