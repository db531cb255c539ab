//! # Linkfolio API
//!
//! HTTP application layer - routes, handlers and the server entry point.
//!
//! This crate contains:
//! - Axum handlers for the profile endpoints
//! - Application context (dependency injection)
//! - Multipart form extraction
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Maps domain errors to HTTP responses

pub mod context;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod routes;
pub mod utils;

// Re-export for convenience
pub use context::AppContext;
pub use errors::ApiError;
pub use routes::build_router;
