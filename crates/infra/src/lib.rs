//! # Linkfolio Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite profile store (`rusqlite` behind an `r2d2` pool)
//! - HTTP client and the hosted image store integration
//! - Configuration loading (environment and JSON/TOML files)
//! - Tracing subscriber bootstrap
//!
//! ## Architecture
//! - Implements traits defined in `linkfolio-core`
//! - Contains all "impure" code (I/O, network, filesystem)

pub mod config;
pub mod database;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod observability;

// Re-export commonly used items
pub use database::{DbManager, SqliteProfileRepository};
pub use errors::InfraError;
pub use http::HttpClient;
pub use integrations::HttpImageStore;
pub use observability::init_tracing;
