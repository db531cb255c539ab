//! # Linkfolio Domain
//!
//! Business domain types and models for Linkfolio.
//!
//! This crate contains:
//! - Profile records and the inputs accepted by the profile workflow
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and key derivation helpers
//!
//! ## Architecture
//! - No dependencies on other Linkfolio crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::fields::parse_flag;
pub use utils::keys::{delete_lookup_key, derive_profile_key, fold_username, validate_username};
