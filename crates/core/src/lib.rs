//! # Linkfolio Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the profile store and image host
//! - The profile workflow (create, read, update, delete)
//!
//! ## Architecture Principles
//! - Only depends on `linkfolio-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod profile;

pub use profile::ports::{ImageStore, ProfileRepository};
pub use profile::service::{CreatedProfile, ProfileService};
pub use profile::uploads::{stage_images, ImagePolicy, StagedImages};
