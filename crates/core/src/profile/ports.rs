//! Port interfaces for profile management
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations for profile operations.

use async_trait::async_trait;
use linkfolio_domain::{
    ImagePayload, ImageSlot, Profile, ProfileFilter, ProfileReplacement, Result,
};

/// Document store holding profiles keyed by unique username
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Return the first profile matching `filter`
    async fn find_one(&self, filter: &ProfileFilter) -> Result<Option<Profile>>;

    /// Insert a new profile
    ///
    /// Fails with `LinkfolioError::Conflict` when the username is already
    /// stored.
    async fn insert(&self, profile: Profile) -> Result<Profile>;

    /// Replace the first matching profile and return the stored result
    async fn find_one_and_update(
        &self,
        filter: &ProfileFilter,
        replacement: ProfileReplacement,
    ) -> Result<Option<Profile>>;

    /// Remove the first matching profile and return it
    async fn find_one_and_delete(&self, filter: &ProfileFilter) -> Result<Option<Profile>>;

    /// Verify the store is reachable
    async fn health_check(&self) -> Result<()>;
}

/// Hosted image provider
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Upload raw bytes and return a durable URL
    async fn upload(&self, slot: ImageSlot, image: ImagePayload) -> Result<String>;
}
