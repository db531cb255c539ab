//! Profile workflow - core business logic
//!
//! Validates input, stages images and performs exactly one repository call
//! per operation.

use std::sync::Arc;

use chrono::Utc;
use linkfolio_domain::constants::{MSG_PROFILE_NOT_FOUND, MSG_USERNAME_TAKEN};
use linkfolio_domain::{
    delete_lookup_key, derive_profile_key, validate_username, LinkfolioError, Profile,
    ProfileData, ProfileFilter, ProfileInput, ProfileReplacement, Result, SocialLinks,
    SocialLinksInput,
};
use tracing::{info, warn};

use super::ports::{ImageStore, ProfileRepository};
use super::uploads::{stage_images, ImagePolicy};

/// Outcome of a successful create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedProfile {
    /// URL-safe key derived from the username. Not persisted.
    pub profile_key: String,
    pub profile: Profile,
}

/// Profile workflow service
pub struct ProfileService {
    repository: Arc<dyn ProfileRepository>,
    images: Arc<dyn ImageStore>,
}

impl ProfileService {
    /// Create a new profile service
    pub fn new(repository: Arc<dyn ProfileRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self { repository, images }
    }

    /// Create a profile.
    ///
    /// Validation runs before any side effect. The duplicate check is not
    /// atomic with the insert; a racing insert is caught by the store's
    /// uniqueness constraint and reported the same way.
    pub async fn create_profile(&self, input: ProfileInput) -> Result<CreatedProfile> {
        let username = validate_username(input.username.as_deref())?.to_string();
        let name = require_text("name", input.name)?;
        let job_title = require_text("jobTitle", input.job_title)?;
        let social_links = resolve_social_links(input.social_links)?;

        if self.repository.find_one(&ProfileFilter::username(&username)).await?.is_some() {
            info!(%username, "create rejected: username taken");
            return Err(LinkfolioError::Conflict(MSG_USERNAME_TAKEN.to_string()));
        }

        let staged = stage_images(
            self.images.as_ref(),
            input.profile_image,
            input.header_image,
            ImagePolicy::UploadsOnly,
        )
        .await?;

        let profile = Profile::create(
            ProfileData {
                username,
                name,
                job_title,
                profile_image: staged.profile_image.clone(),
                header_image: staged.header_image.clone(),
                phone: input.phone,
                email: input.email,
                is_verified: input.is_verified,
                is_company: input.is_company,
                social_links,
            },
            Utc::now(),
        );

        match self.repository.insert(profile).await {
            Ok(saved) => {
                let profile_key = derive_profile_key(&saved.username);
                info!(username = %saved.username, %profile_key, "profile created");
                Ok(CreatedProfile { profile_key, profile: saved })
            }
            Err(err) => {
                staged.report_orphans("create_profile", &err);
                Err(err)
            }
        }
    }

    /// Fetch a profile by exact username.
    pub async fn get_profile(&self, key: &str) -> Result<Profile> {
        self.repository
            .find_one(&ProfileFilter::username(key))
            .await?
            .ok_or_else(not_found)
    }

    /// Replace a profile wholesale.
    ///
    /// `key` is matched against the stored username ignoring case. Images
    /// keep the URL passed back in the request unless a new file is
    /// attached.
    pub async fn update_profile(&self, key: &str, input: ProfileInput) -> Result<Profile> {
        let social_links = resolve_social_links(input.social_links)?;
        let username = match input.username {
            Some(username) => {
                validate_username(Some(username.as_str()))?;
                Some(username)
            }
            None => None,
        };

        let staged = stage_images(
            self.images.as_ref(),
            input.profile_image,
            input.header_image,
            ImagePolicy::KeepExisting,
        )
        .await?;

        let replacement = ProfileReplacement {
            username,
            name: input.name.unwrap_or_default(),
            job_title: input.job_title.unwrap_or_default(),
            profile_image: staged.profile_image.clone(),
            header_image: staged.header_image.clone(),
            phone: input.phone,
            email: input.email,
            is_verified: input.is_verified,
            is_company: input.is_company,
            social_links,
        };

        let filter = ProfileFilter::username_ignore_case(key);
        match self.repository.find_one_and_update(&filter, replacement).await {
            Ok(Some(updated)) => {
                info!(key, username = %updated.username, "profile updated");
                Ok(updated)
            }
            Ok(None) => {
                let err = not_found();
                staged.report_orphans("update_profile", &err);
                Err(err)
            }
            Err(err) => {
                staged.report_orphans("update_profile", &err);
                Err(err)
            }
        }
    }

    /// Delete a profile.
    ///
    /// The first hyphen in `key` becomes a space before a case-insensitive
    /// match; see [`delete_lookup_key`].
    pub async fn delete_profile(&self, key: &str) -> Result<Profile> {
        let lookup = delete_lookup_key(key);
        match self
            .repository
            .find_one_and_delete(&ProfileFilter::username_ignore_case(&lookup))
            .await?
        {
            Some(deleted) => {
                info!(key, username = %deleted.username, "profile deleted");
                Ok(deleted)
            }
            None => {
                warn!(key, %lookup, "delete matched no profile");
                Err(not_found())
            }
        }
    }

    /// Check the backing store.
    pub async fn health_check(&self) -> Result<()> {
        self.repository.health_check().await
    }
}

fn not_found() -> LinkfolioError {
    LinkfolioError::NotFound(MSG_PROFILE_NOT_FOUND.to_string())
}

fn require_text(field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(LinkfolioError::InvalidInput(format!("{field} is required"))),
    }
}

fn resolve_social_links(input: SocialLinksInput) -> Result<Option<SocialLinks>> {
    match input {
        SocialLinksInput::Absent => Ok(None),
        SocialLinksInput::Structured(links) => Ok(Some(links)),
        SocialLinksInput::Serialized(raw) => SocialLinks::parse(&raw),
    }
}
