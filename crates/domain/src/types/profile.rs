//! Profile records
//!
//! A profile is the only persisted entity. `username` is the storage key;
//! everything else is replaced wholesale on update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::social_links::SocialLinks;

/// Stored profile document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub job_title: String,
    /// Durable image URL, empty when no image was ever uploaded.
    pub profile_image: String,
    pub header_image: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_verified: bool,
    pub is_company: bool,
    pub social_links: Option<SocialLinks>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The replaceable part of a profile: every field except identity and
/// timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub username: String,
    pub name: String,
    pub job_title: String,
    pub profile_image: String,
    pub header_image: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_verified: bool,
    pub is_company: bool,
    pub social_links: Option<SocialLinks>,
}

/// Replacement document for an update.
///
/// Every field overwrites the stored value, absent optionals included.
/// `username: None` is the one exception: the stored key is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileReplacement {
    pub username: Option<String>,
    pub name: String,
    pub job_title: String,
    pub profile_image: String,
    pub header_image: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_verified: bool,
    pub is_company: bool,
    pub social_links: Option<SocialLinks>,
}

impl ProfileReplacement {
    /// Resolve into a full data set given the username currently stored.
    pub fn into_data(self, stored_username: &str) -> ProfileData {
        ProfileData {
            username: self.username.unwrap_or_else(|| stored_username.to_string()),
            name: self.name,
            job_title: self.job_title,
            profile_image: self.profile_image,
            header_image: self.header_image,
            phone: self.phone,
            email: self.email,
            is_verified: self.is_verified,
            is_company: self.is_company,
            social_links: self.social_links,
        }
    }
}

impl Profile {
    /// Build a brand new profile with a fresh id.
    pub fn create(data: ProfileData, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: data.username,
            name: data.name,
            job_title: data.job_title,
            profile_image: data.profile_image,
            header_image: data.header_image,
            phone: data.phone,
            email: data.email,
            is_verified: data.is_verified,
            is_company: data.is_company,
            social_links: data.social_links,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every data field, keeping `id` and `created_at`.
    pub fn replace(self, data: ProfileData, now: DateTime<Utc>) -> Self {
        Self { id: self.id, created_at: self.created_at, ..Self::create(data, now) }
    }

    /// Snapshot of the replaceable fields.
    pub fn data(&self) -> ProfileData {
        ProfileData {
            username: self.username.clone(),
            name: self.name.clone(),
            job_title: self.job_title.clone(),
            profile_image: self.profile_image.clone(),
            header_image: self.header_image.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            is_verified: self.is_verified,
            is_company: self.is_company,
            social_links: self.social_links.clone(),
        }
    }
}
