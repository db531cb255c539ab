//! Mock port implementations for testing
//!
//! Provides in-memory mocks for the profile store and image host, enabling
//! deterministic workflow tests without database or network dependencies.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use linkfolio_core::{ImageStore, ProfileRepository};
use linkfolio_domain::{
    ImagePayload, ImageSlot, LinkfolioError, Profile, ProfileFilter, ProfileReplacement,
    Result as DomainResult,
};

/// In-memory mock for `ProfileRepository`.
///
/// Enforces case-sensitive username uniqueness like the real store and counts
/// every call so tests can assert on side effects.
#[derive(Default)]
pub struct MockProfileRepository {
    profiles: Mutex<Vec<Profile>>,
    calls: AtomicUsize,
    fail_writes: Option<LinkfolioError>,
}

impl MockProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every insert/update/delete fail with `error`.
    pub fn failing_writes(error: LinkfolioError) -> Self {
        Self { fail_writes: Some(error), ..Self::default() }
    }

    /// Seed a profile directly, bypassing call counting.
    pub fn seed(&self, profile: Profile) {
        self.profiles.lock().unwrap().push(profile);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<Profile> {
        self.profiles.lock().unwrap().clone()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn check_writable(&self) -> DomainResult<()> {
        match &self.fail_writes {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn find_one(&self, filter: &ProfileFilter) -> DomainResult<Option<Profile>> {
        self.record_call();
        let profiles = self.profiles.lock().unwrap();
        Ok(profiles.iter().find(|p| filter.matches(&p.username)).cloned())
    }

    async fn insert(&self, profile: Profile) -> DomainResult<Profile> {
        self.record_call();
        self.check_writable()?;
        let mut profiles = self.profiles.lock().unwrap();
        if profiles.iter().any(|p| p.username == profile.username) {
            return Err(LinkfolioError::Conflict("Username is already taken".into()));
        }
        profiles.push(profile.clone());
        Ok(profile)
    }

    async fn find_one_and_update(
        &self,
        filter: &ProfileFilter,
        replacement: ProfileReplacement,
    ) -> DomainResult<Option<Profile>> {
        self.record_call();
        self.check_writable()?;
        let mut profiles = self.profiles.lock().unwrap();
        let Some(index) = profiles.iter().position(|p| filter.matches(&p.username)) else {
            return Ok(None);
        };

        let data = replacement.into_data(&profiles[index].username);
        if profiles.iter().enumerate().any(|(i, p)| i != index && p.username == data.username) {
            return Err(LinkfolioError::Conflict("Username is already taken".into()));
        }

        let updated = profiles[index].clone().replace(data, Utc::now());
        profiles[index] = updated.clone();
        Ok(Some(updated))
    }

    async fn find_one_and_delete(&self, filter: &ProfileFilter) -> DomainResult<Option<Profile>> {
        self.record_call();
        self.check_writable()?;
        let mut profiles = self.profiles.lock().unwrap();
        Ok(profiles
            .iter()
            .position(|p| filter.matches(&p.username))
            .map(|index| profiles.remove(index)))
    }

    async fn health_check(&self) -> DomainResult<()> {
        Ok(())
    }
}

/// Image store that records uploads and hands out predictable URLs.
#[derive(Default)]
pub struct RecordingImageStore {
    uploads: Mutex<Vec<(ImageSlot, ImagePayload)>>,
    counter: AtomicUsize,
    fail_slot: Option<ImageSlot>,
}

impl RecordingImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail uploads for `slot` only.
    pub fn failing_on(slot: ImageSlot) -> Self {
        Self { fail_slot: Some(slot), ..Self::default() }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn uploaded_slots(&self) -> Vec<ImageSlot> {
        self.uploads.lock().unwrap().iter().map(|(slot, _)| *slot).collect()
    }
}

#[async_trait]
impl ImageStore for RecordingImageStore {
    async fn upload(&self, slot: ImageSlot, image: ImagePayload) -> DomainResult<String> {
        if self.fail_slot == Some(slot) {
            return Err(LinkfolioError::Upload(format!("{slot} rejected by image host")));
        }
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        self.uploads.lock().unwrap().push((slot, image));
        Ok(format!("https://images.test/{}/{n}.png", slot.field_name()))
    }
}

/// Build a service over fresh mocks and hand the mocks back for assertions.
pub fn service_with(
    repository: MockProfileRepository,
    images: RecordingImageStore,
) -> (linkfolio_core::ProfileService, Arc<MockProfileRepository>, Arc<RecordingImageStore>) {
    let repository = Arc::new(repository);
    let images = Arc::new(images);
    let service = linkfolio_core::ProfileService::new(
        Arc::clone(&repository) as Arc<dyn ProfileRepository>,
        Arc::clone(&images) as Arc<dyn ImageStore>,
    );
    (service, repository, images)
}
