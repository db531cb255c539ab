//! Image staging, the first phase of a profile write
//!
//! A write happens in two phases:
//!
//! 1. [`stage_images`] pushes any attached files to the [`ImageStore`] and
//!    resolves the final URL for each slot.
//! 2. The caller performs exactly one repository write.
//!
//! The phases are not atomic. Once phase 1 has uploaded a file nothing
//! removes it again: if phase 2 fails, [`StagedImages::fresh_uploads`] lists
//! the URLs that are now orphaned in the image store. The two uploads run
//! concurrently and complete in no particular order.

use linkfolio_domain::{ImageInput, ImageSlot, LinkfolioError, Result};
use tracing::{debug, warn};

use super::ports::ImageStore;

/// What to do with a previously stored URL passed back in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePolicy {
    /// Ignore passed-through URLs; slots without a new file end up empty.
    UploadsOnly,
    /// Keep passed-through URLs unless a new file replaces them.
    KeepExisting,
}

/// Result of phase 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedImages {
    pub profile_image: String,
    pub header_image: String,
    fresh: Vec<String>,
}

impl StagedImages {
    /// URLs uploaded by this request, in slot order (profile, header).
    pub fn fresh_uploads(&self) -> &[String] {
        &self.fresh
    }

    /// Log the uploads that a failed second phase left behind.
    pub fn report_orphans(&self, operation: &str, error: &LinkfolioError) {
        if self.fresh.is_empty() {
            return;
        }
        warn!(
            operation,
            orphaned = ?self.fresh,
            error = %error,
            "profile write failed after image upload; uploaded images are orphaned"
        );
    }
}

struct Staged {
    url: String,
    uploaded: bool,
}

async fn stage_one(
    store: &dyn ImageStore,
    slot: ImageSlot,
    input: ImageInput,
    policy: ImagePolicy,
) -> Result<Staged> {
    match input {
        ImageInput::Upload(payload) if !payload.is_empty() => {
            debug!(%slot, bytes = payload.len(), "uploading image");
            let url = store.upload(slot, payload).await?;
            Ok(Staged { url, uploaded: true })
        }
        ImageInput::Existing(url) if policy == ImagePolicy::KeepExisting => {
            Ok(Staged { url, uploaded: false })
        }
        ImageInput::Upload(_) | ImageInput::Existing(_) | ImageInput::Absent => {
            Ok(Staged { url: String::new(), uploaded: false })
        }
    }
}

/// Phase 1: upload attached files and resolve both image URLs.
///
/// If either upload fails the error is returned; an upload in the other slot
/// that did succeed is logged as orphaned.
pub async fn stage_images(
    store: &dyn ImageStore,
    profile_image: ImageInput,
    header_image: ImageInput,
    policy: ImagePolicy,
) -> Result<StagedImages> {
    let (profile, header) = tokio::join!(
        stage_one(store, ImageSlot::Profile, profile_image, policy),
        stage_one(store, ImageSlot::Header, header_image, policy),
    );

    match (profile, header) {
        (Ok(profile), Ok(header)) => {
            let fresh = [&profile, &header]
                .into_iter()
                .filter(|staged| staged.uploaded)
                .map(|staged| staged.url.clone())
                .collect();
            Ok(StagedImages { profile_image: profile.url, header_image: header.url, fresh })
        }
        (Err(err), other) | (other, Err(err)) => {
            if let Ok(staged) = other {
                if staged.uploaded {
                    warn!(
                        orphaned = %staged.url,
                        error = %err,
                        "sibling image upload failed; uploaded image is orphaned"
                    );
                }
            }
            Err(err)
        }
    }
}
