//! Hosted image store integration
//!
//! Uploads profile and header images to a Cloudinary-compatible endpoint
//! using signed multipart requests.
//!
//! # Usage
//!
//! ```no_run
//! use linkfolio_domain::{ImagePayload, ImageSlot, ImageStoreConfig};
//! use linkfolio_core::ImageStore;
//! use linkfolio_infra::integrations::image_store::HttpImageStore;
//! # async fn example(config: ImageStoreConfig) -> linkfolio_domain::Result<()> {
//! let store = HttpImageStore::from_config(&config)?;
//! let url = store.upload(ImageSlot::Profile, ImagePayload::new(vec![0x89, 0x50])).await?;
//! println!("stored at {url}");
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - Transport failures and timeouts surface as `LinkfolioError::Network`
//! - Non-2xx responses surface the provider's `error.message` as
//!   `LinkfolioError::Upload`
//! - Nothing is retried

pub mod client;
pub mod signing;
pub mod types;

pub use client::HttpImageStore;
pub use signing::sign_params;
pub use types::{UploadErrorBody, UploadResponse};
