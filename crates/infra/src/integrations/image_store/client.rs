//! Signed multipart upload client

use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Utc;
use linkfolio_core::ImageStore;
use linkfolio_domain::{ImagePayload, ImageSlot, ImageStoreConfig, LinkfolioError, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use tracing::{debug, info, warn};

use super::signing::sign_params;
use super::types::{UploadErrorBody, UploadResponse};
use crate::http::HttpClient;

const SIGNATURE_ALGORITHM: &str = "sha256";
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// [`ImageStore`] backed by a hosted image provider.
pub struct HttpImageStore {
    http_client: HttpClient,
    upload_url: String,
    api_key: String,
    api_secret: String,
    folder: Option<String>,
}

impl HttpImageStore {
    /// Create a store that sends requests through `http_client`.
    pub fn new(
        http_client: HttpClient,
        upload_url: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            upload_url: upload_url.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            folder: None,
        }
    }

    /// Place uploads under `folder` on the provider side.
    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    /// Build a store from configuration, including its own HTTP client.
    ///
    /// # Errors
    /// Returns `LinkfolioError::Config` when credentials are missing.
    pub fn from_config(config: &ImageStoreConfig) -> Result<Self> {
        for (name, value) in [
            ("upload_url", &config.upload_url),
            ("api_key", &config.api_key),
            ("api_secret", &config.api_secret),
        ] {
            if value.trim().is_empty() {
                return Err(LinkfolioError::Config(format!("image_store.{name} is not set")));
            }
        }

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.max(1)))
            .user_agent(concat!("linkfolio/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let store =
            Self::new(http_client, &config.upload_url, &config.api_key, &config.api_secret);

        Ok(match config.folder.as_deref().filter(|f| !f.is_empty()) {
            Some(folder) => store.with_folder(folder),
            None => store,
        })
    }

    fn build_form(&self, image: ImagePayload, timestamp: &str) -> Result<Form> {
        let folder = self.folder.as_deref().unwrap_or_default();
        let signature =
            sign_params(&[("folder", folder), ("timestamp", timestamp)], &self.api_secret);

        let content_type =
            image.content_type.unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name.unwrap_or_else(|| "upload".to_string()))
            .mime_str(&content_type)
            .map_err(|_| {
                LinkfolioError::InvalidInput(format!("Unsupported image content type: {content_type}"))
            })?;

        let mut form = Form::new()
            .part("file", part)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp.to_string());

        if !folder.is_empty() {
            form = form.text("folder", folder.to_string());
        }

        Ok(form
            .text("signature", signature)
            .text("signature_algorithm", SIGNATURE_ALGORITHM))
    }
}

#[async_trait]
impl ImageStore for HttpImageStore {
    async fn upload(&self, slot: ImageSlot, image: ImagePayload) -> Result<String> {
        let started = Instant::now();
        let size = image.len();
        let timestamp = Utc::now().timestamp().to_string();
        let form = self.build_form(image, &timestamp)?;

        debug!(%slot, bytes = size, "Uploading image");

        let request = self.http_client.request(Method::POST, &self.upload_url).multipart(form);
        let response = self.http_client.send(request).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<UploadErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or_else(|_| format!("image store returned HTTP {}", status.as_u16()));

            warn!(%slot, status = status.as_u16(), error = %message, "Image upload rejected");
            return Err(LinkfolioError::Upload(message));
        }

        let parsed: UploadResponse = response.json().await.map_err(|e| {
            LinkfolioError::Upload(format!("unreadable image store response: {e}"))
        })?;

        let url = parsed.durable_url().ok_or_else(|| {
            LinkfolioError::Upload("image store response did not include a URL".into())
        })?;

        info!(
            %slot,
            bytes = size,
            duration_ms = started.elapsed().as_millis() as u64,
            "Image uploaded"
        );

        Ok(url)
    }
}
