#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, Response};
use axum::Router;
use linkfolio_api::{build_router, AppContext};
use linkfolio_core::ImageStore;
use linkfolio_domain::{Config, ImagePayload, ImageSlot, LinkfolioError, Result};
use linkfolio_infra::{DbManager, SqliteProfileRepository};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const BOUNDARY: &str = "linkfolio-test-boundary";

/// Image store double returning predictable URLs.
#[derive(Default)]
pub struct FakeImageStore {
    uploads: AtomicUsize,
    fail: bool,
}

impl FakeImageStore {
    pub fn failing() -> Self {
        Self { uploads: AtomicUsize::new(0), fail: true }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageStore for FakeImageStore {
    async fn upload(&self, slot: ImageSlot, _image: ImagePayload) -> Result<String> {
        let n = self.uploads.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail {
            return Err(LinkfolioError::Upload("Invalid Signature".into()));
        }
        Ok(format!("https://images.test/{slot}/{n}.png"))
    }
}

/// Router over a temporary SQLite file and a fake image store.
pub struct TestApp {
    pub router: Router,
    pub images: Arc<FakeImageStore>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::build(Config::default(), FakeImageStore::default())
    }

    pub fn with_images(images: FakeImageStore) -> Self {
        Self::build(Config::default(), images)
    }

    pub fn with_config(config: Config) -> Self {
        Self::build(config, FakeImageStore::default())
    }

    fn build(config: Config, images: FakeImageStore) -> Self {
        let temp_dir = TempDir::new().expect("temp dir");
        let db = DbManager::new(temp_dir.path().join("api-test.db"), 4).expect("db manager");
        db.run_migrations().expect("migrations");

        let images = Arc::new(images);
        let repository = Arc::new(SqliteProfileRepository::new(Arc::new(db)));
        let ctx = AppContext::from_ports(config, repository, Arc::clone(&images) as Arc<dyn ImageStore>);

        Self { router: build_router(Arc::new(ctx)), images, _temp_dir: temp_dir }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.expect("router is infallible")
    }

    pub async fn get(&self, uri: &str) -> (u16, Value) {
        let request = Request::get(uri).body(Body::empty()).expect("request");
        read_json(self.send(request).await).await
    }

    pub async fn delete(&self, uri: &str) -> (u16, Value) {
        let request = Request::delete(uri).body(Body::empty()).expect("request");
        read_json(self.send(request).await).await
    }

    pub async fn submit(&self, method: &str, uri: &str, form: MultipartForm) -> (u16, Value) {
        read_json(self.send(form.into_request(method, uri)).await).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (u16, Value) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        read_json(self.send(request).await).await
    }
}

pub async fn read_json(response: Response<Body>) -> (u16, Value) {
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

/// Hand-built `multipart/form-data` body.
#[derive(Default)]
pub struct MultipartForm {
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn profile(username: &str) -> Self {
        Self::new().text("username", username).text("name", "Jane").text("jobTitle", "Eng")
    }

    pub fn into_bytes(mut self) -> Vec<u8> {
        self.body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }

    pub fn into_request(self, method: &str, uri: &str) -> Request<Body> {
        let bytes = self.into_bytes();
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
            .header(header::CONTENT_LENGTH, bytes.len())
            .body(Body::from(bytes))
            .expect("request")
    }
}
