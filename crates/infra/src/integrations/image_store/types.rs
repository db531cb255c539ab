//! Wire types for the image provider's upload API

use serde::Deserialize;

/// Successful upload response. Only the URL fields are read.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub secure_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub public_id: Option<String>,
}

impl UploadResponse {
    /// Preferred durable URL: `secure_url`, else `url`.
    pub fn durable_url(self) -> Option<String> {
        self.secure_url.filter(|u| !u.is_empty()).or(self.url.filter(|u| !u.is_empty()))
    }
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadErrorBody {
    pub error: UploadErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadErrorDetail {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durable_url_prefers_secure_url() {
        let response: UploadResponse = serde_json::from_str(
            r#"{"secure_url":"https://cdn/a.png","url":"http://cdn/a.png","public_id":"a"}"#,
        )
        .unwrap();
        assert_eq!(response.durable_url().as_deref(), Some("https://cdn/a.png"));
    }

    #[test]
    fn durable_url_falls_back_to_url() {
        let response: UploadResponse =
            serde_json::from_str(r#"{"secure_url":"","url":"http://cdn/a.png"}"#).unwrap();
        assert_eq!(response.durable_url().as_deref(), Some("http://cdn/a.png"));
    }

    #[test]
    fn error_body_parses_message() {
        let body: UploadErrorBody =
            serde_json::from_str(r#"{"error":{"message":"Invalid Signature"}}"#).unwrap();
        assert_eq!(body.error.message, "Invalid Signature");
    }
}
