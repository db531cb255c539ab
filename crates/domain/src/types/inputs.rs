//! Inputs accepted by the profile workflow
//!
//! These mirror what the HTTP layer extracts from a request before any
//! validation has happened.

use std::fmt;

use serde::Deserialize;

use super::social_links::SocialLinks;

/// Which of the two profile images a payload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    Profile,
    Header,
}

impl ImageSlot {
    /// Form field name used for this slot.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Profile => "profileImage",
            Self::Header => "headerImage",
        }
    }

    /// Resolve a form field name back to its slot.
    pub fn from_field_name(name: &str) -> Option<Self> {
        match name {
            "profileImage" => Some(Self::Profile),
            "headerImage" => Some(Self::Header),
            _ => None,
        }
    }
}

impl fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Raw image bytes attached to a request.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

impl ImagePayload {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, file_name: None, content_type: None }
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Keeps megabytes of image data out of debug logs.
impl fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePayload")
            .field("len", &self.bytes.len())
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .finish()
    }
}

/// What the request said about one image field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageInput {
    /// Nothing supplied.
    #[default]
    Absent,
    /// A previously stored URL passed back through the form.
    Existing(String),
    /// A new file to upload.
    Upload(ImagePayload),
}

/// Social links as they arrived on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SocialLinksInput {
    #[default]
    Absent,
    Structured(SocialLinks),
    /// JSON text, parsed by the workflow.
    Serialized(String),
}

/// Field set shared by create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileInput {
    pub username: Option<String>,
    pub name: Option<String>,
    pub job_title: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_verified: bool,
    pub is_company: bool,
    pub social_links: SocialLinksInput,
    pub profile_image: ImageInput,
    pub header_image: ImageInput,
}

impl ProfileInput {
    /// Mutable access to the image input for a slot.
    pub fn image_mut(&mut self, slot: ImageSlot) -> &mut ImageInput {
        match slot {
            ImageSlot::Profile => &mut self.profile_image,
            ImageSlot::Header => &mut self.header_image,
        }
    }
}

/// JSON body accepted by the create endpoint when no files are attached.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileJsonBody {
    pub username: Option<String>,
    pub name: Option<String>,
    pub job_title: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_verified: bool,
    pub is_company: bool,
    pub social_links: Option<SocialLinks>,
    pub profile_image: Option<String>,
    pub header_image: Option<String>,
}

impl From<ProfileJsonBody> for ProfileInput {
    fn from(body: ProfileJsonBody) -> Self {
        Self {
            username: body.username,
            name: body.name,
            job_title: body.job_title,
            phone: body.phone,
            email: body.email,
            is_verified: body.is_verified,
            is_company: body.is_company,
            social_links: body
                .social_links
                .map_or(SocialLinksInput::Absent, SocialLinksInput::Structured),
            profile_image: body.profile_image.map_or(ImageInput::Absent, ImageInput::Existing),
            header_image: body.header_image.map_or(ImageInput::Absent, ImageInput::Existing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_field_names_round_trip() {
        for slot in [ImageSlot::Profile, ImageSlot::Header] {
            assert_eq!(ImageSlot::from_field_name(slot.field_name()), Some(slot));
        }
        assert_eq!(ImageSlot::from_field_name("avatar"), None);
    }

    #[test]
    fn payload_debug_hides_bytes() {
        let payload = ImagePayload::new(vec![0xFF; 4096]).with_file_name("me.png");
        let debug = format!("{payload:?}");
        assert!(debug.contains("len: 4096"));
        assert!(!debug.contains("255"));
    }

    #[test]
    fn json_body_converts_to_input() {
        let body: ProfileJsonBody = serde_json::from_str(
            r#"{"username":"jane","name":"Jane","jobTitle":"Eng","isCompany":true,
                "socialLinks":{"youtube":"@jane"},"headerImage":"https://img/h.png"}"#,
        )
        .unwrap();

        let input = ProfileInput::from(body);
        assert_eq!(input.job_title.as_deref(), Some("Eng"));
        assert!(input.is_company);
        assert!(!input.is_verified);
        assert!(matches!(input.social_links, SocialLinksInput::Structured(_)));
        assert_eq!(input.header_image, ImageInput::Existing("https://img/h.png".into()));
        assert_eq!(input.profile_image, ImageInput::Absent);
    }
}
