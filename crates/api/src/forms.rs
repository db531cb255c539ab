//! Request body extraction for the profile endpoints
//!
//! Accepts `multipart/form-data` (the normal path, files included) and
//! `application/json` (no files).

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::Json;
use linkfolio_domain::{
    parse_flag, ImageInput, ImagePayload, ImageSlot, LinkfolioError, ProfileInput,
    ProfileJsonBody, SocialLinks, SocialLinksInput,
};
use tracing::debug;

use crate::errors::ApiError;

const SOCIAL_LINKS_FIELD: &str = "socialLinks";

/// Read a profile request body into workflow input.
pub async fn read_profile_request(request: Request) -> Result<ProfileInput, ApiError> {
    if is_json(&request) {
        let Json(body) = Json::<ProfileJsonBody>::from_request(request, &())
            .await
            .map_err(|rejection| LinkfolioError::InvalidInput(rejection.body_text()))?;
        return Ok(body.into());
    }

    let multipart = Multipart::from_request(request, &())
        .await
        .map_err(|rejection| LinkfolioError::InvalidInput(rejection.body_text()))?;
    read_profile_form(multipart).await
}

/// Collect multipart fields.
///
/// File parts for an image slot win over a text part for the same slot,
/// whatever order they arrive in. Empty files count as "no file".
pub async fn read_profile_form(mut multipart: Multipart) -> Result<ProfileInput, ApiError> {
    let mut input = ProfileInput::default();

    while let Some(field) = multipart.next_field().await.map_err(map_multipart_error)? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if let Some(slot) = ImageSlot::from_field_name(&name) {
            read_image_field(&mut input, slot, field).await?;
            continue;
        }

        let value = field.text().await.map_err(map_multipart_error)?;
        apply_text_field(&mut input, &name, value)?;
    }

    Ok(input)
}

async fn read_image_field(
    input: &mut ProfileInput,
    slot: ImageSlot,
    field: Field<'_>,
) -> Result<(), ApiError> {
    if let Some(file_name) = field.file_name().map(str::to_owned) {
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field.bytes().await.map_err(map_multipart_error)?;
        if bytes.is_empty() {
            debug!(%slot, "ignoring empty file part");
            return Ok(());
        }

        let mut payload = ImagePayload::new(bytes.to_vec()).with_file_name(file_name);
        payload.content_type = content_type;
        *input.image_mut(slot) = ImageInput::Upload(payload);
        return Ok(());
    }

    let url = field.text().await.map_err(map_multipart_error)?;
    let current = input.image_mut(slot);
    if !matches!(current, ImageInput::Upload(_)) && !url.trim().is_empty() {
        *current = ImageInput::Existing(url);
    }
    Ok(())
}

/// Apply one text field. Unknown names are ignored.
fn apply_text_field(input: &mut ProfileInput, name: &str, value: String) -> Result<(), ApiError> {
    match name {
        "username" => input.username = Some(value),
        "name" => input.name = Some(value),
        "jobTitle" => input.job_title = Some(value),
        "phone" => input.phone = non_blank(value),
        "email" => input.email = non_blank(value),
        "isVerified" => input.is_verified = parse_flag(name, Some(&value))?,
        "isCompany" => input.is_company = parse_flag(name, Some(&value))?,
        SOCIAL_LINKS_FIELD => input.social_links = SocialLinksInput::Serialized(value),
        _ => {
            if let Some(link) = bracketed_link(name) {
                apply_social_link(input, link, value)?;
            } else {
                debug!(field = name, "ignoring unknown form field");
            }
        }
    }
    Ok(())
}

/// `socialLinks[website]` → `website`
fn bracketed_link(name: &str) -> Option<&str> {
    name.strip_prefix(SOCIAL_LINKS_FIELD)?.strip_prefix('[')?.strip_suffix(']')
}

/// A serialized `socialLinks` value takes precedence over bracketed fields.
/// Blank values leave the links untouched.
fn apply_social_link(input: &mut ProfileInput, link: &str, value: String) -> Result<(), ApiError> {
    if !SocialLinks::FIELDS.contains(&link) {
        return Err(LinkfolioError::InvalidInput(format!("Unknown socialLinks field: {link}")).into());
    }

    let Some(value) = non_blank(value) else {
        return Ok(());
    };

    if matches!(input.social_links, SocialLinksInput::Absent) {
        input.social_links = SocialLinksInput::Structured(SocialLinks::default());
    }

    if let SocialLinksInput::Structured(links) = &mut input.social_links {
        links.set(link, value)?;
    }
    Ok(())
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn is_json(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim_start().to_ascii_lowercase().starts_with("application/json"))
}

fn map_multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge(err.body_text());
    }
    LinkfolioError::InvalidInput(format!("Malformed form data: {}", err.body_text())).into()
}
