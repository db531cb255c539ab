//! Profile endpoints
//!
//! Thin adapters: extract the request, call `ProfileService`, shape the
//! response. All rules live in `linkfolio-core`.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::Json;
use linkfolio_domain::constants::{MSG_PROFILE_DELETED, MSG_PROFILE_SAVED};
use linkfolio_domain::Profile;
use serde::Serialize;
use tracing::info;

use crate::context::AppContext;
use crate::errors::ApiError;
use crate::forms::read_profile_request;
use crate::utils::logging::log_command_execution;

/// Body of a successful create
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProfileResponse {
    pub message: &'static str,
    pub profile_key: String,
    pub profile: Profile,
}

/// Body of a successful delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `POST /api/save-profile`
pub async fn save_profile(
    State(ctx): State<Arc<AppContext>>,
    request: Request,
) -> Result<(StatusCode, Json<SaveProfileResponse>), ApiError> {
    let command_name = "profiles::save_profile";
    let start = Instant::now();

    let result = async {
        let input = read_profile_request(request).await?;
        let created = ctx.profiles.create_profile(input).await?;
        info!(command = command_name, profile_key = %created.profile_key, "Profile created");
        Ok::<_, ApiError>(created)
    }
    .await;

    log_command_execution(command_name, start.elapsed(), result.as_ref().err());

    let created = result?;
    Ok((
        StatusCode::CREATED,
        Json(SaveProfileResponse {
            message: MSG_PROFILE_SAVED,
            profile_key: created.profile_key,
            profile: created.profile,
        }),
    ))
}

/// `GET /{profile_key}`
pub async fn get_profile(
    State(ctx): State<Arc<AppContext>>,
    Path(profile_key): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let start = Instant::now();
    let result = ctx.profiles.get_profile(&profile_key).await.map_err(ApiError::from);
    log_command_execution("profiles::get_profile", start.elapsed(), result.as_ref().err());

    result.map(Json)
}

/// `PUT /api/update-profile/{profile_key}`
pub async fn update_profile(
    State(ctx): State<Arc<AppContext>>,
    Path(profile_key): Path<String>,
    request: Request,
) -> Result<Json<Profile>, ApiError> {
    let start = Instant::now();

    let result = async {
        let input = read_profile_request(request).await?;
        Ok::<_, ApiError>(ctx.profiles.update_profile(&profile_key, input).await?)
    }
    .await;

    log_command_execution("profiles::update_profile", start.elapsed(), result.as_ref().err());

    result.map(Json)
}

/// `DELETE /api/profiles/{profile_key}`
pub async fn delete_profile(
    State(ctx): State<Arc<AppContext>>,
    Path(profile_key): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let start = Instant::now();
    let result = ctx.profiles.delete_profile(&profile_key).await.map_err(ApiError::from);
    log_command_execution("profiles::delete_profile", start.elapsed(), result.as_ref().err());

    result.map(|_| Json(MessageResponse { message: MSG_PROFILE_DELETED }))
}
