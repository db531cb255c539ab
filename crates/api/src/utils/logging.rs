use std::time::Duration;

use linkfolio_domain::LinkfolioError;
use tracing::{info, warn};

use crate::errors::ApiError;

/// Log the outcome of a handler with structured fields.
///
/// `command` is a stable identifier such as `"profiles::save_profile"`.
/// Callers must avoid forwarding request data in it.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&ApiError>) {
    let duration_ms = elapsed.as_millis() as u64;

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(err) => {
            let error_type = err.domain().map_or("payload_too_large", error_label);
            warn!(command, duration_ms, error_type, "command_execution_failure");
        }
    }
}

/// Convert a `LinkfolioError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &LinkfolioError) -> &'static str {
    match error {
        LinkfolioError::InvalidInput(_) => "invalid_input",
        LinkfolioError::Conflict(_) => "conflict",
        LinkfolioError::NotFound(_) => "not_found",
        LinkfolioError::Upload(_) => "upload",
        LinkfolioError::Database(_) => "database",
        LinkfolioError::Network(_) => "network",
        LinkfolioError::Config(_) => "config",
        LinkfolioError::Internal(_) => "internal",
    }
}
