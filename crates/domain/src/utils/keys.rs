//! Username and profile key helpers

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{MIN_USERNAME_LENGTH, MSG_USERNAME_TOO_SHORT};
use crate::errors::{LinkfolioError, Result};

#[allow(clippy::expect_used)]
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Derive the URL-safe profile key returned by the create endpoint.
///
/// Lower-cases the username and collapses each whitespace run into a single
/// hyphen. Leading and trailing whitespace also become hyphens.
pub fn derive_profile_key(username: &str) -> String {
    WHITESPACE_RUN.replace_all(&username.to_lowercase(), "-").into_owned()
}

/// Turn a delete path key back into a username candidate.
///
/// Only the first hyphen is replaced: `john-smith-jr` becomes
/// `john smith-jr`. Keys with more than one hyphen therefore never match a
/// username that had several spaces.
// NOTE: this asymmetry with `derive_profile_key` is long-standing client
// facing behaviour; changing it needs product sign-off.
pub fn delete_lookup_key(key: &str) -> String {
    key.replacen('-', " ", 1)
}

/// Case-folded form used for case-insensitive username matching.
///
/// Folds the full Unicode range, so `ÉLAN` and `élan` compare equal.
pub fn fold_username(username: &str) -> String {
    username.to_lowercase()
}

/// Check a username candidate and return it unchanged when acceptable.
pub fn validate_username(username: Option<&str>) -> Result<&str> {
    match username {
        Some(name) if name.trim().chars().count() >= MIN_USERNAME_LENGTH => Ok(name),
        _ => Err(LinkfolioError::InvalidInput(MSG_USERNAME_TOO_SHORT.to_string())),
    }
}
