//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Profile validation
pub const MIN_USERNAME_LENGTH: usize = 3;

// User-facing messages
pub const MSG_PROFILE_SAVED: &str = "Profile saved successfully";
pub const MSG_PROFILE_DELETED: &str = "Profile deleted successfully";
pub const MSG_PROFILE_NOT_FOUND: &str = "Profile not found";
pub const MSG_USERNAME_TAKEN: &str = "Username is already taken";
pub const MSG_USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters long";

// Server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

// Storage defaults
pub const DEFAULT_DB_PATH: &str = "linkfolio.db";
pub const DEFAULT_DB_POOL_SIZE: u32 = 8;

// Image store defaults
pub const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 30;
