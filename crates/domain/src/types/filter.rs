//! Lookup filters understood by profile repositories

use std::fmt;

use crate::utils::keys::fold_username;

/// How a repository should match the `username` key.
///
/// Both variants are literal comparisons; no pattern syntax is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileFilter {
    /// Byte-for-byte equality.
    Username(String),
    /// Equality ignoring letter case (Unicode, see [`fold_username`]).
    UsernameIgnoreCase(String),
}

impl ProfileFilter {
    pub fn username(value: impl Into<String>) -> Self {
        Self::Username(value.into())
    }

    pub fn username_ignore_case(value: impl Into<String>) -> Self {
        Self::UsernameIgnoreCase(value.into())
    }

    /// The value being matched.
    pub fn value(&self) -> &str {
        match self {
            Self::Username(v) | Self::UsernameIgnoreCase(v) => v,
        }
    }

    /// Evaluate the filter against a stored username.
    pub fn matches(&self, username: &str) -> bool {
        match self {
            Self::Username(v) => v == username,
            Self::UsernameIgnoreCase(v) => fold_username(v) == fold_username(username),
        }
    }
}

impl fmt::Display for ProfileFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username(v) => write!(f, "username == {v:?}"),
            Self::UsernameIgnoreCase(v) => write!(f, "username ~= {v:?} (ignore case)"),
        }
    }
}
