//! Form field coercion

use crate::errors::{LinkfolioError, Result};

/// Parse a boolean form field.
///
/// Missing or blank values are `false`.
pub fn parse_flag(field: &str, raw: Option<&str>) -> Result<bool> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(false);
    };

    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(LinkfolioError::InvalidInput(format!(
            "{field} must be a boolean, got {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_spellings() {
        for raw in ["true", "TRUE", "1", "yes", "on"] {
            assert!(parse_flag("isVerified", Some(raw)).unwrap(), "{raw}");
        }
        for raw in ["false", "0", "No", "off"] {
            assert!(!parse_flag("isVerified", Some(raw)).unwrap(), "{raw}");
        }
    }

    #[test]
    fn missing_is_false() {
        assert!(!parse_flag("isCompany", None).unwrap());
        assert!(!parse_flag("isCompany", Some("  ")).unwrap());
    }

    #[test]
    fn garbage_is_rejected() {
        let err = parse_flag("isCompany", Some("maybe")).unwrap_err();
        assert!(err.message().contains("isCompany"));
    }
}
