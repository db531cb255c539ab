//! Social link bundle attached to a profile

use serde::{Deserialize, Serialize};

use crate::errors::{LinkfolioError, Result};

/// Fixed set of optional social/contact links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapchat: Option<String>,
}

impl SocialLinks {
    /// Names accepted by [`SocialLinks::set`], in declaration order.
    pub const FIELDS: [&'static str; 9] = [
        "website",
        "instagram",
        "facebook",
        "telegram",
        "tiktok",
        "youtube",
        "whatsapp",
        "maps",
        "snapchat",
    ];

    /// Parse a serialized (JSON) social links value.
    ///
    /// Blank input and a literal `null` both mean "no links".
    pub fn parse(raw: &str) -> Result<Option<Self>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(None);
        }

        serde_json::from_str::<Self>(trimmed)
            .map(Some)
            .map_err(|e| LinkfolioError::InvalidInput(format!("Invalid socialLinks: {e}")))
    }

    /// Set a single link by field name.
    pub fn set(&mut self, field: &str, value: String) -> Result<()> {
        let slot = match field {
            "website" => &mut self.website,
            "instagram" => &mut self.instagram,
            "facebook" => &mut self.facebook,
            "telegram" => &mut self.telegram,
            "tiktok" => &mut self.tiktok,
            "youtube" => &mut self.youtube,
            "whatsapp" => &mut self.whatsapp,
            "maps" => &mut self.maps,
            "snapchat" => &mut self.snapchat,
            other => {
                return Err(LinkfolioError::InvalidInput(format!(
                    "Unknown socialLinks field: {other}"
                )))
            }
        };
        *slot = Some(value);
        Ok(())
    }
}
