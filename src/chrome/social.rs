//! Social profile links shown in footers.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Platforms with a known icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    Twitter,
    LinkedIn,
    YouTube,
    TikTok,
    WhatsApp,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SocialError {
    #[error("unknown social platform `{0}`")]
    UnknownPlatform(String),

    #[error("invalid social link at index {index}: {reason}")]
    InvalidLink { index: usize, reason: String },
}

impl SocialPlatform {
    pub const ALL: [Self; 7] = [
        Self::Facebook,
        Self::Instagram,
        Self::Twitter,
        Self::LinkedIn,
        Self::YouTube,
        Self::TikTok,
        Self::WhatsApp,
    ];

    /// Parse a stored platform key. Unknown keys are an error, never a
    /// silent fallback icon.
    pub fn parse(key: &str) -> Result<Self, SocialError> {
        match key.trim().to_ascii_lowercase().as_str() {
            "facebook" => Ok(Self::Facebook),
            "instagram" => Ok(Self::Instagram),
            "twitter" | "x" => Ok(Self::Twitter),
            "linkedin" => Ok(Self::LinkedIn),
            "youtube" => Ok(Self::YouTube),
            "tiktok" => Ok(Self::TikTok),
            "whatsapp" => Ok(Self::WhatsApp),
            _ => Err(SocialError::UnknownPlatform(key.to_string())),
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::LinkedIn => "linkedin",
            Self::YouTube => "youtube",
            Self::TikTok => "tiktok",
            Self::WhatsApp => "whatsapp",
        }
    }

    /// Icon identifier understood by the renderer's icon set.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Facebook => "fa-facebook-f",
            Self::Instagram => "fa-instagram",
            Self::Twitter => "fa-x-twitter",
            Self::LinkedIn => "fa-linkedin-in",
            Self::YouTube => "fa-youtube",
            Self::TikTok => "fa-tiktok",
            Self::WhatsApp => "fa-whatsapp",
        }
    }
}

#[derive(Deserialize)]
struct RawSocialLink {
    platform: String,
    href: String,
}

/// A parsed `socialLinks[]` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub href: String,
}

/// Parse the optional `socialLinks` array of a footer payload.
pub fn collect_social_links(data: &Value) -> Result<Vec<SocialLink>, SocialError> {
    let Some(items) = data.get("socialLinks").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let raw = RawSocialLink::deserialize(item).map_err(|e| SocialError::InvalidLink {
                index,
                reason: e.to_string(),
            })?;
            Ok(SocialLink {
                platform: SocialPlatform::parse(&raw.platform)?,
                href: raw.href,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_known() {
        assert_eq!(SocialPlatform::parse("Facebook"), Ok(SocialPlatform::Facebook));
        assert_eq!(SocialPlatform::parse("x"), Ok(SocialPlatform::Twitter));
        for p in SocialPlatform::ALL {
            assert_eq!(SocialPlatform::parse(p.key()), Ok(p));
        }
    }

    #[test]
    fn test_parse_unknown_fails_loudly() {
        assert_eq!(
            SocialPlatform::parse("myspace"),
            Err(SocialError::UnknownPlatform("myspace".into()))
        );
    }

    #[test]
    fn test_collect_social_links() {
        let data = json!({
            "socialLinks": [
                { "platform": "instagram", "href": "https://instagram.com/acme" },
                { "platform": "youtube", "href": "https://youtube.com/@acme" }
            ]
        });
        let links = collect_social_links(&data).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].platform.icon(), "fa-instagram");

        assert!(collect_social_links(&json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_collect_social_links_unknown_platform() {
        let data = json!({ "socialLinks": [{ "platform": "orkut", "href": "https://orkut.com" }] });
        assert!(matches!(
            collect_social_links(&data),
            Err(SocialError::UnknownPlatform(_))
        ));
    }
}
