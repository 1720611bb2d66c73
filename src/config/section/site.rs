//! `[site]` section configuration.
//!
//! ```toml
//! [site]
//! user = "acme"
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::{ConfigDiagnostics, FieldPath};

/// A tenant slug is a single URL path segment.
static SLUG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("slug pattern is a valid regex")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Tenant slug used in `/preview/{user}/...`. Unset omits the segment.
    pub user: Option<String>,
}

impl SiteSectionConfig {
    pub const USER: FieldPath = FieldPath::new("site.user");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(user) = &self.user else {
            return;
        };
        if user.trim().is_empty() {
            diag.warn(Self::USER, "empty, preview links will omit the tenant segment");
        } else if !SLUG_RE.is_match(user) {
            diag.error_with_hint(
                Self::USER,
                format!("`{user}` is not a valid tenant slug"),
                "use letters, digits, `.`, `_` or `-`, without `/` or spaces",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(user: Option<&str>) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        SiteSectionConfig {
            user: user.map(str::to_string),
        }
        .validate(&mut diag);
        diag
    }

    #[test]
    fn test_valid_users() {
        assert!(check(None).is_empty());
        assert!(check(Some("acme")).is_empty());
        assert!(check(Some("acme-store.v2")).is_empty());
    }

    #[test]
    fn test_invalid_users() {
        assert!(check(Some("acme/store")).has_errors());
        assert!(check(Some("my shop")).has_errors());
        assert!(check(Some("-acme")).has_errors());
    }

    #[test]
    fn test_empty_user_warns() {
        let diag = check(Some("  "));
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }
}
