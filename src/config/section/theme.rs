//! `[theme]` section configuration.
//!
//! Colors here replace the color fields of component defaults.
//!
//! ```toml
//! [theme]
//! primary = "#3b82f6"
//! secondary = "#10b981"
//! text = "#111827"
//! background = "#ffffff"
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::{ConfigDiagnostics, FieldPath};

static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$")
        .expect("hex color pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Buttons and primary actions.
    pub primary: String,
    /// Accents.
    pub secondary: String,
    pub text: String,
    pub background: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#3b82f6".into(),
            secondary: "#10b981".into(),
            text: "#111827".into(),
            background: "#ffffff".into(),
        }
    }
}

impl ThemeConfig {
    pub const PRIMARY: FieldPath = FieldPath::new("theme.primary");
    pub const SECONDARY: FieldPath = FieldPath::new("theme.secondary");
    pub const TEXT: FieldPath = FieldPath::new("theme.text");
    pub const BACKGROUND: FieldPath = FieldPath::new("theme.background");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let fields = [
            (Self::PRIMARY, &self.primary),
            (Self::SECONDARY, &self.secondary),
            (Self::TEXT, &self.text),
            (Self::BACKGROUND, &self.background),
        ];
        for (field, value) in fields {
            if !HEX_COLOR_RE.is_match(value) {
                diag.error_with_hint(
                    field,
                    format!("`{value}` is not a hex color"),
                    "use `#rgb`, `#rrggbb` or `#rrggbbaa`",
                );
            }
        }
    }
}
