//! Site configuration management for `sitecraft.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site], [routing], [theme], [forms]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── context.rs     # SiteContext (resolved settings, passed explicitly)
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section     | Purpose                                            |
//! |-------------|----------------------------------------------------|
//! | `[site]`    | Tenant slug for preview links                      |
//! | `[routing]` | Href policy for editor and thumbnail surfaces      |
//! | `[theme]`   | Colors injected into component defaults            |
//! | `[forms]`   | Success window of the create forms                 |
//!
//! A missing config file is not an error: every section has defaults.

mod context;
pub mod section;
pub mod types;
mod util;

pub use context::SiteContext;
pub use section::{FormsConfig, RoutingConfig, SiteSectionConfig, ThemeConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{find_config_file, find_config_file_from};

use crate::{debug, log};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, searched upward from the working directory.
pub const CONFIG_FILE: &str = "sitecraft.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitecraft.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the loaded config file, empty when defaults are used
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub forms: FormsConfig,
}

impl SiteConfig {
    /// Locate, parse and validate the config file.
    ///
    /// Relative names are searched upward from the working directory. When
    /// no file is found, defaults are returned.
    pub fn load(config_name: &Path) -> Result<Self> {
        let Some(path) = find_config_file(config_name) else {
            debug!("config"; "{} not found, using defaults", config_name.display());
            return Ok(Self::default());
        };
        Self::load_from(&path)
    }

    /// Parse and validate a config file at an exact path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::from_path(path)?;
        config.config_path = path.to_path_buf();
        config.validate()?;
        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub(crate) fn parse_with_ignored(
        content: &str,
    ) -> std::result::Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate every section, reporting all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.theme.validate(&mut diag);
        self.forms.validate(&mut diag);

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Whether values came from a file rather than defaults.
    pub fn is_from_file(&self) -> bool {
        !self.config_path.as_os_str().is_empty()
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with `[site] user = "acme"` prepended.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\nuser = \"acme\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
