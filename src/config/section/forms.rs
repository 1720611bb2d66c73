//! `[forms]` section configuration.
//!
//! ```toml
//! [forms]
//! success_window_ms = 3000
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::forms::DEFAULT_SUCCESS_WINDOW;

/// Anything longer reads as a stuck form.
const MAX_SUCCESS_WINDOW_MS: u64 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    /// How long a create form shows its success state, in milliseconds.
    pub success_window_ms: u64,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            success_window_ms: DEFAULT_SUCCESS_WINDOW.as_millis() as u64,
        }
    }
}

impl FormsConfig {
    pub const SUCCESS_WINDOW_MS: FieldPath = FieldPath::new("forms.success_window_ms");

    #[inline]
    pub fn success_window(&self) -> Duration {
        Duration::from_millis(self.success_window_ms)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.success_window_ms == 0 {
            diag.error(
                Self::SUCCESS_WINDOW_MS,
                "must be greater than 0, the success state would never be shown",
            );
        } else if self.success_window_ms > MAX_SUCCESS_WINDOW_MS {
            diag.warn(
                Self::SUCCESS_WINDOW_MS,
                format!(
                    "{} ms is longer than {} ms",
                    self.success_window_ms, MAX_SUCCESS_WINDOW_MS
                ),
            );
        }
    }
}
