//! `[routing]` section configuration.
//!
//! ```toml
//! [routing]
//! policy = "placeholder"  # "placeholder" | "live-href"
//! ```

use serde::{Deserialize, Serialize};

use crate::core::NavigationPolicy;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// What links receive in the editor and in thumbnails.
    pub policy: NavigationPolicy,
}
