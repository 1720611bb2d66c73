//! Render surface modes and the navigation policy applied to them.

use serde::{Deserialize, Serialize};

/// The surface a link is rendered on, derived from the two routing flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Published or previewed site: links navigate.
    Live,
    /// Owner's in-builder editor (`isEditable`): clicks edit, not navigate.
    Editing,
    /// Read-only preview thumbnail (`disableClicks`).
    Thumbnail,
}

impl RenderMode {
    /// Derive the mode from the flags. Editing wins when both are set.
    #[inline]
    pub const fn from_flags(is_editable: bool, disable_clicks: bool) -> Self {
        if is_editable {
            Self::Editing
        } else if disable_clicks {
            Self::Thumbnail
        } else {
            Self::Live
        }
    }

    /// Whether links on this surface must not navigate.
    #[inline]
    pub const fn is_inert(self) -> bool {
        !matches!(self, Self::Live)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Editing => "editing",
            Self::Thumbnail => "thumbnail",
        }
    }
}

/// What inert surfaces (editing, thumbnail) receive as href.
///
/// Call sites disagree on whether an editor should see a placeholder or the
/// real destination, so the choice is an explicit parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationPolicy {
    /// Inert surfaces get the neutral `"#"` placeholder.
    #[default]
    Placeholder,
    /// Inert surfaces still get the computed href (display accuracy);
    /// the caller is responsible for suppressing the click.
    LiveHref,
}

impl NavigationPolicy {
    /// Whether a link on `mode` should collapse to the placeholder.
    #[inline]
    pub const fn suppresses(self, mode: RenderMode) -> bool {
        matches!(self, Self::Placeholder) && mode.is_inert()
    }
}
