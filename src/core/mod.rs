//! Core types - pure abstractions shared across the codebase.

mod context;
mod link;
mod mode;

pub use context::RoutingContext;
pub use link::LinkKind;
pub use mode::{NavigationPolicy, RenderMode};

/// First path segment of every preview URL (`/preview/{siteUser}/...`).
pub const PREVIEW_PREFIX: &str = "preview";

/// Neutral non-navigating href.
pub const PLACEHOLDER_HREF: &str = "#";

/// Marker appended to internal paths that point at unpublished pages.
pub const DRAFT_SUFFIX: &str = "-draft";
