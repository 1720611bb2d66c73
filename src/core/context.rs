//! Routing context passed to every link resolution.

use super::RenderMode;

/// Everything a link needs to know about where it is being rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutingContext {
    /// Tenant slug (the "site user"). `None` omits the tenant segment.
    pub site_user: Option<String>,
    /// Path of the page currently rendered, as seen by the browser.
    pub current_path: Option<String>,
    /// Owner's in-builder editor.
    pub is_editable: bool,
    /// Read-only preview thumbnail.
    pub disable_clicks: bool,
}

impl RoutingContext {
    /// Live context for a tenant.
    pub fn live(site_user: impl Into<String>) -> Self {
        Self {
            site_user: Some(site_user.into()),
            ..Self::default()
        }
    }

    pub fn with_current_path(mut self, path: impl Into<String>) -> Self {
        self.current_path = Some(path.into());
        self
    }

    pub fn editable(mut self, is_editable: bool) -> Self {
        self.is_editable = is_editable;
        self
    }

    pub fn disable_clicks(mut self, disable_clicks: bool) -> Self {
        self.disable_clicks = disable_clicks;
        self
    }

    #[inline]
    pub const fn mode(&self) -> RenderMode {
        RenderMode::from_flags(self.is_editable, self.disable_clicks)
    }

    /// Tenant slug, treating an empty string like a missing one.
    #[inline]
    pub fn site_user(&self) -> Option<&str> {
        self.site_user.as_deref().filter(|u| !u.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let ctx = RoutingContext::live("acme")
            .with_current_path("/preview/acme")
            .editable(true);
        assert_eq!(ctx.site_user(), Some("acme"));
        assert_eq!(ctx.current_path.as_deref(), Some("/preview/acme"));
        assert_eq!(ctx.mode(), RenderMode::Editing);
    }

    #[test]
    fn test_empty_site_user_is_missing() {
        let ctx = RoutingContext::live("  ");
        assert_eq!(ctx.site_user(), None);
        assert_eq!(RoutingContext::default().site_user(), None);
    }
}
