//! Resolved per-site settings, passed explicitly to whatever needs them.

use serde_json::Value;
use std::time::Duration;

use super::{SiteConfig, ThemeConfig};
use crate::core::{NavigationPolicy, RoutingContext};
use crate::forms::{CreateFlow, CreateKind};
use crate::registry::{ComponentRegistry, ComponentType, RegistryError};
use crate::routing::LinkResolver;

/// Site settings after CLI overrides.
///
/// Built once from [`SiteConfig`] and handed down by reference; nothing
/// reads configuration from global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    pub site_user: Option<String>,
    pub policy: NavigationPolicy,
    pub theme: ThemeConfig,
    pub success_window: Duration,
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

impl SiteContext {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            site_user: config.site.user.clone(),
            policy: config.routing.policy,
            theme: config.theme.clone(),
            success_window: config.forms.success_window(),
        }
    }

    /// Override the tenant when `user` is given.
    pub fn with_site_user(mut self, user: Option<String>) -> Self {
        if user.is_some() {
            self.site_user = user;
        }
        self
    }

    pub fn with_policy(mut self, policy: Option<NavigationPolicy>) -> Self {
        if let Some(policy) = policy {
            self.policy = policy;
        }
        self
    }

    /// Routing context for a page of this site.
    pub fn routing(
        &self,
        current_path: Option<&str>,
        is_editable: bool,
        disable_clicks: bool,
    ) -> RoutingContext {
        RoutingContext {
            site_user: self.site_user.clone(),
            current_path: current_path.map(str::to_string),
            is_editable,
            disable_clicks,
        }
    }

    pub fn resolver(
        &self,
        current_path: Option<&str>,
        is_editable: bool,
        disable_clicks: bool,
    ) -> LinkResolver {
        LinkResolver::new(
            self.routing(current_path, is_editable, disable_clicks),
            self.policy,
        )
    }

    /// Default payload for a new component, colored with this site's theme.
    pub fn default_data(
        &self,
        component: ComponentType,
        variant: Option<&str>,
    ) -> Result<Value, RegistryError> {
        ComponentRegistry::global().get_themed_default_data(component, variant, &self.theme)
    }

    /// Create flow using this site's success window.
    pub fn create_flow<K, I, S>(&self, known: I) -> CreateFlow<K>
    where
        K: CreateKind,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CreateFlow::new(known).with_success_window(self.success_window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::forms::TagKind;

    #[test]
    fn test_from_config() {
        let config = test_parse_config(
            r##"
[routing]
policy = "live-href"

[theme]
primary = "#ff0000"

[forms]
success_window_ms = 1500
"##,
        );
        let ctx = SiteContext::from_config(&config);
        assert_eq!(ctx.site_user.as_deref(), Some("acme"));
        assert_eq!(ctx.policy, NavigationPolicy::LiveHref);
        assert_eq!(ctx.theme.primary, "#ff0000");
        assert_eq!(ctx.theme.background, "#ffffff");
        assert_eq!(ctx.success_window, Duration::from_millis(1500));
    }

    #[test]
    fn test_overrides() {
        let ctx = SiteContext::default()
            .with_site_user(Some("globex".into()))
            .with_policy(Some(NavigationPolicy::LiveHref));
        assert_eq!(ctx.site_user.as_deref(), Some("globex"));
        assert_eq!(ctx.policy, NavigationPolicy::LiveHref);

        let ctx = ctx.with_site_user(None).with_policy(None);
        assert_eq!(ctx.site_user.as_deref(), Some("globex"));
        assert_eq!(ctx.policy, NavigationPolicy::LiveHref);
    }

    #[test]
    fn test_resolver_uses_site() {
        let ctx = SiteContext::default().with_site_user(Some("acme".into()));
        assert_eq!(ctx.resolver(None, false, false).resolve("about"), "/preview/acme/about");
        assert_eq!(ctx.resolver(None, true, false).resolve("about"), "#");

        let ctx = ctx.with_policy(Some(NavigationPolicy::LiveHref));
        assert_eq!(
            ctx.resolver(None, true, false).resolve("about"),
            "/preview/acme/about"
        );
    }

    #[test]
    fn test_themed_default_data() {
        let mut ctx = SiteContext::default();
        ctx.theme.background = "#000000".into();
        let data = ctx.default_data(ComponentType::Newsletter, None).unwrap();
        assert_eq!(data["backgroundColor"], "#000000");
    }

    #[test]
    fn test_create_flow_window() {
        let mut ctx = SiteContext::default();
        ctx.success_window = Duration::from_millis(10);
        let flow = ctx.create_flow::<TagKind, _, _>(["Sale"]);
        assert_eq!(flow.success_window(), Duration::from_millis(10));
    }
}
