//! Preview-vs-live href resolution.
//!
//! Every navbar, footer and page link goes through [`resolve_href`]:
//!
//! | Target                    | Live surface              | Inert surface (`Placeholder`) |
//! |---------------------------|---------------------------|-------------------------------|
//! | `https://…`, `mailto:…`   | unchanged                 | unchanged                     |
//! | `""`, `/`, `#`            | `/preview/{user}`         | `#`                           |
//! | `about`, `/about`, `#about` | `/preview/{user}/about` | `#`                           |
//! | `/preview/{user}/about`   | unchanged                 | `#`                           |
//!
//! Under [`NavigationPolicy::LiveHref`] inert surfaces get the live column.

use percent_encoding::percent_decode_str;

use super::draft::strip_draft_suffix;
use crate::core::{
    LinkKind, NavigationPolicy, PLACEHOLDER_HREF, PREVIEW_PREFIX, RoutingContext,
};
use crate::debug;

/// Preview root for a tenant: `/preview/{user}`, or `/preview` without one.
pub fn preview_root(site_user: Option<&str>) -> String {
    match site_user {
        Some(user) => format!("/{PREVIEW_PREFIX}/{user}"),
        None => format!("/{PREVIEW_PREFIX}"),
    }
}

/// Resolve a raw link target to the href to render.
///
/// Pure: same inputs, same output. External and protocol links are never
/// rewritten, not even on inert surfaces.
pub fn resolve_href(target: &str, ctx: &RoutingContext, policy: NavigationPolicy) -> String {
    let site_user = ctx.site_user();
    let root = preview_root(site_user);

    let kind = LinkKind::parse(target, site_user.map(|_| root.as_str()));
    if let LinkKind::External(url) = kind {
        return url.to_string();
    }

    if policy.suppresses(ctx.mode()) {
        return PLACEHOLDER_HREF.to_string();
    }

    if site_user.is_none() {
        debug!("routing"; "no site user for `{}`, omitting tenant segment", target);
    }

    match kind {
        LinkKind::Home => root,
        LinkKind::Internal(fragment) => format!("{root}/{fragment}"),
        LinkKind::Namespaced(path) | LinkKind::External(path) => path.to_string(),
    }
}

/// Flat form of [`resolve_href`] using the default placeholder policy.
pub fn generate_link_href(
    target: &str,
    site_user: Option<&str>,
    current_path: Option<&str>,
    is_editable: bool,
    disable_clicks: bool,
) -> String {
    let ctx = RoutingContext {
        site_user: site_user.map(str::to_string),
        current_path: current_path.map(str::to_string),
        is_editable,
        disable_clicks,
    };
    resolve_href(target, &ctx, NavigationPolicy::Placeholder)
}

/// Whether a resolved href points at the page currently shown.
///
/// Insensitive to percent-encoding, query, fragment, trailing slash and the
/// draft suffix. External hrefs and the placeholder are never active.
pub fn is_active(href: &str, current_path: Option<&str>) -> bool {
    let Some(current) = current_path else {
        return false;
    };
    if href == PLACEHOLDER_HREF || LinkKind::is_external(href) {
        return false;
    }
    normalize_for_compare(href) == normalize_for_compare(current)
}

fn normalize_for_compare(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string());
    let trimmed = decoded.trim_end_matches('/');
    strip_draft_suffix(trimmed).to_string()
}

/// A resolver bound to one rendering context and policy.
#[derive(Debug, Clone, Default)]
pub struct LinkResolver {
    ctx: RoutingContext,
    policy: NavigationPolicy,
}

impl LinkResolver {
    pub fn new(ctx: RoutingContext, policy: NavigationPolicy) -> Self {
        Self { ctx, policy }
    }

    #[inline]
    pub fn context(&self) -> &RoutingContext {
        &self.ctx
    }

    #[inline]
    pub fn policy(&self) -> NavigationPolicy {
        self.policy
    }

    pub fn resolve(&self, target: &str) -> String {
        resolve_href(target, &self.ctx, self.policy)
    }

    /// Resolve and report whether the result is the current page.
    ///
    /// Activity is judged on the live href so an editor still highlights
    /// the page being edited under the placeholder policy.
    pub fn resolve_with_active(&self, target: &str) -> (String, bool) {
        let href = self.resolve(target);
        let live = resolve_href(target, &self.ctx, NavigationPolicy::LiveHref);
        let active = is_active(&live, self.ctx.current_path.as_deref());
        (href, active)
    }
}
