//! Command-line interface module.
//!
//! | Module     | Commands                      |
//! |------------|-------------------------------|
//! | `args`     | clap definitions              |
//! | `href`     | `href`, `draft`               |
//! | `registry` | `defaults`, `components`      |
//! | `links`    | `links`                       |
//! | `check`    | `check`                       |

mod args;
pub mod check;
pub mod href;
pub mod links;
pub mod registry;

pub use args::{Cli, Commands, PolicyArg, SurfaceArgs};

use anyhow::{Context, Result};
use serde_json::Value;
use std::{fs, path::Path};

use crate::config::SiteContext;
use crate::core::NavigationPolicy;
use crate::routing::LinkResolver;

/// Resolver for the surface described on the command line.
pub fn surface_resolver(ctx: &SiteContext, surface: &SurfaceArgs) -> LinkResolver {
    let policy = surface
        .policy
        .map_or(ctx.policy, NavigationPolicy::from);
    let routing = ctx.routing(
        surface.current.as_deref(),
        surface.editable,
        surface.thumbnail,
    );
    LinkResolver::new(routing, policy)
}

/// Read a JSON component payload.
pub fn read_payload(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read payload `{}`", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("`{}` is not valid JSON", path.display()))
}

/// `1 link`, `3 links`
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_surface_resolver_policy_override() {
        let ctx = SiteContext::default().with_site_user(Some("acme".into()));
        let surface = SurfaceArgs {
            editable: true,
            ..SurfaceArgs::default()
        };
        assert_eq!(surface_resolver(&ctx, &surface).resolve("about"), "#");

        let surface = SurfaceArgs {
            policy: Some(PolicyArg::LiveHref),
            ..surface
        };
        assert_eq!(
            surface_resolver(&ctx, &surface).resolve("about"),
            "/preview/acme/about"
        );
    }

    #[test]
    fn test_read_payload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nav.json");
        fs::write(&path, r#"{"links":[]}"#).unwrap();
        assert!(read_payload(&path).unwrap()["links"].is_array());

        fs::write(&path, "{links").unwrap();
        let err = read_payload(&path).unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));

        assert!(read_payload(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "link"), "0 links");
        assert_eq!(plural_count(1, "link"), "1 link");
        assert_eq!(plural_count(12, "variant"), "12 variants");
    }
}
