//! `href` and `draft` commands.

use anyhow::{Result, bail};
use serde_json::Value;
use std::path::Path;

use super::{SurfaceArgs, plural_count, read_payload, surface_resolver};
use crate::chrome::{ChromeStyle, apply_draft_links, pick_link_layout};
use crate::config::SiteContext;
use crate::routing::apply_draft_suffix;
use crate::{debug, log};

/// Print the href a stored link target renders to.
pub fn run_href(target: &str, surface: &SurfaceArgs, ctx: &SiteContext) -> Result<()> {
    let resolver = surface_resolver(ctx, surface);
    let (href, active) = resolver.resolve_with_active(target);
    debug!(
        "routing"; "mode={} policy={:?} active={}",
        resolver.context().mode().name(),
        resolver.policy(),
        active
    );
    println!("{href}");
    Ok(())
}

/// Print drafted hrefs, or a payload with every link drafted.
pub fn run_draft(hrefs: &[String], payload: Option<&Path>, style: Option<&str>) -> Result<()> {
    match (payload, style) {
        (Some(path), Some(style)) => {
            let (data, changed) = draft_payload(read_payload(path)?, style)?;
            log!("links"; "drafted {}", plural_count(changed, "link"));
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        (Some(_), None) => bail!("--payload needs --style"),
        (None, _) => {
            for href in hrefs {
                println!("{}", apply_draft_suffix(href));
            }
        }
    }
    Ok(())
}

/// Draft every link of a navbar/footer payload, returning it and the
/// number of hrefs changed.
pub fn draft_payload(mut data: Value, style: &str) -> Result<(Value, usize)> {
    let layout = pick_link_layout(ChromeStyle::parse(style)?);
    let changed = apply_draft_links(&mut data, layout)?;
    Ok((data, changed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_draft_payload_split() {
        let data = json!({
            "leftLinks": [{"text": "Home", "href": "/"}, {"text": "Shop", "href": "/shop"}],
            "rightLinks": [{"text": "Blog", "href": "https://blog.example.com"}],
        });
        let (data, changed) = draft_payload(data, "navbar-style-10").unwrap();
        assert_eq!(changed, 1);
        assert_eq!(data["leftLinks"][1]["href"], "/shop-draft");
        assert_eq!(data["leftLinks"][0]["href"], "/");
        assert_eq!(data["rightLinks"][0]["href"], "https://blog.example.com");
    }

    #[test]
    fn test_draft_payload_errors() {
        assert!(draft_payload(json!({"links": []}), "sidebar-style-1").is_err());
        assert!(draft_payload(json!({"links": "nope"}), "navbar-style-1").is_err());
    }

    #[test]
    fn test_run_draft_requires_style() {
        let err = run_draft(&[], Some(Path::new("nav.json")), None).unwrap_err();
        assert!(err.to_string().contains("--style"));
    }
}
