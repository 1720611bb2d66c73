//! `links` command.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use super::{SurfaceArgs, read_payload, surface_resolver};
use crate::chrome::{ChromeStyle, ResolvedLink, collect_social_links, resolve_links};
use crate::config::SiteContext;

#[derive(Debug, Serialize)]
pub struct ChromeLinks {
    pub style: &'static str,
    pub links: Vec<ResolvedLink>,
    pub social: Vec<SocialEntry>,
}

#[derive(Debug, Serialize)]
pub struct SocialEntry {
    pub platform: &'static str,
    pub icon: &'static str,
    pub href: String,
}

/// Print every resolved link of a navbar or footer.
pub fn run_links(
    style: &str,
    payload: Option<&Path>,
    surface: &SurfaceArgs,
    json: bool,
    ctx: &SiteContext,
) -> Result<()> {
    let data = match payload {
        Some(path) => read_payload(path)?,
        None => Value::Null,
    };
    let result = chrome_links(style, (!data.is_null()).then_some(&data), surface, ctx)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for link in &result.links {
        let marker = if link.active { "*" } else { " " };
        let href = if link.external {
            link.href.underline().to_string()
        } else {
            link.href.clone()
        };
        println!("{} {:<16} {}", marker.green(), link.text, href);
    }
    for social in &result.social {
        println!("  {:<16} {}", social.platform.dimmed(), social.href);
    }
    Ok(())
}

/// Resolve the links of `payload`, or of the style's default data.
pub fn chrome_links(
    style: &str,
    payload: Option<&Value>,
    surface: &SurfaceArgs,
    ctx: &SiteContext,
) -> Result<ChromeLinks> {
    let style = ChromeStyle::parse(style)?;
    let defaults;
    let data = match payload {
        Some(data) => data,
        None => {
            defaults = ctx.default_data(style.component(), Some(style.key()))?;
            &defaults
        }
    };

    let resolver = surface_resolver(ctx, surface);
    let links = resolve_links(data, style, &resolver)?;
    let social = collect_social_links(data)?
        .into_iter()
        .map(|link| SocialEntry {
            platform: link.platform.key(),
            icon: link.platform.icon(),
            href: link.href,
        })
        .collect();

    Ok(ChromeLinks {
        style: style.key(),
        links,
        social,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn acme() -> SiteContext {
        SiteContext::default().with_site_user(Some("acme".into()))
    }

    #[test]
    fn test_default_navbar_links() {
        let result = chrome_links("navbar-style-1", None, &SurfaceArgs::default(), &acme()).unwrap();
        assert_eq!(result.style, "navbar-style-1");
        assert!(!result.links.is_empty());
        assert!(
            result
                .links
                .iter()
                .filter(|l| !l.external)
                .all(|l| l.href.starts_with("/preview/acme"))
        );
    }

    #[test]
    fn test_payload_links_with_active() {
        let payload = json!({
            "links": [
                {"text": "Home", "href": "/"},
                {"text": "About", "href": "about"},
                {"text": "Docs", "href": "https://docs.example.com"},
            ]
        });
        let surface = SurfaceArgs {
            current: Some("/preview/acme/about/".into()),
            ..SurfaceArgs::default()
        };
        let result = chrome_links("navbar-style-3", Some(&payload), &surface, &acme()).unwrap();

        let hrefs: Vec<_> = result.links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(
            hrefs,
            ["/preview/acme", "/preview/acme/about", "https://docs.example.com"]
        );
        let active: Vec<_> = result.links.iter().map(|l| l.active).collect();
        assert_eq!(active, [false, true, false]);
        assert!(result.links[2].external);
    }

    #[test]
    fn test_thumbnail_placeholders_keep_external() {
        let surface = SurfaceArgs {
            thumbnail: true,
            ..SurfaceArgs::default()
        };
        let payload = json!({
            "links": [{"text": "About", "href": "/about"}, {"text": "X", "href": "https://x.com"}]
        });
        let result = chrome_links("navbar-style-2", Some(&payload), &surface, &acme()).unwrap();
        assert_eq!(result.links[0].href, "#");
        assert_eq!(result.links[1].href, "https://x.com");
    }

    #[test]
    fn test_footer_social() {
        let result = chrome_links("footer-style-6", None, &SurfaceArgs::default(), &acme()).unwrap();
        assert_eq!(result.social.len(), 3);
        assert!(result.social.iter().any(|s| s.platform == "facebook"));
    }

    #[test]
    fn test_unknown_style() {
        assert!(chrome_links("navbar-style-40", None, &SurfaceArgs::default(), &acme()).is_err());
    }
}
