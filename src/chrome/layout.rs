//! Where each navbar/footer style keeps its links, and resolving them.
//!
//! | Layout      | Payload shape                               |
//! |-------------|---------------------------------------------|
//! | `Flat`      | `links[]`                                   |
//! | `Split`     | `leftLinks[]` + `rightLinks[]`              |
//! | `Sectioned` | `sections[].links[]`                        |
//!
//! Every layout may also carry optional `buttons[]` with the same link shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::{ChromeStyle, FooterStyle, NavbarStyle};
use crate::core::LinkKind;
use crate::routing::{LinkResolver, apply_draft_suffix};

/// A link as stored in navbar/footer payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub text: String,
    pub href: String,
}

/// A link ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLink {
    pub text: String,
    pub href: String,
    /// Points at the page currently shown.
    pub active: bool,
    /// Leaves the site; renderers open it in a new tab.
    pub external: bool,
}

/// Storage shape of a style's links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkLayout {
    Flat,
    Split,
    Sectioned,
}

impl LinkLayout {
    /// Top-level array fields holding links (for non-sectioned layouts).
    const fn link_fields(self) -> &'static [&'static str] {
        match self {
            Self::Flat => &["links"],
            Self::Split => &["leftLinks", "rightLinks"],
            Self::Sectioned => &[],
        }
    }
}

/// Optional array present in any layout.
const BUTTONS_FIELD: &str = "buttons";

/// Payload does not match the shape its style promises.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChromeError {
    #[error("payload is not an object")]
    NotAnObject,

    #[error("missing link array `{0}`")]
    MissingField(String),

    #[error("`{field}` is not an array")]
    NotAnArray { field: String },

    #[error("invalid link at `{field}[{index}]`: {reason}")]
    InvalidLink {
        field: String,
        index: usize,
        reason: String,
    },
}

/// Pick the link layout for a style.
pub const fn pick_link_layout(style: ChromeStyle) -> LinkLayout {
    match style {
        ChromeStyle::Navbar(s) => match s {
            NavbarStyle::Style1
            | NavbarStyle::Style2
            | NavbarStyle::Style3
            | NavbarStyle::Style4
            | NavbarStyle::Style5
            | NavbarStyle::Style6
            | NavbarStyle::Style7
            | NavbarStyle::Style8 => LinkLayout::Flat,
            NavbarStyle::Style9
            | NavbarStyle::Style10
            | NavbarStyle::Style11
            | NavbarStyle::Style12 => LinkLayout::Split,
        },
        ChromeStyle::Footer(s) => match s {
            FooterStyle::Style1 | FooterStyle::Style2 | FooterStyle::Style3 => LinkLayout::Flat,
            FooterStyle::Style4
            | FooterStyle::Style5
            | FooterStyle::Style6
            | FooterStyle::Style7
            | FooterStyle::Style8
            | FooterStyle::Style9
            | FooterStyle::Style10
            | FooterStyle::Style11 => LinkLayout::Sectioned,
        },
    }
}

/// Extract every stored link, in display order.
pub fn collect_links(data: &Value, layout: LinkLayout) -> Result<Vec<NavLink>, ChromeError> {
    let mut links = Vec::new();
    visit_arrays(data, layout, |field, items| {
        for (index, item) in items.iter().enumerate() {
            let link = NavLink::deserialize(item).map_err(|e| ChromeError::InvalidLink {
                field: field.to_string(),
                index,
                reason: e.to_string(),
            })?;
            links.push(link);
        }
        Ok(())
    })?;
    Ok(links)
}

/// Resolve every link of a navbar/footer payload for rendering.
pub fn resolve_links(
    data: &Value,
    style: ChromeStyle,
    resolver: &LinkResolver,
) -> Result<Vec<ResolvedLink>, ChromeError> {
    let links = collect_links(data, pick_link_layout(style))?;
    Ok(links
        .into_iter()
        .map(|link| {
            let (href, active) = resolver.resolve_with_active(&link.href);
            ResolvedLink {
                external: LinkKind::is_external(&link.href),
                text: link.text,
                href,
                active,
            }
        })
        .collect())
}

/// Apply the draft suffix to every stored href before saving.
///
/// Returns how many hrefs changed.
pub fn apply_draft_links(data: &mut Value, layout: LinkLayout) -> Result<usize, ChromeError> {
    // Validate first so a malformed payload is left untouched.
    collect_links(data, layout)?;

    let mut changed = 0;
    visit_arrays_mut(data, layout, |items| {
        for item in items.iter_mut() {
            if let Some(Value::String(href)) = item.get_mut("href") {
                let drafted = apply_draft_suffix(href);
                if drafted != *href {
                    *href = drafted;
                    changed += 1;
                }
            }
        }
    });
    Ok(changed)
}

// ============================================================================
// Traversal
// ============================================================================

fn visit_arrays(
    data: &Value,
    layout: LinkLayout,
    mut f: impl FnMut(&str, &[Value]) -> Result<(), ChromeError>,
) -> Result<(), ChromeError> {
    let obj = data.as_object().ok_or(ChromeError::NotAnObject)?;

    if layout == LinkLayout::Sectioned {
        let sections = link_array("sections", obj.get("sections"), true)?.unwrap_or_default();
        for (i, section) in sections.iter().enumerate() {
            let field = format!("sections[{i}].links");
            if let Some(items) = link_array(&field, section.get("links"), true)? {
                f(field.as_str(), items)?;
            }
        }
    }

    for &field in layout.link_fields() {
        if let Some(items) = link_array(field, obj.get(field), true)? {
            f(field, items)?;
        }
    }

    if let Some(items) = link_array(BUTTONS_FIELD, obj.get(BUTTONS_FIELD), false)? {
        f(BUTTONS_FIELD, items)?;
    }

    Ok(())
}

fn link_array<'v>(
    field: &str,
    value: Option<&'v Value>,
    required: bool,
) -> Result<Option<&'v [Value]>, ChromeError> {
    match value {
        Some(Value::Array(items)) => Ok(Some(items.as_slice())),
        Some(_) => Err(ChromeError::NotAnArray {
            field: field.to_string(),
        }),
        None if required => Err(ChromeError::MissingField(field.to_string())),
        None => Ok(None),
    }
}

fn visit_arrays_mut(data: &mut Value, layout: LinkLayout, mut f: impl FnMut(&mut Vec<Value>)) {
    let Some(obj) = data.as_object_mut() else {
        return;
    };

    if layout == LinkLayout::Sectioned
        && let Some(Value::Array(sections)) = obj.get_mut("sections")
    {
        for section in sections.iter_mut() {
            if let Some(Value::Array(items)) = section.get_mut("links") {
                f(items);
            }
        }
    }

    for &field in layout.link_fields() {
        if let Some(Value::Array(items)) = obj.get_mut(field) {
            f(items);
        }
    }

    if let Some(Value::Array(items)) = obj.get_mut(BUTTONS_FIELD) {
        f(items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NavigationPolicy, RoutingContext};
    use serde_json::json;

    fn resolver(editable: bool) -> LinkResolver {
        let ctx = RoutingContext::live("acme-co")
            .with_current_path("/preview/acme-co/about")
            .editable(editable);
        LinkResolver::new(ctx, NavigationPolicy::Placeholder)
    }

    #[test]
    fn test_pick_link_layout() {
        assert_eq!(
            pick_link_layout(ChromeStyle::Navbar(NavbarStyle::Style1)),
            LinkLayout::Flat
        );
        assert_eq!(
            pick_link_layout(ChromeStyle::Navbar(NavbarStyle::Style10)),
            LinkLayout::Split
        );
        assert_eq!(
            pick_link_layout(ChromeStyle::Footer(FooterStyle::Style2)),
            LinkLayout::Flat
        );
        assert_eq!(
            pick_link_layout(ChromeStyle::Footer(FooterStyle::Style7)),
            LinkLayout::Sectioned
        );
    }

    #[test]
    fn test_collect_flat_with_buttons() {
        let data = json!({
            "links": [{ "text": "Home", "href": "/" }, { "text": "About", "href": "/about" }],
            "buttons": [{ "text": "Shop", "href": "/shop", "variant": "primary" }]
        });
        let links = collect_links(&data, LinkLayout::Flat).unwrap();
        let texts: Vec<_> = links.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["Home", "About", "Shop"]);
    }

    #[test]
    fn test_collect_sectioned() {
        let data = json!({
            "sections": [
                { "title": "Company", "links": [{ "text": "About", "href": "/about" }] },
                { "title": "Help", "links": [{ "text": "FAQ", "href": "/faq" }] }
            ]
        });
        let links = collect_links(&data, LinkLayout::Sectioned).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].href, "/faq");
    }

    #[test]
    fn test_collect_rejects_wrong_shape() {
        let data = json!({ "links": [] });
        assert_eq!(
            collect_links(&data, LinkLayout::Split),
            Err(ChromeError::MissingField("leftLinks".into()))
        );

        let data = json!({ "links": "nope" });
        assert_eq!(
            collect_links(&data, LinkLayout::Flat),
            Err(ChromeError::NotAnArray {
                field: "links".into()
            })
        );

        let data = json!({ "links": [{ "text": "Home" }] });
        assert!(matches!(
            collect_links(&data, LinkLayout::Flat),
            Err(ChromeError::InvalidLink { index: 0, .. })
        ));

        assert_eq!(
            collect_links(&json!([]), LinkLayout::Flat),
            Err(ChromeError::NotAnObject)
        );
    }

    #[test]
    fn test_resolve_links_live() {
        let data = json!({
            "links": [
                { "text": "Home", "href": "/" },
                { "text": "About", "href": "/about" },
                { "text": "Docs", "href": "https://docs.example.com" }
            ]
        });
        let style = ChromeStyle::Navbar(NavbarStyle::Style1);
        let links = resolve_links(&data, style, &resolver(false)).unwrap();

        assert_eq!(links[0].href, "/preview/acme-co");
        assert!(!links[0].active);
        assert_eq!(links[1].href, "/preview/acme-co/about");
        assert!(links[1].active);
        assert_eq!(links[2].href, "https://docs.example.com");
        assert!(links[2].external);
    }

    #[test]
    fn test_resolve_links_editor() {
        let data = json!({ "links": [{ "text": "About", "href": "/about" }] });
        let style = ChromeStyle::Navbar(NavbarStyle::Style2);
        let links = resolve_links(&data, style, &resolver(true)).unwrap();
        assert_eq!(links[0].href, "#");
        assert!(links[0].active);
    }

    #[test]
    fn test_apply_draft_links() {
        let mut data = json!({
            "leftLinks": [{ "text": "Home", "href": "/" }, { "text": "About", "href": "/about" }],
            "rightLinks": [{ "text": "Mail", "href": "mailto:a@b.co" }, { "text": "Blog", "href": "/blog-draft" }]
        });
        let changed = apply_draft_links(&mut data, LinkLayout::Split).unwrap();
        assert_eq!(changed, 1);
        assert_eq!(data["leftLinks"][0]["href"], "/");
        assert_eq!(data["leftLinks"][1]["href"], "/about-draft");
        assert_eq!(data["rightLinks"][0]["href"], "mailto:a@b.co");
        assert_eq!(data["rightLinks"][1]["href"], "/blog-draft");

        // Second pass is a no-op
        assert_eq!(apply_draft_links(&mut data, LinkLayout::Split).unwrap(), 0);
    }

    #[test]
    fn test_apply_draft_links_leaves_malformed_untouched() {
        let mut data = json!({ "links": [{ "text": "About", "href": "/about" }, { "href": "/x" }] });
        let before = data.clone();
        assert!(apply_draft_links(&mut data, LinkLayout::Flat).is_err());
        assert_eq!(data, before);
    }
}
