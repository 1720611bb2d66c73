//! Draft-suffix rule for persisted navigation links.
//!
//! When an owner saves navbar or footer links, internal targets are marked
//! with `-draft` so they resolve against the unpublished renderer.

use crate::core::{DRAFT_SUFFIX, LinkKind};

/// Append the draft suffix to an internal link.
///
/// Only root-relative paths other than `/` are touched. The suffix goes on
/// the path part, before any `?query` or `#fragment`, and a trailing slash
/// is dropped first. Idempotent.
///
/// # Examples
///
/// - `/about` -> `/about-draft`
/// - `/about/` -> `/about-draft`
/// - `/about#team` -> `/about-draft#team`
/// - `/about-draft` -> `/about-draft`
/// - `/` -> `/`
/// - `https://x.com/a` -> `https://x.com/a`
pub fn apply_draft_suffix(href: &str) -> String {
    if !LinkKind::is_internal_path(href) || href == "/" {
        return href.to_string();
    }

    let (path, tail) = split_tail(href);
    let path = path.trim_end_matches('/');

    if path.is_empty() || path.ends_with(DRAFT_SUFFIX) {
        return href.to_string();
    }

    format!("{path}{DRAFT_SUFFIX}{tail}")
}

/// Remove the draft suffix from a bare path (no query or fragment).
#[inline]
pub fn strip_draft_suffix(path: &str) -> &str {
    path.strip_suffix(DRAFT_SUFFIX).unwrap_or(path)
}

/// Whether an href's path part carries the draft suffix.
pub fn is_draft_href(href: &str) -> bool {
    let (path, _) = split_tail(href);
    path.trim_end_matches('/').ends_with(DRAFT_SUFFIX)
}

/// Split `href` into the path and the `?query#fragment` tail.
#[inline]
fn split_tail(href: &str) -> (&str, &str) {
    match href.find(['?', '#']) {
        Some(idx) => href.split_at(idx),
        None => (href, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_internal() {
        assert_eq!(apply_draft_suffix("/about"), "/about-draft");
        assert_eq!(apply_draft_suffix("/shop/items"), "/shop/items-draft");
        assert_eq!(apply_draft_suffix("/about/"), "/about-draft");
    }

    #[test]
    fn test_apply_keeps_query_and_fragment() {
        assert_eq!(apply_draft_suffix("/about#team"), "/about-draft#team");
        assert_eq!(apply_draft_suffix("/shop?page=2"), "/shop-draft?page=2");
    }

    #[test]
    fn test_root_never_suffixed() {
        assert_eq!(apply_draft_suffix("/"), "/");
        assert_eq!(apply_draft_suffix("/#top"), "/#top");
        assert_eq!(apply_draft_suffix("//"), "//");
    }

    #[test]
    fn test_non_internal_untouched() {
        assert_eq!(apply_draft_suffix("about"), "about");
        assert_eq!(apply_draft_suffix("#about"), "#about");
        assert_eq!(apply_draft_suffix(""), "");
        assert_eq!(apply_draft_suffix("https://x.com/a"), "https://x.com/a");
        assert_eq!(apply_draft_suffix("mailto:a@b.co"), "mailto:a@b.co");
    }

    #[test]
    fn test_idempotent() {
        for href in [
            "/", "/about", "/about/", "/about-draft", "/about-draft/", "/a#b", "/a?q=1#b", "x",
            "",
        ] {
            let once = apply_draft_suffix(href);
            assert_eq!(apply_draft_suffix(&once), once, "not idempotent for {href:?}");
        }
    }

    #[test]
    fn test_is_draft_and_strip() {
        assert!(is_draft_href("/about-draft"));
        assert!(is_draft_href("/about-draft#team"));
        assert!(!is_draft_href("/about"));
        assert_eq!(strip_draft_suffix("/about-draft"), "/about");
        assert_eq!(strip_draft_suffix("/about"), "/about");
    }
}
