//! Link classification utilities.

/// Syntactic classification of a raw link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// Site root: empty, `/`, `#`, or nothing but `/` and `#` characters.
    Home,
    /// Absolute or protocol link (`http…`, `mailto:`, `tel:`). Never rewritten.
    External(&'a str),
    /// Already resolved under the preview namespace (`/preview/acme/about`).
    Namespaced(&'a str),
    /// Internal page fragment with leading `#` and `/` stripped (`about`).
    Internal(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    ///
    /// `namespace` is the preview root of the current tenant (`/preview/acme`),
    /// used to recognize targets that were already resolved once. Without a
    /// tenant nothing counts as namespaced, so a page slug like `preview`
    /// still resolves under the root.
    ///
    /// Whitespace only matters for classification: the returned slices keep
    /// the target's bytes.
    pub fn parse(link: &'a str, namespace: Option<&str>) -> Self {
        if Self::is_external(link.trim_start()) {
            return Self::External(link);
        }

        if let Some(namespace) = namespace
            && Self::is_namespaced(link, namespace)
        {
            return Self::Namespaced(link);
        }

        let fragment = link.trim_start_matches(['#', '/']);
        if fragment.trim().is_empty() {
            Self::Home
        } else {
            Self::Internal(fragment)
        }
    }

    /// Check if a link is external or a protocol link.
    #[inline]
    pub fn is_external(link: &str) -> bool {
        link.starts_with("http") || link.starts_with("mailto:") || link.starts_with("tel:")
    }

    /// Check if a link already lives under `namespace` (segment-aligned).
    #[inline]
    pub fn is_namespaced(link: &str, namespace: &str) -> bool {
        link.strip_prefix(namespace)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }

    /// Check if a link is root-relative and internal (`/about`).
    #[inline]
    pub fn is_internal_path(link: &str) -> bool {
        link.starts_with('/') && !Self::is_external(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: Option<&str> = Some("/preview/acme");

    #[test]
    fn test_parse_home() {
        assert_eq!(LinkKind::parse("", NS), LinkKind::Home);
        assert_eq!(LinkKind::parse("/", NS), LinkKind::Home);
        assert_eq!(LinkKind::parse("#", NS), LinkKind::Home);
        assert_eq!(LinkKind::parse("#/", NS), LinkKind::Home);
        assert_eq!(LinkKind::parse("  ", NS), LinkKind::Home);
    }

    #[test]
    fn test_parse_external() {
        assert_eq!(
            LinkKind::parse("https://example.com", NS),
            LinkKind::External("https://example.com")
        );
        assert_eq!(
            LinkKind::parse("http://example.com/a", NS),
            LinkKind::External("http://example.com/a")
        );
        assert_eq!(
            LinkKind::parse("mailto:user@example.com", NS),
            LinkKind::External("mailto:user@example.com")
        );
        assert_eq!(
            LinkKind::parse("tel:+1234567890", NS),
            LinkKind::External("tel:+1234567890")
        );
    }

    #[test]
    fn test_parse_internal() {
        assert_eq!(LinkKind::parse("about", NS), LinkKind::Internal("about"));
        assert_eq!(LinkKind::parse("/about", NS), LinkKind::Internal("about"));
        assert_eq!(LinkKind::parse("#about", NS), LinkKind::Internal("about"));
        assert_eq!(
            LinkKind::parse("//shop/items", NS),
            LinkKind::Internal("shop/items")
        );
    }

    #[test]
    fn test_parse_namespaced() {
        assert_eq!(
            LinkKind::parse("/preview/acme/about", NS),
            LinkKind::Namespaced("/preview/acme/about")
        );
        assert_eq!(
            LinkKind::parse("/preview/acme", NS),
            LinkKind::Namespaced("/preview/acme")
        );
        // Segment boundary: another tenant sharing a prefix is not namespaced
        assert_eq!(
            LinkKind::parse("/preview/acme-co/about", NS),
            LinkKind::Internal("preview/acme-co/about")
        );
    }

    #[test]
    fn test_parse_keeps_target_bytes() {
        assert_eq!(
            LinkKind::parse("https://example.com/a ", NS),
            LinkKind::External("https://example.com/a ")
        );
        assert_eq!(
            LinkKind::parse(" mailto:a@b.co", NS),
            LinkKind::External(" mailto:a@b.co")
        );
        assert_eq!(LinkKind::parse("about ", NS), LinkKind::Internal("about "));
    }

    #[test]
    fn test_parse_without_tenant() {
        assert_eq!(
            LinkKind::parse("/preview", None),
            LinkKind::Internal("preview")
        );
        assert_eq!(
            LinkKind::parse("/preview/about", None),
            LinkKind::Internal("preview/about")
        );
        assert_eq!(LinkKind::parse("/", None), LinkKind::Home);
    }

    #[test]
    fn test_is_internal_path() {
        assert!(LinkKind::is_internal_path("/about"));
        assert!(LinkKind::is_internal_path("/"));
        assert!(!LinkKind::is_internal_path("about"));
        assert!(!LinkKind::is_internal_path("https://example.com"));
    }
}
