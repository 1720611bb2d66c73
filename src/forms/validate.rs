//! Client-side input checks run before any network call.

use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld` with no whitespace or extra `@`.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Loose email shape check (not RFC 5322).
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}

/// Case-insensitive membership test against an already loaded list.
pub fn contains_name<'a>(names: impl IntoIterator<Item = &'a str>, candidate: &str) -> bool {
    let candidate = candidate.trim().to_lowercase();
    names
        .into_iter()
        .any(|name| name.trim().to_lowercase() == candidate)
}
