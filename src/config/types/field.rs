//! Config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path of a config field, e.g. `theme.primary`.
///
/// Sections declare their paths as constants so diagnostics never drift
/// from the TOML layout:
///
/// ```ignore
/// const USER: FieldPath = FieldPath::new("site.user");
/// diag.error(USER, "must not contain `/`");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_path() {
        owo_colors::set_override(false);
        assert_eq!(FieldPath::new("theme.primary").to_string(), "`theme.primary`");
    }
}
