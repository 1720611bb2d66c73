//! Navbar and footer style variants.
//!
//! Stored data names a style by key (`navbar-style-5`). Keys are parsed into
//! closed enums here so that anything dispatching on a style is checked for
//! exhaustiveness by the compiler.

use crate::registry::{ComponentType, RegistryError};

/// Navbar presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavbarStyle {
    Style1,
    Style2,
    Style3,
    Style4,
    Style5,
    Style6,
    Style7,
    Style8,
    Style9,
    Style10,
    Style11,
    Style12,
}

/// Footer presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FooterStyle {
    Style1,
    Style2,
    Style3,
    Style4,
    Style5,
    Style6,
    Style7,
    Style8,
    Style9,
    Style10,
    Style11,
}

impl NavbarStyle {
    pub const ALL: [Self; 12] = [
        Self::Style1,
        Self::Style2,
        Self::Style3,
        Self::Style4,
        Self::Style5,
        Self::Style6,
        Self::Style7,
        Self::Style8,
        Self::Style9,
        Self::Style10,
        Self::Style11,
        Self::Style12,
    ];

    pub const fn number(self) -> u8 {
        match self {
            Self::Style1 => 1,
            Self::Style2 => 2,
            Self::Style3 => 3,
            Self::Style4 => 4,
            Self::Style5 => 5,
            Self::Style6 => 6,
            Self::Style7 => 7,
            Self::Style8 => 8,
            Self::Style9 => 9,
            Self::Style10 => 10,
            Self::Style11 => 11,
            Self::Style12 => 12,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Style1 => "navbar-style-1",
            Self::Style2 => "navbar-style-2",
            Self::Style3 => "navbar-style-3",
            Self::Style4 => "navbar-style-4",
            Self::Style5 => "navbar-style-5",
            Self::Style6 => "navbar-style-6",
            Self::Style7 => "navbar-style-7",
            Self::Style8 => "navbar-style-8",
            Self::Style9 => "navbar-style-9",
            Self::Style10 => "navbar-style-10",
            Self::Style11 => "navbar-style-11",
            Self::Style12 => "navbar-style-12",
        }
    }

    /// Parse `navbar-style-N` (or bare `N`).
    pub fn parse(key: &str) -> Result<Self, RegistryError> {
        parse_numbered(key, "navbar-style-")
            .and_then(|n| Self::ALL.into_iter().find(|s| s.number() == n))
            .ok_or_else(|| RegistryError::UnknownStyle {
                component: "navbar",
                key: key.to_string(),
            })
    }
}

impl FooterStyle {
    pub const ALL: [Self; 11] = [
        Self::Style1,
        Self::Style2,
        Self::Style3,
        Self::Style4,
        Self::Style5,
        Self::Style6,
        Self::Style7,
        Self::Style8,
        Self::Style9,
        Self::Style10,
        Self::Style11,
    ];

    pub const fn number(self) -> u8 {
        match self {
            Self::Style1 => 1,
            Self::Style2 => 2,
            Self::Style3 => 3,
            Self::Style4 => 4,
            Self::Style5 => 5,
            Self::Style6 => 6,
            Self::Style7 => 7,
            Self::Style8 => 8,
            Self::Style9 => 9,
            Self::Style10 => 10,
            Self::Style11 => 11,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Style1 => "footer-style-1",
            Self::Style2 => "footer-style-2",
            Self::Style3 => "footer-style-3",
            Self::Style4 => "footer-style-4",
            Self::Style5 => "footer-style-5",
            Self::Style6 => "footer-style-6",
            Self::Style7 => "footer-style-7",
            Self::Style8 => "footer-style-8",
            Self::Style9 => "footer-style-9",
            Self::Style10 => "footer-style-10",
            Self::Style11 => "footer-style-11",
        }
    }

    /// Parse `footer-style-N` (or bare `N`).
    pub fn parse(key: &str) -> Result<Self, RegistryError> {
        parse_numbered(key, "footer-style-")
            .and_then(|n| Self::ALL.into_iter().find(|s| s.number() == n))
            .ok_or_else(|| RegistryError::UnknownStyle {
                component: "footer",
                key: key.to_string(),
            })
    }
}

/// Either kind of page chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromeStyle {
    Navbar(NavbarStyle),
    Footer(FooterStyle),
}

impl ChromeStyle {
    /// Parse any navbar or footer style key.
    pub fn parse(key: &str) -> Result<Self, RegistryError> {
        let trimmed = key.trim();
        if trimmed.starts_with("navbar") {
            NavbarStyle::parse(trimmed).map(Self::Navbar)
        } else if trimmed.starts_with("footer") {
            FooterStyle::parse(trimmed).map(Self::Footer)
        } else {
            Err(RegistryError::UnknownStyle {
                component: "navbar/footer",
                key: key.to_string(),
            })
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Navbar(s) => s.key(),
            Self::Footer(s) => s.key(),
        }
    }

    /// Component type whose payloads use this style.
    pub const fn component(self) -> ComponentType {
        match self {
            Self::Navbar(_) => ComponentType::Navbar,
            Self::Footer(_) => ComponentType::Footer,
        }
    }
}

fn parse_numbered(key: &str, prefix: &str) -> Option<u8> {
    let key = key.trim();
    key.strip_prefix(prefix).unwrap_or(key).parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_parse() {
        assert_eq!(NavbarStyle::parse("navbar-style-1"), Ok(NavbarStyle::Style1));
        assert_eq!(NavbarStyle::parse("navbar-style-12"), Ok(NavbarStyle::Style12));
        assert_eq!(NavbarStyle::parse("7"), Ok(NavbarStyle::Style7));
        assert!(NavbarStyle::parse("navbar-style-13").is_err());
        assert!(NavbarStyle::parse("navbar-style-0").is_err());
        assert!(NavbarStyle::parse("navbar-style-x").is_err());
    }

    #[test]
    fn test_footer_parse() {
        assert_eq!(FooterStyle::parse("footer-style-5"), Ok(FooterStyle::Style5));
        assert_eq!(
            FooterStyle::parse("footer-style-12"),
            Err(RegistryError::UnknownStyle {
                component: "footer",
                key: "footer-style-12".into()
            })
        );
    }

    #[test]
    fn test_key_roundtrip() {
        for s in NavbarStyle::ALL {
            assert_eq!(NavbarStyle::parse(s.key()), Ok(s));
        }
        for s in FooterStyle::ALL {
            assert_eq!(FooterStyle::parse(s.key()), Ok(s));
        }
    }

    #[test]
    fn test_chrome_parse() {
        assert_eq!(
            ChromeStyle::parse("footer-style-3"),
            Ok(ChromeStyle::Footer(FooterStyle::Style3))
        );
        assert_eq!(
            ChromeStyle::parse("navbar-style-9").map(ChromeStyle::key),
            Ok("navbar-style-9")
        );
        assert!(ChromeStyle::parse("hero-1").is_err());
    }
}
