//! Component type definitions.

use serde::{Deserialize, Serialize};

use super::RegistryError;

/// Palette grouping shown in the builder's "add section" picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    /// Page chrome and structure (navbar, footer, hero, banner)
    Layout,
    /// Text-driven sections
    Content,
    /// Shop-related sections
    Commerce,
    /// Sections that collect visitor input
    Engagement,
    /// Image and video sections
    Media,
}

impl ComponentCategory {
    pub const ALL: [Self; 5] = [
        Self::Layout,
        Self::Content,
        Self::Commerce,
        Self::Engagement,
        Self::Media,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Layout => "layout",
            Self::Content => "content",
            Self::Commerce => "commerce",
            Self::Engagement => "engagement",
            Self::Media => "media",
        }
    }
}

/// Every component a site owner can place on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Navbar,
    Footer,
    Hero,
    About,
    Blog,
    Products,
    Category,
    Subcategory,
    Contact,
    Appointment,
    Team,
    Testimonials,
    Portfolio,
    Faq,
    Cta,
    Gallery,
    Newsletter,
    Banner,
    Services,
    Videos,
    Policies,
    TextEditor,
    Pricing,
    OurClients,
    Others,
}

impl ComponentType {
    pub const ALL: [Self; 25] = [
        Self::Navbar,
        Self::Footer,
        Self::Hero,
        Self::About,
        Self::Blog,
        Self::Products,
        Self::Category,
        Self::Subcategory,
        Self::Contact,
        Self::Appointment,
        Self::Team,
        Self::Testimonials,
        Self::Portfolio,
        Self::Faq,
        Self::Cta,
        Self::Gallery,
        Self::Newsletter,
        Self::Banner,
        Self::Services,
        Self::Videos,
        Self::Policies,
        Self::TextEditor,
        Self::Pricing,
        Self::OurClients,
        Self::Others,
    ];

    /// Stable identifier used in stored page data.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Navbar => "navbar",
            Self::Footer => "footer",
            Self::Hero => "hero",
            Self::About => "about",
            Self::Blog => "blog",
            Self::Products => "products",
            Self::Category => "category",
            Self::Subcategory => "subcategory",
            Self::Contact => "contact",
            Self::Appointment => "appointment",
            Self::Team => "team",
            Self::Testimonials => "testimonials",
            Self::Portfolio => "portfolio",
            Self::Faq => "faq",
            Self::Cta => "cta",
            Self::Gallery => "gallery",
            Self::Newsletter => "newsletter",
            Self::Banner => "banner",
            Self::Services => "services",
            Self::Videos => "videos",
            Self::Policies => "policies",
            Self::TextEditor => "text_editor",
            Self::Pricing => "pricing",
            Self::OurClients => "our_clients",
            Self::Others => "others",
        }
    }

    /// Parse a stored identifier. Accepts `-` in place of `_`.
    pub fn parse(key: &str) -> Result<Self, RegistryError> {
        let normalized = key.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|t| t.key() == normalized)
            .ok_or_else(|| RegistryError::UnknownComponentType(key.to_string()))
    }

    /// Human-readable name shown in the builder.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Navbar => "Navigation Bar",
            Self::Footer => "Footer",
            Self::Hero => "Hero Section",
            Self::About => "About Us",
            Self::Blog => "Blog",
            Self::Products => "Products",
            Self::Category => "Categories",
            Self::Subcategory => "Subcategories",
            Self::Contact => "Contact Form",
            Self::Appointment => "Appointment Booking",
            Self::Team => "Team",
            Self::Testimonials => "Testimonials",
            Self::Portfolio => "Portfolio",
            Self::Faq => "FAQ",
            Self::Cta => "Call to Action",
            Self::Gallery => "Gallery",
            Self::Newsletter => "Newsletter",
            Self::Banner => "Banner",
            Self::Services => "Services",
            Self::Videos => "Videos",
            Self::Policies => "Policies",
            Self::TextEditor => "Text Editor",
            Self::Pricing => "Pricing",
            Self::OurClients => "Our Clients",
            Self::Others => "Others",
        }
    }

    pub const fn category(self) -> ComponentCategory {
        use ComponentCategory::*;
        match self {
            Self::Navbar | Self::Footer | Self::Hero | Self::Banner => Layout,
            Self::About
            | Self::Blog
            | Self::Team
            | Self::Testimonials
            | Self::Faq
            | Self::Services
            | Self::Policies
            | Self::TextEditor
            | Self::OurClients
            | Self::Others => Content,
            Self::Products | Self::Category | Self::Subcategory | Self::Pricing => Commerce,
            Self::Contact | Self::Appointment | Self::Newsletter | Self::Cta => Engagement,
            Self::Portfolio | Self::Gallery | Self::Videos => Media,
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrips_every_key() {
        for t in ComponentType::ALL {
            assert_eq!(ComponentType::parse(t.key()), Ok(t));
        }
    }

    #[test]
    fn test_parse_normalizes() {
        assert_eq!(
            ComponentType::parse("Text-Editor"),
            Ok(ComponentType::TextEditor)
        );
        assert_eq!(
            ComponentType::parse(" our_clients "),
            Ok(ComponentType::OurClients)
        );
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(ComponentCategory::parse("Commerce"), Some(ComponentCategory::Commerce));
        assert_eq!(ComponentCategory::parse("misc"), None);
        for t in ComponentType::ALL {
            assert!(ComponentCategory::ALL.contains(&t.category()));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            ComponentType::parse("carousel"),
            Err(RegistryError::UnknownComponentType("carousel".into()))
        );
    }

    #[test]
    fn test_keys_unique() {
        let mut keys: Vec<_> = ComponentType::ALL.iter().map(|t| t.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ComponentType::ALL.len());
    }

    #[test]
    fn test_serde_matches_key() {
        let json = serde_json::to_string(&ComponentType::OurClients).unwrap();
        assert_eq!(json, "\"our_clients\"");
        let parsed: ComponentType = serde_json::from_str("\"text_editor\"").unwrap();
        assert_eq!(parsed, ComponentType::TextEditor);
    }

    #[test]
    fn test_category() {
        assert_eq!(ComponentType::Navbar.category(), ComponentCategory::Layout);
        assert_eq!(ComponentType::Pricing.category(), ComponentCategory::Commerce);
        assert_eq!(ComponentType::Videos.category().name(), "media");
    }
}
