//! Component registry: type metadata and default data resolution.
//!
//! # Module Structure
//!
//! ```text
//! registry/
//! ├── kind.rs      # ComponentType, ComponentCategory
//! ├── table.rs     # DefaultDataMap (variant key -> payload, with fallback)
//! ├── error.rs     # RegistryError
//! └── defaults/    # Hard-coded seed content per component type
//! ```
//!
//! The registry is built once per process and never mutated. Every lookup
//! returns an owned copy, so callers may edit their working data freely.

mod defaults;
mod error;
mod kind;
mod table;

pub use error::RegistryError;
pub use kind::{ComponentCategory, ComponentType};
pub use table::DefaultDataMap;

use rustc_hash::FxHashMap;
use serde_json::Value;
use std::sync::LazyLock;

use crate::config::ThemeConfig;

/// Process-wide registry.
static REGISTRY: LazyLock<ComponentRegistry> = LazyLock::new(ComponentRegistry::build);

/// Top-level payload fields that follow the site theme.
const THEMED_FIELDS: [(&str, ThemeSlot); 4] = [
    ("backgroundColor", ThemeSlot::Background),
    ("textColor", ThemeSlot::Text),
    ("accentColor", ThemeSlot::Secondary),
    ("buttonColor", ThemeSlot::Primary),
];

#[derive(Debug, Clone, Copy)]
enum ThemeSlot {
    Primary,
    Secondary,
    Text,
    Background,
}

impl ThemeSlot {
    fn pick(self, theme: &ThemeConfig) -> &str {
        match self {
            Self::Primary => &theme.primary,
            Self::Secondary => &theme.secondary,
            Self::Text => &theme.text,
            Self::Background => &theme.background,
        }
    }
}

/// What the builder knows about one component type.
#[derive(Debug, Clone)]
pub struct ComponentMetadata {
    pub component: ComponentType,
    pub display_name: &'static str,
    pub category: ComponentCategory,
    defaults: DefaultDataMap,
}

impl ComponentMetadata {
    fn new(component: ComponentType) -> Self {
        Self {
            component,
            display_name: component.display_name(),
            category: component.category(),
            defaults: defaults::table_for(component),
        }
    }

    /// Owned default payload for `variant`, or for the fallback variant when
    /// `variant` is `None` or unknown.
    ///
    /// Fails with [`RegistryError::MissingFallback`] when the lookup needs a
    /// fallback the table does not hold.
    pub fn get_default_data(&self, variant: Option<&str>) -> Result<Value, RegistryError> {
        self.defaults
            .get_or_fallback(variant)
            .cloned()
            .ok_or_else(|| self.missing_fallback())
    }

    fn missing_fallback(&self) -> RegistryError {
        RegistryError::MissingFallback {
            component: self.component.key(),
            variant: self.defaults.fallback_key(),
        }
    }

    #[inline]
    pub fn fallback_key(&self) -> &'static str {
        self.defaults.fallback_key()
    }

    /// Variant keys in declaration order.
    pub fn variants(&self) -> Vec<&'static str> {
        self.defaults.keys().collect()
    }

    pub fn has_variant(&self, variant: &str) -> bool {
        self.defaults.get(variant).is_some()
    }

    fn validate(&self) -> Result<(), RegistryError> {
        let name = self.component.key();
        if self.defaults.is_empty() {
            return Err(RegistryError::EmptyTable(name));
        }
        if !self.defaults.is_resolvable() {
            return Err(self.missing_fallback());
        }
        Ok(())
    }
}

/// Component type → metadata.
#[derive(Debug)]
pub struct ComponentRegistry {
    entries: FxHashMap<ComponentType, ComponentMetadata>,
}

impl ComponentRegistry {
    /// The shared, immutable registry.
    #[inline]
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    /// Build a registry holding every component type.
    pub fn build() -> Self {
        let entries = ComponentType::ALL
            .into_iter()
            .map(|t| (t, ComponentMetadata::new(t)))
            .collect();
        Self { entries }
    }

    pub fn metadata(&self, component: ComponentType) -> Result<&ComponentMetadata, RegistryError> {
        self.entries
            .get(&component)
            .ok_or_else(|| RegistryError::UnknownComponentType(component.key().to_string()))
    }

    /// Resolve a component's default payload.
    ///
    /// Unknown variants fall back to the type's canonical default. The
    /// result is a deep copy; the stored template is never handed out.
    pub fn get_default_data(
        &self,
        component: ComponentType,
        variant: Option<&str>,
    ) -> Result<Value, RegistryError> {
        self.metadata(component)?.get_default_data(variant)
    }

    /// Same as [`get_default_data`](Self::get_default_data) for a stored
    /// type key (`"hero"`, `"text_editor"`).
    pub fn get_default_data_by_key(
        &self,
        component: &str,
        variant: Option<&str>,
    ) -> Result<Value, RegistryError> {
        self.get_default_data(ComponentType::parse(component)?, variant)
    }

    /// Default payload with color fields taken from the site theme.
    ///
    /// Only top-level color fields that the template already defines are
    /// replaced; no fields are added.
    pub fn get_themed_default_data(
        &self,
        component: ComponentType,
        variant: Option<&str>,
        theme: &ThemeConfig,
    ) -> Result<Value, RegistryError> {
        let mut data = self.get_default_data(component, variant)?;
        if let Some(obj) = data.as_object_mut() {
            for (field, slot) in THEMED_FIELDS {
                if let Some(value) = obj.get_mut(field) {
                    *value = Value::String(slot.pick(theme).to_string());
                }
            }
        }
        Ok(data)
    }

    /// Metadata for every component type, in palette order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentMetadata> {
        ComponentType::ALL
            .into_iter()
            .filter_map(|t| self.entries.get(&t))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that every type is registered with a resolvable fallback.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for component in ComponentType::ALL {
            self.metadata(component)?.validate()?;
        }
        Ok(())
    }
}

/// Resolve a default payload from the global registry.
pub fn get_default_data(
    component: ComponentType,
    variant: Option<&str>,
) -> Result<Value, RegistryError> {
    ComponentRegistry::global().get_default_data(component, variant)
}
