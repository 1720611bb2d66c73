//! Registry error types.

use thiserror::Error;

/// Failures at the string boundary of the registry.
///
/// Inside the crate component types and styles are closed enums, so these
/// only surface when parsing keys that came from outside (CLI, stored data).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown component type `{0}`")]
    UnknownComponentType(String),

    #[error("unknown style `{key}` for {component}")]
    UnknownStyle { component: &'static str, key: String },

    #[error("component `{component}` has no default variant `{variant}`")]
    MissingFallback {
        component: &'static str,
        variant: &'static str,
    },

    #[error("component `{0}` has an empty default table")]
    EmptyTable(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_display() {
        let err = RegistryError::UnknownComponentType("carousel".into());
        assert_eq!(err.to_string(), "unknown component type `carousel`");

        let err = RegistryError::UnknownStyle {
            component: "navbar",
            key: "navbar-style-99".into(),
        };
        assert!(err.to_string().contains("navbar-style-99"));
    }
}
