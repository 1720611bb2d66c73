//! `defaults` and `components` commands.

use anyhow::{Result, anyhow};
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::Value;

use super::plural_count;
use crate::config::SiteContext;
use crate::registry::{ComponentCategory, ComponentMetadata, ComponentRegistry, ComponentType};

/// Print a component's default data as JSON.
pub fn run_defaults(
    component: &str,
    variant: Option<&str>,
    raw: bool,
    pretty: bool,
    ctx: &SiteContext,
) -> Result<()> {
    let data = default_data(component, variant, raw, ctx)?;
    let output = if pretty {
        serde_json::to_string_pretty(&data)?
    } else {
        serde_json::to_string(&data)?
    };
    println!("{output}");
    Ok(())
}

/// Default payload for a component key, themed unless `raw`.
pub fn default_data(
    component: &str,
    variant: Option<&str>,
    raw: bool,
    ctx: &SiteContext,
) -> Result<Value> {
    let component = ComponentType::parse(component)?;
    let meta = ComponentRegistry::global().metadata(component)?;
    if let Some(variant) = variant
        && !meta.has_variant(variant)
    {
        crate::log!(
            "warning";
            "{} has no variant `{}`, using `{}`",
            component,
            variant,
            meta.fallback_key()
        );
    }

    let data = if raw {
        meta.get_default_data(variant)?
    } else {
        ctx.default_data(component, variant)?
    };
    Ok(data)
}

#[derive(Debug, Serialize)]
struct ComponentRow {
    key: &'static str,
    name: &'static str,
    category: ComponentCategory,
    default: &'static str,
    variants: Vec<&'static str>,
}

impl From<&ComponentMetadata> for ComponentRow {
    fn from(meta: &ComponentMetadata) -> Self {
        Self {
            key: meta.component.key(),
            name: meta.display_name,
            category: meta.category,
            default: meta.fallback_key(),
            variants: meta.variants(),
        }
    }
}

/// List registered components, optionally filtered by category.
pub fn run_components(category: Option<&str>, json: bool) -> Result<()> {
    let rows = component_rows(category)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let key_width = rows.iter().map(|r| r.key.len()).max().unwrap_or(0);
    for row in &rows {
        println!(
            "{:<key_width$}  {:<11}  {}  {}",
            row.key,
            row.category.name().dimmed(),
            row.name,
            format!("({})", plural_count(row.variants.len(), "variant")).dimmed(),
        );
    }
    Ok(())
}

fn component_rows(category: Option<&str>) -> Result<Vec<ComponentRow>> {
    let filter = category
        .map(|name| {
            ComponentCategory::parse(name).ok_or_else(|| anyhow!("unknown category `{name}`"))
        })
        .transpose()?;

    Ok(ComponentRegistry::global()
        .iter()
        .filter(|meta| filter.is_none_or(|c| meta.category == c))
        .map(ComponentRow::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_themed_and_raw() {
        let mut ctx = SiteContext::default();
        ctx.theme.primary = "#123456".into();

        let themed = default_data("newsletter", None, false, &ctx).unwrap();
        assert_eq!(themed["buttonColor"], "#123456");

        let raw = default_data("newsletter", None, true, &ctx).unwrap();
        assert_ne!(raw["buttonColor"], "#123456");
    }

    #[test]
    fn test_default_data_unknown_variant_falls_back() {
        let ctx = SiteContext::default();
        let data = default_data("hero", Some("hero-42"), true, &ctx).unwrap();
        let fallback = default_data("hero", None, true, &ctx).unwrap();
        assert_eq!(data, fallback);
    }

    #[test]
    fn test_default_data_unknown_component() {
        let ctx = SiteContext::default();
        let err = default_data("carousel", None, false, &ctx).unwrap_err();
        assert!(err.to_string().contains("carousel"));
    }

    #[test]
    fn test_component_rows() {
        let all = component_rows(None).unwrap();
        assert_eq!(all.len(), ComponentType::ALL.len());
        assert_eq!(all[0].key, "navbar");

        let media = component_rows(Some("media")).unwrap();
        assert!(!media.is_empty());
        assert!(media.iter().all(|r| r.category == ComponentCategory::Media));

        assert!(component_rows(Some("misc")).is_err());
    }
}
