//! `check` command.

use anyhow::{Result, bail};

use super::plural_count;
use crate::chrome::{
    ChromeStyle, FooterStyle, NavbarStyle, collect_links, collect_social_links, pick_link_layout,
};
use crate::config::SiteConfig;
use crate::logger::{status_error, status_success};
use crate::registry::{ComponentRegistry, ComponentType};

/// Report on the loaded config and the built-in component data.
pub fn run_check(config: &SiteConfig) -> Result<()> {
    if config.is_from_file() {
        status_success(&format!("config `{}` is valid", config.config_path.display()));
    } else {
        status_success("no config file, using defaults");
    }

    let problems = check_registry();
    if problems.is_empty() {
        let registry = ComponentRegistry::global();
        let variants: usize = registry.iter().map(|m| m.variants().len()).sum();
        status_success(&format!(
            "registry has {} with {}",
            plural_count(registry.len(), "component"),
            plural_count(variants, "variant")
        ));
        return Ok(());
    }

    for problem in &problems {
        status_error(problem, "");
    }
    bail!("found {}", plural_count(problems.len(), "registry problem"))
}

/// Every problem found in the registry and in the chrome defaults.
pub fn check_registry() -> Vec<String> {
    let registry = ComponentRegistry::global();
    let mut problems = Vec::new();

    if let Err(e) = registry.validate() {
        problems.push(e.to_string());
    }

    let styles = NavbarStyle::ALL
        .into_iter()
        .map(ChromeStyle::Navbar)
        .chain(FooterStyle::ALL.into_iter().map(ChromeStyle::Footer));
    for style in styles {
        let data = match registry.get_default_data(style.component(), Some(style.key())) {
            Ok(data) => data,
            Err(e) => {
                problems.push(e.to_string());
                continue;
            }
        };
        if let Err(e) = collect_links(&data, pick_link_layout(style)) {
            problems.push(format!("{}: {e}", style.key()));
        }
        if style.component() == ComponentType::Footer
            && let Err(e) = collect_social_links(&data)
        {
            problems.push(format!("{}: {e}", style.key()));
        }
    }

    problems
}
