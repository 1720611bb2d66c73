//! Sitecraft command-line entry point.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use sitecraft::cli::{self, Cli, Commands};
use sitecraft::config::{SiteConfig, SiteContext};
use sitecraft::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli.config)?;
    let ctx = SiteContext::from_config(&config).with_site_user(cli.user.clone());

    match &cli.command {
        Commands::Href { target, surface } => cli::href::run_href(target, surface, &ctx),
        Commands::Draft {
            hrefs,
            payload,
            style,
        } => cli::href::run_draft(hrefs, payload.as_deref(), style.as_deref()),
        Commands::Defaults {
            component,
            variant,
            raw,
            pretty,
        } => cli::registry::run_defaults(component, variant.as_deref(), *raw, *pretty, &ctx),
        Commands::Components { category, json } => {
            cli::registry::run_components(category.as_deref(), *json)
        }
        Commands::Links {
            style,
            payload,
            surface,
            json,
        } => cli::links::run_links(style, payload.as_deref(), surface, *json, &ctx),
        Commands::Check => cli::check::run_check(&config),
    }
}
