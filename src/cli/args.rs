//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::CONFIG_FILE;
use crate::core::NavigationPolicy;

/// Sitecraft site-builder toolkit CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the working directory
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the tenant slug from `[site] user`
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve a link target to the href the renderer would emit
    #[command(visible_alias = "h")]
    Href {
        /// Link target as stored (`about`, `/shop`, `https://...`)
        #[arg(allow_hyphen_values = true)]
        target: String,

        #[command(flatten)]
        surface: SurfaceArgs,
    },

    /// Apply the draft suffix to hrefs, or to every link of a payload
    #[command(visible_alias = "d")]
    Draft {
        /// Hrefs to suffix
        #[arg(required_unless_present = "payload")]
        hrefs: Vec<String>,

        /// Navbar/footer payload (JSON file) to rewrite
        #[arg(short, long, requires = "style", value_hint = clap::ValueHint::FilePath)]
        payload: Option<PathBuf>,

        /// Style key of the payload (`navbar-style-3`)
        #[arg(short, long)]
        style: Option<String>,
    },

    /// Print the default data of a component
    #[command(visible_alias = "def")]
    Defaults {
        /// Component type (`hero`, `text_editor`, `navbar`)
        component: String,

        /// Variant key (`hero-2`); unknown keys fall back to the default
        variant: Option<String>,

        /// Keep the stored colors instead of the configured theme
        #[arg(long)]
        raw: bool,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List component types and their variants
    #[command(visible_alias = "ls")]
    Components {
        /// Only show one category (`layout`, `content`, ...)
        #[arg(short, long)]
        category: Option<String>,

        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Resolve every link of a navbar or footer
    #[command(visible_alias = "l")]
    Links {
        /// Style key (`navbar-style-9`, `footer-style-4`)
        style: String,

        /// Payload to read links from (defaults to the style's default data)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        payload: Option<PathBuf>,

        #[command(flatten)]
        surface: SurfaceArgs,

        /// Output JSON instead of lines
        #[arg(long)]
        json: bool,
    },

    /// Validate the config file and the component registry
    #[command(visible_alias = "c")]
    Check,
}

/// Where a link is rendered.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SurfaceArgs {
    /// Path of the page being rendered (for active-link detection)
    #[arg(long)]
    pub current: Option<String>,

    /// Render inside the owner's editor
    #[arg(short, long)]
    pub editable: bool,

    /// Render as a read-only thumbnail
    #[arg(short, long)]
    pub thumbnail: bool,

    /// Override `[routing] policy`
    #[arg(long)]
    pub policy: Option<PolicyArg>,
}

/// CLI spelling of [`NavigationPolicy`].
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    Placeholder,
    LiveHref,
}

impl From<PolicyArg> for NavigationPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Placeholder => Self::Placeholder,
            PolicyArg::LiveHref => Self::LiveHref,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sitecraft").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_href_args() {
        let cli = parse(&["-u", "acme", "href", "about", "--editable", "--policy", "live-href"]);
        assert_eq!(cli.user.as_deref(), Some("acme"));
        assert_eq!(cli.config, PathBuf::from("sitecraft.toml"));
        let Commands::Href { target, surface } = cli.command else {
            panic!("expected href");
        };
        assert_eq!(target, "about");
        assert!(surface.editable && !surface.thumbnail);
        assert_eq!(surface.policy, Some(PolicyArg::LiveHref));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["check", "-v", "-C", "site/custom.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("site/custom.toml"));
    }

    #[test]
    fn test_draft_requires_input() {
        assert!(Cli::try_parse_from(["sitecraft", "draft"]).is_err());
        assert!(Cli::try_parse_from(["sitecraft", "draft", "--payload", "nav.json"]).is_err());

        let cli = parse(&["draft", "--payload", "nav.json", "--style", "navbar-style-2"]);
        assert!(matches!(cli.command, Commands::Draft { payload: Some(_), .. }));
    }

    #[test]
    fn test_policy_conversion() {
        assert_eq!(
            NavigationPolicy::from(PolicyArg::Placeholder),
            NavigationPolicy::Placeholder
        );
        assert_eq!(
            NavigationPolicy::from(PolicyArg::LiveHref),
            NavigationPolicy::LiveHref
        );
    }
}
