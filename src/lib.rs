//! Sitecraft - link routing, component defaults and form flows for a
//! multi-tenant website builder.
//!
//! # Modules
//!
//! | Module     | Purpose                                                  |
//! |------------|----------------------------------------------------------|
//! | `core`     | Link classification, render modes, routing context       |
//! | `routing`  | Preview href resolution, draft suffix                    |
//! | `registry` | Component types and their default data                   |
//! | `chrome`   | Navbar/footer styles and their link layouts              |
//! | `forms`    | Create-and-attach flows, optimistic updates              |
//! | `config`   | `sitecraft.toml` and the explicit `SiteContext`          |
//! | `cli`      | Command-line front end                                   |

#[macro_use]
pub mod logger;

pub mod chrome;
pub mod cli;
pub mod config;
pub mod core;
pub mod forms;
pub mod registry;
pub mod routing;

pub use config::{SiteConfig, SiteContext};
pub use registry::{ComponentRegistry, ComponentType, get_default_data};
pub use routing::{LinkResolver, generate_link_href};
