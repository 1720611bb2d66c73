//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sitecraft.toml`:
//!
//! | Module    | TOML Section | Purpose                               |
//! |-----------|--------------|---------------------------------------|
//! | `site`    | `[site]`     | Tenant slug                           |
//! | `routing` | `[routing]`  | Href policy on inert surfaces         |
//! | `theme`   | `[theme]`    | Colors injected into default data     |
//! | `forms`   | `[forms]`    | Create-flow timing                    |

mod forms;
mod routing;
mod site;
mod theme;

pub use forms::FormsConfig;
pub use routing::RoutingConfig;
pub use site::SiteSectionConfig;
pub use theme::ThemeConfig;
