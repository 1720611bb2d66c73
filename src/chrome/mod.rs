//! Page chrome: navbar and footer styles and their links.
//!
//! | Module   | Purpose                                             |
//! |----------|-----------------------------------------------------|
//! | `style`  | Closed style enums parsed from stored keys           |
//! | `layout` | Per-style link storage shape, resolution, drafting   |
//! | `social` | Footer social links with strict platform parsing     |

mod layout;
mod social;
mod style;

pub use layout::{
    ChromeError, LinkLayout, NavLink, ResolvedLink, apply_draft_links, collect_links,
    pick_link_layout, resolve_links,
};
pub use social::{SocialError, SocialLink, SocialPlatform, collect_social_links};
pub use style::{ChromeStyle, FooterStyle, NavbarStyle};
