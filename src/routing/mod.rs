//! Link routing: preview hrefs and the draft-suffix convention.
//!
//! | Module    | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `resolve` | `/preview/{siteUser}/{path}` href generation      |
//! | `draft`   | `-draft` marker for links to unpublished pages    |

mod draft;
mod resolve;

pub use draft::{apply_draft_suffix, is_draft_href, strip_draft_suffix};
pub use resolve::{LinkResolver, generate_link_href, is_active, preview_root, resolve_href};
