//! Inline "create and attach" forms and optimistic updates.
//!
//! # Module Structure
//!
//! ```text
//! forms/
//! ├── api.rs         # SiteApi seam, entities, ApiError
//! ├── flow.rs        # CreateFlow state machine (tag, category, newsletter)
//! ├── optimistic.rs  # Optimistic<T>, LogoEditor
//! └── validate.rs    # Email shape, case-insensitive duplicate check
//! ```

mod api;
mod flow;
mod optimistic;
mod validate;

#[cfg(test)]
mod testing;

pub use api::{ApiError, CategoriesResponse, Category, EntityId, SiteApi, Subscription, Tag};
pub use flow::{
    CategoryFlow, CategoryKind, CreateFlow, CreateKind, DEFAULT_SUCCESS_WINDOW, FlowState,
    NewsletterFlow, NewsletterKind, SubmitOutcome, TagFlow, TagKind,
};
pub use optimistic::{LogoEditor, Optimistic};
pub use validate::{contains_name, is_valid_email};
