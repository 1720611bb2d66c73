//! "Create X and attach it to the current form" state machine.
//!
//! ```text
//!            submit (invalid / duplicate)
//!   Idle ───────────────────────────────────────────► Error
//!    │  ▲                                               │
//!    │  └──── tick() after success window ◄── Success   │ submit
//!    │ submit (valid)                           ▲       ▼
//!    └──────────────► Submitting ───── ok ──────┘    (re-validate)
//!                         │
//!                         └──── err ──────────────► Error
//! ```
//!
//! Shared by tag, category and newsletter forms. `submit` takes `&mut self`
//! for the whole network call, so one flow never has two submissions in
//! flight.

use std::marker::PhantomData;
use std::time::{Duration, Instant};

use super::api::{ApiError, Category, SiteApi, Subscription, Tag};
use super::validate::{contains_name, is_valid_email};
use crate::{debug, log};

/// How long the success state stays visible.
pub const DEFAULT_SUCCESS_WINDOW: Duration = Duration::from_secs(3);

/// UI state of one form instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Submitting,
    Success { at: Instant },
    Error { message: String },
}

impl FlowState {
    /// Inline error text, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Result of one `submit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<E> {
    /// Created; `refetch` asks the owner to reload its list.
    Created { entity: E, refetch: bool },
    /// Rejected locally; no network call was made.
    Rejected,
    /// The create call failed.
    Failed,
}

/// Per-entity rules for a create flow.
#[allow(async_fn_in_trait)]
pub trait CreateKind {
    type Entity: Clone;

    /// Lowercase noun for logs (`"tag"`).
    const LABEL: &'static str;
    const EMPTY_MESSAGE: &'static str;
    const DUPLICATE_MESSAGE: &'static str;
    /// Shown when the server gives no message of its own.
    const FAILURE_MESSAGE: &'static str;
    const REFETCH_ON_SUCCESS: bool;

    /// Check trimmed, non-empty input. Emptiness is checked by the flow.
    fn validate(_input: &str) -> Result<(), &'static str> {
        Ok(())
    }

    /// Name used for duplicate detection.
    fn name(entity: &Self::Entity) -> &str;

    async fn create<A: SiteApi>(api: &A, input: &str) -> Result<Self::Entity, ApiError>;
}

pub struct TagKind;

impl CreateKind for TagKind {
    type Entity = Tag;

    const LABEL: &'static str = "tag";
    const EMPTY_MESSAGE: &'static str = "Please enter a tag name";
    const DUPLICATE_MESSAGE: &'static str = "Tag already exists";
    const FAILURE_MESSAGE: &'static str = "Failed to create tag";
    const REFETCH_ON_SUCCESS: bool = false;

    fn name(entity: &Tag) -> &str {
        &entity.name
    }

    async fn create<A: SiteApi>(api: &A, input: &str) -> Result<Tag, ApiError> {
        api.create_tag(input).await
    }
}

pub struct CategoryKind;

impl CreateKind for CategoryKind {
    type Entity = Category;

    const LABEL: &'static str = "category";
    const EMPTY_MESSAGE: &'static str = "Please enter a category name";
    const DUPLICATE_MESSAGE: &'static str = "Category already exists";
    const FAILURE_MESSAGE: &'static str = "Failed to create category";
    const REFETCH_ON_SUCCESS: bool = true;

    fn name(entity: &Category) -> &str {
        &entity.name
    }

    async fn create<A: SiteApi>(api: &A, input: &str) -> Result<Category, ApiError> {
        api.create_category(input).await
    }
}

pub struct NewsletterKind;

impl CreateKind for NewsletterKind {
    type Entity = Subscription;

    const LABEL: &'static str = "subscription";
    const EMPTY_MESSAGE: &'static str = "Please enter your email address";
    const DUPLICATE_MESSAGE: &'static str = "This email is already subscribed";
    const FAILURE_MESSAGE: &'static str = "Failed to subscribe. Please try again.";
    const REFETCH_ON_SUCCESS: bool = false;

    fn validate(input: &str) -> Result<(), &'static str> {
        if is_valid_email(input) {
            Ok(())
        } else {
            Err("Please enter a valid email address")
        }
    }

    fn name(entity: &Subscription) -> &str {
        &entity.email
    }

    async fn create<A: SiteApi>(api: &A, input: &str) -> Result<Subscription, ApiError> {
        api.subscribe_newsletter(input).await
    }
}

/// One form instance.
pub struct CreateFlow<K: CreateKind> {
    input: String,
    state: FlowState,
    /// Names of the list already loaded on the page.
    known: Vec<String>,
    /// Entities created here and attached to the owning form.
    selected: Vec<K::Entity>,
    success_window: Duration,
    _kind: PhantomData<K>,
}

impl<K: CreateKind> CreateFlow<K> {
    /// New flow aware of the names already loaded locally.
    pub fn new<I, S>(known: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: String::new(),
            state: FlowState::Idle,
            known: known.into_iter().map(Into::into).collect(),
            selected: Vec::new(),
            success_window: DEFAULT_SUCCESS_WINDOW,
            _kind: PhantomData,
        }
    }

    pub fn with_success_window(mut self, window: Duration) -> Self {
        self.success_window = window;
        self
    }

    pub fn success_window(&self) -> Duration {
        self.success_window
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn selected(&self) -> &[K::Entity] {
        &self.selected
    }

    /// Replace the locally known names (after the owner refetched its list).
    pub fn set_known<I, S>(&mut self, known: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known = known.into_iter().map(Into::into).collect();
    }

    /// Advance time-based transitions: success returns to idle once its
    /// display window has elapsed. Errors stay until the next submit.
    pub fn tick(&mut self, now: Instant) {
        if let FlowState::Success { at } = self.state
            && now.saturating_duration_since(at) >= self.success_window
        {
            self.state = FlowState::Idle;
        }
    }

    /// Wait out the success window, then return to idle. Returns at once
    /// in any other state.
    pub async fn settle(&mut self) {
        if let FlowState::Success { at } = self.state {
            tokio::time::sleep_until((at + self.success_window).into()).await;
            self.tick(Instant::now());
        }
    }

    /// Validate locally, then issue exactly one create call.
    pub async fn submit<A: SiteApi>(&mut self, api: &A) -> SubmitOutcome<K::Entity> {
        let value = self.input.trim().to_string();

        if let Err(message) = self.check_local(&value) {
            debug!("forms"; "{} rejected locally: {}", K::LABEL, message);
            self.state = FlowState::Error {
                message: message.to_string(),
            };
            return SubmitOutcome::Rejected;
        }

        self.state = FlowState::Submitting;
        debug!("forms"; "creating {} `{}`", K::LABEL, value);

        match K::create(api, &value).await {
            Ok(entity) => {
                self.input.clear();
                self.known.push(K::name(&entity).to_string());
                self.selected.push(entity.clone());
                self.state = FlowState::Success { at: Instant::now() };
                SubmitOutcome::Created {
                    entity,
                    refetch: K::REFETCH_ON_SUCCESS,
                }
            }
            Err(err) => {
                log!("forms"; "failed to create {}: {}", K::LABEL, err);
                self.state = FlowState::Error {
                    message: err.user_message(K::FAILURE_MESSAGE),
                };
                SubmitOutcome::Failed
            }
        }
    }

    /// Empty, kind-specific and duplicate checks, in that order.
    ///
    /// The duplicate check only sees the locally loaded list; the server
    /// remains authoritative.
    fn check_local(&self, value: &str) -> Result<(), &'static str> {
        if value.is_empty() {
            return Err(K::EMPTY_MESSAGE);
        }
        K::validate(value)?;
        if contains_name(self.known.iter().map(String::as_str), value) {
            return Err(K::DUPLICATE_MESSAGE);
        }
        Ok(())
    }
}

pub type TagFlow = CreateFlow<TagKind>;
pub type CategoryFlow = CreateFlow<CategoryKind>;
pub type NewsletterFlow = CreateFlow<NewsletterKind>;
