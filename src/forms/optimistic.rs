//! Optimistic local state with rollback.

use super::api::SiteApi;
use crate::log;

/// A committed server value plus an optional local preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optimistic<T> {
    committed: T,
    pending: Option<T>,
}

impl<T> Optimistic<T> {
    pub fn new(committed: T) -> Self {
        Self {
            committed,
            pending: None,
        }
    }

    /// Show `value` immediately, before the server confirms it.
    pub fn apply(&mut self, value: T) {
        self.pending = Some(value);
    }

    /// The server accepted the change: `value` becomes the known-good value.
    pub fn commit(&mut self, value: T) {
        self.pending = None;
        self.committed = value;
    }

    /// Drop the preview and return to the last known-good value.
    pub fn rollback(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// What the UI shows right now.
    pub fn current(&self) -> &T {
        self.pending.as_ref().unwrap_or(&self.committed)
    }

    pub fn committed(&self) -> &T {
        &self.committed
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Site logo editor.
#[derive(Debug, Clone)]
pub struct LogoEditor {
    logo: Optimistic<Option<String>>,
    error: Option<String>,
}

impl LogoEditor {
    pub const FAILURE_MESSAGE: &'static str = "Failed to update logo";

    pub fn new(current: Option<String>) -> Self {
        Self {
            logo: Optimistic::new(current),
            error: None,
        }
    }

    /// Logo URL currently previewed.
    pub fn logo(&self) -> Option<&str> {
        self.logo.current().as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Preview `url` right away, then persist it. On failure the preview
    /// reverts to the last value the server accepted.
    pub async fn update<A: SiteApi>(&mut self, api: &A, url: &str) -> bool {
        self.error = None;
        self.logo.apply(Some(url.to_string()));

        match api.update_logo(url).await {
            Ok(saved) => {
                self.logo.commit(Some(saved));
                true
            }
            Err(err) => {
                log!("forms"; "logo update failed: {}", err);
                self.logo.rollback();
                self.error = Some(err.user_message(Self::FAILURE_MESSAGE));
                false
            }
        }
    }
}
