//! In-memory [`SiteApi`] for flow tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::api::{ApiError, Category, EntityId, SiteApi, Subscription, Tag};

/// Answers every call successfully (sequential ids) unless built with
/// [`MemoryApi::failing`]. Counts every call it receives.
#[derive(Default)]
pub struct MemoryApi {
    calls: AtomicUsize,
    failure: Option<ApiError>,
}

impl MemoryApi {
    pub fn failing(err: ApiError) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failure: Some(err),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_id(&self) -> Result<EntityId, ApiError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(EntityId::Number(n as u64)),
        }
    }
}

impl SiteApi for MemoryApi {
    async fn create_tag(&self, name: &str) -> Result<Tag, ApiError> {
        tokio::task::yield_now().await;
        Ok(Tag {
            id: self.next_id()?,
            name: name.to_string(),
        })
    }

    async fn create_category(&self, name: &str) -> Result<Category, ApiError> {
        tokio::task::yield_now().await;
        Ok(Category {
            id: self.next_id()?,
            name: name.to_string(),
            slug: Some(name.to_lowercase().replace(' ', "-")),
        })
    }

    async fn subscribe_newsletter(&self, email: &str) -> Result<Subscription, ApiError> {
        tokio::task::yield_now().await;
        self.next_id()?;
        Ok(Subscription {
            email: email.to_string(),
            subscribed_at: None,
        })
    }

    async fn update_logo(&self, url: &str) -> Result<String, ApiError> {
        tokio::task::yield_now().await;
        self.next_id()?;
        Ok(url.to_string())
    }
}
