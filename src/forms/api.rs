//! Owner-site admin API seam and its response types.
//!
//! The HTTP client lives outside this crate. Flows only see [`SiteApi`], so
//! tests drive them with an in-memory implementation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Identifier as returned by the API (numeric or string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(u64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: EntityId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub email: String,
    #[serde(default)]
    pub subscribed_at: Option<String>,
}

/// Failure of a create/update call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("server responded with status {status}")]
    Server {
        status: u16,
        /// Human-readable message from the error body, when it had one.
        message: Option<String>,
    },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a server error from a status and raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Server {
            status,
            message: extract_message(body),
        }
    }

    /// Message to show inline: the server's own text, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Pull a message out of the common error body shapes:
/// `{"message"}`, `{"error"}`, `{"detail"}`, `{"errors":[{"message"}]}`,
/// or `{"<field>":["..."]}`.
fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let obj = value.as_object()?;

    for key in ["message", "error", "detail"] {
        if let Some(Value::String(s)) = obj.get(key)
            && !s.trim().is_empty()
        {
            return Some(s.clone());
        }
    }

    if let Some(Value::Array(errors)) = obj.get("errors")
        && let Some(Value::String(s)) = errors.first().and_then(|e| e.get("message"))
    {
        return Some(s.clone());
    }

    // Field-keyed validation errors: take the first string in the first list
    obj.values().find_map(|v| match v {
        Value::Array(items) => items.first().and_then(Value::as_str).map(str::to_string),
        _ => None,
    })
}

/// The category list endpoint has answered with several envelopes over
/// time. Each is an explicit variant; anything else is a decode error.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoriesResponse {
    List(Vec<Category>),
    Results { results: Vec<Category> },
    Data { data: Vec<Category> },
}

impl CategoriesResponse {
    pub fn parse(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn into_categories(self) -> Vec<Category> {
        match self {
            Self::List(items) | Self::Results { results: items } | Self::Data { data: items } => {
                items
            }
        }
    }
}

/// Admin endpoints used by the create and update flows.
#[allow(async_fn_in_trait)]
pub trait SiteApi {
    async fn create_tag(&self, name: &str) -> Result<Tag, ApiError>;

    async fn create_category(&self, name: &str) -> Result<Category, ApiError>;

    async fn subscribe_newsletter(&self, email: &str) -> Result<Subscription, ApiError>;

    /// Store a new logo URL; returns the URL the server kept.
    async fn update_logo(&self, url: &str) -> Result<String, ApiError>;
}
