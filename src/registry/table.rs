//! Per-component default data tables.

use serde_json::Value;

/// Ordered variant key → default payload, with one designated fallback.
///
/// Stored payloads are seed data: lookups hand out clones.
#[derive(Debug, Clone)]
pub struct DefaultDataMap {
    fallback: &'static str,
    entries: Vec<(&'static str, Value)>,
}

impl DefaultDataMap {
    /// Start a table whose unknown-variant fallback is `fallback`.
    pub fn new(fallback: &'static str) -> Self {
        Self {
            fallback,
            entries: Vec::new(),
        }
    }

    /// Add a variant. Later entries with the same key replace earlier ones.
    pub fn with(mut self, key: &'static str, data: Value) -> Self {
        self.insert(key, data);
        self
    }

    pub fn insert(&mut self, key: &'static str, data: Value) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = data,
            None => self.entries.push((key, data)),
        }
    }

    #[inline]
    pub fn fallback_key(&self) -> &'static str {
        self.fallback
    }

    /// Borrow a stored template.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Borrow the template for `variant`, falling back when absent.
    ///
    /// Returns `None` only for a table whose fallback is missing, which
    /// [`DefaultDataMap::is_resolvable`] rules out at registry build time.
    pub fn get_or_fallback(&self, variant: Option<&str>) -> Option<&Value> {
        variant
            .and_then(|key| self.get(key))
            .or_else(|| self.get(self.fallback))
    }

    /// Variant keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the fallback key has an entry.
    pub fn is_resolvable(&self) -> bool {
        self.get(self.fallback).is_some()
    }
}
