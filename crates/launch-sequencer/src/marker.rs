//! Browser-local welcome marker

use dashmap::DashMap;
use site_config::keys::{self, WELCOME_SEEN_KEY};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Browser-local key/value storage
pub trait MarkerStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);
}

/// In-memory storage for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct InMemoryMarkerStore {
    values: DashMap<String, String>,
    writes: AtomicUsize,
}

impl InMemoryMarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl MarkerStore for InMemoryMarkerStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).map(|value| value.clone())
    }

    fn set(&self, key: &str, value: &str) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.remove(key);
    }
}

/// The "welcome ritual seen" flag
///
/// Moves from unset to set at most once unless explicitly reset.
#[derive(Clone)]
pub struct WelcomeMarker {
    store: Arc<dyn MarkerStore>,
}

impl WelcomeMarker {
    pub fn new(store: Arc<dyn MarkerStore>) -> Self {
        Self { store }
    }

    pub fn is_set(&self) -> bool {
        self.store
            .get(WELCOME_SEEN_KEY)
            .and_then(|value| keys::parse_flag(&value))
            .unwrap_or(false)
    }

    /// Set the marker; returns whether this call changed it
    pub fn mark(&self) -> bool {
        if self.is_set() {
            return false;
        }
        self.store.set(WELCOME_SEEN_KEY, keys::flag_value(true));
        true
    }

    pub fn reset(&self) {
        self.store.remove(WELCOME_SEEN_KEY);
    }
}
