//! Robots.txt caching implementation
//!
//! Fetched robots.txt text is kept per origin so that validating several URLs
//! on the same site costs a single request. Only the raw text is cached; rules
//! are re-extracted for every evaluation since they depend on the agent.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Cached robots.txt text for one origin
#[derive(Debug, Clone)]
pub struct CachedRobots {
    /// The raw robots.txt content
    pub content: String,

    /// When the robots.txt was fetched
    pub fetched_at: DateTime<Utc>,
}

impl CachedRobots {
    /// Creates a new CachedRobots stamped with the current time
    pub fn new(content: String) -> Self {
        Self {
            content,
            fetched_at: Utc::now(),
        }
    }

    /// Checks if the cached robots.txt is older than 24 hours
    pub fn is_stale(&self) -> bool {
        self.age() > Duration::hours(24)
    }

    /// Returns the age of the cached robots.txt
    pub fn age(&self) -> Duration {
        Utc::now() - self.fetched_at
    }
}

/// Origin-keyed robots.txt cache
///
/// Keys are origins as produced by [`crate::url::origin_key`]
/// (e.g., "https://example.com").
#[derive(Debug, Default)]
pub struct RobotsCache {
    entries: HashMap<String, CachedRobots>,
}

impl RobotsCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached content for `origin`, unless missing or stale
    pub fn get(&self, origin: &str) -> Option<&str> {
        self.entries
            .get(origin)
            .filter(|cached| !cached.is_stale())
            .map(|cached| cached.content.as_str())
    }

    /// Stores freshly fetched content for `origin`
    pub fn insert(&mut self, origin: impl Into<String>, content: String) {
        self.entries.insert(origin.into(), CachedRobots::new(content));
    }

    /// Number of cached origins (stale entries included)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
