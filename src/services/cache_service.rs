// ============================================================================
// CACHE SERVICE - In-memory response cache keyed by endpoint
// ============================================================================
// Lives for the page session only. Nothing is written to storage.
// ============================================================================

use chrono::{DateTime, Duration, Utc};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use super::endpoints::Endpoint;

#[derive(Debug, Clone)]
struct CacheEntry {
    body: Rc<str>,
    fetched_at: DateTime<Utc>,
}

/// Raw response bodies by endpoint, with a staleness window
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<Endpoint, CacheEntry>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body for `endpoint` if it was fetched less than `ttl` before `now`
    pub fn get_fresh(&self, endpoint: Endpoint, now: DateTime<Utc>, ttl: Duration) -> Option<Rc<str>> {
        let entry = self.entries.get(&endpoint)?;
        if is_fresh(entry.fetched_at, now, ttl) {
            Some(entry.body.clone())
        } else {
            None
        }
    }

    pub fn store(&mut self, endpoint: Endpoint, body: impl Into<Rc<str>>, now: DateTime<Utc>) {
        self.entries.insert(endpoint, CacheEntry { body: body.into(), fetched_at: now });
    }
}

pub fn is_fresh(fetched_at: DateTime<Utc>, now: DateTime<Utc>, ttl: Duration) -> bool {
    now.signed_duration_since(fetched_at) < ttl
}

thread_local! {
    static CACHE: RefCell<ResponseCache> = RefCell::new(ResponseCache::new());
}

/// Fresh body from the shared cache
pub fn cached_body(endpoint: Endpoint, ttl: Duration) -> Option<Rc<str>> {
    CACHE.with(|cache| cache.borrow().get_fresh(endpoint, Utc::now(), ttl))
}

pub fn store_body(endpoint: Endpoint, body: impl Into<Rc<str>>) {
    CACHE.with(|cache| cache.borrow_mut().store(endpoint, body, Utc::now()));
}
