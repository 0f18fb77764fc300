use crate::cache::LruCache;
use crate::errors::FingerprintError;
use crate::fingerprint::injector::{BrowserEngine, FingerprintInjector};
use reqwest::header::HeaderMap;
use std::sync::Mutex;
use url::Url;

// * Derives the per-host session key for a target URL: the lowercased host,
// * no scheme or port. Every request to one host shares one identity.
pub fn session_key(target: &str) -> Option<String> {
    let url = Url::parse(target).ok()?;
    url.host_str().map(|host| host.to_lowercase())
}

// * Pins one computed header map per session key.
// *
// * First request under a key computes the merged headers via the injector
// * and stores them; every later request under that key replays the stored
// * map untouched, so a session never contradicts itself. The LRU bound
// * keeps memory flat under arbitrarily long crawls.
// *
// * The cache is the only shared mutable state in the core; a single Mutex
// * serializes get/set so recency order and eviction stay consistent.
#[derive(Debug)]
pub struct SessionHeaderCache {
    injector: FingerprintInjector,
    cache: Mutex<LruCache<HeaderMap>>,
}

impl SessionHeaderCache {
    pub fn new(injector: FingerprintInjector, capacity: usize) -> Result<Self, FingerprintError> {
        Ok(Self {
            injector,
            cache: Mutex::new(LruCache::new(capacity)?),
        })
    }

    // * Returns the session's pinned header map, computing it on first use.
    pub fn headers_for(
        &self,
        key: &str,
        existing: &HeaderMap,
        engine: BrowserEngine,
    ) -> HeaderMap {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(headers) = cache.get(key) {
            return headers.clone();
        }

        tracing::debug!(key = %key, engine = %engine, "Session identity miss, computing headers");
        let headers = self.injector.compute_headers(existing, engine);
        cache.set(key, headers.clone());
        headers
    }

    // * Drops a session's pinned identity, e.g. after the crawl layer
    // * attributes a ban to fingerprint detection and wants a fresh one.
    pub fn invalidate(&self, key: &str) -> bool {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.delete(key).is_some()
    }

    pub fn len(&self) -> usize {
        let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
