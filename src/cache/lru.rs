use crate::errors::FingerprintError;
use indexmap::IndexMap;

// * Fixed-capacity key -> value store with least-recently-used eviction.
// * Pins one fingerprint (or resolved header map) per session/domain key so
// * memory stays bounded under arbitrarily long crawls.
// *
// * Backing store is an IndexMap kept in recency order: index 0 is the
// * least recently used entry, the last index the most recently used.
// * "Use" means any `get` hit or any `set`; ties resolve by operation order.
// *
// * Not internally synchronized. Callers sharing one cache across tasks
// * serialize access behind a single lock (see fingerprint::session); every
// * call mutates atomically, so a cancelled caller never leaves partial state.
#[derive(Debug)]
pub struct LruCache<T> {
    entries: IndexMap<String, T>,
    max_length: usize,
}

impl<T> LruCache<T> {
    // * Capacity 0 would evict every insertion immediately; reject it
    // * outright instead of silently clamping.
    pub fn new(max_length: usize) -> Result<Self, FingerprintError> {
        if max_length == 0 {
            return Err(FingerprintError::InvalidConfiguration(max_length));
        }
        Ok(Self {
            entries: IndexMap::new(),
            max_length,
        })
    }

    // * Retrieves an entry and marks it most recently used.
    // * A miss returns None: the designed "must generate" signal, not a fault.
    pub fn get(&mut self, key: &str) -> Option<&T> {
        let idx = self.entries.get_index_of(key)?;
        let last = self.entries.len() - 1;
        self.entries.move_index(idx, last);
        self.entries.get(key)
    }

    // * Inserts or overwrites an entry; the key becomes most recently used.
    // * Overwriting replaces the value, never merges. If the insertion pushes
    // * the map past capacity, exactly one entry is evicted: the least
    // * recently used one. Returns the evicted key, if any.
    pub fn set(&mut self, key: impl Into<String>, value: T) -> Option<String> {
        let key = key.into();
        if self.entries.insert(key.clone(), value).is_some() {
            // * Existing keys keep their slot on insert; promote explicitly.
            let idx = self
                .entries
                .get_index_of(key.as_str())
                .unwrap_or_else(|| unreachable!("key inserted above"));
            let last = self.entries.len() - 1;
            self.entries.move_index(idx, last);
        }

        if self.entries.len() > self.max_length {
            let (evicted, _) = self
                .entries
                .shift_remove_index(0)
                .unwrap_or_else(|| unreachable!("len > max_length >= 1"));
            tracing::debug!(key = %evicted, "LRU cache evicted least recently used entry");
            return Some(evicted);
        }
        None
    }

    // * Unconditional removal; safe to call for absent keys.
    pub fn delete(&mut self, key: &str) -> Option<T> {
        self.entries.shift_remove(key)
    }

    // * Non-promoting read, for callers that must not disturb recency.
    pub fn peek(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_length
    }

    // * Diagnostics iteration in recency order: LRU first, MRU last.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
