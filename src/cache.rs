//! Fixed 64-slot direct-mapped result cache.
//!
//! Slot writes happen on an otherwise-`&self` lookup path. `Cell` gives
//! interior mutability there without a lock or an allocation; collisions
//! overwrite unconditionally and there is no eviction policy.

use std::cell::Cell;

/// Number of slots in the cache. Fixed size, not configurable.
pub const CACHE_SLOTS: usize = 64;

/// Key identifying a cached query.
///
/// - Linear/binary mode: the pointer identity of the query bytes. Lookups
///   key on "same literal passed again", not byte equality, so repeated
///   calls with equal-but-distinct allocations miss.
/// - Hash mode: the djb2 hash of the query bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKey {
    Pointer(usize),
    Hash(u32),
}

impl CacheKey {
    fn slot_index(self) -> usize {
        let raw = match self {
            CacheKey::Pointer(p) => p,
            CacheKey::Hash(h) => h as usize,
        };
        raw & (CACHE_SLOTS - 1)
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    key: CacheKey,
    trans_offset: usize,
    trans_len: usize,
}

/// The cache itself: 64 optional entries, indexed by `key & 63`.
#[derive(Debug)]
pub struct Cache {
    slots: [Cell<Option<Entry>>; CACHE_SLOTS],
}

impl Default for Cache {
    fn default() -> Self {
        Cache {
            slots: [const { Cell::new(None) }; CACHE_SLOTS],
        }
    }
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `key`. Returns the cached translation offset/length on a
    /// hit, `None` on a miss (slot empty or key mismatch).
    pub fn get(&self, key: CacheKey) -> Option<(usize, usize)> {
        let entry = self.slots[key.slot_index()].get()?;
        if entry.key == key {
            Some((entry.trans_offset, entry.trans_len))
        } else {
            None
        }
    }

    /// Unconditionally overwrite the slot for `key` with a found
    /// translation. Never called on a miss: when no translation is found
    /// the slot is left untouched.
    pub fn put(&self, key: CacheKey, trans_offset: usize, trans_len: usize) {
        self.slots[key.slot_index()].set(Some(Entry {
            key,
            trans_offset,
            trans_len,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_on_empty_cache() {
        let cache = Cache::new();
        assert!(cache.get(CacheKey::Pointer(42)).is_none());
    }

    #[test]
    fn hit_after_put() {
        let cache = Cache::new();
        cache.put(CacheKey::Hash(177_670), 10, 4);
        assert_eq!(cache.get(CacheKey::Hash(177_670)), Some((10, 4)));
    }

    #[test]
    fn collision_overwrites_without_eviction_bookkeeping() {
        let cache = Cache::new();
        // Both keys map to slot 0 (hash & 63 == 0).
        cache.put(CacheKey::Hash(0), 1, 1);
        cache.put(CacheKey::Hash(64), 2, 2);
        assert_eq!(cache.get(CacheKey::Hash(64)), Some((2, 2)));
        assert_eq!(cache.get(CacheKey::Hash(0)), None);
    }

    #[test]
    fn pointer_identity_key_requires_exact_pointer_match() {
        let cache = Cache::new();
        let literal: Vec<u8> = b"Open".to_vec();
        let same_bytes_other_allocation: Vec<u8> = b"Open".to_vec();
        let a = literal.as_ptr() as usize;
        let b = same_bytes_other_allocation.as_ptr() as usize;
        assert_ne!(a, b, "two distinct heap allocations must have distinct addresses");

        cache.put(CacheKey::Pointer(a), 0, 6);
        assert_eq!(cache.get(CacheKey::Pointer(a)), Some((0, 6)));
        // Equal bytes, different pointer: a miss, by design.
        assert_eq!(cache.get(CacheKey::Pointer(b)), None);
    }
}
