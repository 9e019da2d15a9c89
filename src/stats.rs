//! Optional lookup statistics, gated behind the `stats` compile-time
//! feature.

use std::cell::Cell;

/// Monotonically increasing lookup counters. Updated from `&self` call
/// sites via `Cell`, same interior-mutability shape as [`crate::cache::Cache`].
#[derive(Debug, Default)]
pub struct Stats {
    total_lookups: Cell<u64>,
    cache_hits: Cell<u64>,
    cache_misses: Cell<u64>,
    hash_collisions: Cell<u64>,
    comparisons: Cell<u64>,
}

/// Point-in-time snapshot returned by `Catalog::stats()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub total_lookups: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub hash_collisions: u64,
    pub comparisons: u64,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_lookup(&self) {
        self.total_lookups.set(self.total_lookups.get() + 1);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.set(self.cache_hits.get() + 1);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.set(self.cache_misses.get() + 1);
    }

    pub fn record_comparisons(&self, n: u64) {
        self.comparisons.set(self.comparisons.get() + n);
    }

    pub fn record_hash_collisions(&self, n: u64) {
        self.hash_collisions.set(self.hash_collisions.get() + n);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total_lookups: self.total_lookups.get(),
            cache_hits: self.cache_hits.get(),
            cache_misses: self.cache_misses.get(),
            hash_collisions: self.hash_collisions.get(),
            comparisons: self.comparisons.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let stats = Stats::new();
        stats.record_lookup();
        stats.record_lookup();
        stats.record_cache_hit();
        stats.record_comparisons(3);
        stats.record_hash_collisions(1);

        let snap = stats.snapshot();
        assert_eq!(snap.total_lookups, 2);
        assert_eq!(snap.cache_hits, 1);
        assert_eq!(snap.comparisons, 3);
        assert_eq!(snap.hash_collisions, 1);
        assert_eq!(snap.cache_misses, 0);
    }
}
