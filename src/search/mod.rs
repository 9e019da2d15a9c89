//! Search strategy selection.
//!
//! Exactly one of `search-linear` / `search-binary` / `search-hash` is
//! compiled in; `lib.rs` enforces that with a `compile_error!`. Each
//! strategy implements the same [`Strategy`] trait over the shared pair
//! index, so `catalog.rs` never branches on which one is active.

pub mod binary_search;
pub mod hash;
pub mod linear;

use crate::binary::StringPair;
use crate::cache::CacheKey;

/// Result of one `find` call: the matching pair index, if any, plus the
/// work counters surfaced to `Stats`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOutcome {
    pub index: Option<usize>,
    /// Pairs examined (linear), or probe midpoints visited (binary).
    pub comparisons: u64,
    /// Occupied-but-non-matching slots probed past (hash only).
    pub hash_collisions: u64,
}

/// Common interface every search strategy implements over the pair index.
pub trait Strategy: Sized {
    /// Build whatever auxiliary structure (if any) the strategy needs from
    /// the catalog's pair index. Called once, at load time.
    fn build(pairs: &[StringPair], buffer: &[u8]) -> Self;

    /// Look up `query`'s bytes, returning the matching pair index and the
    /// work counters for this call.
    fn find(&self, pairs: &[StringPair], buffer: &[u8], query: &[u8]) -> SearchOutcome;

    /// Name exposed via `search_method()`.
    fn name() -> &'static str;

    /// Cache key for `query` under this strategy: pointer identity for
    /// linear/binary, the djb2 hash for hash mode.
    fn cache_key(query: &[u8]) -> CacheKey;
}

#[cfg(all(
    feature = "search-linear",
    not(any(feature = "search-binary", feature = "search-hash"))
))]
pub type ActiveStrategy = linear::LinearIndex;

#[cfg(all(
    feature = "search-binary",
    not(any(feature = "search-linear", feature = "search-hash"))
))]
pub type ActiveStrategy = binary_search::BinaryIndex;

#[cfg(all(
    feature = "search-hash",
    not(any(feature = "search-linear", feature = "search-binary"))
))]
pub type ActiveStrategy = hash::HashIndex;
