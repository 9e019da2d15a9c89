//! Linear scan search strategy.
//!
//! No build-time preprocessing; lookup walks the pair index front to back,
//! comparing length first and bytes second so a length mismatch short
//! circuits before any byte comparison.

use crate::binary::StringPair;
use crate::cache::CacheKey;
use crate::search::{SearchOutcome, Strategy};

/// Zero-sized: the pair index itself *is* the linear strategy's storage.
#[derive(Debug, Default)]
pub struct LinearIndex;

impl Strategy for LinearIndex {
    fn build(_pairs: &[StringPair], _buffer: &[u8]) -> Self {
        LinearIndex
    }

    fn find(&self, pairs: &[StringPair], buffer: &[u8], query: &[u8]) -> SearchOutcome {
        let mut comparisons = 0u64;
        for (i, pair) in pairs.iter().enumerate() {
            comparisons += 1;
            if pair.orig_len == query.len() && pair.original(buffer) == query {
                return SearchOutcome {
                    index: Some(i),
                    comparisons,
                    hash_collisions: 0,
                };
            }
        }
        SearchOutcome {
            index: None,
            comparisons,
            hash_collisions: 0,
        }
    }

    fn name() -> &'static str {
        "LINEAR"
    }

    fn cache_key(query: &[u8]) -> CacheKey {
        CacheKey::Pointer(query.as_ptr() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::{build_pairs, header::tests::build_fixture, Header};

    #[test]
    fn finds_exact_match_and_misses_cleanly() {
        let buf = build_fixture(&[("Open", "Ouvrir"), ("Close", "Fermer")]);
        let header = Header::parse(&buf).unwrap();
        let pairs = build_pairs(&header, &buf);
        let index = LinearIndex::build(&pairs, &buf);

        let hit = index.find(&pairs, &buf, b"Close");
        assert_eq!(hit.index, Some(1));
        assert!(hit.comparisons >= 2);

        let miss = index.find(&pairs, &buf, b"Welcome");
        assert_eq!(miss.index, None);
        assert_eq!(miss.comparisons, pairs.len() as u64);
    }
}
