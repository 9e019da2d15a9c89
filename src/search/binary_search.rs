//! Ordered binary-search strategy.
//!
//! Build sorts a permutation of pair indices by `(original_len,
//! lexicographic bytes)` using `rayon`'s parallel sort, so a large catalog's
//! one-time build cost scales across cores instead of running single
//! threaded.

use std::cmp::Ordering;

use rayon::slice::ParallelSliceMut;

use crate::binary::StringPair;
use crate::cache::CacheKey;
use crate::search::{SearchOutcome, Strategy};

/// A permutation of pair indices, sorted by the compound `(len, bytes)` key.
#[derive(Debug)]
pub struct BinaryIndex {
    order: Vec<usize>,
}

fn key_of<'a>(pair: &StringPair, buffer: &'a [u8]) -> (usize, &'a [u8]) {
    (pair.orig_len, pair.original(buffer))
}

fn compare_keys(a: &StringPair, b: &StringPair, buffer: &[u8]) -> Ordering {
    key_of(a, buffer).cmp(&key_of(b, buffer))
}

fn compare_to_query(pair: &StringPair, buffer: &[u8], query: &[u8]) -> Ordering {
    pair.orig_len
        .cmp(&query.len())
        .then_with(|| pair.original(buffer).cmp(query))
}

impl Strategy for BinaryIndex {
    fn build(pairs: &[StringPair], buffer: &[u8]) -> Self {
        let mut order: Vec<usize> = (0..pairs.len()).collect();
        order.par_sort_by(|&a, &b| compare_keys(&pairs[a], &pairs[b], buffer));
        BinaryIndex { order }
    }

    fn find(&self, pairs: &[StringPair], buffer: &[u8], query: &[u8]) -> SearchOutcome {
        let mut comparisons = 0u64;
        let mut lo = 0isize;
        let mut hi = self.order.len() as isize - 1;

        while lo <= hi {
            let mid = lo + (hi - lo) / 2;
            comparisons += 1;
            let idx = self.order[mid as usize];
            match compare_to_query(&pairs[idx], buffer, query) {
                Ordering::Equal => {
                    return SearchOutcome {
                        index: Some(idx),
                        comparisons,
                        hash_collisions: 0,
                    }
                }
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid - 1,
            }
        }

        SearchOutcome {
            index: None,
            comparisons,
            hash_collisions: 0,
        }
    }

    fn name() -> &'static str {
        "BINARY"
    }

    fn cache_key(query: &[u8]) -> CacheKey {
        CacheKey::Pointer(query.as_ptr() as usize)
    }
}
