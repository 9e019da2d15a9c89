//! djb2 open-addressing hash search strategy.
//!
//! An empty slot terminates a probe sequence: the table is sized so that
//! never happens before every matching key has been considered, and the
//! table is built fresh in memory over the pair index at load time rather
//! than read from any on-disk hash table.

use crate::binary::StringPair;
use crate::cache::CacheKey;
use crate::search::{SearchOutcome, Strategy};

/// djb2: `h = 5381; h = h*33 + b` per byte, wrapping 32-bit arithmetic.
pub fn djb2(bytes: &[u8]) -> u32 {
    let mut h: u32 = 5381;
    for &b in bytes {
        h = h.wrapping_mul(33).wrapping_add(b as u32);
    }
    h
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    hash: u32,
    pair_index: usize,
}

/// Open-addressing table over the pair index, sized to a power of two with
/// load factor strictly below 0.75.
#[derive(Debug)]
pub struct HashIndex {
    mask: usize,
    slots: Vec<Option<Slot>>,
}

impl HashIndex {
    pub fn table_size(&self) -> usize {
        self.slots.len()
    }
}

impl Strategy for HashIndex {
    fn build(pairs: &[StringPair], buffer: &[u8]) -> Self {
        let min_size = ((pairs.len() as f64 / 0.75).ceil() as usize).max(1);
        let size = min_size.next_power_of_two();
        let mask = size - 1;
        let mut slots = vec![None; size];

        for (pair_index, pair) in pairs.iter().enumerate() {
            let hash = djb2(pair.original(buffer));
            let mut slot = (hash as usize) & mask;
            loop {
                if slots[slot].is_none() {
                    slots[slot] = Some(Slot { hash, pair_index });
                    break;
                }
                slot = (slot + 1) & mask;
            }
        }

        HashIndex { mask, slots }
    }

    fn find(&self, pairs: &[StringPair], buffer: &[u8], query: &[u8]) -> SearchOutcome {
        let hash = djb2(query);
        let mut hash_collisions = 0u64;
        let mut slot = (hash as usize) & self.mask;

        loop {
            match &self.slots[slot] {
                None => {
                    return SearchOutcome {
                        index: None,
                        comparisons: 0,
                        hash_collisions,
                    }
                }
                Some(occupied) => {
                    let pair = &pairs[occupied.pair_index];
                    if occupied.hash == hash
                        && pair.orig_len == query.len()
                        && pair.original(buffer) == query
                    {
                        return SearchOutcome {
                            index: Some(occupied.pair_index),
                            comparisons: 0,
                            hash_collisions,
                        };
                    }
                    hash_collisions += 1;
                    slot = (slot + 1) & self.mask;
                }
            }
        }
    }

    fn name() -> &'static str {
        "HASH"
    }

    fn cache_key(query: &[u8]) -> CacheKey {
        CacheKey::Hash(djb2(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::{build_pairs, header::tests::build_fixture, Header};

    #[test]
    fn djb2_matches_known_values() {
        // h = 5381; h = h*33 + b'a' = 5381*33 + 97 = 177670
        assert_eq!(djb2(b"a"), 177_670);
        assert_eq!(djb2(b""), 5381);
    }

    #[test]
    fn table_size_is_power_of_two_above_load_factor() {
        let buf = build_fixture(&[
            ("Open", "Ouvrir"),
            ("Close", "Fermer"),
            ("Save", "Enregistrer"),
            ("Cancel", "Annuler"),
            ("Delete", "Supprimer"),
        ]);
        let header = Header::parse(&buf).unwrap();
        let pairs = build_pairs(&header, &buf);
        let index = HashIndex::build(&pairs, &buf);
        assert!(index.table_size().is_power_of_two());
        assert!(index.table_size() as f64 >= pairs.len() as f64 / 0.75);
    }

    #[test]
    fn finds_exact_match_and_misses_cleanly() {
        let buf = build_fixture(&[("Open", "Ouvrir"), ("Close", "Fermer")]);
        let header = Header::parse(&buf).unwrap();
        let pairs = build_pairs(&header, &buf);
        let index = HashIndex::build(&pairs, &buf);

        let hit = index.find(&pairs, &buf, b"Open");
        assert_eq!(hit.index, Some(0));

        let miss = index.find(&pairs, &buf, b"Welcome");
        assert_eq!(miss.index, None);
    }
}
