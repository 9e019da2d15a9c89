//! The top-level `Catalog` entity, wiring the header parser, pair index,
//! active search strategy, cache, and (optionally) statistics together
//! behind the `open_*` / `translate*` surface.

use std::fs;
use std::path::Path;

use crate::binary::{build_pairs, Header, StringPair};
use crate::cache::Cache;
use crate::error::{error_string, CatalogError, Result};
use crate::logger;
use crate::search::{ActiveStrategy, Strategy};
#[cfg(feature = "stats")]
use crate::stats::{Stats, StatsSnapshot};

/// Context/plural key scratch buffer size.
const SCRATCH_CAP: usize = 4096;
/// Context separator, gettext's `\004` (EOT) convention.
const CONTEXT_SEPARATOR: u8 = 0x04;

/// A loaded, immutable `.mo` translation catalog.
///
/// Owns the raw file bytes plus every structure derived from them. Built
/// once by [`Catalog::open_file`] or [`Catalog::open_memory`]; queried any
/// number of times thereafter through `translate*`. Dropping the catalog
/// releases the buffer and all derived tables together.
pub struct Catalog {
    buffer: Vec<u8>,
    pairs: Vec<StringPair>,
    index: ActiveStrategy,
    cache: Cache,
    #[cfg(feature = "stats")]
    stats: Stats,
}

impl Catalog {
    /// Read an entire `.mo` file into memory and build a catalog from it.
    pub fn open_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                CatalogError::FileNotFound(path.display().to_string())
            } else {
                CatalogError::Io(err.to_string())
            }
        });
        let bytes = match bytes {
            Ok(bytes) => bytes,
            Err(err) => {
                logger::log_error(&format!("open_file({}): {}", path.display(), error_string(&err)));
                return Err(err);
            }
        };
        Self::open_memory(bytes)
    }

    /// Build a catalog from an already-loaded `.mo` buffer, taking
    /// ownership of it (no extra copy).
    pub fn open_memory(buffer: Vec<u8>) -> Result<Self> {
        let header = match Header::parse(&buffer) {
            Ok(header) => header,
            Err(err) => {
                // Diagnostic side channel only: the error is still
                // returned unchanged to the caller.
                logger::log_error(&format!("open_memory: {}", error_string(&err)));
                return Err(err);
            }
        };
        let pairs = build_pairs(&header, &buffer);
        let index = ActiveStrategy::build(&pairs, &buffer);

        Ok(Catalog {
            buffer,
            pairs,
            index,
            cache: Cache::new(),
            #[cfg(feature = "stats")]
            stats: Stats::new(),
        })
    }

    #[inline]
    fn slice(&self, offset: usize, len: usize) -> &[u8] {
        &self.buffer[offset..offset + len]
    }

    /// Number of string pairs loaded.
    pub fn string_count(&self) -> u32 {
        self.pairs.len() as u32
    }

    /// Name of the compiled-in search strategy: `"LINEAR"`, `"BINARY"`, or
    /// `"HASH"`.
    pub fn search_method(&self) -> &'static str {
        ActiveStrategy::name()
    }

    /// Every loaded original string, in on-disk order. Mainly useful for
    /// tooling (the `mocat stats` CLI subcommand sweeps these once to
    /// populate a representative counter snapshot).
    pub fn originals(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.pairs.iter().map(move |pair| pair.original(&self.buffer))
    }

    #[cfg(feature = "stats")]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Equivalent to `translate_n(s, s.len())`; kept as a separate method
    /// since the C ABI needs an explicit-length entry point (`s` there may
    /// not carry its own length the way a Rust slice does) alongside this
    /// convenience wrapper.
    pub fn translate<'a>(&'a self, s: &'a [u8]) -> &'a [u8] {
        self.translate_n(s)
    }

    /// The primitive lookup: cache, then the active search strategy, else
    /// pass the query straight through unchanged. Lookup never fails; a
    /// miss returns the caller's own input.
    pub fn translate_n<'a>(&'a self, s: &'a [u8]) -> &'a [u8] {
        #[cfg(feature = "stats")]
        self.stats.record_lookup();

        let key = ActiveStrategy::cache_key(s);
        if let Some((offset, len)) = self.cache.get(key) {
            #[cfg(feature = "stats")]
            self.stats.record_cache_hit();
            return self.slice(offset, len);
        }
        #[cfg(feature = "stats")]
        self.stats.record_cache_miss();

        let outcome = self.index.find(&self.pairs, &self.buffer, s);
        #[cfg(feature = "stats")]
        {
            self.stats.record_comparisons(outcome.comparisons);
            self.stats.record_hash_collisions(outcome.hash_collisions);
        }

        match outcome.index {
            Some(i) => {
                let pair = self.pairs[i];
                self.cache.put(key, pair.trans_offset, pair.trans_len);
                self.slice(pair.trans_offset, pair.trans_len)
            }
            None => s,
        }
    }

    /// Context and plural-qualified lookup.
    ///
    /// `n != 1` selects `plural` over `singular` when a plural form is
    /// supplied. This is a simplified English-style plural rule; gettext's
    /// full `Plural-Forms:` expression language is not evaluated.
    pub fn translate_cp<'a>(
        &'a self,
        ctx: Option<&'a [u8]>,
        singular: &'a [u8],
        plural: Option<&'a [u8]>,
        n: u64,
    ) -> &'a [u8] {
        let message = match plural {
            Some(plural) if n != 1 => plural,
            _ => singular,
        };
        self.translate_with_context(ctx, message)
    }

    fn translate_with_context<'a>(&'a self, ctx: Option<&'a [u8]>, message: &'a [u8]) -> &'a [u8] {
        let Some(ctx) = ctx else {
            return self.translate_n(message);
        };

        let needed = ctx.len() + 1 + message.len();
        if needed > SCRATCH_CAP {
            // Overflow: fall back to the bare message, unchanged.
            logger::log_warn("translate_cp: context+message exceeds scratch capacity, falling back to bare message");
            return message;
        }

        let mut scratch = [0u8; SCRATCH_CAP];
        scratch[..ctx.len()].copy_from_slice(ctx);
        scratch[ctx.len()] = CONTEXT_SEPARATOR;
        scratch[ctx.len() + 1..needed].copy_from_slice(message);

        // Deliberately bypasses the cache. This scratch buffer lives at
        // the same stack slot on every call, so a pointer-identity cache
        // key here could return a stale hit for an unrelated (ctx,
        // message) pair; `find_uncached` returns a plain `Option` instead
        // of relying on a pointer-equality "not found" check.
        match self.find_uncached(&scratch[..needed]) {
            Some(found) => found,
            None => self.translate_n(message),
        }
    }

    /// Search without touching the cache. Used for the synthesized
    /// context+plural key, whose backing storage is not a stable,
    /// caller-owned pointer the way a direct `translate_n` argument is.
    fn find_uncached(&self, query: &[u8]) -> Option<&[u8]> {
        #[cfg(feature = "stats")]
        self.stats.record_lookup();

        let outcome = self.index.find(&self.pairs, &self.buffer, query);
        #[cfg(feature = "stats")]
        {
            self.stats.record_comparisons(outcome.comparisons);
            self.stats.record_hash_collisions(outcome.hash_collisions);
        }

        outcome.index.map(|i| {
            let pair = self.pairs[i];
            self.slice(pair.trans_offset, pair.trans_len)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::header::tests::build_fixture;

    fn sample_catalog() -> Catalog {
        let buf = build_fixture(&[
            ("Open", "Ouvrir"),
            ("Close", "Fermer"),
            ("%d file", "%d fichier"),
            ("%d files", "%d fichiers"),
            ("menu\u{0004}Open", "Ouvrir le menu"),
        ]);
        Catalog::open_memory(buf).unwrap()
    }

    #[test]
    fn translates_known_original() {
        let cat = sample_catalog();
        assert_eq!(cat.translate(b"Open"), b"Ouvrir");
    }

    #[test]
    fn miss_returns_exact_input_pointer() {
        let cat = sample_catalog();
        let query = b"Welcome";
        let result = cat.translate(query);
        assert_eq!(result.as_ptr(), query.as_ptr());
    }

    #[test]
    fn context_qualified_lookup_hits_directly() {
        let cat = sample_catalog();
        let result = cat.translate_cp(Some(b"menu"), b"Open", None, 1);
        assert_eq!(result, b"Ouvrir le menu");
    }

    #[test]
    fn context_miss_falls_back_to_bare_singular() {
        let cat = sample_catalog();
        let result = cat.translate_cp(Some(b"nonexistent"), b"Open", None, 1);
        assert_eq!(result, b"Ouvrir");
    }

    #[test]
    fn plural_rule_switches_on_n() {
        let cat = sample_catalog();
        assert_eq!(
            cat.translate_cp(None, b"%d file", Some(b"%d files"), 5),
            b"%d fichiers"
        );
        assert_eq!(
            cat.translate_cp(None, b"%d file", Some(b"%d files"), 1),
            b"%d fichier"
        );
    }

    #[test]
    fn repeated_literal_queries_hit_cache() {
        let cat = sample_catalog();
        let literal: &'static [u8] = b"Open";
        for _ in 0..10_000 {
            assert_eq!(cat.translate(literal), b"Ouvrir");
        }
        #[cfg(feature = "stats")]
        {
            let snap = cat.stats();
            assert_eq!(snap.cache_hits, 9_999);
            assert_eq!(snap.cache_misses, 1);
        }
    }

    #[test]
    fn string_count_and_search_method_are_exposed() {
        let cat = sample_catalog();
        assert_eq!(cat.string_count(), 5);
        assert!(["LINEAR", "BINARY", "HASH"].contains(&cat.search_method()));
    }

    #[test]
    fn rejects_malformed_buffer() {
        let err = Catalog::open_memory(vec![0u8; 4]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidFormat(_)));
    }

    #[test]
    fn failed_open_logs_a_diagnostic_without_changing_the_returned_error() {
        use crate::logger::{enable_logging, set_log_callback, Level};
        use std::sync::Mutex;

        static LOCK: Mutex<()> = Mutex::new(());
        static SEEN: Mutex<Vec<String>> = Mutex::new(Vec::new());

        fn record(level: Level, msg: &str) {
            assert_eq!(level, Level::Error);
            SEEN.lock().unwrap().push(msg.to_string());
        }

        let _guard = LOCK.lock().unwrap();
        SEEN.lock().unwrap().clear();
        set_log_callback(record);
        enable_logging(true);

        let err = Catalog::open_memory(vec![0u8; 4]).unwrap_err();

        enable_logging(false);
        assert!(matches!(err, CatalogError::InvalidFormat(_)));
        assert_eq!(SEEN.lock().unwrap().len(), 1);
    }
}
