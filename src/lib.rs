//! mocat: a fast lookup library for GNU gettext binary message catalogs
//! (`.mo` files).
//!
//! Loads an entire catalog once and answers many translation queries with
//! low latency: a parsed, validated header, an in-memory pair index, one of
//! three compile-time-selected search strategies, and a small direct-mapped
//! result cache sit in front of every lookup.
//!
//! # Quick start
//!
//! ```no_run
//! use mocat::Catalog;
//!
//! let catalog = Catalog::open_file("messages.mo")?;
//! assert_eq!(catalog.translate(b"Open"), b"Ouvrir");
//!
//! // Context-qualified and plural-aware lookup:
//! let result = catalog.translate_cp(Some(b"menu"), b"Open", None, 1);
//! let plural = catalog.translate_cp(None, b"%d file", Some(b"%d files"), 5);
//! # Ok::<(), mocat::CatalogError>(())
//! ```
//!
//! # Search strategy
//!
//! Exactly one of the `search-linear`, `search-binary`, `search-hash`
//! Cargo features must be enabled; `search-hash` is the default. This
//! mirrors the upstream C sources' build-time `SEARCH=LINEAR|BINARY|HASH`
//! switch.
//!
//! # Features
//!
//! - `stats`: lookup/cache/collision counters via [`Catalog::stats`].
//! - `capi`: the C ABI surface in [`c_api`], built with `cbindgen`.
//! - `cli` (default): the `mocat` demo binary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::needless_doctest_main)]

#[cfg(not(any(
    feature = "search-linear",
    feature = "search-binary",
    feature = "search-hash"
)))]
compile_error!(
    "exactly one of the `search-linear`, `search-binary`, or `search-hash` features must be enabled"
);

#[cfg(any(
    all(feature = "search-linear", feature = "search-binary"),
    all(feature = "search-linear", feature = "search-hash"),
    all(feature = "search-binary", feature = "search-hash"),
))]
compile_error!(
    "`search-linear`, `search-binary`, and `search-hash` are mutually exclusive: enable exactly one"
);

/// Binary `.mo` format parsing: header validation and pair-index
/// materialization.
pub mod binary;
/// Fixed 64-slot direct-mapped result cache.
pub mod cache;
/// The top-level `Catalog` type and its `open_*` / `translate*` surface.
pub mod catalog;
/// Byte-order detection and swapping.
pub mod byteorder;
/// Error types shared by every fallible entry point.
pub mod error;
/// Level-filtered diagnostic logger.
pub mod logger;
/// Pluggable search strategies (linear / binary / hash).
pub mod search;
/// Optional lookup statistics, gated by the `stats` feature.
pub mod stats;
/// UTF-8 / UTF-16 / codepoint transcoding helpers.
pub mod unicode;

#[cfg(feature = "capi")]
/// C ABI surface, built with `cbindgen` into `include/mocat/mocat.h`.
pub mod c_api;

pub use crate::catalog::Catalog;
pub use crate::error::{error_string, CatalogError, Result};

/// Library version string, taken from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_non_empty() {
        assert!(!VERSION.is_empty());
    }
}
