//! C API for mocat.
//!
//! Provides a stable C FFI surface for opening `.mo` catalogs and querying
//! them from C/C++ and other FFI-capable languages. Opaque handles and
//! integer error codes keep the boundary usable from languages with no
//! concept of Rust's `Result` or ownership model.
//!
//! # Basic usage
//!
//! ```c
//! #include <mocat/mocat.h>
//!
//! mocat_t *cat = mocat_open_file("messages.mo");
//! if (cat == NULL) { /* handle error */ }
//!
//! const char *translated = mocat_translate(cat, "Open");
//! printf("%s\n", translated);
//!
//! mocat_close(cat);
//! ```
//!
//! # Memory management
//!
//! - `mocat_t *` handles: close with [`mocat::mocat_close`].
//! - Translated strings: returned as `*const c_char` pointing directly
//!   into the catalog's own owned buffer. They are never heap-allocated on
//!   the caller's behalf, so there is no matching `mocat_free_string`
//!   (the pointer is valid exactly as long as the catalog handle is open).
//!
//! # Thread safety
//!
//! A catalog handle is safe to query concurrently from multiple threads
//! only in builds without `stats` (the counters are plain `Cell`s, not
//! atomics) and are otherwise single-writer, matching the concurrency
//! contract in the crate's top-level documentation.
//!
//! # Error handling
//!
//! `mocat_open_file` / `mocat_open_memory` return `NULL` on failure; call
//! [`mocat::mocat_error_string`] with the returned error code (set through
//! an out-parameter) for a stable, human-readable message.

pub mod mocat;

pub use mocat::*;
