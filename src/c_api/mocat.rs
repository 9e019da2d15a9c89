//! Opaque-handle C ABI functions.
//!
//! The catalog handle is an opaque `_private: [u8; 0]` struct cast to and
//! from a boxed `Catalog` pointer, with integer error codes carried through
//! an `out_error` out-parameter. Translated strings are zero-copy pointers
//! into the catalog's own buffer (MO payloads are NUL-terminated by format
//! guarantee), so there's no `mocat_free_string`.

use std::ffi::CStr;
use std::os::raw::c_char;
use std::path::Path;
use std::ptr;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::logger::enable_logging;

/// `mocat_open_file` / `mocat_open_memory` succeeded.
pub const MOCAT_SUCCESS: i32 = 0;
/// A null or otherwise malformed argument was passed.
pub const MOCAT_ERROR_INVALID_ARGS: i32 = 1;
/// The path given to `mocat_open_file` could not be opened.
pub const MOCAT_ERROR_FILE_NOT_FOUND: i32 = 2;
/// An I/O error occurred while reading the file.
pub const MOCAT_ERROR_IO: i32 = 3;
/// The header magic was unrecognized, or an offset/length escaped the buffer.
pub const MOCAT_ERROR_INVALID_FORMAT: i32 = 4;
/// An internal allocation failed.
pub const MOCAT_ERROR_MEMORY: i32 = 5;

fn error_code(err: &CatalogError) -> i32 {
    match err {
        CatalogError::InvalidArgs => MOCAT_ERROR_INVALID_ARGS,
        CatalogError::FileNotFound(_) => MOCAT_ERROR_FILE_NOT_FOUND,
        CatalogError::Io(_) => MOCAT_ERROR_IO,
        CatalogError::InvalidFormat(_) => MOCAT_ERROR_INVALID_FORMAT,
        CatalogError::Memory => MOCAT_ERROR_MEMORY,
    }
}

/// Opaque catalog handle. Callers never see the real layout.
#[repr(C)]
pub struct mocat_t {
    _private: [u8; 0],
}

fn into_handle(catalog: Catalog) -> *mut mocat_t {
    Box::into_raw(Box::new(catalog)) as *mut mocat_t
}

unsafe fn as_catalog<'a>(handle: *const mocat_t) -> Option<&'a Catalog> {
    (handle as *const Catalog).as_ref()
}

/// Open a `.mo` file from `path`. Returns `NULL` on failure and, if
/// `out_error` is non-null, writes the error code there.
///
/// # Safety
/// `path` must be a valid NUL-terminated C string. `out_error` must be
/// either null or point to valid, writable storage for one `i32`.
#[no_mangle]
pub unsafe extern "C" fn mocat_open_file(path: *const c_char, out_error: *mut i32) -> *mut mocat_t {
    if path.is_null() {
        if !out_error.is_null() {
            *out_error = MOCAT_ERROR_INVALID_ARGS;
        }
        return ptr::null_mut();
    }
    let path = match CStr::from_ptr(path).to_str() {
        Ok(p) => p,
        Err(_) => {
            if !out_error.is_null() {
                *out_error = MOCAT_ERROR_INVALID_ARGS;
            }
            return ptr::null_mut();
        }
    };
    match Catalog::open_file(Path::new(path)) {
        Ok(catalog) => {
            if !out_error.is_null() {
                *out_error = MOCAT_SUCCESS;
            }
            into_handle(catalog)
        }
        Err(err) => {
            if !out_error.is_null() {
                *out_error = error_code(&err);
            }
            ptr::null_mut()
        }
    }
}

/// Open a `.mo` catalog from an in-memory buffer of `len` bytes at `data`.
/// The bytes are copied into the catalog; the caller retains ownership of
/// `data`.
///
/// # Safety
/// `data` must point to at least `len` readable bytes, or be null only
/// when `len` is zero.
#[no_mangle]
pub unsafe extern "C" fn mocat_open_memory(
    data: *const u8,
    len: usize,
    out_error: *mut i32,
) -> *mut mocat_t {
    if data.is_null() && len != 0 {
        if !out_error.is_null() {
            *out_error = MOCAT_ERROR_INVALID_ARGS;
        }
        return ptr::null_mut();
    }
    let bytes = if len == 0 {
        Vec::new()
    } else {
        std::slice::from_raw_parts(data, len).to_vec()
    };
    match Catalog::open_memory(bytes) {
        Ok(catalog) => {
            if !out_error.is_null() {
                *out_error = MOCAT_SUCCESS;
            }
            into_handle(catalog)
        }
        Err(err) => {
            if !out_error.is_null() {
                *out_error = error_code(&err);
            }
            ptr::null_mut()
        }
    }
}

/// Close a catalog handle, releasing its buffer and derived tables.
/// Idempotent on null.
///
/// # Safety
/// `handle` must be a pointer previously returned by `mocat_open_file` or
/// `mocat_open_memory`, not already closed.
#[no_mangle]
pub unsafe extern "C" fn mocat_close(handle: *mut mocat_t) {
    if handle.is_null() {
        return;
    }
    drop(Box::from_raw(handle as *mut Catalog));
}

/// Plain lookup. Returns a pointer into the catalog's own buffer; never
/// null for a non-null, valid `handle` and `s`.
///
/// # Safety
/// `handle` must be a live handle; `s` a valid NUL-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn mocat_translate(handle: *const mocat_t, s: *const c_char) -> *const c_char {
    if handle.is_null() || s.is_null() {
        return s;
    }
    let Some(catalog) = as_catalog(handle) else {
        return s;
    };
    let bytes = CStr::from_ptr(s).to_bytes();
    catalog.translate(bytes).as_ptr() as *const c_char
}

/// Explicit-length lookup variant of `mocat_translate`.
///
/// # Safety
/// `s` must point to at least `len` readable bytes, and the `len`-byte
/// span must be immediately followed by a NUL terminator (the returned
/// pointer may point directly back into the original query when the
/// translation misses, so it's handed back as a C string).
#[no_mangle]
pub unsafe extern "C" fn mocat_translate_n(
    handle: *const mocat_t,
    s: *const c_char,
    len: usize,
) -> *const c_char {
    if handle.is_null() || s.is_null() {
        return s;
    }
    let Some(catalog) = as_catalog(handle) else {
        return s;
    };
    let bytes = std::slice::from_raw_parts(s as *const u8, len);
    catalog.translate_n(bytes).as_ptr() as *const c_char
}

/// Context and plural-qualified lookup. `ctx` and `plural` may be null.
///
/// # Safety
/// `handle` must be a live handle. `singular` must be a valid
/// NUL-terminated C string; `ctx` and `plural`, if non-null, likewise.
#[no_mangle]
pub unsafe extern "C" fn mocat_translate_cp(
    handle: *const mocat_t,
    ctx: *const c_char,
    singular: *const c_char,
    plural: *const c_char,
    n: u64,
) -> *const c_char {
    if handle.is_null() || singular.is_null() {
        return singular;
    }
    let Some(catalog) = as_catalog(handle) else {
        return singular;
    };
    let ctx = if ctx.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ctx).to_bytes())
    };
    let plural = if plural.is_null() {
        None
    } else {
        Some(CStr::from_ptr(plural).to_bytes())
    };
    let singular_bytes = CStr::from_ptr(singular).to_bytes();
    catalog.translate_cp(ctx, singular_bytes, plural, n).as_ptr() as *const c_char
}

/// Number of string pairs loaded.
///
/// # Safety
/// `handle` must be a live handle or null (returns 0).
#[no_mangle]
pub unsafe extern "C" fn mocat_string_count(handle: *const mocat_t) -> u32 {
    as_catalog(handle).map(Catalog::string_count).unwrap_or(0)
}

/// Name of the compiled-in search strategy: `"LINEAR"`, `"BINARY"`, or
/// `"HASH"`. Returns an empty string for a null handle.
///
/// The returned pointer is `'static` (it addresses a string constant, not
/// catalog-owned or heap memory), so unlike `mocat_translate*` it remains
/// valid even after the handle is closed.
///
/// # Safety
/// `handle` must be a live handle or null.
#[no_mangle]
pub unsafe extern "C" fn mocat_search_method(handle: *const mocat_t) -> *const c_char {
    match as_catalog(handle) {
        Some(catalog) => match catalog.search_method() {
            "LINEAR" => concat!("LINEAR", "\0").as_ptr() as *const c_char,
            "BINARY" => concat!("BINARY", "\0").as_ptr() as *const c_char,
            _ => concat!("HASH", "\0").as_ptr() as *const c_char,
        },
        None => concat!("\0").as_ptr() as *const c_char,
    }
}

/// Turn diagnostic logging on (`1`) or off (`0`) process-wide.
#[no_mangle]
pub extern "C" fn mocat_enable_logging(enabled: i32) {
    enable_logging(enabled != 0);
}

/// Stable human-readable message for an error code returned via an
/// `out_error` out-parameter.
///
/// Like `mocat_search_method`, the returned pointer addresses a `'static`
/// string constant, so there is nothing to free.
#[no_mangle]
pub extern "C" fn mocat_error_string(code: i32) -> *const c_char {
    // error_string() takes a live CatalogError for the Rust API; the C
    // surface only gets a bare code back, so these mirror its per-variant
    // text (see error.rs) as 'static constants instead of allocating.
    let msg: &'static str = match code {
        MOCAT_SUCCESS => "success\0",
        MOCAT_ERROR_INVALID_ARGS => "invalid arguments\0",
        MOCAT_ERROR_FILE_NOT_FOUND => "file not found\0",
        MOCAT_ERROR_IO => "I/O error\0",
        MOCAT_ERROR_INVALID_FORMAT => "invalid .mo file format\0",
        MOCAT_ERROR_MEMORY => "out of memory\0",
        _ => "unknown error\0",
    };
    msg.as_ptr() as *const c_char
}

/// Library version string, NUL-terminated.
#[no_mangle]
pub extern "C" fn mocat_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}

#[cfg(feature = "stats")]
/// Statistics snapshot mirroring `crate::stats::StatsSnapshot`, laid out
/// for C.
#[repr(C)]
pub struct mocat_stats_t {
    pub total_lookups: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub hash_collisions: u64,
    pub comparisons: u64,
}

#[cfg(feature = "stats")]
/// Fetch the current statistics snapshot into `*out`.
///
/// # Safety
/// `handle` must be a live handle; `out` must point to valid, writable
/// storage for one `mocat_stats_t`.
#[no_mangle]
pub unsafe extern "C" fn mocat_get_stats(handle: *const mocat_t, out: *mut mocat_stats_t) -> i32 {
    if handle.is_null() || out.is_null() {
        return MOCAT_ERROR_INVALID_ARGS;
    }
    let Some(catalog) = as_catalog(handle) else {
        return MOCAT_ERROR_INVALID_ARGS;
    };
    let snap = catalog.stats();
    *out = mocat_stats_t {
        total_lookups: snap.total_lookups,
        cache_hits: snap.cache_hits,
        cache_misses: snap.cache_misses,
        hash_collisions: snap.hash_collisions,
        comparisons: snap.comparisons,
    };
    MOCAT_SUCCESS
}
