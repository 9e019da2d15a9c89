//! Error types for the mocat catalog engine.

use std::fmt;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors a catalog load can fail with.
///
/// Lookup operations never fail: a missing translation is reported by
/// returning the caller's own input, not by an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A null or otherwise malformed argument was passed.
    InvalidArgs,

    /// The path given to `open_file` could not be opened.
    FileNotFound(String),

    /// A read returned fewer bytes than the file's metadata promised, or
    /// some other I/O failure occurred.
    Io(String),

    /// The header magic was unrecognized, or an offset/length escaped the
    /// buffer.
    InvalidFormat(String),

    /// An internal allocation failed.
    Memory,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::InvalidArgs => write!(f, "invalid argument"),
            CatalogError::FileNotFound(path) => write!(f, "file not found: {}", path),
            CatalogError::Io(msg) => write!(f, "I/O error: {}", msg),
            CatalogError::InvalidFormat(msg) => write!(f, "invalid .mo format: {}", msg),
            CatalogError::Memory => write!(f, "allocation failed"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            CatalogError::FileNotFound(err.to_string())
        } else {
            CatalogError::Io(err.to_string())
        }
    }
}

/// Stable human-readable mapping of an error kind.
///
/// Intentionally independent of `Display` so the two can diverge (this is
/// the form meant for the C API and other language-neutral callers).
pub fn error_string(err: &CatalogError) -> String {
    match err {
        CatalogError::InvalidArgs => "invalid arguments".to_string(),
        CatalogError::FileNotFound(_) => "file not found".to_string(),
        CatalogError::Io(_) => "I/O error".to_string(),
        CatalogError::InvalidFormat(_) => "invalid .mo file format".to_string(),
        CatalogError::Memory => "out of memory".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_error_string_dont_crash_on_any_variant() {
        let variants = [
            CatalogError::InvalidArgs,
            CatalogError::FileNotFound("x.mo".into()),
            CatalogError::Io("short read".into()),
            CatalogError::InvalidFormat("bad magic".into()),
            CatalogError::Memory,
        ];
        for v in &variants {
            assert!(!v.to_string().is_empty());
            assert!(!error_string(v).is_empty());
        }
    }

    #[test]
    fn io_not_found_maps_to_file_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "nope");
        let err: CatalogError = io_err.into();
        assert!(matches!(err, CatalogError::FileNotFound(_)));
    }
}
