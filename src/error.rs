//! Error types for scanning operations.
//!
//! The error surface is intentionally small: out-of-range reads yield the
//! [`NUL`](crate::NUL) sentinel and failed searches report `false`, so the
//! only fallible operations are the pattern-based ones.

use thiserror::Error;

/// Result alias for fallible scanning operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// An error from a scanning operation.
#[derive(Error, Debug)]
pub enum ScanError {
    /// A regex pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}
