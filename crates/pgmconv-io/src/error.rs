//! Codec error types
//!
//! Provides a unified error type for PGM reading and writing. Every
//! structural or numeric-range violation in a header or payload is
//! reported as [`CodecError::Corrupted`] so that callers only need to
//! distinguish "bad file" from "bad stream".

use thiserror::Error;

/// Error type for PGM codec operations.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Standard I/O error (read or write failure mid-stream)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is structurally invalid, a value is out of range, or
    /// the encoding tag does not match the expected encoding
    #[error("corrupted input file: {0}")]
    Corrupted(String),
}

/// Convenience alias for codec results.
pub type CodecResult<T> = Result<T, CodecError>;
