//! Error types for pgmconv-core
//!
//! Provides a unified error type for raster construction and access.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height} (input must be 1x1 to 512x512)")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid maximum sample value
    #[error("invalid maximum sample value: {0}")]
    InvalidMaxval(u32),

    /// Sample value outside the declared range
    #[error("sample value {value} exceeds maximum {maxval}")]
    SampleOutOfRange { value: u32, maxval: u32 },

    /// Sample buffer length does not match the header dimensions
    #[error("sample count mismatch: expected {expected}, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    /// Unrecognized encoding tag
    #[error("unrecognized encoding tag: {0:?}")]
    UnknownTag(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
