//! Error types for pgmconv-transform

use thiserror::Error;

/// Errors that can occur while parsing a scale descriptor
#[derive(Debug, Error)]
pub enum TransformError {
    /// The descriptor matches none of the accepted grammars
    #[error("bad scale descriptor: {0:?}")]
    BadSyntax(String),

    /// One axis scales up while the other scales down
    #[error("width and height must be scaled in the same direction")]
    InconsistentDirection,

    /// A scale factor is zero, negative, or not a number
    #[error("scale factors must be positive")]
    NonPositive,
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
