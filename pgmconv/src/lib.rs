//! pgmconv - PGM image conversion engine
//!
//! Converts grayscale PGM images between the textual (`P2`) and binary
//! (`P5`) encodings and applies geometric transforms: reflection,
//! quarter-turn rotation, nearest-neighbor scaling, and bilinear or
//! box-filter scaling.
//!
//! # Example
//!
//! ```
//! use pgmconv::{ConversionSpec, Encoding, TransformKind, convert};
//! use std::io::Cursor;
//!
//! let spec = ConversionSpec {
//!     input: Some(Encoding::Plain),
//!     output: Some(Encoding::Raw),
//!     transform: TransformKind::Identity,
//! };
//! let input = "P2\n# demo\n2 1\n255\n10 20\n";
//! let mut output = Vec::new();
//! convert(Cursor::new(input.as_bytes()), &mut output, &spec).unwrap();
//! assert!(output.starts_with(b"P5\n"));
//! ```

mod convert;

pub use convert::{
    ConversionSpec, ConvertError, ConvertResult, MAX_OUTPUT_HEIGHT, MAX_OUTPUT_WIDTH,
    TransformKind, convert,
};

// Re-export core types (primary data structures used everywhere)
pub use pgmconv_core::*;

// Re-export engine crates as modules to avoid name conflicts
pub use pgmconv_io as io;
pub use pgmconv_transform as transform;
