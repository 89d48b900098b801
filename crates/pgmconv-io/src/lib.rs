//! pgmconv-io - PGM codec for the pgmconv conversion engine
//!
//! Reads and writes the textual (`P2`) and binary (`P5`) PGM
//! encodings. Reading validates the header and payload strictly and
//! produces an in-memory [`pgmconv_core::Raster`]; writing streams
//! samples from a caller-supplied source without buffering the output
//! image.

mod error;
mod pgm;

pub use error::{CodecError, CodecResult};
pub use pgm::{read_pgm, write_pgm};
