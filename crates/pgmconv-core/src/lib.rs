//! pgmconv-core - Core data structures for the pgmconv conversion engine
//!
//! This crate provides the grayscale raster container shared by the
//! codec, the pixel samplers, and the conversion orchestrator:
//!
//! - [`Raster`] - an owned, row-major grid of integer samples
//! - [`RasterHeader`] - the four PGM header fields
//! - [`Encoding`] - the textual (`P2`) / binary (`P5`) tag
//!
//! A conversion reads the entire input raster into memory before any
//! output sample is produced; reflect, rotate, and interpolation all
//! require random access to arbitrary source coordinates.

mod error;
mod raster;

pub use error::{Error, Result};
pub use raster::{Encoding, Raster, RasterHeader};

/// Largest accepted input dimension, per axis.
pub const MAX_INPUT_DIM: u32 = 512;
