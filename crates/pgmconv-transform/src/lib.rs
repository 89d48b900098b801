//! pgmconv-transform - geometric transforms for the pgmconv
//! conversion engine
//!
//! Provides scale descriptor parsing ([`ScaleFactor`]) and per-pixel
//! output sampling ([`Sampler`]) over an in-memory source raster.

mod error;
mod sampler;
mod scale;

pub use error::{TransformError, TransformResult};
pub use sampler::Sampler;
pub use scale::{ScaleDirection, ScaleFactor};
