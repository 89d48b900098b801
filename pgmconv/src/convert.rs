//! Conversion orchestration
//!
//! Sequences one full conversion: read the input image, derive the
//! output header, then stream output samples straight from a
//! [`Sampler`] into the codec. No output buffer is ever allocated.

use log::debug;
use pgmconv_core::{Encoding, RasterHeader};
use pgmconv_io::{CodecError, read_pgm, write_pgm};
use pgmconv_transform::{Sampler, ScaleFactor, TransformError};
use std::io::{BufRead, Write};
use thiserror::Error;

/// Widest output image accepted.
pub const MAX_OUTPUT_WIDTH: u32 = 1920;
/// Tallest output image accepted.
pub const MAX_OUTPUT_HEIGHT: u32 = 1080;

/// Errors that can occur during a conversion
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Codec error while reading or writing
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Scale descriptor error
    #[error("scale error: {0}")]
    Transform(#[from] TransformError),

    /// Derived output dimensions exceed the output bound
    #[error("output dimensions {width}x{height} exceed {MAX_OUTPUT_WIDTH}x{MAX_OUTPUT_HEIGHT}")]
    OutputTooLarge { width: u32, height: u32 },
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// The transform a conversion applies between input and output.
///
/// Scale variants carry the unparsed descriptor string; it is parsed
/// only after the input image has been read, so a corrupted input is
/// reported ahead of a malformed descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformKind {
    /// Copy samples through unchanged
    Identity,
    /// Transpose rows and columns
    Reflect,
    /// Rotate a quarter turn clockwise
    Rotate90,
    /// Nearest-neighbor scaling by the given descriptor
    ScaleNearest(String),
    /// Bilinear scaling by the given descriptor; factors below 1
    /// select block-average downsampling
    ScaleBilinear(String),
}

/// A fully resolved conversion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSpec {
    /// Encoding the input file must have, or `None` to accept either
    pub input: Option<Encoding>,
    /// Encoding to write, or `None` to inherit the input's
    pub output: Option<Encoding>,
    /// Transform to apply
    pub transform: TransformKind,
}

/// Run one conversion from `reader` to `writer`.
///
/// Strictly ordered: read and validate the input, build the sampler
/// (parsing the scale descriptor if any), derive and bound-check the
/// output dimensions, then write. Nothing is written before header
/// derivation succeeds.
///
/// # Errors
///
/// * [`ConvertError::Codec`] - unreadable input or a write failure
/// * [`ConvertError::Transform`] - bad scale descriptor
/// * [`ConvertError::OutputTooLarge`] - output would exceed
///   [`MAX_OUTPUT_WIDTH`]x[`MAX_OUTPUT_HEIGHT`]
pub fn convert<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    spec: &ConversionSpec,
) -> ConvertResult<()> {
    let src = read_pgm(reader, spec.input)?;
    debug!(
        "read {} {}x{} image, maxval {}",
        src.encoding().tag(),
        src.width(),
        src.height(),
        src.maxval()
    );

    let sampler = build_sampler(&spec.transform)?;
    let (out_width, out_height) = sampler.output_size(&src);
    if out_width > MAX_OUTPUT_WIDTH || out_height > MAX_OUTPUT_HEIGHT {
        return Err(ConvertError::OutputTooLarge {
            width: out_width,
            height: out_height,
        });
    }

    let header = RasterHeader {
        encoding: spec.output.unwrap_or(src.encoding()),
        width: out_width,
        height: out_height,
        maxval: src.maxval(),
    };
    debug!(
        "writing {} {}x{} image",
        header.encoding.tag(),
        header.width,
        header.height
    );

    write_pgm(writer, &header, |row, col| sampler.sample(&src, row, col))?;
    Ok(())
}

/// Resolve a transform into a sampler, parsing any scale descriptor.
///
/// Bilinear requests dispatch on factor magnitude: both factors at
/// least 1 upsample, otherwise the box filter downsamples. Mixed
/// directions are rejected by the parser and never reach the dispatch.
fn build_sampler(transform: &TransformKind) -> Result<Sampler, TransformError> {
    Ok(match transform {
        TransformKind::Identity => Sampler::Identity,
        TransformKind::Reflect => Sampler::Reflect,
        TransformKind::Rotate90 => Sampler::Rotate90,
        TransformKind::ScaleNearest(descriptor) => {
            Sampler::ScaleNearest(ScaleFactor::parse(descriptor)?)
        }
        TransformKind::ScaleBilinear(descriptor) => {
            let factor = ScaleFactor::parse(descriptor)?;
            if factor.w >= 1.0 && factor.h >= 1.0 {
                Sampler::ScaleBilinearUp(factor)
            } else {
                Sampler::ScaleBoxDown(factor)
            }
        }
    })
}
