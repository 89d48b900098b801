//! Output-pixel sampling
//!
//! A [`Sampler`] maps one output coordinate to one sample value drawn
//! from a source [`Raster`]. Conversions never materialize the output
//! image; the codec pulls each output sample through a sampler as it
//! writes.
//!
//! Coordinates passed to [`Sampler::sample`] are output coordinates
//! and must lie inside the output dimensions reported by
//! [`Sampler::output_size`].

use crate::scale::ScaleFactor;
use pgmconv_core::Raster;

/// A pixel-sampling strategy over a source raster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sampler {
    /// Pass-through: output equals source
    Identity,
    /// Transpose rows and columns (reflection across the main diagonal)
    Reflect,
    /// Rotate a quarter turn clockwise
    Rotate90,
    /// Nearest-neighbor scaling
    ScaleNearest(ScaleFactor),
    /// Bilinear upsampling with linear border extrapolation
    ScaleBilinearUp(ScaleFactor),
    /// Block-average downsampling
    ScaleBoxDown(ScaleFactor),
}

impl Sampler {
    /// Output dimensions as `(width, height)` for a given source.
    pub fn output_size(&self, src: &Raster) -> (u32, u32) {
        match self {
            Sampler::Identity => (src.width(), src.height()),
            Sampler::Reflect | Sampler::Rotate90 => (src.height(), src.width()),
            Sampler::ScaleNearest(f)
            | Sampler::ScaleBilinearUp(f)
            | Sampler::ScaleBoxDown(f) => (
                (src.width() as f64 * f.w) as u32,
                (src.height() as f64 * f.h) as u32,
            ),
        }
    }

    /// Sample the value of output pixel `(row, col)`.
    pub fn sample(&self, src: &Raster, row: u32, col: u32) -> u32 {
        match self {
            Sampler::Identity => src.sample_unchecked(row, col),
            Sampler::Reflect => src.sample_unchecked(col, row),
            Sampler::Rotate90 => src.sample_unchecked(src.height() - 1 - col, row),
            Sampler::ScaleNearest(f) => {
                let (sr, sc, _, _) = source_coords(row, col, f);
                at(src, sr, sc) as u32
            }
            Sampler::ScaleBilinearUp(f) => bilinear_up(src, row, col, f),
            Sampler::ScaleBoxDown(f) => box_down(src, row, col, f),
        }
    }
}

/// Map an output coordinate to its source cell and the fractional
/// offsets within that cell.
fn source_coords(row: u32, col: u32, factor: &ScaleFactor) -> (i64, i64, f64, f64) {
    let rf = row as f64 / factor.h;
    let cf = col as f64 / factor.w;
    let sr = rf as i64;
    let sc = cf as i64;
    (sr, sc, rf - sr as f64, cf - sc as f64)
}

/// Source sample with zero extension: coordinates outside the image
/// read as 0.
fn at(src: &Raster, row: i64, col: i64) -> i64 {
    if row < 0 || col < 0 || row >= src.height() as i64 || col >= src.width() as i64 {
        return 0;
    }
    src.sample_unchecked(row as u32, col as u32) as i64
}

/// Extend the gradient from `outer` through `inner` one step past
/// `inner`, clamped to the 8-bit range.
fn extrapolate_linear(inner: i64, outer: i64) -> i64 {
    (inner - (outer - inner)).clamp(0, 255)
}

fn lerp(t: f64, v0: f64, v1: f64) -> f64 {
    v0 * (1.0 - t) + v1 * t
}

/// Blend four cell values: `tx` along columns within each row pair,
/// then `ty` along rows.
fn bilerp(tx: f64, ty: f64, v00: f64, v01: f64, v10: f64, v11: f64) -> f64 {
    lerp(ty, lerp(tx, v00, v10), lerp(tx, v01, v11))
}

/// Bilinear upsampling of one output pixel.
///
/// Pixels are classed as corner, edge, or interior by their distance
/// from the output border in units of the scale factor. Border pixels
/// blend toward values extrapolated past the image edge; interior
/// pixels shift back by half a scale step and blend the surrounding
/// two-by-two source block.
fn bilinear_up(src: &Raster, row: u32, col: u32, factor: &ScaleFactor) -> u32 {
    let out_w = (src.width() as f64 * factor.w) as i64;
    let out_h = (src.height() as f64 * factor.h) as i64;
    let row = row as i64;
    let col = col as i64;

    let top = row < (factor.h / 2.0) as i64;
    let bottom = row > out_h - ((factor.h + 1.0) / 2.0) as i64;
    let left = col < (factor.w / 2.0) as i64;
    let right = col > out_w - ((factor.w + 1.0) / 2.0) as i64;

    let (sr, sc, fr, fc) = source_coords(row as u32, col as u32, factor);
    let center = at(src, sr, sc);
    let ext = |r, c| extrapolate_linear(center, at(src, r, c)) as f64;
    let center = center as f64;

    let value = if top && left {
        bilerp(
            fr,
            fc,
            ext(sr + 1, sc + 1),
            ext(sr + 1, sc),
            ext(sr, sc + 1),
            center,
        )
    } else if top && right {
        bilerp(
            fr,
            fc,
            ext(sr + 1, sc),
            ext(sr + 1, sc - 1),
            center,
            ext(sr, sc - 1),
        )
    } else if bottom && left {
        bilerp(
            fr,
            fc,
            ext(sr, sc + 1),
            center,
            ext(sr - 1, sc + 1),
            ext(sr - 1, sc),
        )
    } else if bottom && right {
        bilerp(
            fr,
            fc,
            center,
            ext(sr, sc - 1),
            ext(sr - 1, sc),
            ext(sr - 1, sc + 1),
        )
    } else if top {
        lerp(fr, ext(sr + 1, sc), center)
    } else if bottom {
        lerp(fr, center, ext(sr - 1, sc))
    } else if left {
        lerp(fc, ext(sr, sc + 1), center)
    } else if right {
        lerp(fc, center, ext(sr, sc - 1))
    } else {
        let row = row - (factor.h / 2.0) as i64;
        let col = col - (factor.w / 2.0) as i64;
        let (sr, sc, fr, fc) = source_coords(row as u32, col as u32, factor);
        bilerp(
            fc,
            fr,
            at(src, sr, sc) as f64,
            at(src, sr + 1, sc) as f64,
            at(src, sr, sc + 1) as f64,
            at(src, sr + 1, sc + 1) as f64,
        )
    };

    value as u32
}

/// Block-average downsampling of one output pixel.
///
/// The block extent compares an integer counter against the factor
/// reciprocal as floats; do not replace the bound with a precomputed
/// integer, truncation differs for inexact reciprocals.
fn box_down(src: &Raster, row: u32, col: u32, factor: &ScaleFactor) -> u32 {
    let (sr, sc, _, _) = source_coords(row, col, factor);

    let mut sum: i64 = 0;
    let mut count: i64 = 0;
    let mut dr: i64 = 0;
    while (dr as f64) < 1.0 / factor.h {
        let mut dc: i64 = 0;
        while (dc as f64) < 1.0 / factor.w {
            sum += at(src, sr + dr, sc + dc);
            count += 1;
            dc += 1;
        }
        dr += 1;
    }

    (sum / count) as u32
}
