//! pgmconv-test - Regression test framework for pgmconv
//!
//! Provides [`RegParams`], a failure-accumulating comparison helper
//! for regression tests, plus deterministic raster fixtures.
//!
//! # Usage
//!
//! ```ignore
//! use pgmconv_test::RegParams;
//!
//! let mut rp = RegParams::new("scale");
//! rp.compare_values(4.0, width as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use pgmconv_core::{Encoding, Raster};

/// Build a gradient fixture: sample `(row, col)` is
/// `(row * 7 + col * 3) % (maxval + 1)`.
///
/// Deterministic and aperiodic over small sizes, so positional bugs
/// (swapped axes, off-by-one indexing) show up as sample mismatches.
pub fn gradient_raster(width: u32, height: u32) -> Raster {
    let maxval = 255;
    let samples = (0..height)
        .flat_map(|row| (0..width).map(move |col| (row * 7 + col * 3) % (maxval + 1)))
        .collect();
    match Raster::from_samples(Encoding::Plain, width, height, maxval, samples) {
        Ok(raster) => raster,
        Err(e) => panic!("bad fixture dimensions {width}x{height}: {e}"),
    }
}

/// Build a constant fixture where every sample is `value`.
pub fn constant_raster(width: u32, height: u32, value: u32) -> Raster {
    let count = width as usize * height as usize;
    match Raster::from_samples(Encoding::Plain, width, height, 255, vec![value; count]) {
        Ok(raster) => raster,
        Err(e) => panic!("bad fixture dimensions {width}x{height}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_raster_layout() {
        let r = gradient_raster(3, 2);
        assert_eq!(r.sample_unchecked(0, 0), 0);
        assert_eq!(r.sample_unchecked(0, 2), 6);
        assert_eq!(r.sample_unchecked(1, 0), 7);
        assert_eq!(r.sample_unchecked(1, 2), 13);
    }

    #[test]
    fn test_constant_raster() {
        let r = constant_raster(2, 2, 9);
        assert_eq!(r.samples(), &[9, 9, 9, 9]);
    }
}
