//! Raster - the grayscale image container
//!
//! A `Raster` is a rectangular grid of integer brightness samples plus
//! the header fields of the on-disk PGM representation. Samples are
//! stored row-major in a buffer sized to the actual image dimensions,
//! allocated per conversion and exclusively owned by it.
//!
//! A conversion builds its input `Raster` exactly once (in the codec)
//! and treats it as read-only afterwards; output images are never
//! materialized as a `Raster`, only described by a [`RasterHeader`].

use crate::error::{Error, Result};
use crate::MAX_INPUT_DIM;

/// On-disk sample encoding
///
/// PGM stores one of two encodings, identified by the two-character
/// tag on the first header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// `P2`: human-readable whitespace-separated decimal integers
    Plain,
    /// `P5`: one raw byte per sample, row-major, no delimiters
    Raw,
}

impl Encoding {
    /// Get the two-character header tag for this encoding.
    pub fn tag(self) -> &'static str {
        match self {
            Encoding::Plain => "P2",
            Encoding::Raw => "P5",
        }
    }

    /// Parse a header tag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTag`] for anything other than `P2` or `P5`.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "P2" => Ok(Encoding::Plain),
            "P5" => Ok(Encoding::Raw),
            other => Err(Error::UnknownTag(other.to_string())),
        }
    }
}

/// The four header fields of a PGM image
///
/// An output image exists only as a header: its samples are produced
/// lazily during serialization and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterHeader {
    /// Sample encoding
    pub encoding: Encoding,
    /// Width in samples (columns)
    pub width: u32,
    /// Height in samples (rows)
    pub height: u32,
    /// Maximum sample value
    pub maxval: u32,
}

/// Grayscale raster image
///
/// # Examples
///
/// ```
/// use pgmconv_core::{Encoding, Raster};
///
/// let r = Raster::new(Encoding::Plain, 3, 2, 255).unwrap();
/// assert_eq!(r.width(), 3);
/// assert_eq!(r.sample(1, 2), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    header: RasterHeader,
    /// Row-major samples, length `width * height`
    samples: Vec<u32>,
}

impl Raster {
    /// Create a zero-filled raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0 or
    /// exceeds [`MAX_INPUT_DIM`], and [`Error::InvalidMaxval`] if
    /// `maxval` is 0.
    pub fn new(encoding: Encoding, width: u32, height: u32, maxval: u32) -> Result<Self> {
        Self::validate(width, height, maxval)?;
        let samples = vec![0u32; width as usize * height as usize];
        Ok(Raster {
            header: RasterHeader {
                encoding,
                width,
                height,
                maxval,
            },
            samples,
        })
    }

    /// Create a raster from an existing row-major sample buffer.
    ///
    /// # Errors
    ///
    /// In addition to the [`Raster::new`] checks, fails with
    /// [`Error::SampleCountMismatch`] if `samples.len() != width * height`
    /// and [`Error::SampleOutOfRange`] if any sample exceeds `maxval`.
    pub fn from_samples(
        encoding: Encoding,
        width: u32,
        height: u32,
        maxval: u32,
        samples: Vec<u32>,
    ) -> Result<Self> {
        Self::validate(width, height, maxval)?;
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(Error::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }
        if let Some(&value) = samples.iter().find(|&&s| s > maxval) {
            return Err(Error::SampleOutOfRange { value, maxval });
        }
        Ok(Raster {
            header: RasterHeader {
                encoding,
                width,
                height,
                maxval,
            },
            samples,
        })
    }

    fn validate(width: u32, height: u32, maxval: u32) -> Result<()> {
        if width == 0 || height == 0 || width > MAX_INPUT_DIM || height > MAX_INPUT_DIM {
            return Err(Error::InvalidDimension { width, height });
        }
        if maxval == 0 {
            return Err(Error::InvalidMaxval(maxval));
        }
        Ok(())
    }

    /// Get the header fields.
    #[inline]
    pub fn header(&self) -> RasterHeader {
        self.header
    }

    /// Get the sample encoding this image was read with.
    #[inline]
    pub fn encoding(&self) -> Encoding {
        self.header.encoding
    }

    /// Get the image width in samples.
    #[inline]
    pub fn width(&self) -> u32 {
        self.header.width
    }

    /// Get the image height in samples.
    #[inline]
    pub fn height(&self) -> u32 {
        self.header.height
    }

    /// Get the maximum sample value.
    #[inline]
    pub fn maxval(&self) -> u32 {
        self.header.maxval
    }

    /// Get a sample at (row, col).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn sample(&self, row: u32, col: u32) -> Option<u32> {
        if row >= self.header.height || col >= self.header.width {
            return None;
        }
        Some(self.sample_unchecked(row, col))
    }

    /// Get a sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`.
    #[inline]
    pub fn sample_unchecked(&self, row: u32, col: u32) -> u32 {
        self.samples[row as usize * self.header.width as usize + col as usize]
    }

    /// Set a sample without bounds checking (test and setup use).
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`.
    #[inline]
    pub fn set_sample_unchecked(&mut self, row: u32, col: u32, value: u32) {
        self.samples[row as usize * self.header.width as usize + col as usize] = value;
    }

    /// Get raw access to the row-major sample buffer.
    #[inline]
    pub fn samples(&self) -> &[u32] {
        &self.samples
    }
}
