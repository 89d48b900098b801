//! PGM (Portable Gray Map) format support
//!
//! Reads and writes the two PGM encodings: textual `P2` (decimal
//! integers) and binary `P5` (one byte per sample).
//!
//! # File structure
//!
//! - Line 1: two-character encoding tag (`P2` or `P5`)
//! - Line 2: comment line, ignored on read, fixed text on write
//! - Line 3: `width height` as two positive integers
//! - Line 4: `maxval` as one positive integer
//! - Payload: `width * height` samples in row-major order
//!
//! Reading materializes the whole image as a [`Raster`]; writing pulls
//! samples one at a time from a caller-supplied source so that output
//! images are never buffered.

use crate::{CodecError, CodecResult};
use pgmconv_core::{Encoding, MAX_INPUT_DIM, Raster, RasterHeader};
use std::io::{BufRead, Write};

/// Comment line emitted on every written image.
const OUTPUT_COMMENT: &str = "# Generated by pgmconv";

/// Read a PGM image from a reader.
///
/// # Arguments
/// * `reader` - A buffered reader positioned at the encoding tag
/// * `expected` - The encoding the caller requires, or `None` to adopt
///   whatever the header declares
///
/// # Errors
///
/// Returns [`CodecError::Corrupted`] for a malformed header, a tag that
/// does not match `expected`, dimensions outside `1..=512`, a payload
/// with the wrong sample count, or a sample outside `[0, maxval]`.
pub fn read_pgm<R: BufRead>(mut reader: R, expected: Option<Encoding>) -> CodecResult<Raster> {
    let tag_line = header_line(&mut reader)?;
    let encoding = Encoding::from_tag(tag_line.trim())
        .map_err(|e| CodecError::Corrupted(e.to_string()))?;
    if let Some(want) = expected
        && want != encoding
    {
        return Err(CodecError::Corrupted(format!(
            "input is not in {} format",
            want.tag()
        )));
    }

    // Comment line, discarded regardless of content.
    header_line(&mut reader)?;

    let dims_line = header_line(&mut reader)?;
    let mut dims = dims_line.split_whitespace();
    let width = header_field(dims.next(), "width")?;
    let height = header_field(dims.next(), "height")?;

    let maxval_line = header_line(&mut reader)?;
    let maxval = header_field(maxval_line.split_whitespace().next(), "maxval")?;

    if width == 0 || height == 0 || width > MAX_INPUT_DIM || height > MAX_INPUT_DIM {
        return Err(CodecError::Corrupted(format!(
            "invalid image dimensions: {width}x{height}"
        )));
    }
    if maxval == 0 {
        return Err(CodecError::Corrupted("maxval must be positive".to_string()));
    }

    let count = width as usize * height as usize;
    let samples = match encoding {
        Encoding::Plain => read_plain_samples(&mut reader, count)?,
        Encoding::Raw => read_raw_samples(&mut reader, count)?,
    };

    Raster::from_samples(encoding, width, height, maxval, samples)
        .map_err(|e| CodecError::Corrupted(e.to_string()))
}

/// Write a PGM image to a writer, pulling each sample from `sample_at`.
///
/// Emits the tag line, a fixed comment line, the `width height` line,
/// the `maxval` line, then the payload in row-major order. Textual
/// rows use a single space between values, no leading space, and a
/// newline after the final value of each row. Binary samples are
/// written as their low byte.
///
/// # Arguments
/// * `writer` - Destination writer
/// * `header` - Output header fields
/// * `sample_at` - Source of output samples, called as `(row, col)`
pub fn write_pgm<W: Write>(
    mut writer: W,
    header: &RasterHeader,
    mut sample_at: impl FnMut(u32, u32) -> u32,
) -> CodecResult<()> {
    writeln!(writer, "{}", header.encoding.tag())?;
    writeln!(writer, "{OUTPUT_COMMENT}")?;
    writeln!(writer, "{} {}", header.width, header.height)?;
    writeln!(writer, "{}", header.maxval)?;

    match header.encoding {
        Encoding::Plain => {
            for row in 0..header.height {
                for col in 0..header.width {
                    if col == 0 {
                        write!(writer, "{}", sample_at(row, col))?;
                    } else {
                        write!(writer, " {}", sample_at(row, col))?;
                    }
                }
                writeln!(writer)?;
            }
        }
        Encoding::Raw => {
            for row in 0..header.height {
                for col in 0..header.width {
                    writer.write_all(&[sample_at(row, col) as u8])?;
                }
            }
        }
    }

    Ok(())
}

/// Read one header line, failing on end of input.
fn header_line<R: BufRead>(reader: &mut R) -> CodecResult<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(CodecError::Corrupted(
            "unexpected end of header".to_string(),
        ));
    }
    Ok(line)
}

/// Parse one positive-integer header field.
fn header_field(token: Option<&str>, name: &str) -> CodecResult<u32> {
    token
        .and_then(|t| t.parse::<u32>().ok())
        .ok_or_else(|| CodecError::Corrupted(format!("missing or malformed {name}")))
}

/// Read `count` whitespace-separated decimal samples.
///
/// Trailing text after the last required sample is ignored.
fn read_plain_samples<R: BufRead>(reader: &mut R, count: usize) -> CodecResult<Vec<u32>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut samples = Vec::with_capacity(count);
    for token in text.split_whitespace().take(count) {
        let value = token
            .parse::<u32>()
            .map_err(|_| CodecError::Corrupted(format!("malformed sample {token:?}")))?;
        samples.push(value);
    }
    if samples.len() < count {
        return Err(CodecError::Corrupted(format!(
            "expected {count} samples, found {}",
            samples.len()
        )));
    }
    Ok(samples)
}

/// Read exactly `count` raw payload bytes; a short read or trailing
/// bytes make the file corrupted.
fn read_raw_samples<R: BufRead>(reader: &mut R, count: usize) -> CodecResult<Vec<u32>> {
    let mut bytes = Vec::with_capacity(count);
    reader.read_to_end(&mut bytes)?;
    if bytes.len() != count {
        return Err(CodecError::Corrupted(format!(
            "expected {count} payload bytes, found {}",
            bytes.len()
        )));
    }
    Ok(bytes.into_iter().map(u32::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_str(input: &str, expected: Option<Encoding>) -> CodecResult<Raster> {
        read_pgm(Cursor::new(input.as_bytes().to_vec()), expected)
    }

    #[test]
    fn test_read_plain() {
        let r = read_str("P2\n# comment\n3 2\n255\n1 2 3\n4 5 6\n", None).unwrap();
        assert_eq!(r.encoding(), Encoding::Plain);
        assert_eq!((r.width(), r.height(), r.maxval()), (3, 2, 255));
        assert_eq!(r.samples(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_read_raw() {
        let mut data = b"P5\n# comment\n2 2\n255\n".to_vec();
        data.extend_from_slice(&[10, 20, 30, 40]);
        let r = read_pgm(Cursor::new(data), None).unwrap();
        assert_eq!(r.encoding(), Encoding::Raw);
        assert_eq!(r.samples(), &[10, 20, 30, 40]);
    }

    #[test]
    fn test_read_adopts_tag_when_unconstrained() {
        let r = read_str("P2\n#\n1 1\n255\n9\n", None).unwrap();
        assert_eq!(r.encoding(), Encoding::Plain);
    }

    #[test]
    fn test_read_tag_mismatch() {
        let err = read_str("P2\n#\n1 1\n255\n9\n", Some(Encoding::Raw)).unwrap_err();
        assert!(matches!(err, CodecError::Corrupted(_)));
        assert!(err.to_string().contains("P5"));
    }

    #[test]
    fn test_read_unknown_tag() {
        assert!(matches!(
            read_str("P7\n#\n1 1\n255\n9\n", None),
            Err(CodecError::Corrupted(_))
        ));
    }

    #[test]
    fn test_read_truncated_header() {
        assert!(matches!(
            read_str("P2\n# only a comment\n", None),
            Err(CodecError::Corrupted(_))
        ));
    }

    #[test]
    fn test_read_malformed_dimensions() {
        assert!(read_str("P2\n#\nthree 2\n255\n1 2\n", None).is_err());
        assert!(read_str("P2\n#\n3\n255\n1 2 3\n", None).is_err());
        assert!(read_str("P2\n#\n0 2\n255\n\n", None).is_err());
        assert!(read_str("P2\n#\n513 1\n255\n1\n", None).is_err());
    }

    #[test]
    fn test_read_plain_too_few_samples() {
        // Declared 3x2 but only 5 integers supplied.
        assert!(matches!(
            read_str("P2\n#\n3 2\n255\n1 2 3 4 5\n", None),
            Err(CodecError::Corrupted(_))
        ));
    }

    #[test]
    fn test_read_plain_trailing_text_ignored() {
        let r = read_str("P2\n#\n2 1\n255\n1 2 junk\n", None).unwrap();
        assert_eq!(r.samples(), &[1, 2]);
    }

    #[test]
    fn test_read_plain_sample_above_maxval() {
        assert!(matches!(
            read_str("P2\n#\n2 1\n100\n50 101\n", None),
            Err(CodecError::Corrupted(_))
        ));
    }

    #[test]
    fn test_read_raw_trailing_byte() {
        let mut data = b"P5\n#\n2 1\n255\n".to_vec();
        data.extend_from_slice(&[10, 20, 30]);
        assert!(matches!(
            read_pgm(Cursor::new(data), None),
            Err(CodecError::Corrupted(_))
        ));
    }

    #[test]
    fn test_read_raw_short_payload() {
        let mut data = b"P5\n#\n2 2\n255\n".to_vec();
        data.extend_from_slice(&[10, 20, 30]);
        assert!(matches!(
            read_pgm(Cursor::new(data), None),
            Err(CodecError::Corrupted(_))
        ));
    }

    #[test]
    fn test_write_plain_layout() {
        let header = RasterHeader {
            encoding: Encoding::Plain,
            width: 3,
            height: 2,
            maxval: 255,
        };
        let mut out = Vec::new();
        write_pgm(&mut out, &header, |row, col| row * 3 + col).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "P2\n# Generated by pgmconv\n3 2\n255\n0 1 2\n3 4 5\n"
        );
    }

    #[test]
    fn test_write_raw_layout() {
        let header = RasterHeader {
            encoding: Encoding::Raw,
            width: 2,
            height: 2,
            maxval: 255,
        };
        let mut out = Vec::new();
        write_pgm(&mut out, &header, |row, col| 10 * (row * 2 + col + 1)).unwrap();
        assert_eq!(&out[..], b"P5\n# Generated by pgmconv\n2 2\n255\n\x0a\x14\x1e\x28");
    }

    #[test]
    fn test_roundtrip_plain_to_raw_to_plain() {
        let src = read_str("P2\n#\n2 2\n255\n10 20\n30 40\n", None).unwrap();

        let mut raw = Vec::new();
        let mut header = src.header();
        header.encoding = Encoding::Raw;
        write_pgm(&mut raw, &header, |r, c| src.sample_unchecked(r, c)).unwrap();

        let mid = read_pgm(Cursor::new(raw), Some(Encoding::Raw)).unwrap();
        let mut plain = Vec::new();
        let mut header = mid.header();
        header.encoding = Encoding::Plain;
        write_pgm(&mut plain, &header, |r, c| mid.sample_unchecked(r, c)).unwrap();

        let back = read_pgm(Cursor::new(plain), Some(Encoding::Plain)).unwrap();
        assert_eq!(back.samples(), src.samples());
    }
}
