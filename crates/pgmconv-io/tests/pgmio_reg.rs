//! PGM codec regression test
//!
//! Exercises the codec round trip in both encodings, the exact byte
//! layout of written files, and rejection of malformed input.

use pgmconv_core::Encoding;
use pgmconv_io::{read_pgm, write_pgm};
use pgmconv_test::{RegParams, gradient_raster};
use std::io::Cursor;

#[test]
fn pgmio_reg() {
    let mut rp = RegParams::new("pgmio");

    let src = gradient_raster(5, 4);

    // --- write plain, read back ---
    let mut plain = Vec::new();
    let mut header = src.header();
    header.encoding = Encoding::Plain;
    write_pgm(&mut plain, &header, |r, c| src.sample_unchecked(r, c)).expect("write plain");

    let reread = read_pgm(Cursor::new(plain.clone()), Some(Encoding::Plain)).expect("read plain");
    rp.compare_rasters(&src, &reread);

    // --- write raw, read back ---
    let mut raw = Vec::new();
    header.encoding = Encoding::Raw;
    write_pgm(&mut raw, &header, |r, c| src.sample_unchecked(r, c)).expect("write raw");

    let reread = read_pgm(Cursor::new(raw.clone()), Some(Encoding::Raw)).expect("read raw");
    rp.compare_rasters(&src, &reread);

    // --- full round trip: plain -> raw -> plain ---
    let mid = read_pgm(Cursor::new(raw), None).expect("reread raw");
    let mut plain2 = Vec::new();
    header.encoding = Encoding::Plain;
    write_pgm(&mut plain2, &header, |r, c| mid.sample_unchecked(r, c)).expect("rewrite plain");
    rp.compare_strings(&plain, &plain2);

    // --- exact byte layout ---
    let mut small = Vec::new();
    let small_header = pgmconv_core::RasterHeader {
        encoding: Encoding::Plain,
        width: 3,
        height: 2,
        maxval: 255,
    };
    write_pgm(&mut small, &small_header, |r, c| r * 10 + c).expect("write small");
    rp.compare_strings(b"P2\n# Generated by pgmconv\n3 2\n255\n0 1 2\n10 11 12\n", &small);

    // --- malformed inputs are rejected ---
    let cases: &[&str] = &[
        "P7\n#\n2 2\n255\n1 2 3 4\n",   // unknown tag
        "P2\n#\n2\n255\n1 2\n",         // missing height
        "P2\n#\n0 2\n255\n\n",          // zero width
        "P2\n#\n513 1\n255\n1\n",       // width above input bound
        "P2\n#\n2 2\n255\n1 2 3\n",     // short payload
        "P2\n#\n2 1\n100\n50 200\n",    // sample above maxval
        "P2\n# truncated\n",            // header cut short
    ];
    for case in cases {
        let rejected = read_pgm(Cursor::new(case.as_bytes().to_vec()), None).is_err();
        rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);
        eprintln!("  rejected malformed input: {}", rejected);
    }

    // --- tag mismatch against an expected encoding ---
    let mismatch = read_pgm(
        Cursor::new(b"P2\n#\n1 1\n255\n7\n".to_vec()),
        Some(Encoding::Raw),
    )
    .is_err();
    rp.compare_values(1.0, if mismatch { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "pgmio regression test failed");
}
