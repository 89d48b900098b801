//! pgmconv command-line interface
//!
//! Maps each subcommand onto a [`ConversionSpec`] and drives the
//! conversion engine. All conversion logic lives in the library
//! crates; this binary only parses arguments, opens the two files, and
//! reports the outcome through the exit status.

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{Level, error};
use pgmconv::{ConversionSpec, Encoding, TransformKind, convert};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    setup_logger(&matches);

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn build_cli() -> Command {
    let io_args = [
        Arg::new("input").required(true).help("Input PGM file"),
        Arg::new("output").required(true).help("Output PGM file"),
    ];
    let factor_arg = Arg::new("factor")
        .required(true)
        .help("Scale descriptor: F, N/D, FxG, or N/DxM/E, with a leading 'm' to shrink");

    Command::new("pgmconv")
        .about("Convert PGM images between encodings and apply geometric transforms")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Enable debug logging"),
        )
        .subcommand(
            Command::new("p2top5")
                .about("Convert a textual (P2) image to binary (P5)")
                .args(io_args.clone()),
        )
        .subcommand(
            Command::new("p5top2")
                .about("Convert a binary (P5) image to textual (P2)")
                .args(io_args.clone()),
        )
        .subcommand(
            Command::new("reflect")
                .about("Reflect an image across its main diagonal")
                .args(io_args.clone()),
        )
        .subcommand(
            Command::new("rotate90")
                .about("Rotate an image a quarter turn clockwise")
                .args(io_args.clone()),
        )
        .subcommand(
            Command::new("scale-nn")
                .about("Scale an image with nearest-neighbor sampling")
                .arg(factor_arg.clone())
                .args(io_args.clone()),
        )
        .subcommand(
            Command::new("scale-bl")
                .about("Scale an image with bilinear (up) or box-filter (down) sampling")
                .arg(factor_arg)
                .args(io_args),
        )
}

/// Set up logging options
fn setup_logger(matches: &ArgMatches) {
    let level = if matches.get_flag("verbose") {
        Level::Debug
    } else {
        Level::Warn
    };
    let _ = simple_logger::init_with_level(level);
}

/// Dispatch the parsed command line.
///
/// The output file is created (truncating any existing file) before
/// the conversion starts, so a failed conversion can leave an empty
/// output file behind.
fn run(matches: &ArgMatches) -> Result<(), String> {
    let (name, sub) = match matches.subcommand() {
        Some(pair) => pair,
        None => return Err("missing command".to_string()),
    };

    let spec = match name {
        "p2top5" => ConversionSpec {
            input: Some(Encoding::Plain),
            output: Some(Encoding::Raw),
            transform: TransformKind::Identity,
        },
        "p5top2" => ConversionSpec {
            input: Some(Encoding::Raw),
            output: Some(Encoding::Plain),
            transform: TransformKind::Identity,
        },
        "reflect" => ConversionSpec {
            input: None,
            output: None,
            transform: TransformKind::Reflect,
        },
        "rotate90" => ConversionSpec {
            input: None,
            output: None,
            transform: TransformKind::Rotate90,
        },
        "scale-nn" => ConversionSpec {
            input: None,
            output: None,
            transform: TransformKind::ScaleNearest(factor(sub)?),
        },
        "scale-bl" => ConversionSpec {
            input: None,
            output: None,
            transform: TransformKind::ScaleBilinear(factor(sub)?),
        },
        other => return Err(format!("unknown command: {other}")),
    };

    let input_path = path_arg(sub, "input")?;
    let output_path = path_arg(sub, "output")?;

    let input = File::open(&input_path).map_err(|_| format!("no such file: {input_path:?}"))?;
    let output =
        File::create(&output_path).map_err(|e| format!("cannot create {output_path:?}: {e}"))?;

    let mut writer = BufWriter::new(output);
    convert(BufReader::new(input), &mut writer, &spec).map_err(|e| e.to_string())?;
    writer.flush().map_err(|e| e.to_string())
}

fn factor(sub: &ArgMatches) -> Result<String, String> {
    sub.get_one::<String>("factor")
        .cloned()
        .ok_or_else(|| "missing scale factor".to_string())
}

fn path_arg(sub: &ArgMatches, name: &str) -> Result<String, String> {
    sub.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| format!("missing {name} file"))
}
