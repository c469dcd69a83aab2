//!
//! # assdraw
//!
//! Reads an ASS vector drawing from a file or standard input, applies a single operation to it
//! and writes out the result.
//!

#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;

mod error;
mod config;
mod commands;

use self::error::*;
use self::config::*;
use self::commands::*;

use assdraw_engine::*;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

use std::io::{self, Read};
use std::env;
use std::fs;
use std::process;

///
/// Sets up the logger, using the filter from the configuration if `RUST_LOG` is not set
///
/// Only the first call has any effect.
///
fn initialize_logging(config: &AssDrawConfig) {
    let mut builder = pretty_env_logger::formatted_builder();

    match env::var("RUST_LOG") {
        Ok(filter)  => builder.parse_filters(&filter),
        Err(_)      => builder.parse_filters(&config.log_filter)
    };

    builder.try_init().ok();
}

///
/// Reads the configuration, applying any overrides from the command line
///
fn read_config(params: &ArgMatches) -> Result<AssDrawConfig, AssDrawError> {
    let mut config = match params.value_of("config") {
        Some(config_file)   => AssDrawConfig::from_file(config_file)?,
        None                => AssDrawConfig::default()
    };

    if let Some(scale) = params.value_of("scale") {
        config = config.with_scale(parse_number("--scale", scale)?);
    }

    if let Some(origin) = params.value_of("origin") {
        config = config.with_origin(parse_pair("--origin", origin)?);
    }

    Ok(config)
}

///
/// Reads the drawing text from the input file, or from standard input if there isn't one
///
fn read_input(params: &ArgMatches) -> Result<String, AssDrawError> {
    match params.value_of("input") {
        Some(input_file)    => Ok(fs::read_to_string(input_file)?),
        None                => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;

            Ok(input)
        }
    }
}

///
/// Works out which command was requested
///
fn read_command(params: &ArgMatches) -> Result<DrawingCommand, AssDrawError> {
    match params.subcommand() {
        ("normalize", _)                => Ok(DrawingCommand::Normalize),
        ("describe", _)                 => Ok(DrawingCommand::Describe),

        ("translate", Some(translate))  => {
            let dx = parse_number("DX", translate.value_of("DX").unwrap_or(""))?;
            let dy = parse_number("DY", translate.value_of("DY").unwrap_or(""))?;

            Ok(DrawingCommand::Translate(dx, dy))
        }

        ("point-at", Some(point_at))    => {
            let x = parse_number("X", point_at.value_of("X").unwrap_or(""))?;
            let y = parse_number("Y", point_at.value_of("Y").unwrap_or(""))?;

            Ok(DrawingCommand::PointAt(x, y))
        }

        ("transform", Some(transform))  => {
            let m11     = parse_number("M11", transform.value_of("M11").unwrap_or(""))?;
            let m12     = parse_number("M12", transform.value_of("M12").unwrap_or(""))?;
            let m21     = parse_number("M21", transform.value_of("M21").unwrap_or(""))?;
            let m22     = parse_number("M22", transform.value_of("M22").unwrap_or(""))?;
            let origin  = transform.value_of("origin").map(|origin| parse_pair("--origin", origin)).unwrap_or(Ok((0.0, 0.0)))?;
            let target  = transform.value_of("target").map(|target| parse_pair("--target", target)).unwrap_or(Ok((0.0, 0.0)))?;

            Ok(DrawingCommand::Transform(PointTransform::new(m11, m12, m21, m22, origin.0, origin.1, target.0, target.1)))
        }

        _                               => Err(AssDrawError::InvalidArgument("No command was specified (try 'assdraw help')".to_string()))
    }
}

///
/// Runs the tool with the specified parameters
///
fn run(params: &ArgMatches) -> Result<String, AssDrawError> {
    let config = read_config(params)?;
    initialize_logging(&config);

    let command         = read_command(params)?;
    let input           = read_input(params)?;
    let mut sequence    = config.parse_drawing(&input);

    info!("Read a drawing with {} commands", sequence.len());

    command.run(&mut sequence)
}

fn main() {
    let number = |name: &'static str, help: &'static str, index: u64| Arg::with_name(name).help(help).required(true).index(index);

    let params = App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(Arg::with_name("input")
            .long("input")
            .short("i")
            .takes_value(true)
            .help("The file containing the drawing (standard input is read if this isn't specified)"))
        .arg(Arg::with_name("config")
            .long("config")
            .short("c")
            .takes_value(true)
            .help("A JSON file containing the settings to use"))
        .arg(Arg::with_name("scale")
            .long("scale")
            .short("s")
            .takes_value(true)
            .help("The number of device units per drawing unit, used when generating control points"))
        .arg(Arg::with_name("origin")
            .long("origin")
            .short("o")
            .takes_value(true)
            .allow_hyphen_values(true)
            .help("The device position of the drawing origin (eg: --origin 100,50)"))
        .subcommand(SubCommand::with_name("normalize")
            .about("Writes out the drawing in its canonical form"))
        .subcommand(SubCommand::with_name("describe")
            .about("Writes out a JSON description of the commands in the drawing"))
        .subcommand(SubCommand::with_name("translate")
            .about("Moves every point in the drawing")
            .setting(AppSettings::AllowNegativeNumbers)
            .arg(number("DX", "The horizontal distance to move", 1))
            .arg(number("DY", "The vertical distance to move", 2)))
        .subcommand(SubCommand::with_name("point-at")
            .about("Finds the command or control point at a position")
            .setting(AppSettings::AllowNegativeNumbers)
            .arg(number("X", "The x coordinate to look at", 1))
            .arg(number("Y", "The y coordinate to look at", 2)))
        .subcommand(SubCommand::with_name("transform")
            .about("Transforms every point p in the drawing to | M11 M12 | * (p - origin) + target")
            .setting(AppSettings::AllowNegativeNumbers)
            .arg(number("M11", "Top left of the matrix", 1))
            .arg(number("M12", "Top right of the matrix", 2))
            .arg(number("M21", "Bottom left of the matrix", 3))
            .arg(number("M22", "Bottom right of the matrix", 4))
            .arg(Arg::with_name("origin")
                .long("origin")
                .takes_value(true)
                .allow_hyphen_values(true)
                .help("The point that's moved to 0,0 before the matrix is applied (eg: --origin 10,10)"))
            .arg(Arg::with_name("target")
                .long("target")
                .takes_value(true)
                .allow_hyphen_values(true)
                .help("The offset that's added after the matrix is applied (eg: --target 10,10)")))
        .get_matches();

    match run(&params) {
        Ok(output)  => println!("{}", output),
        Err(err)    => {
            // Configuration errors happen before the logger has been set up
            initialize_logging(&AssDrawConfig::default());
            error!("{:?}", err);
            eprintln!("{}: {}", env!("CARGO_PKG_NAME"), err);

            process::exit(1);
        }
    }
}
