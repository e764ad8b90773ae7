//! Create an outline polygon from survey coordinates and write it as KML

// seistools modules
use seistools::outline::{
    convert_to_kml, select_source_crs, ConvertOptions, Hemisphere, DEFAULT_TOLERANCE,
};

// standard library
use std::path::PathBuf;

// external crates
use clap::{ArgAction, Parser};
use log::{error, info};

#[derive(Parser, Debug)]
#[command(name = "outline-kml", version)]
#[command(about = "Create outline polygon from coordinates and convert to KML")]
#[command(after_help = "Examples:
  outline-kml points.txt                     # DHDN / GK zone 4 to WGS84
  outline-kml points.txt --utm-zone 44       # UTM zone 44N to WGS84
  outline-kml points.txt --utm-zone 33 --utm-hemisphere s
  outline-kml points.txt --crs EPSG:28404    # any supported EPSG code
  outline-kml points.txt --no-conversion     # keep the original coordinates")]
struct Cli {
    /// Input file with coordinates (x y format)
    input: PathBuf,

    /// Output KML filename
    #[arg(short, long, default_value = "output_polygon.kml")]
    output: PathBuf,

    /// Use original coordinates without conversion to WGS84
    #[arg(long, conflicts_with_all = ["utm_zone", "crs"])]
    no_conversion: bool,

    /// UTM zone number, e.g. 44 for UTM zone 44N
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=60))]
    utm_zone: Option<u8>,

    /// UTM hemisphere (n, s, north, south)
    #[arg(long, default_value = "n")]
    utm_hemisphere: Hemisphere,

    /// Source coordinate system as an EPSG identifier
    #[arg(long, conflicts_with = "utm_zone")]
    crs: Option<String>,

    /// Rounding tolerance for removing duplicate points
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Increase logging verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Silence all logging
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    // info by default so the pipeline reads as a progress report
    if let Err(e) = stderrlog::new()
        .modules(["outline_kml", "seistools_outline"])
        .quiet(cli.quiet)
        .verbosity(2 + cli.verbose as usize)
        .init()
    {
        eprintln!("Unable to start logging: {e}");
    }

    let source_crs = match select_source_crs(
        cli.no_conversion,
        cli.crs.as_deref(),
        cli.utm_zone,
        cli.utm_hemisphere,
    ) {
        Ok(crs) => crs,
        Err(e) => {
            error!("{e}");
            return;
        }
    };

    let options = ConvertOptions {
        output: cli.output,
        source_crs,
        tolerance: cli.tolerance,
        ..ConvertOptions::new(cli.input)
    };

    match convert_to_kml(&options) {
        Ok(summary) => {
            info!("Done!");
            println!("{summary}");
        }
        Err(e) => error!("{e}"),
    }
}
