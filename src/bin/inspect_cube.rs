//! Load a SEG-Y cube and print a corner of the trace matrix

// seistools modules
use seistools::segy::{Endian, Segy, SegyReader};

// standard library
use std::error::Error;
use std::path::PathBuf;

// external crates
use clap::{ArgAction, Parser};
use log::{error, info};
use ndarray::s;

#[derive(Parser, Debug)]
#[command(name = "inspect-cube", version)]
#[command(about = "Load a SEG-Y cube and print a small slice of it")]
struct Cli {
    /// Path to the SEG-Y file
    path: PathBuf,

    /// Read the file as little endian
    #[arg(long)]
    little_endian: bool,

    /// Number of traces and samples to print
    #[arg(short, long, default_value_t = 100)]
    count: usize,

    /// Open the interactive slice viewer after printing
    #[cfg(feature = "viewer")]
    #[arg(long)]
    view: bool,

    /// Attribute volume shown next to the seismic in the viewer
    #[cfg(all(feature = "viewer", feature = "npy"))]
    #[arg(long, requires = "view")]
    attribute: Option<PathBuf>,

    /// Increase logging verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Silence all logging
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = stderrlog::new()
        .modules(["inspect_cube", "seistools_segy", "seistools_viewer"])
        .quiet(cli.quiet)
        .verbosity(2 + cli.verbose as usize)
        .init()
    {
        eprintln!("Unable to start logging: {e}");
    }

    if let Err(e) = run(&cli) {
        error!("{e}");
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let endian = if cli.little_endian {
        Endian::Little
    } else {
        Endian::Big
    };

    let mut reader = SegyReader::new();
    reader.set_endian(endian);
    if cli.quiet {
        reader.disable_progress();
    }

    info!("Reading {} ({endian})", cli.path.display());
    let segy = reader.parse(&cli.path)?;
    print_summary(&segy, cli.count);

    #[cfg(feature = "viewer")]
    if cli.view {
        view(cli, &segy)?;
    }

    Ok(())
}

fn print_summary(segy: &Segy, count: usize) {
    let header = &segy.binary_header;
    println!("Traces: {}", segy.trace_count());
    println!("Samples per trace: {}", segy.samples_per_trace());
    println!("Sample interval: {} us", header.sample_interval);
    println!("Sample format: {}", header.format);

    let inlines = segy.unique_inlines();
    let crosslines = segy.unique_crosslines();
    if let (Some(first), Some(last)) = (inlines.first(), inlines.last()) {
        println!("Inlines: {first}..={last} ({} unique)", inlines.len());
    }
    if let (Some(first), Some(last)) = (crosslines.first(), crosslines.last()) {
        println!("Crosslines: {first}..={last} ({} unique)", crosslines.len());
    }

    let rows = count.min(segy.trace_count());
    let cols = count.min(segy.samples_per_trace());
    println!("{}", segy.traces.slice(s![..rows, ..cols]));
}

#[cfg(feature = "viewer")]
fn view(cli: &Cli, segy: &Segy) -> Result<(), Box<dyn Error>> {
    let seismic = segy.to_volume()?;

    #[cfg(feature = "npy")]
    if let Some(path) = &cli.attribute {
        let attribute = seistools::npy::read_npy(path)?
            .to_ndarray()?
            .into_dimensionality::<ndarray::Ix3>()?
            .mapv(|v| v as f32);
        seistools::viewer::show_volume_pair(attribute, seismic)?;
        return Ok(());
    }

    #[cfg(not(feature = "npy"))]
    let _ = cli;

    seistools::viewer::show_volume(seismic)?;
    Ok(())
}
