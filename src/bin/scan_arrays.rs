//! Report which `.npy` arrays in a folder hold more than one distinct value

// seistools modules
use seistools::npy::scan_folder;

// standard library
use std::path::PathBuf;

// external crates
use clap::{ArgAction, Parser};
use log::error;

#[derive(Parser, Debug)]
#[command(name = "scan-arrays", version)]
#[command(about = "Find the .npy arrays in a folder with more than one unique value")]
struct Cli {
    /// Folder containing .npy files
    folder: PathBuf,

    /// Print the full report as JSON on stdout
    #[arg(long)]
    json: bool,

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
        .modules(["scan_arrays", "seistools_npy"])
        .quiet(cli.quiet)
        .verbosity(2 + cli.verbose as usize)
        .init()
    {
        eprintln!("Unable to start logging: {e}");
    }

    let report = match scan_folder(&cli.folder) {
        Ok(report) => report,
        Err(e) => {
            error!("{e}");
            return;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => error!("Unable to serialise report: {e}"),
        }
    } else {
        for name in report.informative_files() {
            println!("{name}");
        }
    }
}
