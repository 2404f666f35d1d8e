use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{ error, info, LevelFilter };

mod format;
mod logger;
mod summary;

use crate::format::FormattedDuration;
use crate::summary::Summary;

type BoxError = Box<dyn std::error::Error + 'static>;

/// Reads a Wavefront OBJ file and reports what it contains.
#[derive(Parser, Debug)]
#[command(name = "objinfo", version, about)]
struct Args {
    /// Path to the .obj file
    path: PathBuf,

    /// Print the parsed mesh as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(err) = logger::init(level) {
        eprintln!("Unable to initialise logger: {err}");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<(), BoxError> {
    let start = Instant::now();
    let mesh = objreader_core::load_obj(&args.path)?;
    info!("Parsed {} in {}", args.path.display(), FormattedDuration(start.elapsed()));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&mesh)?);
    } else {
        println!("{}", Summary::of(&mesh));
    }
    Ok(())
}
