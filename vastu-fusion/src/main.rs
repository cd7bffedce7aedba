//! vastu-fusion command line
//!
//! Reads a scanner report, registers every scanner into the first one's
//! frame, and prints the beacon count, the largest scanner distance and each
//! scanner's position.
//!
//! Usage:
//!   vastu-fusion scanners.txt
//!   vastu-fusion scanners.txt --workers 4 --format json
//!   vastu-fusion scanners.txt --config configs/config.yaml --time-budget-ms 5000

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;

use vastu_fusion::io::{OutputFormat, Summary, read_report};
use vastu_fusion::{FusionConfig, Registrar, Result};

/// Register unaligned 3D beacon scans into one map
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scanner report file
    input: PathBuf,

    /// Configuration file path (default: configs/config.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Worker threads per pass
    #[arg(short, long)]
    workers: Option<usize>,

    /// Shared beacons required to accept an alignment
    #[arg(long)]
    min_overlap: Option<usize>,

    /// Scanner detection range per axis
    #[arg(long)]
    range: Option<i32>,

    /// Give up after this many milliseconds
    #[arg(long)]
    time_budget_ms: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn load_config(args: &Args) -> Result<FusionConfig> {
    let mut config = match &args.config {
        Some(path) => FusionConfig::load(path)?,
        None => FusionConfig::load_default()?,
    };

    if let Some(workers) = args.workers {
        config.registration.workers = workers;
    }
    if let Some(min_overlap) = args.min_overlap {
        config.alignment.min_overlap = min_overlap;
    }
    if let Some(range) = args.range {
        config.alignment.detection_range = range;
    }
    if args.time_budget_ms.is_some() {
        config.registration.time_budget_ms = args.time_budget_ms;
    }

    Ok(config)
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    let registrar = Registrar::from_config(&config)?;

    let readings = read_report(Path::new(&args.input))?;
    log::info!(
        "Loaded {} scanners from {}",
        readings.len(),
        args.input.display()
    );

    let registration = registrar.register(readings)?;
    let summary = Summary::from_registration(&registration);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    summary.write(&mut out, args.format)?;
    out.flush()?;
    Ok(())
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        let unmerged = e.unmerged();
        if !unmerged.is_empty() {
            log::error!("Unmerged scanners: {}", unmerged.join(", "));
        }
        std::process::exit(1);
    }
}
