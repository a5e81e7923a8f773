mod generate;
mod input;
mod report;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::exit;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use shipment_core::{solve_assignment, JobMapper, MatrixConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::generate::DataGenerator;

const DRIVERS_FILE: &str = "drivers.data";
const DESTINATIONS_FILE: &str = "destinations.data";

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "shipment-routing",
    about = "Assign shipment destinations to drivers by suitability score",
    long_about = "Scores every driver against every destination, then picks the\n\
                  pairing with the highest total suitability."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the optimal driver/destination assignment
    Route(RouteArgs),
    /// Write synthetic driver and destination lists
    Generate(GenerateArgs),
}

#[derive(Args)]
struct RouteArgs {
    /// File with one driver name per line
    #[arg(short = 'd', long, requires = "destination_file")]
    driver_file: Option<PathBuf>,
    /// File with one destination address per line
    #[arg(short = 's', long, requires = "driver_file")]
    destination_file: Option<PathBuf>,
    /// Generate input instead of reading files, as <drivers>,<destinations>
    #[arg(short = 't', long, conflicts_with_all = ["driver_file", "destination_file"])]
    test_data: Option<String>,
    /// Upper bound on worker threads (overrides --config)
    #[arg(short = 'x', long, env = "SHIPMENT_MAX_THREADS")]
    max_threads: Option<usize>,
    /// Write the report to this file instead of stdout
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,
    /// TOML file with matrix settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for --test-data generation
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct GenerateArgs {
    /// Number of drivers
    #[arg(short = 'd', long, default_value_t = 10)]
    driver_count: usize,
    /// Number of destinations
    #[arg(short = 's', long, default_value_t = 10)]
    destination_count: usize,
    /// Directory for drivers.data and destinations.data; prints both lists if omitted
    #[arg(short = 'p', long)]
    path: Option<PathBuf>,
    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

// ── Commands ───────────────────────────────────────────────────────

fn route(args: RouteArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => MatrixConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MatrixConfig::default(),
    };
    if let Some(threads) = args.max_threads {
        config = config.with_max_threads(threads);
    }

    let (drivers, destinations) = load_inputs(&args)?;
    info!(
        drivers = drivers.len(),
        destinations = destinations.len(),
        "routing shipments"
    );

    let costs = JobMapper::new(config)
        .map(&drivers, &destinations)
        .context("computing cost matrix")?;
    let assignment = solve_assignment(&costs);
    let text = report::render(&assignment, &drivers, &destinations);

    match &args.file {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => std::io::stdout()
            .write_all(text.as_bytes())
            .context("writing report")?,
    }
    Ok(())
}

fn load_inputs(args: &RouteArgs) -> Result<(Vec<String>, Vec<String>)> {
    if let Some(test_data) = &args.test_data {
        let (driver_count, destination_count) = input::parse_test_data(test_data)?;
        let mut generator = DataGenerator::new(args.seed);
        return Ok((
            generator.drivers(driver_count),
            generator.destinations(destination_count),
        ));
    }
    match (&args.driver_file, &args.destination_file) {
        (Some(drivers), Some(destinations)) => {
            Ok((input::read_lines(drivers)?, input::read_lines(destinations)?))
        }
        _ => bail!("provide --driver-file and --destination-file, or --test-data"),
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let mut generator = DataGenerator::new(args.seed);
    let drivers = generator.drivers(args.driver_count);
    let destinations = generator.destinations(args.destination_count);

    match &args.path {
        Some(dir) => {
            write_list(&dir.join(DRIVERS_FILE), &drivers)?;
            write_list(&dir.join(DESTINATIONS_FILE), &destinations)?;
            info!(dir = %dir.display(), "generated data written");
        }
        None => {
            println!("{}", drivers.join("\n"));
            println!();
            println!("{}", destinations.join("\n"));
        }
    }
    Ok(())
}

fn write_list(path: &Path, lines: &[String]) -> Result<()> {
    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Route(args) => route(args),
        Commands::Generate(args) => generate(args),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        exit(1);
    }
}
