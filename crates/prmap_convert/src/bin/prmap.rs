//! prmap - Tiled map post-processor
//!
//! Converts a Tiled JSON export into an autotiled `.prmap` file.

use clap::Parser;
use prmap_convert::{convert_files, ConvertConfig, ConvertError, LoadManifest, DEFAULT_MANIFEST};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// prmap - resolve, autotile and pack a Tiled map
///
/// Without `--catalog`/`--map` the inputs are read from a load manifest: the
/// catalog path on the first line, the map path on the second.
#[derive(Parser)]
#[command(name = "prmap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Load manifest naming the catalog and map
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    manifest: PathBuf,

    /// Sprite catalog (JSON)
    #[arg(long, requires = "map")]
    catalog: Option<PathBuf>,

    /// Tiled map export (JSON)
    #[arg(long, requires = "catalog")]
    map: Option<PathBuf>,

    /// Output file (defaults to the map path with the configured extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to prmap.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write JSON without indentation
    #[arg(long)]
    compact: bool,

    /// Process layers one after another
    #[arg(long)]
    sequential: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging, RUST_LOG wins over -v
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), ConvertError> {
    let mut config = ConvertConfig::load_or_default(cli.config.as_deref())?;
    if cli.compact {
        config.pretty = false;
    }
    if cli.sequential {
        config.parallel = false;
    }

    let inputs = match (&cli.catalog, &cli.map) {
        (Some(catalog), Some(map)) => LoadManifest::new(catalog, map),
        _ => LoadManifest::read(&cli.manifest)?,
    };
    tracing::debug!(
        "Catalog {}, map {}",
        inputs.catalog.display(),
        inputs.map.display()
    );

    convert_files(&inputs.catalog, &inputs.map, cli.output.as_deref(), &config)?;
    Ok(())
}
