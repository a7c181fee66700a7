//! Route finder CLI
//!
//! Looks up walking and driving routes between two addresses.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod render;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use application::ports::GeocodingPort;
use application::{RouteLookupService, RouteSession};
use clap::{Parser, Subcommand, ValueEnum};
use domain::{Address, Coordinate, TransportMode};
use infrastructure::{AppConfig, DirectionsAdapter, GeocodingAdapter, InMemoryMapSurface};
use tracing::debug;

use crate::render::{EndpointNames, LookupReport};

/// Route finder CLI
#[derive(Parser)]
#[command(name = "route-cli")]
#[command(author, version, about = "Walking and driving routes between two addresses", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./config.toml if present)
    #[arg(short, long, env = "ROUTEFINDER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a route between two addresses
    ///
    /// Example: route-cli lookup --from "Taksim, Istanbul" --to "Kızılay, Ankara" --mode driving
    Lookup {
        /// Start address
        #[arg(short, long)]
        from: String,

        /// Destination address
        #[arg(short, long)]
        to: String,

        /// Transport mode (walking or driving)
        #[arg(short, long, default_value = "driving")]
        mode: TransportMode,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also look up the names of both resolved endpoints
        #[arg(long)]
        describe: bool,
    },

    /// Resolve a single address to coordinates
    Geocode {
        /// Address to resolve
        address: String,
    },

    /// Print the effective configuration as TOML
    Config,
}

/// How `lookup` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Lookup result as JSON
    Json,
    /// Map contents as a GeoJSON FeatureCollection
    Geojson,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Reverse geocode a coordinate, treating failures as "no name"
async fn endpoint_name(geocoder: &dyn GeocodingPort, coordinate: Coordinate) -> Option<String> {
    match geocoder.reverse_geocode(coordinate).await {
        Ok(name) => name,
        Err(e) => {
            debug!(error = %e, %coordinate, "Could not describe endpoint");
            None
        },
    }
}

async fn run_lookup(
    config: &AppConfig,
    from: &str,
    to: &str,
    mode: TransportMode,
    format: OutputFormat,
    describe: bool,
) -> anyhow::Result<ExitCode> {
    let geocoder = Arc::new(GeocodingAdapter::with_config(&config.geocoding)?);
    let directions = Arc::new(DirectionsAdapter::with_config(&config.directions)?);
    let service = RouteLookupService::new(geocoder.clone(), directions);

    eprintln!("{} Looking up {} route: {from} → {to}", mode.emoji(), mode.as_str());
    let outcome = service.lookup_route(from, to, mode).await;

    let mut session = RouteSession::new(InMemoryMapSurface::new());
    session.apply(&outcome);
    let surface = session.into_surface();

    let result = match outcome {
        Ok(result) => result,
        Err(_) => {
            for message in surface.errors() {
                eprintln!("❌ {message}");
            }
            return Ok(ExitCode::FAILURE);
        },
    };

    let names = if describe {
        EndpointNames {
            origin: endpoint_name(geocoder.as_ref(), result.origin).await,
            destination: endpoint_name(geocoder.as_ref(), result.destination).await,
        }
    } else {
        EndpointNames::default()
    };

    match format {
        OutputFormat::Text => {
            println!("{}", render::text_summary(from, to, &result, &names, &surface));
        },
        OutputFormat::Json => {
            let report = LookupReport {
                from,
                to,
                result: &result,
                style: domain::RouteStyle::for_mode(result.mode()),
                names: &names,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        },
        OutputFormat::Geojson => {
            println!("{}", serde_json::to_string_pretty(&surface.to_geojson())?);
        },
    }

    Ok(ExitCode::SUCCESS)
}

async fn run_geocode(config: &AppConfig, address: &str) -> anyhow::Result<ExitCode> {
    let address = Address::parse(address)?;
    let geocoder = GeocodingAdapter::with_config(&config.geocoding)?;

    match geocoder.geocode(&address).await {
        Ok(coordinate) => {
            println!("📍 {address}: {coordinate}");
            Ok(ExitCode::SUCCESS)
        },
        Err(e) => {
            eprintln!("❌ {e}");
            Ok(ExitCode::FAILURE)
        },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref()).context("loading configuration")?;

    // -v overrides the configured filter
    if cli.verbose > 0 {
        config.logging.log_filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    infrastructure::init_logging(&config.logging)?;

    match cli.command {
        Commands::Lookup {
            from,
            to,
            mode,
            format,
            describe,
        } => run_lookup(&config, &from, &to, mode, format, describe).await,

        Commands::Geocode { address } => run_geocode(&config, &address).await,

        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(ExitCode::SUCCESS)
        },
    }
}
