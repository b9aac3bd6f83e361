use anyhow::Result;
use clap::Parser;
use firewatch_core::{App, AppError, Config, SearchOrigin};
use firewatch_locator::{Coordinate, LocatorError, PointRef};
use std::path::PathBuf;

/// Find the fire station nearest to a position
#[derive(Debug, Parser)]
#[command(name = "firewatch", version)]
struct Args {
    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true, requires = "lon")]
    lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    lon: Option<f64>,

    /// JSON station catalog to search instead of the configured one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    firewatch_core::init()?;
    tracing::info!("Firewatch started");
    tracing::debug!("Arguments: {:?}", args);

    if let Err(e) = run(&args) {
        tracing::error!("Search failed: {}", e);
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: &Args) -> Result<(), AppError> {
    let query = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon).map_err(|source| {
            LocatorError::InvalidCoordinate {
                point: PointRef::Query,
                source,
            }
        })?),
        _ => None,
    };

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(catalog) = &args.catalog {
        config.locator.catalog_path = Some(catalog.to_string_lossy().into_owned());
    }

    let origin = if query.is_some() {
        SearchOrigin::Explicit
    } else {
        SearchOrigin::Home
    };
    config.ensure_valid(origin)?;

    let app = App::with_config(config)?;
    let nearest = match query {
        Some(query) => app.nearest_to(query)?,
        None => app.nearest_to_home()?,
    };

    match nearest {
        Some(m) => {
            let station = m.payload();
            if station.address.is_empty() {
                println!("Nearest fire station: {}", station.name);
            } else {
                println!("Nearest fire station: {} ({})", station.name, station.address);
            }
            println!("Distance: {}", m.distance_label());

            if !app.within_range(&m) {
                println!("Warning: this station is outside the configured range");
            }
        }
        None => println!("No fire stations in catalog"),
    }

    Ok(())
}
