mod settings;

use clap::Parser;
use settings::{InputFormat, Settings};
use std::process::ExitCode;
use tour_package_lib::{TourPackager, parse_gpx, parse_kml};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let settings = Settings::parse();

    // Setup logging
    let default_level = if settings.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
    tracing::info!("tour-packager {}", env!("CARGO_PKG_VERSION"));

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Conversion failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> tour_package_lib::Result<()> {
    let packager = TourPackager::new(settings.config())?;

    let bytes = std::fs::read(&settings.input)?;
    let routes = match settings.input_format() {
        InputFormat::Kml => parse_kml(&bytes)?,
        InputFormat::Gpx => parse_gpx(&bytes)?,
    };
    tracing::info!(
        "Read {} route(s) from {}",
        routes.len(),
        settings.input.display()
    );
    if routes.is_empty() {
        tracing::warn!("No routes found, the package will be empty");
    }

    if settings.directory {
        let written = packager.write_to_directory(routes, &settings.output)?;
        for path in &written {
            tracing::info!("Wrote {}", path.display());
        }
    } else {
        let archive = packager.package(routes)?;
        std::fs::write(&settings.output, &archive)?;
        tracing::info!(
            "Wrote {} ({} bytes)",
            settings.output.display(),
            archive.len()
        );
    }
    Ok(())
}
