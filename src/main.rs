use clap::{Parser, Subcommand};
use std::process::ExitCode;

use orbitarium::catalog::Catalog;
use orbitarium::scene::{self, Marker, Scene};
use orbitarium::web::{self, Config};

#[derive(Parser)]
#[command(name = "orbitarium")]
#[command(about = "Satellite globe visualization backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the relay and dashboard server
    Serve {
        #[arg(long, default_value = "config.yaml")]
        config: String,
    },
    /// Validate a config file and its satellite catalog
    Validate {
        #[arg(long, default_value = "config.yaml")]
        config: String,
    },
    /// Print a few animation frames for one orbit, without a renderer
    Preview {
        /// Right ascension, degrees
        #[arg(long)]
        ra: f64,
        /// Declination, degrees
        #[arg(long)]
        dec: f64,
        /// Elevation above the surface, km
        #[arg(long)]
        elevation: f64,
        #[arg(long, default_value_t = scene::DEFAULT_ORBIT_SAMPLES)]
        samples: usize,
        #[arg(long, default_value_t = 10)]
        frames: usize,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(&config),
        Commands::Validate { config } => validate(&config),
        Commands::Preview {
            ra,
            dec,
            elevation,
            samples,
            frames,
        } => preview(ra, dec, elevation, samples, frames),
    }
}

fn serve(path: &str) -> ExitCode {
    let config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Runtime error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(web::run_server(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn validate(path: &str) -> ExitCode {
    let config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = config.observer() {
        eprintln!("Config error: {}", e);
        return ExitCode::FAILURE;
    }

    let catalog = match Catalog::from_file(&config.catalog.path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Catalog error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Config is valid ({} catalog entries)", catalog.len());
    for entry in catalog.entries() {
        println!("  {}: {}", entry.norad_id, entry.name);
    }
    ExitCode::SUCCESS
}

fn preview(ra: f64, dec: f64, elevation: f64, samples: usize, frames: usize) -> ExitCode {
    if samples == 0 {
        eprintln!("samples must be positive");
        return ExitCode::FAILURE;
    }

    let path = scene::generate_orbit_points(
        ra,
        dec,
        elevation,
        scene::DEFAULT_ALTITUDE_SCALE,
        samples,
    );

    let mut view = Scene::new();
    view.replace_markers(vec![Marker::new(
        0,
        "#ffffff".to_string(),
        path,
        scene::DEFAULT_TRAIL_LENGTH,
    )]);

    println!(
        "Orbit path: {} samples at ra {} dec {} elevation {} km",
        samples, ra, dec, elevation
    );
    for frame in 1..=frames {
        view.step();
        let marker = &view.markers()[0];
        let pos = marker.position();
        println!(
            "  frame {:>3}: index {:>4} ({:+.4}, {:+.4}, {:+.4}) r {:.4} trail {}",
            frame,
            marker.index(),
            pos.x,
            pos.y,
            pos.z,
            pos.norm(),
            marker.trail().len()
        );
    }
    ExitCode::SUCCESS
}
