//! popdb: load world population figures and chart them per country
//!
//! Usage examples
//! --------------
//!
//! - Load the source into the database (appends on every run)
//!   $ popdb --source data/world_population.csv ingest
//!
//! - Inspect what is stored
//!   $ popdb stats
//!   $ popdb countries --json
//!
//! - Query one country; accents and case are ignored
//!   $ popdb series curacao
//!   $ popdb distribution Germany
//!
//! - Render the three charts into the chart directory
//!   $ popdb --charts static visualize Germany
//!
//! - Load the source, then serve the web interface
//!   $ popdb serve --bind 127.0.0.1:5000
//!
//! Exit status is 2 when the source is missing or malformed and 1 for any
//! other failure.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use popdb_core::prelude::*;
use popdb_core::IngestReport;
use serde::Serialize;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let input_error = err
                .downcast_ref::<PopError>()
                .is_some_and(PopError::is_input_error);
            if input_error {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let settings = args.settings();
    let store = SqliteStore::open(&settings.db_path)
        .with_context(|| format!("opening database {}", settings.db_path.display()))?;

    match args.command {
        Commands::Ingest => {
            let report = ingest(&store, &settings)?;
            println!(
                "Ingested {} rows for {} countries into {}",
                report.rows,
                report.countries,
                settings.db_path.display()
            );
        }

        Commands::Stats { output } => {
            let stats = store.stats()?;
            if output.json {
                return print_json(&stats);
            }
            println!("Database statistics:");
            println!("  Records: {}", stats.records);
            println!("  Countries: {}", stats.countries);
            match (stats.min_year, stats.max_year) {
                (Some(min), Some(max)) => println!("  Years: {min}-{max}"),
                _ => println!("  Years: none"),
            }
        }

        Commands::Countries { output } => {
            let countries = store.distinct_countries()?;
            if output.json {
                return print_json(&countries);
            }
            for c in countries {
                println!("{c}");
            }
        }

        Commands::Series { country, output } => {
            let viz = Visualizer::new(store, &settings.chart_dir);
            let country = viz.resolve(&country)?;
            let series = growth_series(viz.store(), &country)?;
            if output.json {
                return print_json(&series);
            }
            if series.is_empty() {
                println!("No records for: {country}");
            } else {
                println!("Population of {country}:");
                for p in &series.points {
                    println!("  {}  {:>14}", p.year, p.population);
                }
            }
        }

        Commands::Distribution { country, output } => {
            let viz = Visualizer::new(store, &settings.chart_dir);
            let country = viz.resolve(&country)?;
            let dist = distribution(viz.store(), &country)?;
            if output.json {
                return print_json(&dist);
            }
            for slice in dist.slices() {
                let marker = if slice.country == dist.selected { "*" } else { " " };
                println!(
                    "{marker}{:>4}  {:<32} {:>16}  {}",
                    slice.index + 1,
                    slice.country,
                    slice.total,
                    slice.percent_label().unwrap_or_default()
                );
            }
        }

        Commands::Visualize { country, output } => {
            let viz = Visualizer::new(store, &settings.chart_dir);
            let country = viz.resolve(&country)?;
            let paths = viz.visualize(&country)?;
            if output.json {
                return print_json(&paths);
            }
            println!("Charts for {}:", paths.country);
            for p in paths.iter() {
                println!("  {}", p.display());
            }
        }

        Commands::Serve { no_ingest, .. } => {
            if no_ingest {
                tracing::info!(db = %settings.db_path.display(), "skipping startup ingestion");
            } else {
                ingest(&store, &settings)?;
            }
            let store: Arc<dyn RecordStore> = Arc::new(store);
            let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
            runtime
                .block_on(popdb_web::serve(&settings, store))
                .with_context(|| format!("serving on {}", settings.bind))?;
        }
    }

    Ok(())
}

fn ingest(store: &SqliteStore, settings: &Settings) -> anyhow::Result<IngestReport> {
    ingest_path(store, &settings.source_path, &settings.load_options())
        .with_context(|| format!("ingesting {}", settings.source_path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
