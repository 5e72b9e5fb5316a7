use clap::{Args, Parser, Subcommand};
use popdb_core::Settings;
use std::path::PathBuf;

/// CLI arguments for popdb
#[derive(Debug, Parser)]
#[command(
    name = "popdb",
    version,
    about = "Load world population data into SQLite and chart it per country"
)]
pub struct CliArgs {
    /// SQLite database file (default: world_population.db)
    #[arg(long = "db", env = "POPDB_DB", global = true)]
    pub db: Option<PathBuf>,

    /// Directory for generated chart PNGs (default: static)
    #[arg(long = "charts", env = "POPDB_CHARTS", global = true)]
    pub charts: Option<PathBuf>,

    /// Population source, plain or .gz (default: data/world_population.csv)
    #[arg(short = 's', long = "source", env = "POPDB_SOURCE", global = true)]
    pub source: Option<PathBuf>,

    /// Field delimiter of the source; a single ASCII character or `tab`
    #[arg(short = 'd', long = "delimiter", global = true, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct OutputArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load the source into the database (appends)
    Ingest,

    /// Show a summary of the database contents
    Stats {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List all stored countries
    Countries {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Population by year for one country
    Series {
        /// Country name; accents and case are ignored when matching
        country: String,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Ranked country totals with the labels a pie chart would show
    Distribution {
        /// Country to highlight
        country: String,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render the three charts for one country
    Visualize {
        country: String,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Run the web interface
    Serve {
        /// Listen address (default: 127.0.0.1:5000)
        #[arg(short = 'b', long = "bind", env = "POPDB_BIND")]
        bind: Option<String>,

        /// Skip loading the source at startup
        #[arg(long = "no-ingest")]
        no_ingest: bool,
    },
}

impl CliArgs {
    /// Defaults overridden by whatever flags or env vars were given.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        if let Some(db) = &self.db {
            settings.db_path = db.clone();
        }
        if let Some(charts) = &self.charts {
            settings.chart_dir = charts.clone();
        }
        if let Some(source) = &self.source {
            settings.source_path = source.clone();
        }
        if let Some(delimiter) = self.delimiter {
            settings.delimiter = delimiter;
        }
        if let Commands::Serve {
            bind: Some(bind), ..
        } = &self.command
        {
            settings.bind = bind.clone();
        }
        settings
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(format!("expected a single ASCII character, got `{s}`")),
        },
    }
}
