// crates/popdb-core/src/config.rs
use crate::loader::LoadOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "world_population.db";
pub const DEFAULT_CHART_DIR: &str = "static";
pub const DEFAULT_SOURCE_PATH: &str = "data/world_population.csv";
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Runtime configuration shared by the CLI and the web surface.
///
/// Defaults match a checkout-relative layout; binaries override individual
/// fields from flags or environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// SQLite database file. Created with its table if absent.
    pub db_path: PathBuf,
    /// Directory receiving generated chart PNGs.
    pub chart_dir: PathBuf,
    /// Tabular source loaded by `ingest` and at server startup.
    pub source_path: PathBuf,
    /// Field delimiter of the source.
    pub delimiter: u8,
    /// Address the web surface listens on.
    pub bind: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            chart_dir: PathBuf::from(DEFAULT_CHART_DIR),
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            delimiter: b',',
            bind: DEFAULT_BIND.to_owned(),
        }
    }
}

impl Settings {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            delimiter: self.delimiter,
        }
    }
}
