// crates/popdb-core/src/lib.rs

pub mod chart; // Stateless renderers, one call one artifact
pub mod common;
pub mod config;
pub mod distribution;
pub mod error;
pub mod loader; // The public loader
pub mod model;
pub mod report; // Orchestrates a full visualization request
pub mod series;
pub mod store;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{IngestReport, StoreStats};
pub use crate::config::Settings;
pub use crate::distribution::{distribution, Distribution, Slice, TOP_LABELED};
pub use crate::error::{PopError, Result};
pub use crate::loader::{ingest_path, ingest_reader, LoadOptions};
pub use crate::model::{
    ChartPaths, CountryTotal, GenderPoint, GenderSeries, GrowthPoint, GrowthSeries,
    PopulationRecord,
};
pub use crate::report::Visualizer;
pub use crate::series::{gender_series, growth_series};
pub use crate::store::{MemoryStore, SqliteStore};
pub use crate::traits::RecordStore;

pub mod prelude {
    //! popdb prelude: bring the common types and traits into scope.
    pub use crate::{
        distribution, gender_series, growth_series, ingest_path, ChartPaths, CountryTotal,
        Distribution, GrowthSeries, LoadOptions, MemoryStore, PopError, PopulationRecord,
        RecordStore, Result, Settings, SqliteStore, Visualizer,
    };
}
