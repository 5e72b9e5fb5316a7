use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the record store.
///
/// Returned by [`crate::RecordStore::stats`]. Counts include duplicate
/// `(country, year)` rows, since the store never deduplicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub records: usize,
    pub countries: usize,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
}

/// Outcome of a successful ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReport {
    /// Rows read from the source and inserted into the store.
    pub rows: usize,
    /// Distinct countries seen in this source.
    pub countries: usize,
}
