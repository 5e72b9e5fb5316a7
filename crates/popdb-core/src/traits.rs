// crates/popdb-core/src/traits.rs
use crate::common::StoreStats;
use crate::error::Result;
use crate::model::{CountryTotal, PopulationRecord};

/// Repository over population records.
///
/// The store exclusively owns every record. It exposes one write operation
/// ([`RecordStore::insert_records`]) and the read queries the series
/// builders and the distribution aggregator need. There is no update or
/// delete.
///
/// Implementors must be `Send + Sync` so a single store can back the web
/// surface.
pub trait RecordStore: Send + Sync {
    /// Appends `records` to the store and returns how many were written.
    ///
    /// The write is all-or-nothing: on error no record from the batch is
    /// visible.
    fn insert_records(&self, records: &[PopulationRecord]) -> Result<usize>;

    /// Returns every distinct country name.
    ///
    /// Callers must not rely on the order; the bundled backends happen to
    /// return them sorted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use popdb_core::{MemoryStore, PopulationRecord, RecordStore};
    ///
    /// let store = MemoryStore::new();
    /// store
    ///     .insert_records(&[
    ///         PopulationRecord::new("B", 2000, 500, 49.0, 51.0),
    ///         PopulationRecord::new("A", 2000, 100, 50.0, 50.0),
    ///     ])
    ///     .unwrap();
    ///
    /// let countries = store.distinct_countries().unwrap();
    /// assert_eq!(countries.len(), 2);
    /// ```
    fn distinct_countries(&self) -> Result<Vec<String>>;

    /// All records for `country`, ascending by year.
    ///
    /// Records sharing a year keep their insertion order. An unknown country
    /// yields an empty vector, not an error.
    fn query_by_country(&self, country: &str) -> Result<Vec<PopulationRecord>>;

    /// Population summed over all years, one entry per country, descending
    /// by total. Equal totals are ordered alphabetically by country name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use popdb_core::{CountryTotal, MemoryStore, PopulationRecord, RecordStore};
    ///
    /// let store = MemoryStore::new();
    /// store
    ///     .insert_records(&[
    ///         PopulationRecord::new("A", 2000, 100, 50.0, 50.0),
    ///         PopulationRecord::new("A", 2001, 150, 50.0, 50.0),
    ///         PopulationRecord::new("B", 2000, 500, 49.0, 51.0),
    ///     ])
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     store.totals_by_country().unwrap(),
    ///     vec![CountryTotal::new("B", 500), CountryTotal::new("A", 250)]
    /// );
    /// ```
    fn totals_by_country(&self) -> Result<Vec<CountryTotal>>;

    /// Summary counts over the whole store.
    fn stats(&self) -> Result<StoreStats>;
}

impl<S: RecordStore + ?Sized> RecordStore for std::sync::Arc<S> {
    fn insert_records(&self, records: &[PopulationRecord]) -> Result<usize> {
        (**self).insert_records(records)
    }

    fn distinct_countries(&self) -> Result<Vec<String>> {
        (**self).distinct_countries()
    }

    fn query_by_country(&self, country: &str) -> Result<Vec<PopulationRecord>> {
        (**self).query_by_country(country)
    }

    fn totals_by_country(&self) -> Result<Vec<CountryTotal>> {
        (**self).totals_by_country()
    }

    fn stats(&self) -> Result<StoreStats> {
        (**self).stats()
    }
}

/// Orders totals descending, breaking ties alphabetically by country.
///
/// Shared by every backend so the ranking does not depend on the storage
/// engine's default ordering.
pub(crate) fn rank_totals(totals: &mut [CountryTotal]) {
    totals.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.country.cmp(&b.country)));
}
