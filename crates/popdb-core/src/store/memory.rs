// crates/popdb-core/src/store/memory.rs
use crate::common::StoreStats;
use crate::error::{PopError, Result};
use crate::model::{CountryTotal, PopulationRecord};
use crate::traits::{rank_totals, RecordStore};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{RwLock, RwLockReadGuard};

/// In-process store. Records live in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<PopulationRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<PopulationRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A poisoned lock still guards a consistent Vec: writers only push.
    fn read(&self) -> RwLockReadGuard<'_, Vec<PopulationRecord>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl RecordStore for MemoryStore {
    fn insert_records(&self, records: &[PopulationRecord]) -> Result<usize> {
        let mut guard = self.records.write().unwrap_or_else(|e| e.into_inner());
        guard.extend_from_slice(records);
        Ok(records.len())
    }

    fn distinct_countries(&self) -> Result<Vec<String>> {
        let guard = self.read();
        let set: BTreeSet<&str> = guard.iter().map(|r| r.country.as_str()).collect();
        Ok(set.into_iter().map(str::to_owned).collect())
    }

    fn query_by_country(&self, country: &str) -> Result<Vec<PopulationRecord>> {
        let mut out: Vec<PopulationRecord> = self
            .read()
            .iter()
            .filter(|r| r.country == country)
            .cloned()
            .collect();
        // stable: equal years keep insertion order
        out.sort_by_key(|r| r.year);
        Ok(out)
    }

    fn totals_by_country(&self) -> Result<Vec<CountryTotal>> {
        let guard = self.read();
        let mut sums: BTreeMap<&str, u64> = BTreeMap::new();
        for r in guard.iter() {
            let entry = sums.entry(r.country.as_str()).or_default();
            *entry = entry
                .checked_add(r.population)
                // same ceiling as SQLite's integer SUM
                .filter(|sum| i64::try_from(*sum).is_ok())
                .ok_or_else(|| {
                    PopError::InvalidData(format!("total population of `{}` overflows", r.country))
                })?;
        }
        let mut totals: Vec<CountryTotal> = sums
            .into_iter()
            .map(|(country, total)| CountryTotal::new(country, total))
            .collect();
        rank_totals(&mut totals);
        Ok(totals)
    }

    fn stats(&self) -> Result<StoreStats> {
        let guard = self.read();
        let countries: BTreeSet<&str> = guard.iter().map(|r| r.country.as_str()).collect();
        Ok(StoreStats {
            records: guard.len(),
            countries: countries.len(),
            min_year: guard.iter().map(|r| r.year).min(),
            max_year: guard.iter().map(|r| r.year).max(),
        })
    }
}
