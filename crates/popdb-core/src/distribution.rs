// crates/popdb-core/src/distribution.rs

//! # Distribution Aggregator
//!
//! Ranks countries by population summed over all years and decides which
//! pie slices get a visible label. The result is two parallel vectors,
//! `totals` and `labels`, with identical length and order. The chart reads
//! them by index, so neither may be reordered on its own.

use crate::error::Result;
use crate::model::CountryTotal;
use crate::traits::RecordStore;
use serde::Serialize;

/// How many of the largest countries are always labeled.
pub const TOP_LABELED: usize = 5;

/// Ranked totals plus their display labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub selected: String,
    pub totals: Vec<CountryTotal>,
    /// Country name for labeled slices, empty string for suppressed ones.
    pub labels: Vec<String>,
}

/// One pie slice, as seen by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice<'a> {
    pub index: usize,
    pub country: &'a str,
    pub total: u64,
    pub label: &'a str,
    /// Share of the grand total in `[0, 1]`.
    pub fraction: f64,
}

impl Slice<'_> {
    /// Percentage annotation, only for labeled slices.
    pub fn percent_label(&self) -> Option<String> {
        if self.label.is_empty() {
            None
        } else {
            Some(format!("{:.1}%", self.fraction * 100.0))
        }
    }
}

impl Distribution {
    /// Builds labels for already ranked `totals`.
    ///
    /// `totals` must be sorted the way [`RecordStore::totals_by_country`]
    /// returns them; the first [`TOP_LABELED`] entries count as the top.
    pub fn from_totals(totals: Vec<CountryTotal>, selected: &str) -> Self {
        let labels = totals
            .iter()
            .enumerate()
            .map(|(index, t)| {
                if index < TOP_LABELED || t.country == selected {
                    t.country.clone()
                } else {
                    String::new()
                }
            })
            .collect();

        Self {
            selected: selected.to_owned(),
            totals,
            labels,
        }
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn grand_total(&self) -> u64 {
        self.totals
            .iter()
            .fold(0u64, |acc, t| acc.saturating_add(t.total))
    }

    /// Slices in ranked order, each carrying its own index.
    pub fn slices(&self) -> impl Iterator<Item = Slice<'_>> + '_ {
        let grand = self.grand_total();
        self.totals
            .iter()
            .zip(&self.labels)
            .enumerate()
            .map(move |(index, (t, label))| Slice {
                index,
                country: &t.country,
                total: t.total,
                label,
                fraction: if grand == 0 {
                    0.0
                } else {
                    t.total as f64 / grand as f64
                },
            })
    }

    /// Countries that end up with a visible label, in ranked order.
    pub fn labeled_countries(&self) -> Vec<&str> {
        self.labels
            .iter()
            .filter(|l| !l.is_empty())
            .map(String::as_str)
            .collect()
    }
}

/// Queries the store and builds the [`Distribution`] for `selected`.
pub fn distribution<S: RecordStore + ?Sized>(store: &S, selected: &str) -> Result<Distribution> {
    let totals = store.totals_by_country()?;
    tracing::debug!(countries = totals.len(), selected, "built country distribution");
    Ok(Distribution::from_totals(totals, selected))
}
