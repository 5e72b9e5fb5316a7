// crates/popdb-core/src/loader/raw.rs
use crate::error::{PopError, Result};
use crate::model::PopulationRecord;
use serde::Deserialize;

/// Columns every source must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Country",
    "Year",
    "Population",
    "Male_Percentage",
    "Female_Percentage",
];

/// One row exactly as it appears in the tabular source.
///
/// Typed parsing (integers, floats) happens in serde; the remaining
/// checks live in [`RecordRaw::into_record`].
#[derive(Debug, Deserialize)]
pub struct RecordRaw {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Population")]
    pub population: u64,
    #[serde(rename = "Male_Percentage")]
    pub male_percentage: f64,
    #[serde(rename = "Female_Percentage")]
    pub female_percentage: f64,
}

impl RecordRaw {
    /// Converts the row into a record; `line` is only used for errors.
    pub fn into_record(self, line: u64) -> Result<PopulationRecord> {
        if self.country.is_empty() {
            return Err(PopError::ingestion(line, "empty `Country` field"));
        }
        for (column, value) in [
            ("Male_Percentage", self.male_percentage),
            ("Female_Percentage", self.female_percentage),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(PopError::ingestion(
                    line,
                    format!("`{column}` must be between 0 and 100, got {value}"),
                ));
            }
        }
        Ok(PopulationRecord {
            country: self.country,
            year: self.year,
            population: self.population,
            male_percentage: self.male_percentage,
            female_percentage: self.female_percentage,
        })
    }
}
