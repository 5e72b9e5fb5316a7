// crates/popdb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression) and turns a delimited
//! source into [`PopulationRecord`]s.
//!
//! Every row is parsed before anything is written, so a malformed source
//! leaves the store untouched. A successful run always appends: loading the
//! same file twice stores every row twice.

use crate::common::IngestReport;
use crate::error::{PopError, Result};
use crate::model::PopulationRecord;
use crate::traits::RecordStore;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

pub mod common_io;
pub mod raw;

pub use raw::{RecordRaw, REQUIRED_COLUMNS};

/// Parsing knobs for the tabular source.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Field delimiter, `b','` by default.
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Reads the source at `path` (plain or `.gz`) into `store`.
pub fn ingest_path<S: RecordStore + ?Sized>(
    store: &S,
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<IngestReport> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "ingesting population source");
    let reader = common_io::open_stream(path)?;
    ingest_reader(store, reader, options)
}

/// Same as [`ingest_path`] for an already opened reader.
pub fn ingest_reader<S: RecordStore + ?Sized, R: Read>(
    store: &S,
    reader: R,
    options: &LoadOptions,
) -> Result<IngestReport> {
    let records = parse_records(reader, options)?;
    let countries = records
        .iter()
        .map(|r| r.country.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    let rows = store.insert_records(&records)?;
    tracing::info!(rows, countries, "ingestion finished");
    Ok(IngestReport { rows, countries })
}

/// Parses every row of `reader`, failing on the first malformed one.
pub fn parse_records<R: Read>(reader: R, options: &LoadOptions) -> Result<Vec<PopulationRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| row_error(e, 1))?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(PopError::ingestion(1, format!("missing column `{column}`")));
        }
    }

    let mut out = Vec::new();
    for (idx, row) in rdr.deserialize::<RecordRaw>().enumerate() {
        // header is line 1; fall back to that when csv has no position
        let fallback = idx as u64 + 2;
        let raw = row.map_err(|e| {
            let line = e.position().map_or(fallback, |p| p.line());
            row_error(e, line)
        })?;
        out.push(raw.into_record(fallback)?);
    }
    tracing::debug!(rows = out.len(), "parsed population source");
    Ok(out)
}

// Read failures are not the source's fault; everything else is.
fn row_error(e: csv::Error, line: u64) -> PopError {
    if e.is_io_error() {
        PopError::Csv(e)
    } else {
        PopError::ingestion(line, e.to_string())
    }
}
