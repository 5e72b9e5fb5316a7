// crates/popdb-core/src/error.rs
use thiserror::Error;

/// Errors produced by the population database.
#[derive(Debug, Error)]
pub enum PopError {
    /// The tabular source is malformed: missing column, missing field or an
    /// unparsable value. `line` is the 1-based line in the source file
    /// (the header is line 1).
    #[error("ingestion failed at line {line}: {message}")]
    Ingestion { line: u64, message: String },

    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// A chart could not be produced, e.g. because its series is empty.
    #[error("chart render error: {0}")]
    ChartRender(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source could not be read mid-stream, e.g. a truncated gzip file.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl PopError {
    pub fn ingestion(line: u64, message: impl Into<String>) -> Self {
        PopError::Ingestion {
            line,
            message: message.into(),
        }
    }

    pub fn chart(message: impl Into<String>) -> Self {
        PopError::ChartRender(message.into())
    }

    /// True for errors caused by the caller's input rather than the system.
    pub fn is_input_error(&self) -> bool {
        matches!(self, PopError::Ingestion { .. } | PopError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, PopError>;
