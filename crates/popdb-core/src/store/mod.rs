// crates/popdb-core/src/store/mod.rs

//! # Record Store
//!
//! Two backends behind [`crate::RecordStore`]:
//! - [`SqliteStore`]: the persistent store (one table, created if absent).
//! - [`MemoryStore`]: a vector behind a lock, for tests and throwaway runs.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
