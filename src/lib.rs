//! popdb-rs
//!
//! Umbrella crate for the workspace. Re-exports [`popdb_core`] so tools and
//! benches living at the workspace root can depend on a single crate.

pub use popdb_core::*;
