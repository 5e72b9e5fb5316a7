//! popdb-cli
//! =========
//!
//! Command-line interface for the `popdb-core` population database.
//!
//! The binary (`popdb`) is the deliverable; this library target only carries
//! the crate overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! popdb --source data/world_population.csv ingest
//! popdb stats
//! popdb series Germany --json
//! popdb visualize Germany
//! popdb serve --bind 127.0.0.1:5000
//! ```
//!
//! Every global flag has an environment fallback: `POPDB_DB`,
//! `POPDB_CHARTS`, `POPDB_SOURCE`, and `POPDB_BIND` for `serve`.
//! Log verbosity follows `RUST_LOG` (default `info`).
#![cfg_attr(docsrs, feature(doc_cfg))]
