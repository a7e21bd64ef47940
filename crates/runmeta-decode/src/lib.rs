#![forbid(unsafe_code)]
//! runmeta-decode: flat key/value metadata → typed commit/run records.
//!
//! Layers (leaf → root):
//! - `scalar`: one string → string/int/float/bool/trinary/enum/timestamp
//! - `structured`: JSON lists and maps, `A@B` references
//! - `keyspace`: `prefix<NAME>` grouping into maps keyed by NAME
//! - `run`: one `RunMetadata` per `run.<id>.` namespace
//! - `commit`: the two public entry points
//!
//! Nothing here returns an error. Malformed input degrades to fixed defaults
//! (enable the `tracing` feature to see where).

mod diag;

pub mod commit;
pub mod keys;
pub mod keyspace;
pub mod run;
pub mod scalar;
pub mod structured;

pub use commit::{decode_commit, decode_dataset_commit, NO_RUN_METADATA_MESSAGE};
pub use run::{assemble_run, assemble_runs};
pub use scalar::parse_timestamp;
