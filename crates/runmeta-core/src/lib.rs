#![forbid(unsafe_code)]
//! runmeta-core: record types, the flat-input seam, configs, and errors.
//!
//! Responsibilities:
//! - Define the decoded commit/run records (passive data, serde-ready).
//! - Define `FlatSource`, the read-only view decoders consume.
//! - Load flat maps from JSON objects or `key=value` lines for front-ends.
//!
//! **No decoding logic** here. See `runmeta-decode`.

pub mod config;
pub mod error;
pub mod flat;
pub mod id;
pub mod prelude;
pub mod types;

pub use error::{Error, Result};
pub use flat::{FlatMap, FlatSource};
pub use id::DotId;
