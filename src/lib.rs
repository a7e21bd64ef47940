#![forbid(unsafe_code)]
//! runmeta: decode flat run-tracking metadata into typed commit records.
//!
//! Facade over the workspace crates:
//! - `runmeta-core`: record types, `FlatSource`, loaders, config, errors
//! - `runmeta-decode`: the decoders
//!
//! ```
//! use runmeta::prelude::*;
//!
//! let mut flat = FlatMap::new();
//! flat.insert("runs".into(), r#"["r1"]"#.into());
//! flat.insert("run.r1.authority".into(), "workload".into());
//!
//! let commit = runmeta::decode_commit(&flat);
//! assert!(commit.success);
//! assert_eq!(commit.runs[0].authority, RunAuthority::Workload);
//! ```

pub use runmeta_core;
pub use runmeta_decode;

pub use runmeta_core::prelude;
pub use runmeta_decode::{decode_commit, decode_dataset_commit};
