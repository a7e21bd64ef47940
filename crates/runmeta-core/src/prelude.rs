//! Convenient re-exports for downstream crates.

pub use crate::config::{CliConfig, InputFormat};
pub use crate::error::{Error, Result};
pub use crate::flat::{parse_json_object, parse_key_value_lines, FlatMap, FlatSource};
pub use crate::id::DotId;
pub use crate::types::{
    is_zero_timestamp, zero_timestamp, CommitMetadata, DatasetCommitMetadata, DatasetVersion,
    DotMode, InputFile, MaybeBool, RunAuthority, RunMetadata, Timestamp,
};
