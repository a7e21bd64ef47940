//! Decoded commit and run records.
//!
//! Pure data containers: every field is always populated (collections default
//! to empty, never absent), and nothing here knows about the flat encoding.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::DotId;

/// UTC timestamp used throughout the records.
pub type Timestamp = DateTime<Utc>;

/// The value a timestamp field takes when nothing usable was recorded.
pub fn zero_timestamp() -> Timestamp {
    Timestamp::default()
}

pub fn is_zero_timestamp(ts: &Timestamp) -> bool {
    *ts == zero_timestamp()
}

/// How a dot is attached when used as a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DotMode {
    Input,
    Output,
    ReadWrite,
}

impl DotMode {
    pub fn reads(self) -> bool {
        matches!(self, DotMode::Input | DotMode::ReadWrite)
    }

    pub fn writes(self) -> bool {
        matches!(self, DotMode::Output | DotMode::ReadWrite)
    }
}

/// A specific version of a specific dot, as used or produced by a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetVersion {
    pub id: DotId,
    pub version: String,
}

/// A file read by a run, with the version of its containing dot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputFile {
    pub filename: String,
    pub version: String,
}

/// Trinary logic value; `Unknown` is distinct from an explicit `False`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaybeBool {
    #[default]
    Unknown,
    True,
    False,
}

impl MaybeBool {
    pub fn is_unknown(&self) -> bool {
        matches!(self, MaybeBool::Unknown)
    }

    pub fn to_option(self) -> Option<bool> {
        match self {
            MaybeBool::Unknown => None,
            MaybeBool::True => Some(true),
            MaybeBool::False => Some(false),
        }
    }
}

/// Who asserted that a run happened.
///
/// Unrecognised or missing values decode as `Correction`, flagging the run
/// for review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunAuthority {
    Workload,
    Derived,
    #[default]
    Correction,
}

/// One execution attempt within a commit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunMetadata {
    pub run_id: String,
    /// Filled in by whoever owns the commit; decoding leaves it empty.
    pub commit_id: String,
    pub authority: RunAuthority,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub workload_file: String,

    /// True iff no error was recorded for this run.
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub workspace_input_files: Vec<InputFile>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub workspace_output_files: Vec<String>,

    /// Keyed by dataset logical name, never by dot ID.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub dataset_input_files: BTreeMap<String, Vec<InputFile>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub dataset_output_files: BTreeMap<String, Vec<String>>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub summary: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, String>,

    pub exec_start: Timestamp,
    pub exec_end: Timestamp,
}

/// Everything recorded about a commit and the runs it contains.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitMetadata {
    pub submitter_id: String,

    pub success: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub workload_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub workload_image: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub workload_image_hash: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub workload_command: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub workload_environment: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub inputs: BTreeMap<String, DatasetVersion>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<String, DatasetVersion>,

    pub exec_logs: Vec<String>,
    pub exec_start: Timestamp,
    pub exec_end: Timestamp,
    /// `-1.0` when unknown.
    pub exec_cpu_seconds_used: f64,
    /// `-1` when unknown.
    pub exec_peak_ram_bytes: i64,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub runner_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub runner_version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub runner_platform: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub runner_platform_version: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub runner_cpus: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub runner_gpus: Vec<String>,
    /// `-1` when unknown.
    pub runner_ram_bytes: i64,
    #[serde(skip_serializing_if = "MaybeBool::is_unknown")]
    pub runner_ram_ecc: MaybeBool,

    pub runs: Vec<RunMetadata>,
}

impl CommitMetadata {
    /// Runs that recorded an error.
    pub fn failed_runs(&self) -> impl Iterator<Item = &RunMetadata> {
        self.runs.iter().filter(|r| !r.success)
    }
}

/// Result of a commit on a dataset dot that a workspace run wrote into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetCommitMetadata {
    /// Workspace dot in which the run IDs of `output_files` can be found.
    pub workspace_dot_id: String,

    /// Run ID → filenames that run modified in this dataset.
    pub output_files: BTreeMap<String, Vec<String>>,
}
