//! Top-level entry points: commit metadata and dataset-commit metadata.
//!
//! Both are pure functions over the flat input. Neither ever fails; unknown
//! keys are ignored and malformed values degrade to their fallbacks.

use runmeta_core::types::{CommitMetadata, DatasetCommitMetadata};
use runmeta_core::FlatSource;

use crate::diag;
use crate::keys;
use crate::keyspace::group_dataset_versions;
use crate::run::assemble_runs;
use crate::scalar::{get_bool, get_f64, get_i64, get_maybe_bool, get_string, get_timestamp};
use crate::structured::{decode_string_list, get_direct_string_map, get_string_list};

/// Message of the record returned when the agent never reported any runs.
pub const NO_RUN_METADATA_MESSAGE: &str = "No run metadata was returned";

/// Sentinel for resource counters that were not recorded or not parsable.
pub const UNKNOWN_I64: i64 = -1;
pub const UNKNOWN_F64: f64 = -1.0;

/// Decode a commit's flat metadata.
///
/// Without a `runs` key the agent is assumed not to have finished, and a
/// fixed failure record is returned regardless of any other keys. An absent
/// `success` key decodes as `true`.
pub fn decode_commit<S: FlatSource + ?Sized>(src: &S) -> CommitMetadata {
    if !src.contains(keys::RUNS) {
        diag::decoded("commit", src.len(), 0);
        return CommitMetadata {
            success: false,
            message: NO_RUN_METADATA_MESSAGE.to_string(),
            ..Default::default()
        };
    }

    let run_ids = get_string_list(src, keys::RUNS);
    let runs = assemble_runs(src, &run_ids);
    diag::decoded("commit", src.len(), runs.len());

    CommitMetadata {
        submitter_id: get_string(src, keys::AUTHOR, ""),

        success: get_bool(src, keys::SUCCESS, true),
        message: get_string(src, keys::MESSAGE, ""),

        workload_type: get_string(src, keys::WORKLOAD_TYPE, ""),
        workload_image: get_string(src, keys::WORKLOAD_IMAGE, ""),
        workload_image_hash: get_string(src, keys::WORKLOAD_IMAGE_HASH, ""),
        workload_command: get_string_list(src, keys::WORKLOAD_COMMAND),
        workload_environment: get_direct_string_map(src, keys::WORKLOAD_ENVIRONMENT),
        inputs: group_dataset_versions(src, keys::INPUT_DATASET_PREFIX),
        outputs: group_dataset_versions(src, keys::OUTPUT_DATASET_PREFIX),

        exec_logs: get_string_list(src, keys::EXEC_LOGS),
        exec_start: get_timestamp(src, keys::EXEC_START),
        exec_end: get_timestamp(src, keys::EXEC_END),
        exec_cpu_seconds_used: get_f64(src, keys::EXEC_CPU_SECONDS, UNKNOWN_F64),
        exec_peak_ram_bytes: get_i64(src, keys::EXEC_RAM, UNKNOWN_I64),

        runner_name: get_string(src, keys::RUNNER_NAME, ""),
        runner_version: get_string(src, keys::RUNNER_VERSION, ""),
        runner_platform: get_string(src, keys::RUNNER_PLATFORM, ""),
        runner_platform_version: get_string(src, keys::RUNNER_PLATFORM_VERSION, ""),
        runner_cpus: get_string_list(src, keys::RUNNER_CPU),
        runner_gpus: get_string_list(src, keys::RUNNER_GPU),
        runner_ram_bytes: get_i64(src, keys::RUNNER_RAM, UNKNOWN_I64),
        runner_ram_ecc: get_maybe_bool(src, keys::RUNNER_RAM_ECC),

        runs,
    }
}

/// Decode a dataset commit's flat metadata.
///
/// Only `type = dotscience.run-output.v1` is understood; anything else,
/// including no `type` at all, yields an empty record. Run entries whose
/// file list is not valid JSON are left out entirely.
pub fn decode_dataset_commit<S: FlatSource + ?Sized>(src: &S) -> DatasetCommitMetadata {
    let mut out = DatasetCommitMetadata::default();
    if src.get(keys::TYPE) != Some(keys::DATASET_COMMIT_TYPE) {
        diag::decoded("dataset-commit", src.len(), 0);
        return out;
    }

    out.workspace_dot_id = get_string(src, keys::WORKSPACE, "");

    // Exactly `run.<id>.dataset-output-files`; `<id>` may not contain a dot.
    for (rest, value) in src.prefixed(keys::RUN_PREFIX) {
        let Some((run_id, field)) = rest.split_once('.') else {
            continue;
        };
        if field != keys::RUN_DATASET_OUTPUT_FILES {
            continue;
        }
        match decode_string_list(value) {
            Some(files) => {
                out.output_files.insert(run_id.to_string(), files);
            }
            None => diag::fallback(rest, "not a JSON list of strings; run skipped"),
        }
    }

    diag::decoded("dataset-commit", src.len(), out.output_files.len());
    out
}
