//! Builds `RunMetadata` records from the `run.<id>.` namespaces.

use runmeta_core::types::RunMetadata;
use runmeta_core::FlatSource;

use crate::keys::{self, run_prefix};
use crate::keyspace::{group_input_files, group_string_lists, group_strings};
use crate::scalar::{get_optional_string, get_run_authority, get_string, get_timestamp};
use crate::structured::{get_input_files, get_string_list};

/// One record per ID, in the given order. Duplicates are not collapsed.
pub fn assemble_runs<S: FlatSource + ?Sized>(src: &S, run_ids: &[String]) -> Vec<RunMetadata> {
    run_ids.iter().map(|id| assemble_run(src, id)).collect()
}

pub fn assemble_run<S: FlatSource + ?Sized>(src: &S, run_id: &str) -> RunMetadata {
    let prefix = run_prefix(run_id);
    let key = |field: &str| format!("{prefix}{field}");

    let error_message = get_optional_string(src, &key(keys::RUN_ERROR));

    RunMetadata {
        run_id: run_id.to_string(),
        commit_id: String::new(),
        authority: get_run_authority(src, &key(keys::RUN_AUTHORITY)),
        description: get_string(src, &key(keys::RUN_DESCRIPTION), ""),
        workload_file: get_string(src, &key(keys::RUN_WORKLOAD_FILE), ""),
        success: error_message.is_none(),
        error_message,
        workspace_input_files: get_input_files(src, &key(keys::RUN_INPUT_FILES)),
        workspace_output_files: get_string_list(src, &key(keys::RUN_OUTPUT_FILES)),
        dataset_input_files: group_input_files(src, &key(keys::RUN_DATASET_INPUT_FILES_PREFIX)),
        dataset_output_files: group_string_lists(
            src,
            &key(keys::RUN_DATASET_OUTPUT_FILES_PREFIX),
        ),
        labels: group_strings(src, &key(keys::RUN_LABEL_PREFIX)),
        summary: group_strings(src, &key(keys::RUN_SUMMARY_PREFIX)),
        parameters: group_strings(src, &key(keys::RUN_PARAMETERS_PREFIX)),
        exec_start: get_timestamp(src, &key(keys::RUN_START)),
        exec_end: get_timestamp(src, &key(keys::RUN_END)),
    }
}
