//! Known key names of the flat metadata format.
//!
//! ```text
//! type, author, message, success
//! workload.type|image|image.hash|command|environment
//! exec.start|end|logs|cpu-seconds|ram
//! runner.name|version|platform|platform_version|cpu|gpu|ram|ram.ecc
//! input-dataset.<name>, output-dataset.<name>     = "<dotID>@<version>"
//! runs                                            = JSON array of run IDs
//! run.<id>.<field>                                = see RUN_* below
//! workspace, run.<id>.dataset-output-files        (dataset commits)
//! ```

pub const TYPE: &str = "type";
pub const AUTHOR: &str = "author";
pub const SUCCESS: &str = "success";
pub const MESSAGE: &str = "message";

pub const WORKLOAD_TYPE: &str = "workload.type";
pub const WORKLOAD_IMAGE: &str = "workload.image";
pub const WORKLOAD_IMAGE_HASH: &str = "workload.image.hash";
pub const WORKLOAD_COMMAND: &str = "workload.command";
pub const WORKLOAD_ENVIRONMENT: &str = "workload.environment";

pub const EXEC_START: &str = "exec.start";
pub const EXEC_END: &str = "exec.end";
pub const EXEC_LOGS: &str = "exec.logs";
pub const EXEC_CPU_SECONDS: &str = "exec.cpu-seconds";
pub const EXEC_RAM: &str = "exec.ram";

pub const RUNNER_NAME: &str = "runner.name";
pub const RUNNER_VERSION: &str = "runner.version";
pub const RUNNER_PLATFORM: &str = "runner.platform";
pub const RUNNER_PLATFORM_VERSION: &str = "runner.platform_version";
pub const RUNNER_CPU: &str = "runner.cpu";
pub const RUNNER_GPU: &str = "runner.gpu";
pub const RUNNER_RAM: &str = "runner.ram";
pub const RUNNER_RAM_ECC: &str = "runner.ram.ecc";

pub const INPUT_DATASET_PREFIX: &str = "input-dataset.";
pub const OUTPUT_DATASET_PREFIX: &str = "output-dataset.";

pub const RUNS: &str = "runs";
pub const RUN_PREFIX: &str = "run.";

// Suffixes under `run.<id>.`
pub const RUN_AUTHORITY: &str = "authority";
pub const RUN_DESCRIPTION: &str = "description";
pub const RUN_WORKLOAD_FILE: &str = "workload-file";
pub const RUN_ERROR: &str = "error";
pub const RUN_START: &str = "start";
pub const RUN_END: &str = "end";
pub const RUN_LABEL_PREFIX: &str = "label.";
pub const RUN_SUMMARY_PREFIX: &str = "summary.";
pub const RUN_PARAMETERS_PREFIX: &str = "parameters.";
pub const RUN_INPUT_FILES: &str = "input-files";
pub const RUN_OUTPUT_FILES: &str = "output-files";
pub const RUN_DATASET_INPUT_FILES_PREFIX: &str = "dataset-input-files.";
pub const RUN_DATASET_OUTPUT_FILES_PREFIX: &str = "dataset-output-files.";
pub const RUN_DATASET_OUTPUT_FILES: &str = "dataset-output-files";

pub const WORKSPACE: &str = "workspace";

/// The only `type` value the dataset-commit decoder recognises.
pub const DATASET_COMMIT_TYPE: &str = "dotscience.run-output.v1";

/// Namespace holding every field of one run.
pub fn run_prefix(run_id: &str) -> String {
    format!("{RUN_PREFIX}{run_id}.")
}
