//! runmeta CLI: decode flat run metadata from a file or stdin.

use clap::{Args, Parser, Subcommand};
use runmeta_core::config::{CliConfig, InputFormat};
use runmeta_core::flat::{parse_json_object, parse_key_value_lines, FlatMap};
use runmeta_core::types::{is_zero_timestamp, CommitMetadata, Timestamp};
use runmeta_decode::{decode_commit, decode_dataset_commit};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "runmeta")]
#[command(about = "Decode flat run-tracking metadata into typed commit records", long_about = None)]
struct Cli {
    /// Log filter (overrides RUNMETA_LOG), e.g. `runmeta_decode=debug`
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct InputArgs {
    /// Path to the flat metadata; `-` or omitted reads stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Input layout: `json` object or `lines` of key=value (overrides config)
    #[arg(short, long)]
    format: Option<InputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode commit metadata and print it as JSON
    Commit {
        #[command(flatten)]
        input: InputArgs,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Decode dataset-commit metadata and print it as JSON
    Dataset {
        #[command(flatten)]
        input: InputArgs,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print a human-readable summary of commit metadata
    Inspect {
        #[command(flatten)]
        input: InputArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    let mut config = CliConfig::from_env();
    if let Some(filter) = cli.log {
        config.log_filter = filter;
    }
    init_tracing(&config.log_filter);

    let result = match cli.command {
        Commands::Commit { input, pretty } => {
            apply_overrides(&mut config, &input, pretty);
            load_input(&input, config.input_format)
                .and_then(|flat| print_json(&decode_commit(&flat), config.pretty))
        }
        Commands::Dataset { input, pretty } => {
            apply_overrides(&mut config, &input, pretty);
            load_input(&input, config.input_format)
                .and_then(|flat| print_json(&decode_dataset_commit(&flat), config.pretty))
        }
        Commands::Inspect { input } => {
            apply_overrides(&mut config, &input, false);
            load_input(&input, config.input_format).map(|flat| {
                print!("{}", render_summary(&decode_commit(&flat)));
            })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Command-line flags win over the environment.
fn apply_overrides(cfg: &mut CliConfig, input: &InputArgs, pretty: bool) {
    if let Some(format) = input.format {
        cfg.input_format = format;
    }
    if pretty {
        cfg.pretty = true;
    }
}

fn load_input(
    input: &InputArgs,
    format: InputFormat,
) -> Result<FlatMap, Box<dyn std::error::Error>> {
    let text = match input.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let flat = parse_flat(&text, format)?;
    tracing::debug!(keys = flat.len(), ?format, "loaded flat metadata");
    Ok(flat)
}

fn parse_flat(text: &str, format: InputFormat) -> runmeta_core::Result<FlatMap> {
    match format {
        InputFormat::Json => parse_json_object(text),
        InputFormat::Lines => parse_key_value_lines(text),
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

fn render_summary(commit: &CommitMetadata) -> String {
    use std::fmt::Write as _;

    let mut s = String::new();
    let status = if commit.success { "succeeded" } else { "failed" };
    let _ = writeln!(s, "Commit {status}");
    if !commit.message.is_empty() {
        let _ = writeln!(s, "  Message: {}", commit.message);
    }
    if !commit.submitter_id.is_empty() {
        let _ = writeln!(s, "  Submitter: {}", commit.submitter_id);
    }
    if !commit.workload_type.is_empty() {
        let _ = writeln!(
            s,
            "  Workload: {} {} {}",
            commit.workload_type,
            commit.workload_image,
            commit.workload_command.join(" ")
        );
    }
    if !commit.runner_name.is_empty() {
        let _ = writeln!(
            s,
            "  Runner: {} on {}",
            commit.runner_name, commit.runner_platform
        );
    }
    let _ = writeln!(
        s,
        "  Exec: {} -> {}",
        fmt_ts(&commit.exec_start),
        fmt_ts(&commit.exec_end)
    );
    for (name, dsv) in &commit.inputs {
        let _ = writeln!(s, "  Input {name}: {}@{}", dsv.id, dsv.version);
    }
    for (name, dsv) in &commit.outputs {
        let _ = writeln!(s, "  Output {name}: {}@{}", dsv.id, dsv.version);
    }
    let _ = writeln!(s, "Runs: {}", commit.runs.len());
    for (i, run) in commit.runs.iter().enumerate() {
        let _ = writeln!(
            s,
            "  {}. {} ({:?}) {} - {} in, {} out",
            i + 1,
            run.run_id,
            run.authority,
            if run.success { "ok" } else { "error" },
            run.workspace_input_files.len()
                + run.dataset_input_files.values().map(Vec::len).sum::<usize>(),
            run.workspace_output_files.len()
                + run.dataset_output_files.values().map(Vec::len).sum::<usize>(),
        );
        if let Some(err) = &run.error_message {
            let _ = writeln!(s, "     error: {err}");
        }
    }
    s
}

fn fmt_ts(ts: &Timestamp) -> String {
    if is_zero_timestamp(ts) {
        "-".to_string()
    } else {
        ts.to_rfc3339()
    }
}
