//! End-to-end commit metadata decoding

use chrono::{TimeZone, Utc};
use runmeta::prelude::*;
use runmeta::decode_commit;

const R0: &str = "02ecdc67-c49e-4d76-abe8-1ee13f2884b7";
const R1: &str = "cd351be8-3ba9-4c5e-ad26-429d6d6033de";
const R2: &str = "31df506d-c715-4159-99fd-60bb845d4dec";

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: i64) -> Timestamp {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap() + chrono::Duration::milliseconds(ms)
}

fn input_file(filename: &str, version: &str) -> InputFile {
    InputFile {
        filename: filename.to_string(),
        version: version.to_string(),
    }
}

fn dsv(id: &str, version: &str) -> DatasetVersion {
    DatasetVersion {
        id: DotId::new(id),
        version: version.to_string(),
    }
}

fn thorough_input() -> FlatMap {
    let mut m = FlatMap::new();
    let mut put = |k: String, v: &str| {
        m.insert(k, v.to_string());
    };

    put("type".into(), "dotscience.run.v1");
    put("author".into(), "452342");
    put("date".into(), "1538658370073482093");
    put("workload.type".into(), "command");
    put("workload.image".into(), "busybox");
    put(
        "workload.image.hash".into(),
        "busybox@sha256:2a03a6059f21e150ae84b0973863609494aad70f0a80eaeb64bddd8d92465812",
    );
    put(
        "workload.command".into(),
        r#"["sh","-c","curl http://localhost/testjob.sh | /bin/sh"]"#,
    );
    put("workload.environment".into(), r#"{"DEBUG_MODE": "YES"}"#);
    put(
        "runner.version".into(),
        "Runner=Dotscience Docker Executor rev. 63db3d0 Agent=Dotscience Agent rev. b1acc85",
    );
    put("runner.name".into(), "bob");
    put("runner.platform".into(), "linux");
    put(
        "runner.platform_version".into(),
        "Linux a1bc10a2fb6e 4.14.60 #1-NixOS SMP Fri Aug 3 05:50:45 UTC 2018 x86_64 GNU/Linux",
    );
    put("runner.ram".into(), "16579702784");
    put(
        "runner.cpu".into(),
        r#"["Intel(R) Core(TM) i7-7500U CPU @ 2.70GHz", "Intel(R) Core(TM) i7-7500U CPU @ 2.70GHz"]"#,
    );
    put("exec.start".into(), "20181004T130607.101");
    put("exec.end".into(), "20181004T130610.223");
    put(
        "exec.logs".into(),
        r#"["16204868/agent-stdout.log","16204868/pull-workload-stdout.log","16204868/workload-stdout.log"]"#,
    );
    put("input-dataset.b".into(), "<ID of dot B>@<commit ID of dot B before the run>");
    put("input-dataset.c".into(), "<ID of dot C>@<commit ID of dot C before the run>");
    put("output-dataset.c".into(), "<ID of dot C>@<commit ID of dot C created by this run>");
    put("output-dataset.d".into(), "<ID of dot D>@<commit ID of dot D created by this run>");
    put("runs".into(), &format!(r#"["{R0}", "{R1}", "{R2}"]"#));

    for (id, rms, smoothing, start, end) in [
        (R0, "0.057", "1.0", "20181004T130607.225", "20181004T130608.225"),
        (R1, "0.123", "2", "20181004T130608.579", "20181004T130609.579"),
    ] {
        put(format!("run.{id}.authority"), "workload");
        put(
            format!("run.{id}.input-files"),
            r#"["foo.csv@<some earlier commit ID of workspace dot>"]"#,
        );
        put(
            format!("run.{id}.dataset-input-files.b"),
            r#"["input.csv@<some earlier commit ID of b>"]"#,
        );
        put(
            format!("run.{id}.dataset-input-files.c"),
            r#"["cache.sqlite@<some earlier commit ID of c>"]"#,
        );
        put(format!("run.{id}.output-files"), r#"["log.txt"]"#);
        put(format!("run.{id}.dataset-output-files.c"), r#"["cache.sqlite"]"#);
        put(format!("run.{id}.dataset-output-files.d"), r#"["output.csv"]"#);
        put(format!("run.{id}.summary.rms_error"), rms);
        put(format!("run.{id}.parameters.smoothing"), smoothing);
        put(format!("run.{id}.start"), start);
        put(format!("run.{id}.end"), end);
    }

    put(format!("run.{R2}.authority"), "correction");
    put(
        format!("run.{R2}.description"),
        "File changes were detected that the run metadata did not explain",
    );
    put(format!("run.{R2}.output-files"), r#"["mylibrary.pyc"]"#);
    m
}

#[test]
fn test_commit_top_level_fields() {
    let rm = decode_commit(&thorough_input());

    assert!(rm.success);
    assert!(rm.message.is_empty());
    assert_eq!(rm.submitter_id, "452342");
    assert_eq!(
        rm.workload_command,
        vec!["sh", "-c", "curl http://localhost/testjob.sh | /bin/sh"]
    );
    assert_eq!(rm.workload_type, "command");
    assert_eq!(rm.workload_image, "busybox");
    assert!(rm.workload_image_hash.starts_with("busybox@sha256:2a03a6"));
    assert_eq!(rm.workload_environment.len(), 1);
    assert_eq!(rm.workload_environment["DEBUG_MODE"], "YES");
    assert_eq!(rm.runner_name, "bob");
    assert_eq!(rm.runner_platform, "linux");
    assert!(rm.runner_version.starts_with("Runner=Dotscience"));
    assert!(rm.runner_platform_version.ends_with("GNU/Linux"));
    assert_eq!(rm.runner_ram_bytes, 16_579_702_784);
    assert_eq!(rm.runner_ram_ecc, MaybeBool::Unknown);
    assert_eq!(rm.runner_cpus.len(), 2);
    assert!(rm.runner_gpus.is_empty());
    assert_eq!(rm.exec_start, ts(2018, 10, 4, 13, 6, 7, 101));
    assert_eq!(rm.exec_end, ts(2018, 10, 4, 13, 6, 10, 223));
    assert_eq!(rm.exec_logs.len(), 3);
    assert_eq!(rm.exec_cpu_seconds_used, -1.0);
    assert_eq!(rm.exec_peak_ram_bytes, -1);
}

#[test]
fn test_commit_dataset_versions() {
    let rm = decode_commit(&thorough_input());

    assert_eq!(rm.inputs.len(), 2);
    assert_eq!(
        rm.inputs["b"],
        dsv("<ID of dot B>", "<commit ID of dot B before the run>")
    );
    assert_eq!(
        rm.inputs["c"],
        dsv("<ID of dot C>", "<commit ID of dot C before the run>")
    );
    assert_eq!(rm.outputs.len(), 2);
    assert_eq!(
        rm.outputs["d"],
        dsv("<ID of dot D>", "<commit ID of dot D created by this run>")
    );
}

#[test]
fn test_commit_runs() {
    let rm = decode_commit(&thorough_input());
    assert_eq!(rm.runs.len(), 3);

    let r0 = &rm.runs[0];
    assert_eq!(r0.run_id, R0);
    assert_eq!(r0.authority, RunAuthority::Workload);
    assert!(r0.success);
    assert_eq!(
        r0.workspace_input_files,
        vec![input_file("foo.csv", "<some earlier commit ID of workspace dot>")]
    );
    assert_eq!(
        r0.dataset_input_files["b"],
        vec![input_file("input.csv", "<some earlier commit ID of b>")]
    );
    assert_eq!(
        r0.dataset_input_files["c"],
        vec![input_file("cache.sqlite", "<some earlier commit ID of c>")]
    );
    assert_eq!(r0.workspace_output_files, vec!["log.txt"]);
    assert_eq!(r0.dataset_output_files["c"], vec!["cache.sqlite"]);
    assert_eq!(r0.dataset_output_files["d"], vec!["output.csv"]);
    assert!(r0.labels.is_empty());
    assert_eq!(r0.summary["rms_error"], "0.057");
    assert_eq!(r0.parameters["smoothing"], "1.0");
    assert_eq!(r0.exec_start, ts(2018, 10, 4, 13, 6, 7, 225));
    assert_eq!(r0.exec_end, ts(2018, 10, 4, 13, 6, 8, 225));

    let r1 = &rm.runs[1];
    assert_eq!(r1.run_id, R1);
    assert_eq!(r1.summary["rms_error"], "0.123");
    assert_eq!(r1.parameters["smoothing"], "2");
    assert_eq!(r1.exec_start, ts(2018, 10, 4, 13, 6, 8, 579));
    assert_eq!(r1.exec_end, ts(2018, 10, 4, 13, 6, 9, 579));

    let r2 = &rm.runs[2];
    assert_eq!(r2.run_id, R2);
    assert_eq!(r2.authority, RunAuthority::Correction);
    assert_eq!(
        r2.description,
        "File changes were detected that the run metadata did not explain"
    );
    assert_eq!(r2.workspace_output_files, vec!["mylibrary.pyc"]);
    assert!(r2.workspace_input_files.is_empty());
    assert!(is_zero_timestamp(&r2.exec_start));
}

#[test]
fn test_missing_runs_returns_failure_record() {
    let mut input = thorough_input();
    input.remove("runs");
    let rm = decode_commit(&input);
    assert_eq!(
        rm,
        CommitMetadata {
            success: false,
            message: "No run metadata was returned".to_string(),
            ..Default::default()
        }
    );
}

#[test]
fn test_one_malformed_field_does_not_spoil_the_rest() {
    let mut input = thorough_input();
    input.insert("runner.ram".into(), "not-a-number".into());
    input.insert("exec.start".into(), "yesterday".into());
    input.insert("workload.command".into(), "sh -c".into());
    input.insert(format!("run.{R0}.authority"), "robot".into());
    let rm = decode_commit(&input);

    assert_eq!(rm.runner_ram_bytes, -1);
    assert_eq!(rm.exec_start, zero_timestamp());
    assert!(rm.workload_command.is_empty());
    assert_eq!(rm.runs[0].authority, RunAuthority::Correction);
    assert_eq!(rm.exec_end, ts(2018, 10, 4, 13, 6, 10, 223));
    assert_eq!(rm.runs.len(), 3);
    assert_eq!(rm.submitter_id, "452342");
}

#[test]
fn test_commit_serializes_with_snake_case_names() {
    let rm = decode_commit(&thorough_input());
    let v = serde_json::to_value(&rm).unwrap();
    assert_eq!(v["submitter_id"], "452342");
    assert_eq!(v["runner_ram_bytes"], 16_579_702_784i64);
    assert_eq!(v["inputs"]["b"]["id"], "<ID of dot B>");
    assert_eq!(v["runs"][0]["authority"], "workload");
    assert!(v.get("runner_ram_ecc").is_none());

    let back: CommitMetadata = serde_json::from_value(v).unwrap();
    assert_eq!(back, rm);
}
