use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use dbe_lib::error::ErrorCategory;
use dbe_lib::{DbeOutput, ResourceKind};
use tempfile::tempdir;

fn bin_path() -> PathBuf {
    std::env::var("CARGO_BIN_EXE_dbe")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("target")
                .join("debug")
                .join(if cfg!(windows) { "dbe.exe" } else { "dbe" })
        })
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(bin_path());
    cmd.args(args).env_remove("RUST_LOG");
    for (k, v) in envs {
        cmd.env(k, v);
    }
    cmd.output().expect("run dbe")
}

fn parse_output(stdout: &[u8]) -> DbeOutput {
    serde_json::from_slice(stdout).expect("output should be valid JSON")
}

#[test]
fn extract_local_bundle_emits_blueprint_json() {
    let bundle = fixture("card_bundle.json");
    let output = run(&["extract", "--input", bundle.to_str().unwrap()], &[]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    match parse_output(&output.stdout) {
        DbeOutput::Extract(out) => {
            assert_eq!(out.source.kind, ResourceKind::Bundle);
            assert_eq!(out.root.id, "1:1");
            assert_eq!(out.stats.nodes, 5);
            assert_eq!(out.stats.warnings, 1);
            assert!(out.fidelity.is_none());
        }
        other => panic!("expected extract output, got {other:?}"),
    }
}

#[test]
fn extract_with_validate_includes_root_report() {
    let bundle = fixture("card_bundle.json");
    let output = run(
        &["extract", "--input", bundle.to_str().unwrap(), "--validate", "--no-svg"],
        &[],
    );

    assert_eq!(output.status.code(), Some(0));
    match parse_output(&output.stdout) {
        DbeOutput::Extract(out) => {
            let report = out.fidelity.expect("fidelity report");
            assert_eq!(report.node_id, "1:1");
            assert!(report.overall > 0.0);
            assert!(out.root.children[2].children[0].geometry.svg.is_none());
        }
        other => panic!("expected extract output, got {other:?}"),
    }
}

#[test]
fn extract_writes_to_output_file() {
    let dir = tempdir().expect("tempdir");
    let out_path = dir.path().join("blueprint.json");
    let bundle = fixture("card_bundle.json");
    let output = run(
        &[
            "extract",
            "--input",
            bundle.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ],
        &[],
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    let written = std::fs::read(&out_path).expect("read output file");
    assert!(matches!(parse_output(&written), DbeOutput::Extract(_)));
}

#[test]
fn missing_input_file_is_a_config_error() {
    let output = run(&["extract", "--input", "does-not-exist.json"], &[]);

    assert_eq!(output.status.code(), Some(2));
    match parse_output(&output.stdout) {
        DbeOutput::Error(err) => {
            assert_eq!(err.error.category, ErrorCategory::Config);
            assert!(err.error.message.contains("not found"));
        }
        other => panic!("expected error output, got {other:?}"),
    }
}

#[test]
fn malformed_scene_is_a_scene_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").expect("write broken scene");

    let output = run(&["extract", "--input", path.to_str().unwrap()], &[]);
    assert_eq!(output.status.code(), Some(2));
    match parse_output(&output.stdout) {
        DbeOutput::Error(err) => assert_eq!(err.error.category, ErrorCategory::Scene),
        other => panic!("expected error output, got {other:?}"),
    }
}

#[test]
fn figma_url_without_token_reports_remediation() {
    let output = run(
        &[
            "extract",
            "--input",
            "https://www.figma.com/file/ABC123/Design?node-id=1-2",
        ],
        &[("FIGMA_TOKEN", ""), ("FIGMA_OAUTH_TOKEN", "")],
    );

    assert_eq!(output.status.code(), Some(2));
    match parse_output(&output.stdout) {
        DbeOutput::Error(err) => {
            assert_eq!(err.error.category, ErrorCategory::Config);
            assert!(err
                .error
                .remediation
                .unwrap_or_default()
                .contains("FIGMA_TOKEN"));
        }
        other => panic!("expected error output, got {other:?}"),
    }
}

#[test]
fn figma_url_without_node_id_is_rejected() {
    let output = run(
        &["extract", "--input", "https://www.figma.com/file/ABC123/Design"],
        &[("FIGMA_TOKEN", "token")],
    );

    assert_eq!(output.status.code(), Some(2));
    match parse_output(&output.stdout) {
        DbeOutput::Error(err) => assert!(err.error.message.contains("node-id")),
        other => panic!("expected error output, got {other:?}"),
    }
}

#[test]
fn validate_scores_a_previous_extraction() {
    let dir = tempdir().expect("tempdir");
    let blueprint = dir.path().join("blueprint.json");
    let bundle = fixture("card_bundle.json");

    let extract = run(
        &[
            "extract",
            "--input",
            bundle.to_str().unwrap(),
            "--output",
            blueprint.to_str().unwrap(),
        ],
        &[],
    );
    assert_eq!(extract.status.code(), Some(0));

    let output = run(
        &[
            "validate",
            "--scene",
            bundle.to_str().unwrap(),
            "--blueprint",
            blueprint.to_str().unwrap(),
        ],
        &[],
    );
    assert_eq!(output.status.code(), Some(0));
    match parse_output(&output.stdout) {
        DbeOutput::Validate(out) => {
            assert!(!out.report.node_count_mismatch);
            assert_eq!(out.report.nodes.len(), 5);
            assert_eq!(out.report.positioning, 100.0);
        }
        other => panic!("expected validate output, got {other:?}"),
    }
}

#[test]
fn invalid_config_exits_with_error() {
    let dir = tempdir().expect("tempdir");
    let cfg = dir.path().join("dbe.toml");
    std::fs::write(&cfg, "[extraction]\nhost_timeout = \"0s\"\n").expect("write config");
    let bundle = fixture("card_bundle.json");

    let output = run(
        &[
            "extract",
            "--input",
            bundle.to_str().unwrap(),
            "--config",
            cfg.to_str().unwrap(),
        ],
        &[],
    );
    assert_eq!(output.status.code(), Some(2));
    match parse_output(&output.stdout) {
        DbeOutput::Error(err) => assert!(err.error.message.contains("host_timeout")),
        other => panic!("expected error output, got {other:?}"),
    }
}
