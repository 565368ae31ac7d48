use std::path::{Path, PathBuf};
use std::process::ExitCode;

use dbe_lib::{
    validate_tree, BlueprintNode, DbeError, DbeOutput, ExtractionBundle, ValidateOutput,
    DBE_OUTPUT_VERSION,
};
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::load_config;

/// Run the validate command.
pub async fn run_validate(
    config_path: Option<PathBuf>,
    scene: PathBuf,
    blueprint: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output),
    };

    let source = match ExtractionBundle::load(&scene).and_then(ExtractionBundle::into_parts) {
        Ok((_, root)) => root,
        Err(err) => return render_error(err, format, output),
    };
    let blueprint_root = match load_blueprint(&blueprint) {
        Ok(root) => root,
        Err(err) => return render_error(err, format, output),
    };

    let report = validate_tree(&source, &blueprint_root, &config.fidelity);
    tracing::info!(
        overall = report.overall,
        mismatch = report.node_count_mismatch,
        "blueprint validated"
    );

    let body = DbeOutput::Validate(ValidateOutput {
        version: DBE_OUTPUT_VERSION.to_string(),
        report,
    });
    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(DbeError::Config(err.to_string()), format, output);
    }
    ExitCode::SUCCESS
}

/// Accept either a full `dbe extract` output or a bare blueprint tree.
fn load_blueprint(path: &Path) -> Result<BlueprintNode, DbeError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        DbeError::Config(format!("Failed to read blueprint {}: {e}", path.display()))
    })?;
    let value: Value = serde_json::from_str(&contents)?;
    if value.get("mode").is_none() {
        return Ok(serde_json::from_value(value)?);
    }
    match serde_json::from_value(value)? {
        DbeOutput::Extract(out) => Ok(out.root),
        _ => Err(DbeError::Config(format!(
            "{} is not the output of an extract run",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_blueprint_accepts_bare_trees_and_extract_output() {
        let dir = tempfile::tempdir().expect("tempdir");

        let bare = dir.path().join("bare.json");
        std::fs::write(
            &bare,
            r#"{"id":"1:1","name":"Root","type":"FRAME","visible":true,"siblingIndex":0,"hierarchyLevel":0}"#,
        )
        .expect("write bare");
        assert_eq!(load_blueprint(&bare).expect("bare tree").name, "Root");

        let wrapped = dir.path().join("wrapped.json");
        std::fs::write(
            &wrapped,
            r#"{"mode":"extract","version":"0.1.0",
                "source":{"kind":"bundle","value":"scene.json"},
                "root":{"id":"1:1","name":"Wrapped","type":"FRAME","visible":true,"siblingIndex":0,"hierarchyLevel":0},
                "stats":{"nodes":1,"warnings":0}}"#,
        )
        .expect("write wrapped");
        assert_eq!(load_blueprint(&wrapped).expect("extract output").name, "Wrapped");
    }

    #[test]
    fn load_blueprint_rejects_error_outputs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("err.json");
        std::fs::write(
            &path,
            r#"{"mode":"error","version":"0.1.0","error":{"category":"config","message":"x"}}"#,
        )
        .expect("write error output");
        let err = load_blueprint(&path).unwrap_err();
        assert!(err.to_string().contains("not the output of an extract run"));
    }
}
