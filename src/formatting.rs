use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use dbe_lib::types::{FidelityReport, Suggestion};
use dbe_lib::{DbeError, DbeOutput, ErrorOutput, DBE_OUTPUT_VERSION};

use crate::cli::OutputFormat;

/// Write output in the requested format.
pub fn write_output(
    body: &DbeOutput,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => write_json_output(body, output.as_deref())?,
        OutputFormat::Pretty => write_pretty_output(body, output.as_deref())?,
    };
    Ok(())
}

/// Render an error and return the fatal exit code.
pub fn render_error(err: DbeError, format: OutputFormat, output: Option<PathBuf>) -> ExitCode {
    let error_payload = err.to_payload();
    let payload = DbeOutput::Error(ErrorOutput {
        version: DBE_OUTPUT_VERSION.to_string(),
        message: Some(error_payload.message.clone()),
        error: error_payload,
    });

    match format {
        OutputFormat::Json => {
            let content =
                serde_json::to_string(&payload).unwrap_or_else(|_| "{\"mode\":\"error\"}".into());
            if let Some(path) = output {
                if let Err(write_err) = std::fs::write(&path, &content) {
                    eprintln!("Failed to write error output: {}", write_err);
                    println!("{content}");
                }
            } else {
                println!("{content}");
            }
        }
        OutputFormat::Pretty => {
            if let Err(write_err) = write_pretty_output(&payload, output.as_deref()) {
                eprintln!("Failed to write error output: {}", write_err);
            }
        }
    };

    // Fidelity scores are advisory; only fatal errors leave a non-zero code.
    ExitCode::from(2)
}

/// Write JSON output to file or stdout.
fn write_json_output(
    body: &DbeOutput,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = serde_json::to_string(body)?;
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Write pretty output to file or stdout.
fn write_pretty_output(body: &DbeOutput, output: Option<&Path>) -> io::Result<()> {
    let stdout_is_tty = std::io::stdout().is_terminal();
    let use_human = output.is_none() && stdout_is_tty;

    if use_human {
        let content = format_pretty(body, true);
        println!("{content}");
        return Ok(());
    }

    // Non-tty or file output: keep JSON shape for pipelines/files.
    let content =
        serde_json::to_string_pretty(body).unwrap_or_else(|_| "{\"mode\":\"error\"}".to_string());
    if let Some(path) = output {
        std::fs::write(path, &content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

const MAX_LISTED: usize = 5;

/// Format output for human consumption in a terminal.
pub fn format_pretty(body: &DbeOutput, colorize: bool) -> String {
    let format_score = |score: f64| color(&format!("{:.1}", score), score_color_code(score), colorize);
    let pass_label = |pixel_perfect: bool| {
        if pixel_perfect {
            color("PASS", "32", colorize)
        } else {
            color("FAIL", "31", colorize)
        }
    };

    match body {
        DbeOutput::Extract(out) => {
            let mut buf = String::new();
            let header = color("[EXTRACT]", "36", colorize);
            writeln!(
                buf,
                "{} {} ({})",
                header, out.root.name, out.root.node_type
            )
            .ok();
            let node_suffix = out
                .source
                .node_id
                .as_deref()
                .map(|id| format!(", node {id}"))
                .unwrap_or_default();
            writeln!(
                buf,
                "Source: {} (kind: {:?}{})",
                out.source.value, out.source.kind, node_suffix
            )
            .ok();
            writeln!(
                buf,
                "Nodes: {}  Warnings: {}",
                out.stats.nodes, out.stats.warnings
            )
            .ok();

            let entries = out.diagnostics.entries();
            if !entries.is_empty() {
                writeln!(buf, "Diagnostics (max {MAX_LISTED}):").ok();
                for entry in entries.iter().take(MAX_LISTED) {
                    writeln!(
                        buf,
                        "- [{}] {} {}",
                        entry.stage, entry.node_id, entry.message
                    )
                    .ok();
                }
                if entries.len() > MAX_LISTED {
                    writeln!(buf, "  ... {} more", entries.len() - MAX_LISTED).ok();
                }
            }

            if let Some(report) = &out.fidelity {
                writeln!(
                    buf,
                    "{} Fidelity {}",
                    pass_label(report.pixel_perfect),
                    format_score(report.overall)
                )
                .ok();
                write_axes(&mut buf, report, &format_score);
                write_suggestions(&mut buf, report.suggestions.iter());
            }
            buf
        }
        DbeOutput::Validate(out) => {
            let mut buf = String::new();
            let report = &out.report;
            writeln!(
                buf,
                "{} Blueprint fidelity {}",
                pass_label(report.pixel_perfect),
                format_score(report.overall)
            )
            .ok();
            writeln!(
                buf,
                "Nodes: {} source / {} blueprint",
                report.source_nodes, report.blueprint_nodes
            )
            .ok();
            if report.node_count_mismatch {
                writeln!(
                    buf,
                    "{}",
                    color("Node counts differ; unmatched nodes were skipped", "33", colorize)
                )
                .ok();
            }
            writeln!(buf, "Axes:").ok();
            for (name, score) in [
                ("positioning", report.positioning),
                ("typography", report.typography),
                ("visuals", report.visuals),
            ] {
                writeln!(buf, "- {:12} {}", name, format_score(score)).ok();
            }

            let mut suggestions: Vec<&Suggestion> = report
                .nodes
                .iter()
                .flat_map(|node| node.suggestions.iter())
                .collect();
            suggestions.sort_by(|a, b| b.severity.cmp(&a.severity));
            write_suggestions(&mut buf, suggestions.into_iter());
            buf
        }
        DbeOutput::Error(out) => {
            let mut buf = String::new();
            let header = color("[ERROR]", "31", colorize);
            let message = out
                .message
                .as_deref()
                .unwrap_or_else(|| out.error.message.as_str());
            writeln!(buf, "{} {}", header, message).ok();
            if let Some(remediation) = &out.error.remediation {
                writeln!(buf, "Hint: {}", remediation).ok();
            }
            buf
        }
    }
}

fn write_axes(buf: &mut String, report: &FidelityReport, format_score: &dyn Fn(f64) -> String) {
    writeln!(buf, "Axes:").ok();
    for axis in [&report.positioning, &report.typography, &report.visuals] {
        writeln!(buf, "- {:12} {}", axis.axis.as_str(), format_score(axis.score)).ok();
    }
}

fn write_suggestions<'a>(buf: &mut String, suggestions: impl Iterator<Item = &'a Suggestion>) {
    let top: Vec<&Suggestion> = suggestions.take(MAX_LISTED).collect();
    if top.is_empty() {
        return;
    }
    writeln!(buf, "Suggestions (max {MAX_LISTED}):").ok();
    for suggestion in top {
        writeln!(buf, "- [{:?}] {}", suggestion.severity, suggestion.message).ok();
    }
}

/// Apply ANSI color codes when enabled.
fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// Map a 0-100 score to an ANSI color code.
fn score_color_code(score: f64) -> &'static str {
    if score >= 90.0 {
        "32" // green
    } else if score >= 75.0 {
        "33" // yellow
    } else {
        "31" // red
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbe_lib::error::{ErrorCategory, ErrorPayload};
    use dbe_lib::types::{
        AxisScore, FidelityAxis, SuggestionSeverity, TreeFidelityReport,
    };
    use dbe_lib::{
        BlueprintNode, Diagnostics, ExtractOutput, ExtractStats, ResourceDescriptor,
        ResourceKind, Stage, ValidateOutput,
    };

    fn axis(axis: FidelityAxis, score: f64) -> AxisScore {
        AxisScore {
            axis,
            score,
            checks: Vec::new(),
        }
    }

    fn report(typography: f64, suggestions: Vec<Suggestion>) -> FidelityReport {
        FidelityReport {
            node_id: "1:1".into(),
            positioning: axis(FidelityAxis::Positioning, 100.0),
            typography: axis(FidelityAxis::Typography, typography),
            visuals: axis(FidelityAxis::Visuals, 100.0),
            overall: (200.0 + typography) / 3.0,
            pixel_perfect: typography >= 95.0,
            suggestions,
        }
    }

    #[test]
    fn render_error_always_returns_fatal_exit_code() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("err.json");
        let code = render_error(
            DbeError::Config("boom".to_string()),
            OutputFormat::Json,
            Some(path.clone()),
        );
        assert_eq!(code, ExitCode::from(2));
        let written = std::fs::read_to_string(&path).expect("error output written");
        assert!(written.contains("\"mode\":\"error\""));
        assert!(written.contains("boom"));
    }

    #[test]
    fn format_pretty_summarizes_extraction() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warn("1:2", Stage::StyleLookup, "style S:1 not found");
        let output = DbeOutput::Extract(ExtractOutput {
            version: DBE_OUTPUT_VERSION.to_string(),
            source: ResourceDescriptor {
                kind: ResourceKind::Figma,
                value: "https://www.figma.com/file/K".into(),
                node_id: Some("1:1".into()),
            },
            root: BlueprintNode {
                id: "1:1".into(),
                name: "Card".into(),
                node_type: "FRAME".into(),
                visible: true,
                ..BlueprintNode::default()
            },
            diagnostics,
            stats: ExtractStats {
                nodes: 4,
                warnings: 1,
            },
            fidelity: Some(report(100.0, Vec::new())),
        });

        let pretty = format_pretty(&output, false);
        assert!(pretty.contains("[EXTRACT] Card (FRAME)"));
        assert!(pretty.contains("node 1:1"));
        assert!(pretty.contains("Nodes: 4  Warnings: 1"));
        assert!(pretty.contains("[style-lookup] 1:2 style S:1 not found"));
        assert!(pretty.contains("PASS Fidelity 100.0"));
        assert!(pretty.contains("typography") && pretty.contains("100.0"));
        assert!(!pretty.contains("Suggestions"));
    }

    #[test]
    fn format_pretty_lists_validation_suggestions_by_severity() {
        let minor = Suggestion {
            axis: FidelityAxis::Visuals,
            severity: SuggestionSeverity::Minor,
            message: "visuals minor".into(),
        };
        let major = Suggestion {
            axis: FidelityAxis::Typography,
            severity: SuggestionSeverity::Major,
            message: "typography major".into(),
        };
        let output = DbeOutput::Validate(ValidateOutput {
            version: DBE_OUTPUT_VERSION.to_string(),
            report: TreeFidelityReport {
                source_nodes: 3,
                blueprint_nodes: 2,
                node_count_mismatch: true,
                positioning: 100.0,
                typography: 40.0,
                visuals: 80.0,
                overall: 73.3,
                pixel_perfect: false,
                nodes: vec![report(100.0, vec![minor]), report(40.0, vec![major])],
            },
        });

        let pretty = format_pretty(&output, false);
        assert!(pretty.contains("FAIL Blueprint fidelity 73.3"));
        assert!(pretty.contains("Nodes: 3 source / 2 blueprint"));
        assert!(pretty.contains("Node counts differ"));
        let major_at = pretty.find("typography major").expect("major listed");
        let minor_at = pretty.find("visuals minor").expect("minor listed");
        assert!(major_at < minor_at);
    }

    #[test]
    fn format_pretty_handles_errors() {
        let output = DbeOutput::Error(ErrorOutput {
            version: DBE_OUTPUT_VERSION.to_string(),
            message: Some("bad input".to_string()),
            error: ErrorPayload {
                category: ErrorCategory::Config,
                message: "bad input".to_string(),
                remediation: Some("check flags".to_string()),
            },
        });

        let pretty = format_pretty(&output, false);
        assert!(pretty.contains("[ERROR] bad input"));
        assert!(pretty.contains("Hint: check flags"));
    }

    #[test]
    fn colorized_scores_follow_thresholds() {
        assert_eq!(score_color_code(95.0), "32");
        assert_eq!(score_color_code(80.0), "33");
        assert_eq!(score_color_code(10.0), "31");
        assert_eq!(color("x", "31", true), "\x1b[31mx\x1b[0m");
    }
}
