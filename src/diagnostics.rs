//! Warnings accumulated during an extraction pass.
//!
//! Host lookups and extractors never abort the walk; they record a
//! [`Diagnostic`] here instead. Every entry is also emitted through
//! `tracing` so `RUST_LOG` shows the same events live.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

/// Where in the pipeline a diagnostic was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    StyleLookup,
    MainComponent,
    FontLoad,
    SvgExport,
    Visual,
    Typography,
    Geometry,
    Layout,
    Semantic,
    Responsive,
    Interactive,
    Tokens,
    Relationships,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::StyleLookup => "style-lookup",
            Stage::MainComponent => "main-component",
            Stage::FontLoad => "font-load",
            Stage::SvgExport => "svg-export",
            Stage::Visual => "visual",
            Stage::Typography => "typography",
            Stage::Geometry => "geometry",
            Stage::Layout => "layout",
            Stage::Semantic => "semantic",
            Stage::Responsive => "responsive",
            Stage::Interactive => "interactive",
            Stage::Tokens => "tokens",
            Stage::Relationships => "relationships",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub severity: Severity,
    pub node_id: String,
    pub stage: Stage,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, node_id: &str, stage: Stage, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(node = node_id, stage = %stage, "{message}");
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            node_id: node_id.to_string(),
            stage,
            message,
        });
    }

    pub fn info(&mut self, node_id: &str, stage: Stage, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(node = node_id, stage = %stage, "{message}");
        self.entries.push(Diagnostic {
            severity: Severity::Info,
            node_id: node_id.to_string(),
            stage,
            message,
        });
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn warning_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn for_node<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.entries.iter().filter(move |d| d.node_id == node_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_only_warnings() {
        let mut diags = Diagnostics::new();
        diags.warn("1:1", Stage::StyleLookup, "style S:1 not found");
        diags.info("1:2", Stage::SvgExport, "export skipped");

        assert_eq!(diags.len(), 2);
        assert_eq!(diags.warning_count(), 1);
        assert_eq!(diags.for_node("1:2").count(), 1);
    }

    #[test]
    fn serializes_as_plain_list() {
        let mut diags = Diagnostics::new();
        diags.warn("1:1", Stage::FontLoad, "font missing");
        let json = serde_json::to_value(&diags).expect("serialize");

        assert!(json.is_array());
        assert_eq!(json[0]["stage"], "font-load");
        assert_eq!(json[0]["nodeId"], "1:1");
    }
}
