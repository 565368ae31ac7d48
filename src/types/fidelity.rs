//! Fidelity report types.
//!
//! Reports are derived on demand from a (scene node, blueprint node) pair and
//! are never stored inside the blueprint itself.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FidelityAxis {
    Positioning,
    Typography,
    Visuals,
}

impl FidelityAxis {
    pub const fn all() -> [FidelityAxis; 3] {
        [
            FidelityAxis::Positioning,
            FidelityAxis::Typography,
            FidelityAxis::Visuals,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FidelityAxis::Positioning => "positioning",
            FidelityAxis::Typography => "typography",
            FidelityAxis::Visuals => "visuals",
        }
    }
}

impl fmt::Display for FidelityAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One weighted comparison within an axis checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub name: String,
    pub weight: f64,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisScore {
    pub axis: FidelityAxis,
    /// 0-100.
    pub score: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<CheckResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSeverity {
    Minor,
    Moderate,
    Major,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub axis: FidelityAxis,
    pub severity: SuggestionSeverity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FidelityReport {
    pub node_id: String,
    pub positioning: AxisScore,
    pub typography: AxisScore,
    pub visuals: AxisScore,
    /// Unweighted mean of the three axis scores.
    pub overall: f64,
    pub pixel_perfect: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

/// Aggregate over a positionally paired scene/blueprint tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeFidelityReport {
    pub source_nodes: usize,
    pub blueprint_nodes: usize,
    pub node_count_mismatch: bool,
    pub positioning: f64,
    pub typography: f64,
    pub visuals: f64,
    pub overall: f64,
    pub pixel_perfect: bool,
    pub nodes: Vec<FidelityReport>,
}
