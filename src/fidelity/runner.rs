use crate::assemble::group_origin;
use crate::config::FidelityConfig;
use crate::scene::{NodeKind, SceneNode};
use crate::types::{
    AxisScore, BlueprintNode, CheckResult, FidelityAxis, FidelityReport, TreeFidelityReport,
};

use super::checks::{PositioningChecker, TypographyChecker, VisualsChecker};
use super::suggestions::generate_suggestions;

/// A source node and the blueprint node built from it.
#[derive(Debug, Clone, Copy)]
pub struct NodePair<'a> {
    pub source: &'a SceneNode,
    pub blueprint: &'a BlueprintNode,
    /// Origin the assembler subtracted when the source parent is a group.
    pub group_origin: Option<(f64, f64)>,
}

impl<'a> NodePair<'a> {
    pub fn new(source: &'a SceneNode, blueprint: &'a BlueprintNode) -> Self {
        Self {
            source,
            blueprint,
            group_origin: None,
        }
    }
}

/// One fidelity axis: a weighted checklist over a node pair.
pub trait AxisChecker {
    fn axis(&self) -> FidelityAxis;
    /// An empty checklist scores 100.
    fn check(&self, pair: &NodePair<'_>, config: &FidelityConfig) -> Vec<CheckResult>;
}

/// The three built-in checkers, in report order.
pub fn default_checkers() -> Vec<Box<dyn AxisChecker>> {
    vec![
        Box::<PositioningChecker>::default(),
        Box::<TypographyChecker>::default(),
        Box::<VisualsChecker>::default(),
    ]
}

/// Weighted pass ratio scaled to 0-100.
pub fn score_checks(checks: &[CheckResult]) -> f64 {
    let total: f64 = checks.iter().map(|c| c.weight).sum();
    if total <= 0.0 {
        return 100.0;
    }
    let passed: f64 = checks.iter().filter(|c| c.passed).map(|c| c.weight).sum();
    passed / total * 100.0
}

pub fn run_checkers(
    checkers: &[Box<dyn AxisChecker>],
    pair: &NodePair<'_>,
    config: &FidelityConfig,
) -> Vec<AxisScore> {
    checkers
        .iter()
        .map(|checker| {
            let checks = checker.check(pair, config);
            AxisScore {
                axis: checker.axis(),
                score: score_checks(&checks),
                checks,
            }
        })
        .collect()
}

/// Score one blueprint node against its source node.
pub fn validate_node(
    source: &SceneNode,
    blueprint: &BlueprintNode,
    config: &FidelityConfig,
) -> FidelityReport {
    validate_pair(&default_checkers(), &NodePair::new(source, blueprint), config)
}

fn validate_pair(
    checkers: &[Box<dyn AxisChecker>],
    pair: &NodePair<'_>,
    config: &FidelityConfig,
) -> FidelityReport {
    let mut scores = run_checkers(checkers, pair, config);
    let mut take = |axis: FidelityAxis| {
        scores
            .iter()
            .position(|s| s.axis == axis)
            .map(|index| scores.swap_remove(index))
            .unwrap_or(AxisScore {
                axis,
                score: 100.0,
                checks: Vec::new(),
            })
    };
    let positioning = take(FidelityAxis::Positioning);
    let typography = take(FidelityAxis::Typography);
    let visuals = take(FidelityAxis::Visuals);

    let overall = (positioning.score + typography.score + visuals.score) / 3.0;
    let suggestions = generate_suggestions(&[&positioning, &typography, &visuals], config);

    FidelityReport {
        node_id: pair.blueprint.id.clone(),
        positioning,
        typography,
        visuals,
        overall,
        pixel_perfect: overall >= config.pixel_perfect_threshold,
        suggestions,
    }
}

/// Score every positionally paired node of two trees.
///
/// Children are paired by index; surplus nodes on either side are left
/// unscored and flagged through `node_count_mismatch`.
pub fn validate_tree(
    source: &SceneNode,
    blueprint: &BlueprintNode,
    config: &FidelityConfig,
) -> TreeFidelityReport {
    let checkers = default_checkers();
    let mut nodes = Vec::new();
    visit(&checkers, NodePair::new(source, blueprint), config, &mut nodes);

    let mean = |axis: fn(&FidelityReport) -> f64| {
        if nodes.is_empty() {
            100.0
        } else {
            nodes.iter().map(axis).sum::<f64>() / nodes.len() as f64
        }
    };
    let positioning = mean(|r| r.positioning.score);
    let typography = mean(|r| r.typography.score);
    let visuals = mean(|r| r.visuals.score);
    let overall = (positioning + typography + visuals) / 3.0;

    let source_nodes = source.count_nodes();
    let blueprint_nodes = blueprint.count_nodes();
    tracing::debug!(
        source_nodes,
        blueprint_nodes,
        overall,
        "tree fidelity computed"
    );

    TreeFidelityReport {
        source_nodes,
        blueprint_nodes,
        node_count_mismatch: source_nodes != blueprint_nodes,
        positioning,
        typography,
        visuals,
        overall,
        pixel_perfect: overall >= config.pixel_perfect_threshold,
        nodes,
    }
}

fn visit(
    checkers: &[Box<dyn AxisChecker>],
    pair: NodePair<'_>,
    config: &FidelityConfig,
    out: &mut Vec<FidelityReport>,
) {
    out.push(validate_pair(checkers, &pair, config));

    let origin = (pair.source.kind == NodeKind::Group)
        .then(|| group_origin(pair.source.children()))
        .flatten();
    for (source, blueprint) in pair
        .source
        .children()
        .iter()
        .zip(pair.blueprint.children.iter())
    {
        let child = NodePair {
            source,
            blueprint,
            group_origin: origin,
        };
        visit(checkers, child, config, out);
    }
}
