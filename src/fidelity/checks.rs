//! Built-in per-axis checklists.

use crate::config::FidelityConfig;
use crate::extract::typography::font_weight_from_style;
use crate::scene::Mixed;
use crate::types::{CheckResult, FidelityAxis};

use super::runner::{AxisChecker, NodePair};

const POSITION_WEIGHT: f64 = 25.0;

const FAMILY_WEIGHT: f64 = 30.0;
const SIZE_WEIGHT: f64 = 30.0;
const WEIGHT_WEIGHT: f64 = 20.0;
const METRICS_WEIGHT: f64 = 20.0;

const PAINT_COUNT_WEIGHT: f64 = 25.0;
const BLEND_WEIGHT: f64 = 15.0;
const CLIP_WEIGHT: f64 = 10.0;

fn check(name: &str, weight: f64, passed: bool, expected: String, actual: String) -> CheckResult {
    CheckResult {
        name: name.to_string(),
        weight,
        passed,
        expected: Some(expected),
        actual: Some(actual),
    }
}

/// x, y, width and height within `position_tolerance`.
#[derive(Debug, Default)]
pub struct PositioningChecker;

impl AxisChecker for PositioningChecker {
    fn axis(&self) -> FidelityAxis {
        FidelityAxis::Positioning
    }

    fn check(&self, pair: &NodePair<'_>, config: &FidelityConfig) -> Vec<CheckResult> {
        let frame = &pair.source.frame;
        let (x, y) = match pair.group_origin {
            Some((min_x, min_y)) => ((frame.x - min_x).max(0.0), (frame.y - min_y).max(0.0)),
            None => (frame.x, frame.y),
        };
        let layout = &pair.blueprint.layout;
        [
            ("x", x, layout.x),
            ("y", y, layout.y),
            ("width", frame.width, layout.width),
            ("height", frame.height, layout.height),
        ]
        .into_iter()
        .map(|(name, want, got)| {
            check(
                name,
                POSITION_WEIGHT,
                (want - got).abs() <= config.position_tolerance,
                want.to_string(),
                got.to_string(),
            )
        })
        .collect()
    }
}

/// Font family, size and weight match plus presence of derived metrics.
/// Nodes without text have nothing to check.
#[derive(Debug, Default)]
pub struct TypographyChecker;

impl AxisChecker for TypographyChecker {
    fn axis(&self) -> FidelityAxis {
        FidelityAxis::Typography
    }

    fn check(&self, pair: &NodePair<'_>, _config: &FidelityConfig) -> Vec<CheckResult> {
        let Some(text) = pair.source.text() else {
            return Vec::new();
        };
        let typography = pair.blueprint.typography.as_ref();
        let font = typography.map(|t| &t.font);

        let (family, weight) = match &text.font_name {
            Mixed::Value(f) => (f.family.clone(), font_weight_from_style(&f.style).to_string()),
            Mixed::Mixed => ("mixed".to_string(), "mixed".to_string()),
        };
        let size = match text.font_size {
            Mixed::Value(size) => size.to_string(),
            Mixed::Mixed => "mixed".to_string(),
        };
        let actual_family = font.map(|f| f.family.clone()).unwrap_or_default();
        let actual_size = font.map(|f| f.size.to_string()).unwrap_or_default();
        let actual_weight = font.map(|f| f.weight.to_string()).unwrap_or_default();
        let has_metrics = typography.is_some_and(|t| {
            t.metrics.line_count > 0 && t.metrics.line_height > 0.0
        });

        vec![
            check(
                "fontFamily",
                FAMILY_WEIGHT,
                family == actual_family,
                family,
                actual_family,
            ),
            check(
                "fontSize",
                SIZE_WEIGHT,
                size == actual_size,
                size,
                actual_size,
            ),
            check(
                "fontWeight",
                WEIGHT_WEIGHT,
                weight == actual_weight,
                weight,
                actual_weight,
            ),
            check(
                "metrics",
                METRICS_WEIGHT,
                has_metrics,
                "present".to_string(),
                if has_metrics { "present" } else { "missing" }.to_string(),
            ),
        ]
    }
}

/// Paint list cardinality plus blend-mode and clip-path presence.
#[derive(Debug, Default)]
pub struct VisualsChecker;

impl AxisChecker for VisualsChecker {
    fn axis(&self) -> FidelityAxis {
        FidelityAxis::Visuals
    }

    fn check(&self, pair: &NodePair<'_>, _config: &FidelityConfig) -> Vec<CheckResult> {
        let visuals = &pair.blueprint.visuals;
        let (fills, strokes, effects) = pair
            .source
            .paints()
            .map(|p| (p.fills.len(), p.strokes.len(), p.effects.len()))
            .unwrap_or((0, 0, 0));
        let clips = pair.source.clips_content();
        let clipped = visuals.clip_path.is_some();

        vec![
            count_check("fills", fills, visuals.fills.len()),
            count_check("strokes", strokes, visuals.strokes.len()),
            count_check("effects", effects, visuals.effects.len()),
            check(
                "blendMode",
                BLEND_WEIGHT,
                visuals.blend_mode.is_some(),
                pair.source.blend_mode.clone(),
                visuals.blend_mode.clone().unwrap_or_default(),
            ),
            check(
                "clipPath",
                CLIP_WEIGHT,
                clips == clipped,
                clips.to_string(),
                clipped.to_string(),
            ),
        ]
    }
}

fn count_check(name: &str, expected: usize, actual: usize) -> CheckResult {
    check(
        name,
        PAINT_COUNT_WEIGHT,
        expected == actual,
        expected.to_string(),
        actual.to_string(),
    )
}
