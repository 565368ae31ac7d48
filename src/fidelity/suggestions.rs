use crate::config::FidelityConfig;
use crate::types::{AxisScore, FidelityAxis, Suggestion, SuggestionSeverity};

const MAJOR_BELOW: f64 = 50.0;
const MODERATE_BELOW: f64 = 75.0;

fn severity(score: f64) -> SuggestionSeverity {
    if score < MAJOR_BELOW {
        SuggestionSeverity::Major
    } else if score < MODERATE_BELOW {
        SuggestionSeverity::Moderate
    } else {
        SuggestionSeverity::Minor
    }
}

fn advice(axis: FidelityAxis) -> &'static str {
    match axis {
        FidelityAxis::Positioning => "check frame position and size",
        FidelityAxis::Typography => "check font family, size, weight and text metrics",
        FidelityAxis::Visuals => "check fills, strokes, effects and clipping",
    }
}

/// One suggestion per axis scoring below `suggestion_threshold`, most severe
/// first and in axis order within a severity.
pub fn generate_suggestions(scores: &[&AxisScore], config: &FidelityConfig) -> Vec<Suggestion> {
    let mut ranked: Vec<(usize, Suggestion)> = scores
        .iter()
        .filter(|s| s.score < config.suggestion_threshold)
        .map(|s| {
            let failed: Vec<String> = s
                .checks
                .iter()
                .filter(|c| !c.passed)
                .map(|c| match (&c.expected, &c.actual) {
                    (Some(expected), Some(actual)) => {
                        format!("{} (expected {expected}, got {actual})", c.name)
                    }
                    _ => c.name.clone(),
                })
                .collect();
            let message = if failed.is_empty() {
                format!("{} scored {:.1}: {}", s.axis, s.score, advice(s.axis))
            } else {
                format!(
                    "{} scored {:.1}: {}; mismatched {}",
                    s.axis,
                    s.score,
                    advice(s.axis),
                    failed.join(", ")
                )
            };
            let order = FidelityAxis::all()
                .iter()
                .position(|a| *a == s.axis)
                .unwrap_or(usize::MAX);
            (
                order,
                Suggestion {
                    axis: s.axis,
                    severity: severity(s.score),
                    message,
                },
            )
        })
        .collect();

    ranked.sort_by(|(a_order, a), (b_order, b)| {
        b.severity
            .cmp(&a.severity)
            .then_with(|| a_order.cmp(b_order))
    });
    ranked.into_iter().map(|(_, s)| s).collect()
}
