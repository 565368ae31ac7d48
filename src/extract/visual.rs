//! Paints, corners, strokes, effects and compositing flags.

use super::color::{to_hex, to_rgba};
use super::ExtractContext;
use crate::scene::{CornerShape, Corners, Effect, Paint, PaintType, SceneNode};
use crate::types::{
    CornerRadius, EffectValue, GradientStop, PaintKind, PaintValue, StrokeGeometry, Visuals,
};

pub fn extract_visuals(node: &SceneNode, ctx: &ExtractContext<'_>) -> Visuals {
    let mut visuals = Visuals {
        opacity: Some(node.opacity),
        blend_mode: Some(node.blend_mode.clone()),
        is_mask: node.is_mask,
        ..Visuals::default()
    };

    if let Some(paints) = node.paints() {
        let style_name = |id: &Option<String>| {
            id.as_deref()
                .and_then(|id| ctx.snapshot.style_name(id))
                .map(str::to_string)
        };

        visuals.fills = paints.fills.iter().map(paint_value).collect();
        visuals.strokes = paints.strokes.iter().map(paint_value).collect();
        visuals.effects = paints.effects.iter().map(effect_value).collect();
        visuals.fill_style = style_name(&paints.fill_style_id);
        visuals.stroke_style = style_name(&paints.stroke_style_id);
        visuals.effect_style = style_name(&paints.effect_style_id);

        let stroke = &paints.stroke;
        if stroke.weight.is_some() || !paints.strokes.is_empty() {
            visuals.stroke = Some(StrokeGeometry {
                weight: stroke.weight,
                align: stroke.align.clone(),
                cap: stroke.cap.clone(),
                join: stroke.join.clone(),
                dash_pattern: stroke.dash_pattern.clone(),
            });
        }

        visuals.box_shadow = box_shadow(&paints.effects);
        visuals.filter = blur(&paints.effects, "LAYER_BLUR");
        visuals.backdrop_filter = blur(&paints.effects, "BACKGROUND_BLUR");
    }

    if let Some(corners) = node.corners() {
        visuals.corner_radius = Some(corner_radius(corners));
        visuals.corner_smoothing = corners.smoothing;
    }

    if node.clips_content() {
        visuals.clip_path = Some(clip_path(node.corners()));
    }

    visuals
}

fn paint_kind(kind: &PaintType) -> PaintKind {
    match kind {
        PaintType::Solid => PaintKind::Solid,
        PaintType::GradientLinear => PaintKind::LinearGradient,
        PaintType::GradientRadial => PaintKind::RadialGradient,
        PaintType::GradientAngular => PaintKind::AngularGradient,
        PaintType::GradientDiamond => PaintKind::DiamondGradient,
        PaintType::Image => PaintKind::Image,
        PaintType::Video => PaintKind::Video,
        PaintType::Unknown(_) => PaintKind::Unknown,
    }
}

pub fn paint_value(paint: &Paint) -> PaintValue {
    let solid = paint.kind == PaintType::Solid;
    PaintValue {
        kind: paint_kind(&paint.kind),
        visible: paint.visible,
        opacity: paint.opacity,
        blend_mode: paint.blend_mode.clone(),
        color: paint.color.as_ref().filter(|_| solid).map(to_rgba),
        hex: paint.color.as_ref().filter(|_| solid).map(to_hex),
        stops: paint
            .gradient_stops
            .iter()
            .map(|stop| GradientStop {
                position: stop.position,
                color: to_rgba(&stop.color),
            })
            .collect(),
        gradient_transform: paint
            .gradient_transform
            .map(|t| [t.a, t.b, t.c, t.d, t.tx, t.ty]),
        image_hash: paint.image_hash.clone(),
        scale_mode: paint.scale_mode.clone(),
    }
}

fn effect_value(effect: &Effect) -> EffectValue {
    EffectValue {
        kind: effect.kind.clone(),
        visible: effect.visible,
        radius: effect.radius,
        color: effect.color.as_ref().map(to_rgba),
        offset_x: effect.offset.map(|(x, _)| x),
        offset_y: effect.offset.map(|(_, y)| y),
        spread: effect.spread,
        blend_mode: effect.blend_mode.clone(),
    }
}

/// CSS `box-shadow` for the visible drop and inner shadows, in source order.
pub fn box_shadow(effects: &[Effect]) -> Option<String> {
    let shadows: Vec<String> = effects
        .iter()
        .filter(|e| e.visible)
        .filter_map(|e| {
            let inset = match e.kind.as_str() {
                "DROP_SHADOW" => "",
                "INNER_SHADOW" => "inset ",
                _ => return None,
            };
            let (x, y) = e.offset.unwrap_or((0.0, 0.0));
            let color = e
                .color
                .as_ref()
                .map(to_rgba)
                .unwrap_or_else(|| "rgba(0, 0, 0, 0.25)".to_string());
            Some(format!(
                "{inset}{x}px {y}px {}px {}px {color}",
                e.radius, e.spread
            ))
        })
        .collect();
    (!shadows.is_empty()).then(|| shadows.join(", "))
}

fn blur(effects: &[Effect], kind: &str) -> Option<String> {
    effects
        .iter()
        .find(|e| e.visible && e.kind == kind)
        .map(|e| format!("blur({}px)", e.radius))
}

fn corner_radius(corners: &Corners) -> CornerRadius {
    match corners.shape {
        CornerShape::Uniform(r) => CornerRadius::Uniform(r),
        CornerShape::PerCorner {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        } => CornerRadius::PerCorner {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        },
    }
}

/// `inset(0)`, rounded to match the node's corners when it has any.
pub fn clip_path(corners: Option<&Corners>) -> String {
    match corners.map(|c| c.shape) {
        Some(CornerShape::Uniform(r)) if r > 0.0 => format!("inset(0 round {r}px)"),
        Some(CornerShape::PerCorner {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }) => format!(
            "inset(0 round {top_left}px {top_right}px {bottom_right}px {bottom_left}px)"
        ),
        _ => "inset(0)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;
    use crate::host::HostSnapshot;
    use crate::scene::scene_from_value;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn visuals(value: serde_json::Value, snapshot: &HostSnapshot) -> Visuals {
        let node = scene_from_value(value).expect("scene");
        let config = ExtractionConfig::default();
        extract_visuals(&node, &ExtractContext::new(snapshot, &config))
    }

    #[test]
    fn normalizes_solid_and_gradient_paints() {
        let v = visuals(
            json!({
                "id": "1", "type": "RECTANGLE",
                "fills": [
                    {"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0, "a": 0.5}, "opacity": 0.8},
                    {"type": "GRADIENT_LINEAR", "gradientStops": [
                        {"position": 0, "color": {"r": 0, "g": 0, "b": 0, "a": 1}},
                        {"position": 1, "color": {"r": 1, "g": 1, "b": 1, "a": 1}}
                    ]}
                ]
            }),
            &HostSnapshot::new(),
        );

        assert_eq!(v.fills.len(), 2);
        assert_eq!(v.fills[0].kind, PaintKind::Solid);
        assert_eq!(v.fills[0].color.as_deref(), Some("rgba(255, 0, 0, 0.5)"));
        assert_eq!(v.fills[0].hex.as_deref(), Some("#ff0000"));
        assert_eq!(v.fills[0].opacity, 0.8);
        assert_eq!(v.fills[1].kind, PaintKind::LinearGradient);
        assert_eq!(v.fills[1].color, None);
        assert_eq!(
            v.fills[1]
                .stops
                .iter()
                .map(|s| (s.position, s.color.as_str()))
                .collect::<Vec<_>>(),
            vec![(0.0, "rgba(0, 0, 0, 1)"), (1.0, "rgba(255, 255, 255, 1)")]
        );
    }

    #[test]
    fn resolves_style_names_and_leaves_failures_absent() {
        let snapshot = HostSnapshot::new().with_style("S:fill", "Brand/Red");
        let v = visuals(
            json!({"id": "1", "type": "FRAME", "fillStyleId": "S:fill", "strokeStyleId": "S:gone"}),
            &snapshot,
        );
        assert_eq!(v.fill_style.as_deref(), Some("Brand/Red"));
        assert_eq!(v.stroke_style, None);
    }

    #[test]
    fn strokes_effects_and_clip_path() {
        let v = visuals(
            json!({
                "id": "1", "type": "FRAME", "clipsContent": true, "cornerRadius": 8,
                "strokes": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0}}],
                "strokeWeight": 2, "strokeAlign": "INSIDE", "dashPattern": [4, 2],
                "effects": [
                    {"type": "DROP_SHADOW", "radius": 4, "offset": {"x": 0, "y": 2},
                     "color": {"r": 0, "g": 0, "b": 0, "a": 0.25}},
                    {"type": "INNER_SHADOW", "radius": 1, "spread": 1, "visible": false},
                    {"type": "LAYER_BLUR", "radius": 6}
                ],
                "opacity": 0.9, "blendMode": "MULTIPLY"
            }),
            &HostSnapshot::new(),
        );

        let stroke = v.stroke.expect("stroke");
        assert_eq!(stroke.weight, Some(2.0));
        assert_eq!(stroke.align.as_deref(), Some("INSIDE"));
        assert_eq!(stroke.dash_pattern, vec![4.0, 2.0]);
        assert_eq!(v.effects.len(), 3);
        assert_eq!(
            v.box_shadow.as_deref(),
            Some("0px 2px 4px 0px rgba(0, 0, 0, 0.25)")
        );
        assert_eq!(v.filter.as_deref(), Some("blur(6px)"));
        assert_eq!(v.backdrop_filter, None);
        assert_eq!(v.corner_radius, Some(CornerRadius::Uniform(8.0)));
        assert_eq!(v.clip_path.as_deref(), Some("inset(0 round 8px)"));
        assert_eq!(v.opacity, Some(0.9));
        assert_eq!(v.blend_mode.as_deref(), Some("MULTIPLY"));
    }

    #[test]
    fn per_corner_radius_and_plain_clip() {
        let v = visuals(
            json!({"id": "1", "type": "RECTANGLE", "rectangleCornerRadii": [1, 2, 3, 4]}),
            &HostSnapshot::new(),
        );
        assert_eq!(
            v.corner_radius,
            Some(CornerRadius::PerCorner {
                top_left: 1.0,
                top_right: 2.0,
                bottom_right: 3.0,
                bottom_left: 4.0
            })
        );
        assert_eq!(v.clip_path, None);
        assert_eq!(clip_path(None), "inset(0)");
    }

    #[test]
    fn opaque_nodes_keep_compositing_flags_only() {
        let v = visuals(
            json!({"id": "1", "type": "SLICE", "isMask": true}),
            &HostSnapshot::new(),
        );
        assert!(v.fills.is_empty());
        assert!(v.is_mask);
        assert_eq!(v.opacity, Some(1.0));
    }
}
