//! Raw JSON to [`SceneNode`] decoding.

use serde_json::Value;

use super::api_types::{
    RawColor, RawComponentProperty, RawEffect, RawNode, RawPaint, RawReaction, RawTypeStyle,
};
use super::node::{
    Action, AffineTransform, AutoLayout, ChildLayout, Color, ColorStop, ComponentProperty,
    Constraints, ContainerNode, CornerShape, Corners, Effect, FontName, Frame, InstanceProps,
    LayoutMode, Mixed, NodeBody, NodeKind, Padding, Paint, PaintProps, PaintType, Reaction, Rect,
    SceneNode, ShapeNode, SizeLimits, StrokeProps, TextNode, TextProps, Transition, UnitValue,
    VectorPath,
};

const DEFAULT_FONT_FAMILY: &str = "Inter";
const DEFAULT_FONT_STYLE: &str = "Regular";
const DEFAULT_FONT_SIZE: f64 = 12.0;

impl From<RawNode> for SceneNode {
    fn from(raw: RawNode) -> Self {
        decode_node(raw)
    }
}

/// Decode a raw node tree. Decoding never fails: absent fields take host defaults.
pub fn decode_node(raw: RawNode) -> SceneNode {
    let kind = NodeKind::from_type_name(&raw.node_type);
    let frame = map_frame(&raw);
    let absolute_bounds = raw.absolute_bounding_box.map(|bb| Rect {
        x: bb.x,
        y: bb.y,
        width: bb.width,
        height: bb.height,
    });
    let transform = raw.relative_transform.map(AffineTransform::from_rows);
    let constraints = raw.constraints.as_ref().map(|c| Constraints {
        horizontal: c.horizontal.clone().unwrap_or_else(|| "MIN".to_string()),
        vertical: c.vertical.clone().unwrap_or_else(|| "MIN".to_string()),
    });
    let child_layout = ChildLayout {
        layout_align: raw.layout_align.clone(),
        layout_grow: raw.layout_grow.unwrap_or(0.0),
        layout_positioning: raw.layout_positioning.clone(),
    };
    let size_limits = SizeLimits {
        min_width: raw.min_width,
        max_width: raw.max_width,
        min_height: raw.min_height,
        max_height: raw.max_height,
    };
    let reactions = raw.reactions.iter().map(map_reaction).collect();

    let mut raw = raw;
    let children = std::mem::take(&mut raw.children);

    let body = if kind.is_container() {
        NodeBody::Container(ContainerNode {
            paints: map_paint_props(&raw),
            corners: map_corners(&raw),
            auto_layout: map_auto_layout(&raw),
            clips_content: raw.clips_content.unwrap_or(false),
            instance: (kind == NodeKind::Instance).then(|| map_instance(&raw)),
            children: children.into_iter().map(decode_node).collect(),
        })
    } else if kind == NodeKind::Text {
        NodeBody::Text(TextNode {
            paints: map_paint_props(&raw),
            text: map_text(&raw),
        })
    } else if kind.is_shape() {
        NodeBody::Shape(ShapeNode {
            paints: map_paint_props(&raw),
            corners: map_corners(&raw),
            vector_paths: map_vector_paths(&raw),
        })
    } else {
        NodeBody::Opaque
    };

    SceneNode {
        id: raw.id,
        name: raw.name,
        kind,
        type_name: raw.node_type,
        visible: raw.visible.unwrap_or(true),
        opacity: raw.opacity.unwrap_or(1.0),
        blend_mode: raw
            .blend_mode
            .unwrap_or_else(|| "PASS_THROUGH".to_string()),
        is_mask: raw.is_mask.unwrap_or(false),
        frame,
        absolute_bounds,
        transform,
        constraints,
        child_layout,
        size_limits,
        reactions,
        body,
    }
}

fn map_frame(raw: &RawNode) -> Frame {
    let rel = raw.relative_transform;
    let abs = raw.absolute_bounding_box;
    Frame {
        x: raw
            .x
            .or_else(|| rel.map(|t| t[0][2]))
            .or_else(|| abs.map(|b| b.x))
            .unwrap_or(0.0),
        y: raw
            .y
            .or_else(|| rel.map(|t| t[1][2]))
            .or_else(|| abs.map(|b| b.y))
            .unwrap_or(0.0),
        width: raw
            .width
            .or_else(|| raw.size.map(|s| s.x))
            .or_else(|| abs.map(|b| b.width))
            .unwrap_or(0.0),
        height: raw
            .height
            .or_else(|| raw.size.map(|s| s.y))
            .or_else(|| abs.map(|b| b.height))
            .unwrap_or(0.0),
        rotation: raw.rotation.unwrap_or(0.0),
    }
}

fn map_color(color: &RawColor) -> Color {
    Color {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a.unwrap_or(1.0),
    }
}

pub fn map_paint(paint: &RawPaint) -> Paint {
    Paint {
        kind: PaintType::from_type_name(&paint.paint_type),
        visible: paint.visible.unwrap_or(true),
        opacity: paint.opacity.unwrap_or(1.0),
        blend_mode: paint.blend_mode.clone(),
        color: paint.color.as_ref().map(map_color),
        gradient_stops: paint
            .gradient_stops
            .iter()
            .map(|stop| ColorStop {
                position: stop.position,
                color: map_color(&stop.color),
            })
            .collect(),
        gradient_transform: paint.gradient_transform.map(AffineTransform::from_rows),
        image_hash: paint.image_hash.clone().or_else(|| paint.image_ref.clone()),
        scale_mode: paint.scale_mode.clone(),
    }
}

fn map_effect(effect: &RawEffect) -> Effect {
    Effect {
        kind: effect.effect_type.to_ascii_uppercase(),
        visible: effect.visible.unwrap_or(true),
        radius: effect.radius.unwrap_or(0.0),
        color: effect.color.as_ref().map(map_color),
        offset: effect.offset.map(|o| (o.x, o.y)),
        spread: effect.spread.unwrap_or(0.0),
        blend_mode: effect.blend_mode.clone(),
    }
}

fn map_paint_props(raw: &RawNode) -> PaintProps {
    let style = |key: &str| raw.styles.get(key).cloned();
    PaintProps {
        fills: raw.fills.iter().map(map_paint).collect(),
        strokes: raw.strokes.iter().map(map_paint).collect(),
        effects: raw.effects.iter().map(map_effect).collect(),
        fill_style_id: non_empty(raw.fill_style_id.clone()).or_else(|| style("fill")),
        stroke_style_id: non_empty(raw.stroke_style_id.clone()).or_else(|| style("stroke")),
        effect_style_id: non_empty(raw.effect_style_id.clone()).or_else(|| style("effect")),
        stroke: StrokeProps {
            weight: raw.stroke_weight,
            align: raw.stroke_align.clone(),
            cap: raw.stroke_cap.clone(),
            join: raw.stroke_join.clone(),
            dash_pattern: raw.dash_pattern.clone(),
        },
    }
}

fn map_corners(raw: &RawNode) -> Option<Corners> {
    let uniform = raw.corner_radius.as_ref().and_then(Value::as_f64);
    let per_corner = match (
        raw.top_left_radius,
        raw.top_right_radius,
        raw.bottom_right_radius,
        raw.bottom_left_radius,
    ) {
        (Some(tl), Some(tr), Some(br), Some(bl)) => Some([tl, tr, br, bl]),
        _ => raw.rectangle_corner_radii,
    };

    let shape = match (uniform, per_corner) {
        (Some(r), _) => CornerShape::Uniform(r),
        (None, Some([tl, tr, br, bl])) if tl == tr && tr == br && br == bl => {
            CornerShape::Uniform(tl)
        }
        (None, Some([tl, tr, br, bl])) => CornerShape::PerCorner {
            top_left: tl,
            top_right: tr,
            bottom_right: br,
            bottom_left: bl,
        },
        (None, None) => return None,
    };

    Some(Corners {
        shape,
        smoothing: raw.corner_smoothing,
    })
}

fn map_auto_layout(raw: &RawNode) -> Option<AutoLayout> {
    let mode = raw.layout_mode.as_deref()?;
    Some(AutoLayout {
        mode: LayoutMode::from_name(mode),
        primary_axis_sizing_mode: raw
            .primary_axis_sizing_mode
            .clone()
            .unwrap_or_else(|| "AUTO".to_string()),
        counter_axis_sizing_mode: raw
            .counter_axis_sizing_mode
            .clone()
            .unwrap_or_else(|| "AUTO".to_string()),
        primary_axis_align_items: raw
            .primary_axis_align_items
            .clone()
            .unwrap_or_else(|| "MIN".to_string()),
        counter_axis_align_items: raw
            .counter_axis_align_items
            .clone()
            .unwrap_or_else(|| "MIN".to_string()),
        item_spacing: raw.item_spacing.unwrap_or(0.0),
        counter_axis_spacing: raw.counter_axis_spacing,
        wrap: raw.layout_wrap.clone(),
        padding: Padding {
            top: raw.padding_top.unwrap_or(0.0),
            right: raw.padding_right.unwrap_or(0.0),
            bottom: raw.padding_bottom.unwrap_or(0.0),
            left: raw.padding_left.unwrap_or(0.0),
        },
    })
}

fn map_text(raw: &RawNode) -> TextProps {
    let style = raw.style.clone().unwrap_or_default();

    TextProps {
        characters: raw.characters.clone().unwrap_or_default(),
        font_name: map_font_name(raw.font_name.as_ref(), &style),
        font_size: match raw.font_size.as_ref() {
            Some(Value::Number(n)) => n
                .as_f64()
                .map(Mixed::Value)
                .unwrap_or(Mixed::Value(DEFAULT_FONT_SIZE)),
            Some(_) => Mixed::Mixed,
            None => Mixed::Value(style.font_size.unwrap_or(DEFAULT_FONT_SIZE)),
        },
        font_weight: raw.font_weight.or(style.font_weight),
        line_height: map_line_height(raw.line_height.as_ref(), &style),
        letter_spacing: map_letter_spacing(raw.letter_spacing.as_ref(), &style),
        text_style_id: non_empty(raw.text_style_id.clone())
            .or_else(|| raw.styles.get("text").cloned()),
        text_case: raw.text_case.clone().or(style.text_case),
        text_decoration: raw.text_decoration.clone().or(style.text_decoration),
        align_horizontal: raw
            .text_align_horizontal
            .clone()
            .or(style.text_align_horizontal)
            .unwrap_or_else(|| "LEFT".to_string()),
        align_vertical: raw.text_align_vertical.clone().or(style.text_align_vertical),
        paragraph_spacing: raw
            .paragraph_spacing
            .or(style.paragraph_spacing)
            .unwrap_or(0.0),
        paragraph_indent: raw
            .paragraph_indent
            .or(style.paragraph_indent)
            .unwrap_or(0.0),
        list_spacing: raw.list_spacing.or(style.list_spacing).unwrap_or(0.0),
        auto_resize: raw.text_auto_resize.clone().or(style.text_auto_resize),
        feature_flags: raw.font_feature_flags.unwrap_or(0),
    }
}

fn map_font_name(value: Option<&Value>, style: &RawTypeStyle) -> Mixed<FontName> {
    match value {
        Some(Value::Object(map)) => {
            let family = map.get("family").and_then(Value::as_str);
            let font_style = map.get("style").and_then(Value::as_str);
            match family {
                Some(family) => Mixed::Value(FontName {
                    family: family.to_string(),
                    style: font_style.unwrap_or(DEFAULT_FONT_STYLE).to_string(),
                }),
                None => Mixed::Mixed,
            }
        }
        Some(_) => Mixed::Mixed,
        None => Mixed::Value(FontName {
            family: style
                .font_family
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
            style: style
                .font_style
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_STYLE.to_string()),
        }),
    }
}

fn map_unit_value(value: &Value) -> Option<UnitValue> {
    let map = value.as_object()?;
    let unit = map.get("unit").and_then(Value::as_str)?.to_ascii_uppercase();
    Some(UnitValue {
        unit,
        value: map.get("value").and_then(Value::as_f64),
    })
}

fn map_line_height(value: Option<&Value>, style: &RawTypeStyle) -> Option<UnitValue> {
    if let Some(value) = value {
        return map_unit_value(value);
    }
    match style.line_height_unit.as_deref() {
        Some("FONT_SIZE_%") => Some(UnitValue {
            unit: "PERCENT".to_string(),
            value: style.line_height_percent_font_size,
        }),
        Some("INTRINSIC_%") => Some(UnitValue {
            unit: "AUTO".to_string(),
            value: None,
        }),
        _ => style.line_height_px.map(|px| UnitValue {
            unit: "PIXELS".to_string(),
            value: Some(px),
        }),
    }
}

fn map_letter_spacing(value: Option<&Value>, style: &RawTypeStyle) -> Option<UnitValue> {
    match value {
        Some(Value::Number(n)) => Some(UnitValue {
            unit: "PIXELS".to_string(),
            value: n.as_f64(),
        }),
        Some(other) => map_unit_value(other),
        None => style.letter_spacing.map(|px| UnitValue {
            unit: "PIXELS".to_string(),
            value: Some(px),
        }),
    }
}

fn map_vector_paths(raw: &RawNode) -> Vec<VectorPath> {
    if !raw.vector_paths.is_empty() {
        return raw
            .vector_paths
            .iter()
            .map(|p| VectorPath {
                winding_rule: p.winding_rule.clone().unwrap_or_else(|| "NONZERO".into()),
                data: p.data.clone(),
            })
            .collect();
    }
    raw.fill_geometry
        .iter()
        .map(|p| VectorPath {
            winding_rule: p.winding_rule.clone().unwrap_or_else(|| "NONZERO".into()),
            data: p.path.clone(),
        })
        .collect()
}

fn map_reaction(reaction: &RawReaction) -> Reaction {
    let action = reaction
        .action
        .as_ref()
        .or_else(|| reaction.actions.first())
        .map(|a| Action {
            kind: a.action_type.clone(),
            destination_id: non_empty(a.destination_id.clone()),
            navigation: a.navigation.clone(),
            url: a.url.clone(),
            transition: a.transition.as_ref().map(|t| Transition {
                kind: t.transition_type.clone(),
                duration: t.duration,
                easing: t.easing.as_ref().map(|e| e.easing_type.clone()),
            }),
        });
    Reaction {
        trigger: reaction
            .trigger
            .as_ref()
            .map(|t| t.trigger_type.clone())
            .unwrap_or_else(|| "ON_CLICK".to_string()),
        action,
    }
}

fn map_instance(raw: &RawNode) -> InstanceProps {
    InstanceProps {
        main_component_id: non_empty(raw.main_component_id.clone())
            .or_else(|| non_empty(raw.component_id.clone())),
        component_properties: raw
            .component_properties
            .iter()
            .map(|(name, prop)| map_component_property(name, prop))
            .collect(),
    }
}

fn map_component_property(name: &str, prop: &RawComponentProperty) -> ComponentProperty {
    ComponentProperty {
        name: name.to_string(),
        kind: prop.property_type.clone(),
        value: prop.value.clone(),
        default_value: prop.default_value.clone(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
