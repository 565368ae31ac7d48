//! Style-token resolution and key categorisation.
//!
//! Style references resolve through the pre-fetched [`HostSnapshot`](crate::host::HostSnapshot);
//! an unresolved id leaves its slot out. Every collected key is then bucketed by
//! [`classify_token_key`].

use super::color::to_hex;
use super::ExtractContext;
use crate::scene::{CornerShape, LayoutMode, PaintType, SceneNode};
use crate::types::{TokenCategory, Tokens};

/// Ordered substring rules. The first rule with a matching needle wins, so a
/// key such as `strokeWeight` lands in colours, not sizing.
const CATEGORY_RULES: &[(&[&str], TokenCategory)] = &[
    (&["color", "fill", "stroke"], TokenCategory::Colors),
    (&["font", "text"], TokenCategory::Typography),
    (&["spacing", "padding", "margin"], TokenCategory::Spacing),
    (&["size", "width", "height"], TokenCategory::Sizing),
    (&["shadow", "effect"], TokenCategory::Shadows),
    (&["border"], TokenCategory::Borders),
    (&["radius"], TokenCategory::Radii),
];

/// Coarse category for a token key, case-insensitive.
pub fn classify_token_key(key: &str) -> TokenCategory {
    let key = key.to_ascii_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| key.contains(n)))
        .map(|(_, category)| *category)
        .unwrap_or(TokenCategory::Other)
}

pub fn extract_tokens(node: &SceneNode, ctx: &ExtractContext<'_>) -> Tokens {
    let mut tokens = Tokens::default();
    let resolve = |id: Option<&str>| id.and_then(|id| ctx.snapshot.style_name(id));

    let mut slots: Vec<(&str, Option<&str>)> = Vec::new();
    if let Some(paints) = node.paints() {
        slots.push(("fill", paints.fill_style_id.as_deref()));
        slots.push(("stroke", paints.stroke_style_id.as_deref()));
        slots.push(("effect", paints.effect_style_id.as_deref()));
    }
    if let Some(text) = node.text() {
        slots.push(("text", text.text_style_id.as_deref()));
    }
    for (slot, id) in slots {
        if let Some(name) = resolve(id) {
            tokens.styles.insert(slot.to_string(), name.to_string());
            insert(&mut tokens, &format!("{slot}Style"), name.to_string());
        }
    }

    for (key, value) in raw_values(node) {
        insert(&mut tokens, key, value);
    }

    tokens
}

fn insert(tokens: &mut Tokens, key: &str, value: String) {
    tokens
        .categories
        .entry(classify_token_key(key))
        .or_default()
        .insert(key.to_string(), value);
}

/// Literal values worth surfacing as token candidates.
fn raw_values(node: &SceneNode) -> Vec<(&'static str, String)> {
    let mut values = Vec::new();

    if let Some(paints) = node.paints() {
        let solid = |paints: &[crate::scene::Paint]| {
            paints
                .iter()
                .filter(|p| p.visible && p.kind == PaintType::Solid)
                .find_map(|p| p.color.as_ref().map(to_hex))
        };
        if let Some(hex) = solid(&paints.fills) {
            values.push(("fillColor", hex));
        }
        if let Some(hex) = solid(&paints.strokes) {
            values.push(("strokeColor", hex));
        }
        if let Some(weight) = paints.stroke.weight.filter(|w| *w > 0.0) {
            values.push(("borderWidth", format!("{weight}px")));
        }
        if let Some(shadow) = super::visual::box_shadow(&paints.effects) {
            values.push(("boxShadow", shadow));
        }
    }

    if let Some(text) = node.text() {
        if let Some(font) = text.font_name.value() {
            values.push(("fontFamily", font.family.clone()));
        }
        if let Some(size) = text.font_size.value() {
            values.push(("fontSize", format!("{size}px")));
        }
    }

    if let Some(al) = node.auto_layout().filter(|al| al.mode != LayoutMode::None) {
        values.push(("itemSpacing", format!("{}px", al.item_spacing)));
        if !al.padding.is_zero() {
            let p = &al.padding;
            values.push((
                "padding",
                format!("{}px {}px {}px {}px", p.top, p.right, p.bottom, p.left),
            ));
        }
    }

    if let Some(corners) = node.corners() {
        if let CornerShape::Uniform(r) = corners.shape {
            if r > 0.0 {
                values.push(("cornerRadius", format!("{r}px")));
            }
        }
    }

    values
}
