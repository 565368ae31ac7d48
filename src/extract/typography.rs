//! Font descriptor, text properties and approximated metrics for text nodes.

use super::text_metrics::{layout_lines, summarize, LineLayout};
use super::{ExtractContext, ExtractError, ExtractResult};
use crate::scene::{Mixed, SceneNode, UnitValue};
use crate::types::{
    Dimension, FontDescriptor, OpenTypeFeatures, TextAlignment, TextSpacing, Typography,
};

/// Style-name keywords checked in order; the first match wins.
/// Not strictly ascending: `extrabold` precedes `bold` so "ExtraBold" is not read as 700.
const WEIGHT_KEYWORDS: &[(&[&str], u16)] = &[
    (&["thin", "hairline"], 100),
    (&["extralight", "ultralight"], 200),
    (&["light"], 300),
    (&["medium"], 500),
    (&["semibold", "demibold"], 600),
    (&["extrabold", "ultrabold"], 800),
    (&["bold"], 700),
    (&["black", "heavy"], 900),
];

const DEFAULT_WEIGHT: u16 = 400;

/// OpenType feature tags and their bit positions in the host's feature flags.
const OPEN_TYPE_FEATURES: &[(&str, u32)] = &[
    ("liga", 0),
    ("clig", 1),
    ("dlig", 2),
    ("hlig", 3),
    ("calt", 4),
    ("kern", 5),
    ("smcp", 8),
    ("c2sc", 9),
    ("pcap", 10),
    ("c2pc", 11),
    ("unic", 12),
    ("titl", 13),
    ("onum", 16),
    ("lnum", 17),
    ("pnum", 18),
    ("tnum", 19),
    ("frac", 20),
    ("afrc", 21),
    ("ordn", 22),
    ("zero", 23),
    ("sinf", 24),
    ("sups", 25),
    ("subs", 26),
    ("salt", 32),
    ("swsh", 33),
    ("case", 34),
];

/// Numeric weight for a font style name such as `"Semi Bold Italic"`.
pub fn font_weight_from_style(style: &str) -> u16 {
    let normalized: String = style
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .collect::<String>()
        .to_ascii_lowercase();

    WEIGHT_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(_, weight)| *weight)
        .unwrap_or(DEFAULT_WEIGHT)
}

/// Decode the low 32 bits of `flags`.
///
/// Features documented at bit 32 and above are listed as unsupported
/// whenever any flag is set; their bits are never tested.
pub fn decode_open_type(flags: u64) -> OpenTypeFeatures {
    let low = flags as u32;
    let mut features = OpenTypeFeatures::default();
    for (tag, bit) in OPEN_TYPE_FEATURES {
        if *bit >= 32 {
            if flags != 0 {
                features.unsupported.push((*tag).to_string());
            }
        } else if low & (1 << bit) != 0 {
            features.enabled.push((*tag).to_string());
        }
    }
    features
}

/// Generic CSS family for `family`.
pub fn generic_fallback(family: &str) -> &'static str {
    let lower = family.to_ascii_lowercase();
    if ["mono", "code", "courier", "consol"]
        .iter()
        .any(|k| lower.contains(k))
    {
        "monospace"
    } else if lower.contains("sans") {
        "sans-serif"
    } else if ["serif", "times", "georgia", "garamond", "playfair", "merriweather"]
        .iter()
        .any(|k| lower.contains(k))
    {
        "serif"
    } else {
        "sans-serif"
    }
}

pub fn font_stack(family: &str) -> String {
    format!("\"{}\", {}", family, generic_fallback(family))
}

fn text_transform(text_case: Option<&str>) -> Option<String> {
    match text_case? {
        "UPPER" => Some("uppercase".to_string()),
        "LOWER" => Some("lowercase".to_string()),
        "TITLE" => Some("capitalize".to_string()),
        _ => None,
    }
}

fn line_height_px(line_height: Option<&UnitValue>, font_size: f64, auto_ratio: f64) -> f64 {
    match line_height {
        Some(UnitValue {
            unit,
            value: Some(v),
        }) if unit == "PIXELS" => *v,
        Some(UnitValue {
            unit,
            value: Some(v),
        }) if unit == "PERCENT" => v / 100.0 * font_size,
        _ => auto_ratio * font_size,
    }
}

fn dimension(value: Option<&UnitValue>, default_unit: &str) -> Dimension {
    match value {
        Some(v) if v.unit == "AUTO" => Dimension {
            value: None,
            unit: "AUTO".to_string(),
        },
        Some(v) => Dimension {
            value: v.value,
            unit: v.unit.clone(),
        },
        None if default_unit == "AUTO" => Dimension {
            value: None,
            unit: "AUTO".to_string(),
        },
        None => Dimension {
            value: Some(0.0),
            unit: default_unit.to_string(),
        },
    }
}

/// `Ok(None)` for nodes without text. Mixed font name or size is an error.
pub fn extract_typography(
    node: &SceneNode,
    ctx: &ExtractContext<'_>,
) -> ExtractResult<Option<Typography>> {
    let Some(text) = node.text() else {
        return Ok(None);
    };

    let font = match &text.font_name {
        Mixed::Value(font) => font,
        Mixed::Mixed => return Err(ExtractError::MixedValue { field: "fontName" }),
    };
    let font_size = match text.font_size {
        Mixed::Value(size) if size.is_finite() && size > 0.0 => size,
        Mixed::Value(size) => {
            return Err(ExtractError::Malformed {
                field: "fontSize",
                reason: format!("expected a positive size, got {size}"),
            })
        }
        Mixed::Mixed => return Err(ExtractError::MixedValue { field: "fontSize" }),
    };

    let line_height = line_height_px(
        text.line_height.as_ref(),
        font_size,
        ctx.config.auto_line_height_ratio,
    );
    let max_width = match text.auto_resize.as_deref() {
        Some("WIDTH_AND_HEIGHT") => f64::INFINITY,
        _ => node.frame.width,
    };
    let lines = layout_lines(
        &text.characters,
        &LineLayout {
            font_size,
            line_height,
            max_width,
            alignment: &text.align_horizontal,
        },
    );

    Ok(Some(Typography {
        font: FontDescriptor {
            family: font.family.clone(),
            size: font_size,
            weight: font_weight_from_style(&font.style),
            style: font.style.clone(),
            line_height: dimension(text.line_height.as_ref(), "AUTO"),
            letter_spacing: dimension(text.letter_spacing.as_ref(), "PIXELS"),
        },
        font_stack: font_stack(&font.family),
        fallback: generic_fallback(&font.family).to_string(),
        font_loaded: ctx.snapshot.font_loaded(font),
        text_style: text
            .text_style_id
            .as_deref()
            .and_then(|id| ctx.snapshot.style_name(id))
            .map(str::to_string),
        content: text.characters.clone(),
        text_case: text.text_case.clone(),
        text_decoration: text.text_decoration.clone(),
        text_transform: text_transform(text.text_case.as_deref()),
        alignment: TextAlignment {
            horizontal: text.align_horizontal.clone(),
            vertical: text.align_vertical.clone(),
        },
        spacing: TextSpacing {
            paragraph: text.paragraph_spacing,
            indent: text.paragraph_indent,
            list: text.list_spacing,
            line: line_height,
        },
        open_type: decode_open_type(text.feature_flags),
        auto_resize: text.auto_resize.clone(),
        metrics: summarize(&lines, font_size, line_height),
        line_boxes: lines,
    }))
}
