//! Raw scene JSON types.
//!
//! Accepts both the plugin-style node dump (flat `x`/`width`, `fontName`,
//! `fillStyleId`) and the REST shape (`absoluteBoundingBox`, `style`,
//! `styles`, `componentId`). Every field is optional so a partial export
//! still decodes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub node_type: String,
    pub visible: Option<bool>,
    pub opacity: Option<f64>,
    pub blend_mode: Option<String>,
    pub is_mask: Option<bool>,

    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub size: Option<RawVector>,
    pub absolute_bounding_box: Option<RawRect>,
    pub relative_transform: Option<[[f64; 3]; 2]>,
    pub constraints: Option<RawConstraints>,

    pub layout_align: Option<String>,
    pub layout_grow: Option<f64>,
    pub layout_positioning: Option<String>,
    pub min_width: Option<f64>,
    pub max_width: Option<f64>,
    pub min_height: Option<f64>,
    pub max_height: Option<f64>,

    #[serde(default, deserialize_with = "lenient_list")]
    pub fills: Vec<RawPaint>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub strokes: Vec<RawPaint>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub effects: Vec<RawEffect>,
    pub fill_style_id: Option<String>,
    pub stroke_style_id: Option<String>,
    pub effect_style_id: Option<String>,
    pub text_style_id: Option<String>,
    /// REST style bindings keyed by `fill`/`stroke`/`effect`/`text`.
    #[serde(default)]
    pub styles: HashMap<String, String>,
    pub stroke_weight: Option<f64>,
    pub stroke_align: Option<String>,
    pub stroke_cap: Option<String>,
    pub stroke_join: Option<String>,
    #[serde(default)]
    pub dash_pattern: Vec<f64>,

    /// A number, or a marker string when corners differ.
    pub corner_radius: Option<Value>,
    pub top_left_radius: Option<f64>,
    pub top_right_radius: Option<f64>,
    pub bottom_right_radius: Option<f64>,
    pub bottom_left_radius: Option<f64>,
    pub rectangle_corner_radii: Option<[f64; 4]>,
    pub corner_smoothing: Option<f64>,
    pub clips_content: Option<bool>,

    pub layout_mode: Option<String>,
    pub primary_axis_sizing_mode: Option<String>,
    pub counter_axis_sizing_mode: Option<String>,
    pub primary_axis_align_items: Option<String>,
    pub counter_axis_align_items: Option<String>,
    pub item_spacing: Option<f64>,
    pub counter_axis_spacing: Option<f64>,
    pub layout_wrap: Option<String>,
    pub padding_left: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_top: Option<f64>,
    pub padding_bottom: Option<f64>,

    pub characters: Option<String>,
    pub font_name: Option<Value>,
    pub font_size: Option<Value>,
    pub font_weight: Option<f64>,
    pub line_height: Option<Value>,
    pub letter_spacing: Option<Value>,
    pub style: Option<RawTypeStyle>,
    pub text_case: Option<String>,
    pub text_decoration: Option<String>,
    pub text_align_horizontal: Option<String>,
    pub text_align_vertical: Option<String>,
    pub paragraph_spacing: Option<f64>,
    pub paragraph_indent: Option<f64>,
    pub list_spacing: Option<f64>,
    pub text_auto_resize: Option<String>,
    pub font_feature_flags: Option<u64>,

    #[serde(default)]
    pub vector_paths: Vec<RawVectorPath>,
    #[serde(default)]
    pub fill_geometry: Vec<RawGeometryPath>,

    #[serde(default)]
    pub reactions: Vec<RawReaction>,

    pub main_component_id: Option<String>,
    pub component_id: Option<String>,
    #[serde(default)]
    pub component_properties: BTreeMap<String, RawComponentProperty>,

    #[serde(default)]
    pub children: Vec<RawNode>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct RawVector {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConstraints {
    pub horizontal: Option<String>,
    pub vertical: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct RawColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawColorStop {
    pub position: f64,
    pub color: RawColor,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPaint {
    #[serde(rename = "type")]
    pub paint_type: String,
    pub visible: Option<bool>,
    pub opacity: Option<f64>,
    pub blend_mode: Option<String>,
    pub color: Option<RawColor>,
    #[serde(default)]
    pub gradient_stops: Vec<RawColorStop>,
    pub gradient_transform: Option<[[f64; 3]; 2]>,
    pub image_hash: Option<String>,
    pub image_ref: Option<String>,
    pub scale_mode: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEffect {
    #[serde(rename = "type")]
    pub effect_type: String,
    pub visible: Option<bool>,
    pub radius: Option<f64>,
    pub color: Option<RawColor>,
    pub offset: Option<RawVector>,
    pub spread: Option<f64>,
    pub blend_mode: Option<String>,
}

/// REST typography block.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTypeStyle {
    pub font_family: Option<String>,
    pub font_post_script_name: Option<String>,
    pub font_style: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    pub line_height_px: Option<f64>,
    pub line_height_percent_font_size: Option<f64>,
    pub line_height_unit: Option<String>,
    pub letter_spacing: Option<f64>,
    pub text_case: Option<String>,
    pub text_decoration: Option<String>,
    pub text_align_horizontal: Option<String>,
    pub text_align_vertical: Option<String>,
    pub paragraph_spacing: Option<f64>,
    pub paragraph_indent: Option<f64>,
    pub list_spacing: Option<f64>,
    pub text_auto_resize: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVectorPath {
    pub winding_rule: Option<String>,
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGeometryPath {
    #[serde(default)]
    pub path: String,
    pub winding_rule: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReaction {
    pub trigger: Option<RawTrigger>,
    pub action: Option<RawAction>,
    #[serde(default)]
    pub actions: Vec<RawAction>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawTrigger {
    #[serde(rename = "type")]
    pub trigger_type: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub destination_id: Option<String>,
    pub navigation: Option<String>,
    pub url: Option<String>,
    pub transition: Option<RawTransition>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawTransition {
    #[serde(rename = "type")]
    pub transition_type: String,
    pub duration: Option<f64>,
    pub easing: Option<RawEasing>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawEasing {
    #[serde(rename = "type")]
    pub easing_type: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComponentProperty {
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(default)]
    pub value: Value,
    pub default_value: Option<Value>,
}

/// Hosts serialise mixed paint lists on text ranges as a marker string
/// instead of an array; treat anything that is not a list as empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(_) => serde_json::from_value(value).map_err(serde::de::Error::custom),
        _ => Ok(Vec::new()),
    }
}
