//! Blueprint output types.
//!
//! A [`BlueprintNode`] mirrors exactly one scene node and is composed of
//! independent value groups, each produced by one extractor:
//! - [`Visuals`] - paints, corners, strokes, effects, opacity
//! - [`Typography`] - font descriptor, metrics and line boxes (text only)
//! - [`Layout`] - position, constraints and auto-layout
//! - [`Geometry`] - bounds, transform decomposition, paths, SVG
//! - [`Semantic`] - inferred role and flags
//! - [`Responsive`] - breakpoint and resize descriptors (auto-layout only)
//! - [`Interactions`] - prototype reactions and flow
//! - [`Tokens`] - resolved style names and categorized keys
//! - [`Relationships`] - component linkage, overrides, variant axes

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One normalized output node. Children keep source order and cardinality.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub visible: bool,
    /// 0-based position among the parent's children.
    pub sibling_index: usize,
    /// Depth below the extraction root (root = 0).
    pub hierarchy_level: usize,
    #[serde(default)]
    pub visuals: Visuals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<Typography>,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub geometry: Geometry,
    #[serde(default)]
    pub semantic: Semantic,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive: Option<Responsive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactions: Option<Interactions>,
    #[serde(default)]
    pub tokens: Tokens,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Relationships>,
    #[serde(default)]
    pub children: Vec<BlueprintNode>,
}

impl BlueprintNode {
    pub fn count_nodes(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(BlueprintNode::count_nodes)
            .sum::<usize>()
    }
}

// ============================================================================
// Visuals
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaintKind {
    Solid,
    LinearGradient,
    RadialGradient,
    AngularGradient,
    DiamondGradient,
    Image,
    Video,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientStop {
    /// Position along the gradient axis in [0, 1].
    pub position: f64,
    /// `rgba(r, g, b, a)`
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintValue {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    pub visible: bool,
    pub opacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<String>,
    /// Solid colour as `rgba(r, g, b, a)` with 8-bit channels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stops: Vec<GradientStop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_transform: Option<[f64; 6]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_mode: Option<String>,
}

/// Either one radius for all corners or four independent radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CornerRadius {
    Uniform(f64),
    #[serde(rename_all = "camelCase")]
    PerCorner {
        top_left: f64,
        top_right: f64,
        bottom_right: f64,
        bottom_left: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeGeometry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dash_pattern: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectValue {
    /// `DROP_SHADOW`, `INNER_SHADOW`, `LAYER_BLUR` or `BACKGROUND_BLUR`.
    #[serde(rename = "type")]
    pub kind: String,
    pub visible: bool,
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f64>,
    pub spread: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visuals {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<PaintValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<PaintValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<EffectValue>,
    /// Resolved style names; absent when the lookup failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<CornerRadius>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_smoothing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeGeometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<String>,
    #[serde(default)]
    pub is_mask: bool,
}

// ============================================================================
// Typography
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    /// Absent when the unit is `AUTO`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontDescriptor {
    pub family: String,
    pub size: f64,
    pub weight: u16,
    pub style: String,
    pub line_height: Dimension,
    pub letter_spacing: Dimension,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAlignment {
    pub horizontal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSpacing {
    pub paragraph: f64,
    pub indent: f64,
    pub list: f64,
    /// Effective line height in pixels.
    pub line: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenTypeFeatures {
    /// Four-letter tags whose bit is set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enabled: Vec<String>,
    /// Tags documented above bit 31; reported, never decoded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unsupported: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMetrics {
    pub ascent: f64,
    pub descent: f64,
    pub font_box_ascent: f64,
    pub font_box_descent: f64,
    pub line_height: f64,
    /// Widest line box.
    pub width: f64,
    pub height: f64,
    pub line_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineBox {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub baseline: f64,
    pub ascent: f64,
    pub descent: f64,
    pub leading: f64,
    pub alignment: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font: FontDescriptor,
    /// CSS `font-family` value, e.g. `"Inter", sans-serif`.
    pub font_stack: String,
    pub fallback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_loaded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_case: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
    pub alignment: TextAlignment,
    pub spacing: TextSpacing,
    #[serde(default)]
    pub open_type: OpenTypeFeatures,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_resize: Option<String>,
    pub metrics: TextMetrics,
    #[serde(default)]
    pub line_boxes: Vec<LineBox>,
}

// ============================================================================
// Layout
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeInsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConstraints {
    pub horizontal: String,
    pub vertical: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSizing {
    pub primary: String,
    pub counter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoLayoutDescriptor {
    /// `row` or `column`.
    pub direction: String,
    pub primary_align: String,
    pub counter_align: String,
    pub item_spacing: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_axis_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap: Option<String>,
    pub padding: EdgeInsets,
    pub sizing: AxisSizing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SizingMode {
    Fixed,
    Hug,
    Fill,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizingModes {
    pub horizontal: SizingMode,
    pub vertical: SizingMode,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<LayoutConstraints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_layout: Option<AutoLayoutDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<EdgeInsets>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_align: Option<String>,
    #[serde(default)]
    pub layout_grow: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_positioning: Option<String>,
    #[serde(default)]
    pub clips_content: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizing_mode: Option<SizingModes>,
}

// ============================================================================
// Geometry
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub center_x: f64,
    pub center_y: f64,
}

/// Bounds snapped outward to whole pixels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelBounds {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
    pub width: i64,
    pub height: i64,
}

/// Quantities derived from a 2x3 affine matrix. Angles are in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformDecomposition {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64,
    pub skew_x: f64,
    pub skew_y: f64,
    /// CSS `matrix(a, b, c, d, tx, ty)`.
    pub matrix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathCommand {
    pub command: char,
    pub args: Vec<f64>,
    pub relative: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathGeometry {
    pub winding_rule: String,
    pub data: String,
    pub commands: Vec<PathCommand>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    pub bounds: Bounds,
    pub pixel_bounds: PixelBounds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<TransformDecomposition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<PathGeometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
}

// ============================================================================
// Semantic
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticRole {
    Button,
    Link,
    Input,
    Image,
    Icon,
    Heading,
    Text,
    List,
    Navigation,
    Card,
    Divider,
    #[default]
    Container,
}

impl SemanticRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticRole::Button => "button",
            SemanticRole::Link => "link",
            SemanticRole::Input => "input",
            SemanticRole::Image => "image",
            SemanticRole::Icon => "icon",
            SemanticRole::Heading => "heading",
            SemanticRole::Text => "text",
            SemanticRole::List => "list",
            SemanticRole::Navigation => "navigation",
            SemanticRole::Card => "card",
            SemanticRole::Divider => "divider",
            SemanticRole::Container => "container",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Semantic {
    pub role: SemanticRole,
    pub purpose: String,
    pub is_interactive: bool,
    pub is_component: bool,
    pub is_instance: bool,
    pub is_decorative: bool,
    pub has_auto_layout: bool,
}

// ============================================================================
// Responsive
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointLayout {
    pub direction: String,
    pub primary_align: String,
    pub counter_align: String,
    pub spacing: f64,
    pub padding: EdgeInsets,
    pub sizing: AxisSizing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<LayoutConstraints>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    pub name: String,
    pub min_width: f64,
    pub layout: BreakpointLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerBreakpoint {
    pub name: String,
    pub min_width: f64,
    pub direction: String,
    pub fluid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerAdaptation {
    pub container_type: String,
    pub breakpoints: Vec<ContainerBreakpoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeConstraints {
    pub min: Size,
    pub max: Size,
    pub preferred: Size,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Responsive {
    pub fluid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
    pub breakpoints: Vec<Breakpoint>,
    pub container: ContainerAdaptation,
    pub resize: ResizeConstraints,
}

// ============================================================================
// Interactions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickHandler {
    /// DOM-style event name, e.g. `click`.
    pub event: String,
    pub trigger: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionSpec {
    #[serde(rename = "type")]
    pub kind: String,
    pub duration_ms: f64,
    pub easing: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowConnection {
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub trigger: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrototypeFlow {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub connections: Vec<FlowConnection>,
    pub screens: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interactions {
    pub click_handlers: Vec<ClickHandler>,
    pub transitions: Vec<TransitionSpec>,
    /// Taken from the first reaction.
    pub animation_type: String,
    pub easing: String,
    pub timing: f64,
    pub flow: PrototypeFlow,
}

// ============================================================================
// Tokens
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Colors,
    Typography,
    Spacing,
    Sizing,
    Shadows,
    Borders,
    Radii,
    Other,
}

impl TokenCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Colors => "colors",
            TokenCategory::Typography => "typography",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Sizing => "sizing",
            TokenCategory::Shadows => "shadows",
            TokenCategory::Borders => "borders",
            TokenCategory::Radii => "radii",
            TokenCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tokens {
    /// Style slot (`fill`, `stroke`, `text`, `effect`) to resolved style name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub categories: BTreeMap<TokenCategory, BTreeMap<String, String>>,
}

// ============================================================================
// Relationships
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub name: String,
    #[serde(default)]
    pub remote: bool,
    /// False when `name` is the instance's own name standing in for a failed lookup.
    pub resolved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyOverride {
    pub property: String,
    pub value: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_value: Option<serde_json::Value>,
    pub override_type: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantAxis {
    pub name: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationships {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_component: Option<ComponentLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<PropertyOverride>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variant_axes: Vec<VariantAxis>,
}
