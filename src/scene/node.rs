//! Decoded scene node model.
//!
//! A [`SceneNode`] carries the properties every node kind shares plus a
//! [`NodeBody`] holding only the capability data valid for its kind. The
//! capability traits ([`HasFills`], [`HasChildren`], [`HasAutoLayout`]) are
//! resolved once at decode time, so extractors never probe for fields.

use serde::{Deserialize, Serialize};

/// Stable node kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    BooleanOperation,
    Text,
    Vector,
    Rectangle,
    Ellipse,
    Polygon,
    Star,
    Line,
    Image,
    Slice,
    Other,
}

impl NodeKind {
    pub fn from_type_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "FRAME" => NodeKind::Frame,
            "GROUP" => NodeKind::Group,
            "SECTION" => NodeKind::Section,
            "COMPONENT" => NodeKind::Component,
            "COMPONENT_SET" => NodeKind::ComponentSet,
            "INSTANCE" => NodeKind::Instance,
            "BOOLEAN_OPERATION" => NodeKind::BooleanOperation,
            "TEXT" => NodeKind::Text,
            "VECTOR" => NodeKind::Vector,
            "RECTANGLE" => NodeKind::Rectangle,
            "ELLIPSE" => NodeKind::Ellipse,
            "POLYGON" | "REGULAR_POLYGON" => NodeKind::Polygon,
            "STAR" => NodeKind::Star,
            "LINE" => NodeKind::Line,
            "IMAGE" => NodeKind::Image,
            "SLICE" => NodeKind::Slice,
            _ => NodeKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Frame => "FRAME",
            NodeKind::Group => "GROUP",
            NodeKind::Section => "SECTION",
            NodeKind::Component => "COMPONENT",
            NodeKind::ComponentSet => "COMPONENT_SET",
            NodeKind::Instance => "INSTANCE",
            NodeKind::BooleanOperation => "BOOLEAN_OPERATION",
            NodeKind::Text => "TEXT",
            NodeKind::Vector => "VECTOR",
            NodeKind::Rectangle => "RECTANGLE",
            NodeKind::Ellipse => "ELLIPSE",
            NodeKind::Polygon => "POLYGON",
            NodeKind::Star => "STAR",
            NodeKind::Line => "LINE",
            NodeKind::Image => "IMAGE",
            NodeKind::Slice => "SLICE",
            NodeKind::Other => "OTHER",
        }
    }

    /// Kinds that own a child list.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            NodeKind::Frame
                | NodeKind::Group
                | NodeKind::Section
                | NodeKind::Component
                | NodeKind::ComponentSet
                | NodeKind::Instance
                | NodeKind::BooleanOperation
        )
    }

    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            NodeKind::Vector
                | NodeKind::Rectangle
                | NodeKind::Ellipse
                | NodeKind::Polygon
                | NodeKind::Star
                | NodeKind::Line
                | NodeKind::Image
        )
    }
}

/// One element of the input hierarchy. Immutable for an extraction pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    /// Original type string, kept for kinds decoded as [`NodeKind::Other`].
    pub type_name: String,
    pub visible: bool,
    pub opacity: f64,
    pub blend_mode: String,
    pub is_mask: bool,
    pub frame: Frame,
    pub absolute_bounds: Option<Rect>,
    pub transform: Option<AffineTransform>,
    pub constraints: Option<Constraints>,
    pub child_layout: ChildLayout,
    pub size_limits: SizeLimits,
    pub reactions: Vec<Reaction>,
    pub body: NodeBody,
}

/// Capability data that depends on the node kind.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeBody {
    Container(ContainerNode),
    Text(TextNode),
    Shape(ShapeNode),
    /// Slices and unknown kinds expose no capabilities.
    Opaque,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerNode {
    pub paints: PaintProps,
    pub corners: Option<Corners>,
    pub auto_layout: Option<AutoLayout>,
    pub clips_content: bool,
    pub instance: Option<InstanceProps>,
    pub children: Vec<SceneNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub paints: PaintProps,
    pub text: TextProps,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeNode {
    pub paints: PaintProps,
    pub corners: Option<Corners>,
    pub vector_paths: Vec<VectorPath>,
}

/// Nodes that carry paint lists.
pub trait HasFills {
    fn paints(&self) -> &PaintProps;

    fn has_visible_paint(&self) -> bool {
        let paints = self.paints();
        paints.fills.iter().any(|p| p.visible)
            || paints.strokes.iter().any(|p| p.visible)
            || paints.effects.iter().any(|e| e.visible)
    }
}

/// Nodes that own an ordered child list.
pub trait HasChildren {
    fn children(&self) -> &[SceneNode];
}

/// Nodes that may declare auto-layout.
pub trait HasAutoLayout {
    fn auto_layout(&self) -> Option<&AutoLayout>;
}

impl HasFills for ContainerNode {
    fn paints(&self) -> &PaintProps {
        &self.paints
    }
}

impl HasFills for TextNode {
    fn paints(&self) -> &PaintProps {
        &self.paints
    }
}

impl HasFills for ShapeNode {
    fn paints(&self) -> &PaintProps {
        &self.paints
    }
}

impl HasChildren for ContainerNode {
    fn children(&self) -> &[SceneNode] {
        &self.children
    }
}

impl HasAutoLayout for ContainerNode {
    fn auto_layout(&self) -> Option<&AutoLayout> {
        self.auto_layout.as_ref()
    }
}

impl SceneNode {
    pub fn as_fills(&self) -> Option<&dyn HasFills> {
        match &self.body {
            NodeBody::Container(c) => Some(c),
            NodeBody::Text(t) => Some(t),
            NodeBody::Shape(s) => Some(s),
            NodeBody::Opaque => None,
        }
    }

    pub fn paints(&self) -> Option<&PaintProps> {
        self.as_fills().map(HasFills::paints)
    }

    pub fn children(&self) -> &[SceneNode] {
        match &self.body {
            NodeBody::Container(c) => c.children(),
            _ => &[],
        }
    }

    pub fn auto_layout(&self) -> Option<&AutoLayout> {
        match &self.body {
            NodeBody::Container(c) => c.auto_layout(),
            _ => None,
        }
    }

    pub fn container(&self) -> Option<&ContainerNode> {
        match &self.body {
            NodeBody::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&TextProps> {
        match &self.body {
            NodeBody::Text(t) => Some(&t.text),
            _ => None,
        }
    }

    pub fn corners(&self) -> Option<&Corners> {
        match &self.body {
            NodeBody::Container(c) => c.corners.as_ref(),
            NodeBody::Shape(s) => s.corners.as_ref(),
            _ => None,
        }
    }

    pub fn vector_paths(&self) -> &[VectorPath] {
        match &self.body {
            NodeBody::Shape(s) => &s.vector_paths,
            _ => &[],
        }
    }

    pub fn instance(&self) -> Option<&InstanceProps> {
        self.container().and_then(|c| c.instance.as_ref())
    }

    pub fn clips_content(&self) -> bool {
        self.container().map(|c| c.clips_content).unwrap_or(false)
    }

    /// Total node count of this subtree, including the node itself.
    pub fn count_nodes(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(SceneNode::count_nodes)
            .sum::<usize>()
    }
}

/// Local position and size relative to the parent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// 2x3 affine matrix `(a, b, c, d, tx, ty)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Build from the row-major `[[a, c, tx], [b, d, ty]]` layout used by design tools.
    pub fn from_rows(rows: [[f64; 3]; 2]) -> Self {
        Self {
            a: rows[0][0],
            c: rows[0][1],
            tx: rows[0][2],
            b: rows[1][0],
            d: rows[1][1],
            ty: rows[1][2],
        }
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    pub horizontal: String,
    pub vertical: String,
}

/// How a node participates in its parent's auto-layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChildLayout {
    pub layout_align: Option<String>,
    pub layout_grow: f64,
    pub layout_positioning: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeLimits {
    pub min_width: Option<f64>,
    pub max_width: Option<f64>,
    pub min_height: Option<f64>,
    pub max_height: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintType {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    Video,
    Unknown(String),
}

impl PaintType {
    pub fn from_type_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "SOLID" => PaintType::Solid,
            "GRADIENT_LINEAR" => PaintType::GradientLinear,
            "GRADIENT_RADIAL" => PaintType::GradientRadial,
            "GRADIENT_ANGULAR" => PaintType::GradientAngular,
            "GRADIENT_DIAMOND" => PaintType::GradientDiamond,
            "IMAGE" => PaintType::Image,
            "VIDEO" => PaintType::Video,
            other => PaintType::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub position: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub kind: PaintType,
    pub visible: bool,
    pub opacity: f64,
    pub blend_mode: Option<String>,
    pub color: Option<Color>,
    pub gradient_stops: Vec<ColorStop>,
    pub gradient_transform: Option<AffineTransform>,
    pub image_hash: Option<String>,
    pub scale_mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    pub kind: String,
    pub visible: bool,
    pub radius: f64,
    pub color: Option<Color>,
    pub offset: Option<(f64, f64)>,
    pub spread: f64,
    pub blend_mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrokeProps {
    pub weight: Option<f64>,
    pub align: Option<String>,
    pub cap: Option<String>,
    pub join: Option<String>,
    pub dash_pattern: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaintProps {
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub effects: Vec<Effect>,
    pub fill_style_id: Option<String>,
    pub stroke_style_id: Option<String>,
    pub effect_style_id: Option<String>,
    pub stroke: StrokeProps,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CornerShape {
    Uniform(f64),
    PerCorner {
        top_left: f64,
        top_right: f64,
        bottom_right: f64,
        bottom_left: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    pub shape: CornerShape,
    pub smoothing: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    None,
    Horizontal,
    Vertical,
}

impl LayoutMode {
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "HORIZONTAL" => LayoutMode::Horizontal,
            "VERTICAL" => LayoutMode::Vertical,
            _ => LayoutMode::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::None => "NONE",
            LayoutMode::Horizontal => "HORIZONTAL",
            LayoutMode::Vertical => "VERTICAL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AutoLayout {
    pub mode: LayoutMode,
    pub primary_axis_sizing_mode: String,
    pub counter_axis_sizing_mode: String,
    pub primary_axis_align_items: String,
    pub counter_axis_align_items: String,
    pub item_spacing: f64,
    pub counter_axis_spacing: Option<f64>,
    pub wrap: Option<String>,
    pub padding: Padding,
}

/// A value the host reports as differing across a node's text ranges.
#[derive(Debug, Clone, PartialEq)]
pub enum Mixed<T> {
    Value(T),
    Mixed,
}

impl<T> Mixed<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Mixed::Value(v) => Some(v),
            Mixed::Mixed => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnitValue {
    pub unit: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextProps {
    pub characters: String,
    pub font_name: Mixed<FontName>,
    pub font_size: Mixed<f64>,
    /// Numeric weight when the host reports one directly.
    pub font_weight: Option<f64>,
    pub line_height: Option<UnitValue>,
    pub letter_spacing: Option<UnitValue>,
    pub text_style_id: Option<String>,
    pub text_case: Option<String>,
    pub text_decoration: Option<String>,
    pub align_horizontal: String,
    pub align_vertical: Option<String>,
    pub paragraph_spacing: f64,
    pub paragraph_indent: f64,
    pub list_spacing: f64,
    pub auto_resize: Option<String>,
    pub feature_flags: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VectorPath {
    pub winding_rule: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub kind: String,
    /// Seconds.
    pub duration: Option<f64>,
    pub easing: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub kind: String,
    pub destination_id: Option<String>,
    pub navigation: Option<String>,
    pub url: Option<String>,
    pub transition: Option<Transition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    pub trigger: String,
    pub action: Option<Action>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComponentProperty {
    pub name: String,
    pub kind: String,
    pub value: serde_json::Value,
    pub default_value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InstanceProps {
    pub main_component_id: Option<String>,
    pub component_properties: Vec<ComponentProperty>,
}
