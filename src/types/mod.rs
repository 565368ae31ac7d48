//! Output data types.
//!
//! - [`blueprint`] - the [`BlueprintNode`] tree and its value groups
//! - [`fidelity`] - fidelity reports

pub mod blueprint;
pub mod fidelity;

pub use blueprint::{
    AutoLayoutDescriptor, AxisSizing, BlueprintNode, Bounds, Breakpoint, BreakpointLayout,
    ClickHandler, ComponentLink, ContainerAdaptation, ContainerBreakpoint, CornerRadius,
    Dimension, EdgeInsets, EffectValue, FlowConnection, FontDescriptor, Geometry, GradientStop,
    Interactions, Layout, LayoutConstraints, LineBox, OpenTypeFeatures, PaintKind, PaintValue,
    PathCommand, PathGeometry, PixelBounds, PropertyOverride, PrototypeFlow, Relationships,
    ResizeConstraints, Responsive, Semantic, SemanticRole, Size, SizingMode, SizingModes,
    StrokeGeometry, TextAlignment, TextMetrics, TextSpacing, TokenCategory, Tokens,
    TransformDecomposition, TransitionSpec, Typography, VariantAxis, Visuals,
};
pub use fidelity::{
    AxisScore, CheckResult, FidelityAxis, FidelityReport, Suggestion, SuggestionSeverity,
    TreeFidelityReport,
};
