//! Scene graph input model.
//!
//! This module provides:
//! - [`SceneNode`] - the decoded, capability-typed node tree
//! - [`api_types`] - raw JSON shapes accepted from hosts
//! - [`decode_node`] - raw to typed conversion
//! - the capability traits [`HasFills`], [`HasChildren`], [`HasAutoLayout`]

pub mod api_types;
pub mod conversion;
pub mod node;

#[cfg(test)]
mod tests;

pub use api_types::RawNode;
pub use conversion::decode_node;
pub use node::{
    Action, AffineTransform, AutoLayout, ChildLayout, Color, ColorStop, ComponentProperty,
    Constraints, ContainerNode, CornerShape, Corners, Effect, FontName, Frame, HasAutoLayout,
    HasChildren, HasFills, InstanceProps, LayoutMode, Mixed, NodeBody, NodeKind, Padding, Paint,
    PaintProps, PaintType, Reaction, Rect, SceneNode, ShapeNode, SizeLimits, StrokeProps,
    TextNode, TextProps, Transition, UnitValue, VectorPath,
};

use crate::Result;

/// Decode a scene tree from a JSON value.
pub fn scene_from_value(value: serde_json::Value) -> Result<SceneNode> {
    let raw: RawNode = serde_json::from_value(value)?;
    Ok(decode_node(raw))
}

/// Decode a scene tree from JSON text.
pub fn scene_from_json(json: &str) -> Result<SceneNode> {
    let raw: RawNode = serde_json::from_str(json)?;
    Ok(decode_node(raw))
}
