//! Position, constraints and auto-layout.

use crate::scene::{AutoLayout, LayoutMode, Padding, SceneNode};
use crate::types::{
    AutoLayoutDescriptor, AxisSizing, EdgeInsets, Layout, LayoutConstraints, SizingMode,
    SizingModes,
};

/// Local layout of `node`. `parent_mode` is the parent's auto-layout axis, if any.
///
/// Position is the node's own frame; group re-basing happens in the assembler.
pub fn extract_layout(node: &SceneNode, parent_mode: Option<LayoutMode>) -> Layout {
    let auto_layout = node.auto_layout().filter(|al| al.mode != LayoutMode::None);
    Layout {
        x: node.frame.x,
        y: node.frame.y,
        width: node.frame.width,
        height: node.frame.height,
        rotation: node.frame.rotation,
        constraints: node.constraints.as_ref().map(|c| LayoutConstraints {
            horizontal: c.horizontal.clone(),
            vertical: c.vertical.clone(),
        }),
        auto_layout: auto_layout.map(auto_layout_descriptor),
        padding: auto_layout
            .map(|al| &al.padding)
            .filter(|p| !p.is_zero())
            .map(edge_insets),
        layout_align: node.child_layout.layout_align.clone(),
        layout_grow: node.child_layout.layout_grow,
        layout_positioning: node.child_layout.layout_positioning.clone(),
        clips_content: node.clips_content(),
        sizing_mode: sizing_modes(node, auto_layout, parent_mode),
    }
}

pub fn edge_insets(padding: &Padding) -> EdgeInsets {
    EdgeInsets {
        top: padding.top,
        right: padding.right,
        bottom: padding.bottom,
        left: padding.left,
    }
}

pub fn direction(mode: LayoutMode) -> &'static str {
    match mode {
        LayoutMode::Horizontal => "row",
        LayoutMode::Vertical => "column",
        LayoutMode::None => "none",
    }
}

pub fn axis_sizing(al: &AutoLayout) -> AxisSizing {
    AxisSizing {
        primary: al.primary_axis_sizing_mode.clone(),
        counter: al.counter_axis_sizing_mode.clone(),
    }
}

fn auto_layout_descriptor(al: &AutoLayout) -> AutoLayoutDescriptor {
    AutoLayoutDescriptor {
        direction: direction(al.mode).to_string(),
        primary_align: al.primary_axis_align_items.clone(),
        counter_align: al.counter_axis_align_items.clone(),
        item_spacing: al.item_spacing,
        counter_axis_spacing: al.counter_axis_spacing,
        wrap: al.wrap.clone(),
        padding: edge_insets(&al.padding),
        sizing: axis_sizing(al),
    }
}

/// FIXED / HUG / FILL per axis. `None` when neither the node nor its parent
/// uses auto-layout.
fn sizing_modes(
    node: &SceneNode,
    own: Option<&AutoLayout>,
    parent_mode: Option<LayoutMode>,
) -> Option<SizingModes> {
    let parent_mode = parent_mode.filter(|m| *m != LayoutMode::None);
    if own.is_none() && parent_mode.is_none() {
        return None;
    }

    let mut horizontal = SizingMode::Fixed;
    let mut vertical = SizingMode::Fixed;

    if let Some(al) = own {
        let hug = |mode: &str| {
            if mode == "AUTO" {
                SizingMode::Hug
            } else {
                SizingMode::Fixed
            }
        };
        let (primary, counter) = (
            hug(al.primary_axis_sizing_mode.as_str()),
            hug(al.counter_axis_sizing_mode.as_str()),
        );
        match al.mode {
            LayoutMode::Horizontal => {
                horizontal = primary;
                vertical = counter;
            }
            LayoutMode::Vertical => {
                vertical = primary;
                horizontal = counter;
            }
            LayoutMode::None => {}
        }
    }

    if let Some(mode) = parent_mode {
        let grows = node.child_layout.layout_grow > 0.0;
        let stretches = node.child_layout.layout_align.as_deref() == Some("STRETCH");
        let (primary, counter) = match mode {
            LayoutMode::Horizontal => (&mut horizontal, &mut vertical),
            _ => (&mut vertical, &mut horizontal),
        };
        if grows {
            *primary = SizingMode::Fill;
        }
        if stretches {
            *counter = SizingMode::Fill;
        }
    }

    Some(SizingModes {
        horizontal,
        vertical,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::scene_from_value;
    use serde_json::json;

    #[test]
    fn auto_layout_container_hugs_on_auto_axes() {
        let node = scene_from_value(json!({
            "id": "1", "type": "FRAME", "x": 4, "y": 8, "width": 200, "height": 40,
            "layoutMode": "HORIZONTAL", "primaryAxisSizingMode": "FIXED",
            "counterAxisSizingMode": "AUTO", "itemSpacing": 12,
            "paddingLeft": 16, "paddingRight": 16,
            "constraints": {"horizontal": "LEFT_RIGHT", "vertical": "TOP"}
        }))
        .expect("scene");

        let layout = extract_layout(&node, None);
        assert_eq!((layout.x, layout.y), (4.0, 8.0));
        let al = layout.auto_layout.expect("auto layout");
        assert_eq!(al.direction, "row");
        assert_eq!(al.item_spacing, 12.0);
        assert_eq!(layout.padding.map(|p| p.left), Some(16.0));
        assert_eq!(
            layout.sizing_mode,
            Some(SizingModes {
                horizontal: SizingMode::Fixed,
                vertical: SizingMode::Hug
            })
        );
        assert_eq!(
            layout.constraints.map(|c| c.horizontal),
            Some("LEFT_RIGHT".to_string())
        );
    }

    #[test]
    fn children_of_auto_layout_fill_when_growing_or_stretching() {
        let node = scene_from_value(json!({
            "id": "2", "type": "RECTANGLE", "layoutGrow": 1, "layoutAlign": "STRETCH"
        }))
        .expect("scene");

        let in_column = extract_layout(&node, Some(LayoutMode::Vertical));
        assert_eq!(
            in_column.sizing_mode,
            Some(SizingModes {
                horizontal: SizingMode::Fill,
                vertical: SizingMode::Fill
            })
        );

        assert_eq!(extract_layout(&node, None).sizing_mode, None);
        assert_eq!(extract_layout(&node, Some(LayoutMode::None)).sizing_mode, None);
    }

    #[test]
    fn layout_mode_none_is_not_auto_layout() {
        let node = scene_from_value(json!({"id": "3", "type": "FRAME", "layoutMode": "NONE"}))
            .expect("scene");
        let layout = extract_layout(&node, None);
        assert!(layout.auto_layout.is_none());
        assert!(layout.padding.is_none());
    }
}
