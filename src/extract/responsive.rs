//! Responsive descriptors synthesized from auto-layout.
//!
//! Exactly one breakpoint (`md`) is produced. Multi-breakpoint output is
//! out of scope for this deriver.

use super::layout::{axis_sizing, direction, edge_insets};
use super::ExtractContext;
use crate::scene::{LayoutMode, SceneNode};
use crate::types::{
    Breakpoint, BreakpointLayout, ContainerAdaptation, ContainerBreakpoint, LayoutConstraints,
    ResizeConstraints, Responsive, Size,
};

pub const BREAKPOINT_NAME: &str = "md";

/// `None` unless the node declares a horizontal or vertical auto-layout axis.
pub fn extract_responsive(node: &SceneNode, ctx: &ExtractContext<'_>) -> Option<Responsive> {
    let al = node.auto_layout().filter(|al| al.mode != LayoutMode::None)?;

    let fluid = al.primary_axis_sizing_mode == "AUTO" || al.counter_axis_sizing_mode == "AUTO";
    let (width, height) = (node.frame.width, node.frame.height);
    let min_width = ctx.config.breakpoint_min_width;

    let breakpoint = Breakpoint {
        name: BREAKPOINT_NAME.to_string(),
        min_width,
        layout: BreakpointLayout {
            direction: direction(al.mode).to_string(),
            primary_align: al.primary_axis_align_items.clone(),
            counter_align: al.counter_axis_align_items.clone(),
            spacing: al.item_spacing,
            padding: edge_insets(&al.padding),
            sizing: axis_sizing(al),
            constraints: node.constraints.as_ref().map(|c| LayoutConstraints {
                horizontal: c.horizontal.clone(),
                vertical: c.vertical.clone(),
            }),
        },
    };

    let limits = node.size_limits;
    Some(Responsive {
        fluid,
        aspect_ratio: (height > 0.0 && width > 0.0).then(|| width / height),
        breakpoints: vec![breakpoint],
        container: ContainerAdaptation {
            container_type: "auto-layout".to_string(),
            breakpoints: vec![ContainerBreakpoint {
                name: BREAKPOINT_NAME.to_string(),
                min_width,
                direction: direction(al.mode).to_string(),
                fluid,
            }],
        },
        resize: ResizeConstraints {
            min: Size {
                width: limits.min_width.unwrap_or(width),
                height: limits.min_height.unwrap_or(height),
            },
            max: Size {
                width: limits.max_width.unwrap_or(width),
                height: limits.max_height.unwrap_or(height),
            },
            preferred: Size { width, height },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;
    use crate::host::HostSnapshot;
    use crate::scene::scene_from_value;
    use serde_json::json;

    fn derive(value: serde_json::Value) -> Option<Responsive> {
        let node = scene_from_value(value).expect("scene");
        let snapshot = HostSnapshot::new();
        let config = ExtractionConfig::default();
        extract_responsive(&node, &ExtractContext::new(&snapshot, &config))
    }

    #[test]
    fn synthesizes_single_md_breakpoint() {
        let r = derive(json!({
            "id": "1", "type": "FRAME", "width": 300, "height": 150,
            "layoutMode": "VERTICAL", "primaryAxisSizingMode": "AUTO",
            "counterAxisSizingMode": "FIXED", "itemSpacing": 8,
            "minWidth": 200, "maxWidth": 600
        }))
        .expect("responsive");

        assert!(r.fluid);
        assert_eq!(r.aspect_ratio, Some(2.0));
        assert_eq!(r.breakpoints.len(), 1);
        assert_eq!(r.breakpoints[0].name, "md");
        assert_eq!(r.breakpoints[0].min_width, 768.0);
        assert_eq!(r.breakpoints[0].layout.direction, "column");
        assert_eq!(r.container.breakpoints.len(), 1);
        assert_eq!(r.resize.min, Size { width: 200.0, height: 150.0 });
        assert_eq!(r.resize.max, Size { width: 600.0, height: 150.0 });
        assert_eq!(r.resize.preferred, Size { width: 300.0, height: 150.0 });
    }

    #[test]
    fn fixed_axes_are_not_fluid_and_zero_height_has_no_ratio() {
        let r = derive(json!({
            "id": "1", "type": "FRAME", "width": 300, "height": 0,
            "layoutMode": "HORIZONTAL", "primaryAxisSizingMode": "FIXED",
            "counterAxisSizingMode": "FIXED"
        }))
        .expect("responsive");
        assert!(!r.fluid);
        assert_eq!(r.aspect_ratio, None);
    }

    #[test]
    fn requires_auto_layout() {
        assert!(derive(json!({"id": "1", "type": "FRAME"})).is_none());
        assert!(derive(json!({"id": "1", "type": "FRAME", "layoutMode": "NONE"})).is_none());
        assert!(derive(json!({"id": "1", "type": "TEXT"})).is_none());
    }
}
