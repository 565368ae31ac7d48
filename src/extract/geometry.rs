use super::path::parse_path;
use super::{ExtractContext, ExtractError, ExtractResult};
use crate::scene::{AffineTransform, HasFills, NodeKind, SceneNode};
use crate::types::{Bounds, Geometry, PathGeometry, PixelBounds, TransformDecomposition};

const MAX_EXPORT_CHILDREN: usize = 10;
const MAX_PAINTED_INSTANCE_CHILDREN: usize = 5;

pub fn extract_geometry(node: &SceneNode, ctx: &ExtractContext<'_>) -> ExtractResult<Geometry> {
    let bounds = bounds(node);
    if ![bounds.x, bounds.y, bounds.width, bounds.height]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(ExtractError::Malformed {
            field: "bounds",
            reason: format!(
                "non-finite box ({}, {}, {}, {})",
                bounds.x, bounds.y, bounds.width, bounds.height
            ),
        });
    }

    Ok(Geometry {
        pixel_bounds: pixel_bounds(&bounds),
        bounds,
        transform: node.transform.as_ref().map(decompose_transform),
        paths: node
            .vector_paths()
            .iter()
            .map(|p| PathGeometry {
                winding_rule: p.winding_rule.clone(),
                data: p.data.clone(),
                commands: parse_path(&p.data),
            })
            .collect(),
        svg: ctx.snapshot.svg(&node.id).map(str::to_string),
    })
}

/// Absolute box when the host reports one, otherwise the local frame.
pub fn bounds(node: &SceneNode) -> Bounds {
    let (x, y, width, height) = match &node.absolute_bounds {
        Some(abs) => (abs.x, abs.y, abs.width, abs.height),
        None => (node.frame.x, node.frame.y, node.frame.width, node.frame.height),
    };
    Bounds {
        x,
        y,
        width,
        height,
        left: x,
        top: y,
        right: x + width,
        bottom: y + height,
        center_x: x + width / 2.0,
        center_y: y + height / 2.0,
    }
}

pub fn pixel_bounds(bounds: &Bounds) -> PixelBounds {
    let left = bounds.left.floor() as i64;
    let top = bounds.top.floor() as i64;
    let right = bounds.right.ceil() as i64;
    let bottom = bounds.bottom.ceil() as i64;
    PixelBounds {
        left,
        top,
        right,
        bottom,
        width: right - left,
        height: bottom - top,
    }
}

/// Skew X carries a constant -90 degree offset: the identity matrix reports -90.
pub fn decompose_transform(t: &AffineTransform) -> TransformDecomposition {
    TransformDecomposition {
        translate_x: t.tx,
        translate_y: t.ty,
        scale_x: (t.a * t.a + t.b * t.b).sqrt(),
        scale_y: (t.c * t.c + t.d * t.d).sqrt(),
        rotation: t.b.atan2(t.a).to_degrees(),
        skew_x: t.c.atan2(t.d).to_degrees() - 90.0,
        skew_y: t.b.atan2(t.a).to_degrees(),
        matrix: format!(
            "matrix({}, {}, {}, {}, {}, {})",
            t.a, t.b, t.c, t.d, t.tx, t.ty
        ),
    }
}

/// Whether the host should be asked for an SVG rendering of `node`.
pub fn svg_export_eligible(node: &SceneNode) -> bool {
    let instance_children = node.instance().map(|_| node.children().len());

    let allow_listed = matches!(
        node.kind,
        NodeKind::Vector
            | NodeKind::Text
            | NodeKind::Rectangle
            | NodeKind::Ellipse
            | NodeKind::Polygon
            | NodeKind::Star
            | NodeKind::Line
            | NodeKind::Image
    );
    let painted_container = node.kind.is_container()
        && node.as_fills().is_some_and(|f| f.has_visible_paint())
        && instance_children.map_or(true, |n| n <= MAX_PAINTED_INSTANCE_CHILDREN);

    if !(allow_listed || painted_container) {
        return false;
    }
    if !node.visible || node.opacity <= 0.0 {
        return false;
    }
    if node.frame.width < 1.0 || node.frame.height < 1.0 {
        return false;
    }
    if is_empty_mask(node) {
        return false;
    }
    instance_children.map_or(true, |n| n <= MAX_EXPORT_CHILDREN)
}

fn is_empty_mask(node: &SceneNode) -> bool {
    node.is_mask && node.children().iter().all(|child| !child.visible)
}
