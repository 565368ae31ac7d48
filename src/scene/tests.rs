//! Tests for scene decoding.

#[cfg(test)]
mod tests {
    use crate::scene::{
        scene_from_json, scene_from_value, CornerShape, HasFills, LayoutMode, Mixed, NodeBody,
        NodeKind, PaintType,
    };
    use serde_json::json;

    #[test]
    fn decodes_plugin_style_frame_with_children() {
        let node = scene_from_value(json!({
            "id": "1:1",
            "name": "Card",
            "type": "FRAME",
            "x": 10, "y": 20, "width": 320, "height": 200,
            "fills": [{"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1}}],
            "layoutMode": "VERTICAL",
            "itemSpacing": 8,
            "paddingTop": 16,
            "clipsContent": true,
            "children": [
                {"id": "1:2", "name": "Title", "type": "TEXT", "characters": "Hello",
                 "fontName": {"family": "Roboto", "style": "Bold"}, "fontSize": 24},
                {"id": "1:3", "name": "Divider", "type": "LINE", "width": 320, "height": 0}
            ]
        }))
        .expect("decode");

        assert_eq!(node.kind, NodeKind::Frame);
        assert_eq!(node.frame.x, 10.0);
        assert_eq!(node.frame.width, 320.0);
        assert!(node.clips_content());
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.count_nodes(), 3);

        let layout = node.auto_layout().expect("auto layout");
        assert_eq!(layout.mode, LayoutMode::Vertical);
        assert_eq!(layout.item_spacing, 8.0);
        assert_eq!(layout.padding.top, 16.0);
        assert_eq!(layout.primary_axis_sizing_mode, "AUTO");

        let fills = &node.paints().expect("paints").fills;
        assert_eq!(fills.len(), 1);
        assert_eq!(fills[0].kind, PaintType::Solid);
        assert_eq!(fills[0].color.map(|c| c.a), Some(1.0));

        let text = node.children()[0].text().expect("text props");
        assert_eq!(text.characters, "Hello");
        assert_eq!(text.font_size, Mixed::Value(24.0));
        assert_eq!(
            text.font_name.value().map(|f| f.style.as_str()),
            Some("Bold")
        );
        assert_eq!(node.children()[1].kind, NodeKind::Line);
    }

    #[test]
    fn decodes_rest_shape_fields() {
        let node = scene_from_json(
            r#"{
                "id": "5:1", "name": "Label", "type": "TEXT",
                "absoluteBoundingBox": {"x": 100, "y": 40, "width": 80, "height": 20},
                "relativeTransform": [[1, 0, 12], [0, 1, 8]],
                "characters": "Buy",
                "style": {"fontFamily": "Inter", "fontStyle": "Semi Bold", "fontSize": 14,
                          "fontWeight": 600, "lineHeightPx": 20, "letterSpacing": 0.5},
                "styles": {"text": "S:abc", "fill": "S:def"}
            }"#,
        )
        .expect("decode");

        assert_eq!(node.frame.x, 12.0);
        assert_eq!(node.frame.y, 8.0);
        assert_eq!(node.frame.width, 80.0);
        let text = node.text().expect("text");
        assert_eq!(text.font_size, Mixed::Value(14.0));
        assert_eq!(text.font_weight, Some(600.0));
        assert_eq!(text.text_style_id.as_deref(), Some("S:abc"));
        let line_height = text.line_height.as_ref().expect("line height");
        assert_eq!(line_height.unit, "PIXELS");
        assert_eq!(line_height.value, Some(20.0));
        assert_eq!(
            node.paints().and_then(|p| p.fill_style_id.as_deref()),
            Some("S:def")
        );
    }

    #[test]
    fn mixed_markers_decode_as_mixed() {
        let node = scene_from_value(json!({
            "id": "2:1", "type": "TEXT", "characters": "ab",
            "fontName": "__mixed__", "fontSize": "__mixed__", "fills": "__mixed__"
        }))
        .expect("decode");

        let text = node.text().expect("text");
        assert_eq!(text.font_name, Mixed::Mixed);
        assert_eq!(text.font_size, Mixed::Mixed);
        assert!(node.paints().expect("paints").fills.is_empty());
    }

    #[test]
    fn corner_radius_uniform_and_per_corner_are_exclusive() {
        let uniform = scene_from_value(json!({"id": "a", "type": "RECTANGLE", "cornerRadius": 8}))
            .expect("decode");
        assert_eq!(
            uniform.corners().map(|c| c.shape),
            Some(CornerShape::Uniform(8.0))
        );

        let per_corner = scene_from_value(json!({
            "id": "b", "type": "RECTANGLE", "cornerRadius": "mixed",
            "topLeftRadius": 4, "topRightRadius": 8, "bottomRightRadius": 4, "bottomLeftRadius": 0
        }))
        .expect("decode");
        assert!(matches!(
            per_corner.corners().map(|c| c.shape),
            Some(CornerShape::PerCorner { top_right, .. }) if top_right == 8.0
        ));

        let equal = scene_from_value(json!({
            "id": "c", "type": "FRAME", "rectangleCornerRadii": [6, 6, 6, 6]
        }))
        .expect("decode");
        assert_eq!(
            equal.corners().map(|c| c.shape),
            Some(CornerShape::Uniform(6.0))
        );
    }

    #[test]
    fn unknown_kinds_have_no_capabilities() {
        let node = scene_from_value(json!({"id": "9:9", "type": "STICKY", "name": "Note"}))
            .expect("decode");
        assert_eq!(node.kind, NodeKind::Other);
        assert_eq!(node.type_name, "STICKY");
        assert!(matches!(node.body, NodeBody::Opaque));
        assert!(node.as_fills().is_none());
        assert!(node.children().is_empty());
    }

    #[test]
    fn visible_paint_detection_uses_visibility_flags() {
        let node = scene_from_value(json!({
            "id": "3:1", "type": "FRAME",
            "fills": [{"type": "SOLID", "visible": false, "color": {"r": 0, "g": 0, "b": 0}}]
        }))
        .expect("decode");
        assert!(!node.as_fills().expect("fills").has_visible_paint());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(scene_from_json("{not json").is_err());
    }
}
