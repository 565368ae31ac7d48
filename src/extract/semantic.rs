//! Role inference from node kind and layer-name keywords.

use crate::scene::{LayoutMode, NodeKind, PaintType, SceneNode};
use crate::types::{Semantic, SemanticRole};

/// Text at or above this size reads as a heading regardless of its name.
pub const HEADING_MIN_FONT_SIZE: f64 = 24.0;
/// Largest vector that still counts as an icon when its name says nothing.
const ICON_MAX_SIZE: f64 = 48.0;

const HEADING_WORDS: &[&str] = &["heading", "title", "headline", "h1", "h2", "h3", "h4", "h5", "h6"];
const DIVIDER_WORDS: &[&str] = &["divider", "separator", "hr", "rule"];
const BUTTON_WORDS: &[&str] = &["button", "btn", "cta"];
const LINK_WORDS: &[&str] = &["link", "anchor"];
const INPUT_WORDS: &[&str] = &["input", "field", "textbox", "textfield", "search", "textarea"];
const NAVIGATION_WORDS: &[&str] = &["nav", "navbar", "navigation", "menu", "breadcrumb"];
const ICON_WORDS: &[&str] = &["icon", "ico", "glyph"];
const IMAGE_WORDS: &[&str] = &["image", "img", "photo", "picture", "avatar", "thumbnail"];
const CARD_WORDS: &[&str] = &["card", "tile"];
const LIST_WORDS: &[&str] = &["list", "items", "grid"];

pub fn extract_semantic(node: &SceneNode) -> Semantic {
    let role = infer_role(node);
    let is_interactive = !node.reactions.is_empty()
        || matches!(
            role,
            SemanticRole::Button | SemanticRole::Link | SemanticRole::Input
        );

    Semantic {
        role,
        purpose: purpose(role).to_string(),
        is_interactive,
        is_component: matches!(node.kind, NodeKind::Component | NodeKind::ComponentSet),
        is_instance: node.kind == NodeKind::Instance,
        is_decorative: !node.visible
            || node.opacity <= 0.0
            || role == SemanticRole::Divider
            || (node.kind == NodeKind::Vector && !is_interactive),
        has_auto_layout: node
            .auto_layout()
            .is_some_and(|al| al.mode != LayoutMode::None),
    }
}

pub fn infer_role(node: &SceneNode) -> SemanticRole {
    let words = name_words(&node.name);
    let named = |keywords: &[&str]| words.iter().any(|w| keywords.contains(&w.as_str()));

    if let Some(text) = node.text() {
        let large = text
            .font_size
            .value()
            .is_some_and(|size| *size >= HEADING_MIN_FONT_SIZE);
        return if large || named(HEADING_WORDS) {
            SemanticRole::Heading
        } else if named(LINK_WORDS) {
            SemanticRole::Link
        } else {
            SemanticRole::Text
        };
    }

    if node.kind == NodeKind::Line || named(DIVIDER_WORDS) {
        return SemanticRole::Divider;
    }
    if named(BUTTON_WORDS) {
        return SemanticRole::Button;
    }
    if named(LINK_WORDS) {
        return SemanticRole::Link;
    }
    if named(INPUT_WORDS) {
        return SemanticRole::Input;
    }
    if named(NAVIGATION_WORDS) {
        return SemanticRole::Navigation;
    }
    if named(ICON_WORDS) {
        return SemanticRole::Icon;
    }
    if named(IMAGE_WORDS) || node.kind == NodeKind::Image || has_image_fill(node) {
        return SemanticRole::Image;
    }
    if named(CARD_WORDS) {
        return SemanticRole::Card;
    }
    if named(LIST_WORDS) {
        return SemanticRole::List;
    }

    let vector_like = matches!(
        node.kind,
        NodeKind::Vector | NodeKind::BooleanOperation | NodeKind::Star | NodeKind::Polygon
    );
    if vector_like && node.frame.width <= ICON_MAX_SIZE && node.frame.height <= ICON_MAX_SIZE {
        return SemanticRole::Icon;
    }

    SemanticRole::Container
}

fn purpose(role: SemanticRole) -> &'static str {
    match role {
        SemanticRole::Button => "action",
        SemanticRole::Link | SemanticRole::Navigation => "navigation",
        SemanticRole::Input => "data-entry",
        SemanticRole::Image | SemanticRole::Icon => "media",
        SemanticRole::Heading => "heading",
        SemanticRole::Text => "content",
        SemanticRole::List => "collection",
        SemanticRole::Card => "grouping",
        SemanticRole::Divider => "separator",
        SemanticRole::Container => "layout",
    }
}

fn has_image_fill(node: &SceneNode) -> bool {
    node.paints()
        .is_some_and(|p| p.fills.iter().any(|f| f.visible && f.kind == PaintType::Image))
}

/// Lowercased alphanumeric words of a layer name. `PrimaryButton` stays one
/// word; hosts separate words with spaces, slashes or dashes.
fn name_words(name: &str) -> Vec<String> {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::scene_from_value;
    use serde_json::json;

    fn role(value: serde_json::Value) -> SemanticRole {
        infer_role(&scene_from_value(value).expect("scene"))
    }

    #[test]
    fn text_roles_follow_size_and_name() {
        assert_eq!(
            role(json!({"id": "1", "type": "TEXT", "name": "Body", "fontSize": 16})),
            SemanticRole::Text
        );
        assert_eq!(
            role(json!({"id": "1", "type": "TEXT", "name": "Body", "fontSize": 32})),
            SemanticRole::Heading
        );
        assert_eq!(
            role(json!({"id": "1", "type": "TEXT", "name": "Section / h2", "fontSize": 14})),
            SemanticRole::Heading
        );
        assert_eq!(
            role(json!({"id": "1", "type": "TEXT", "name": "Footer link", "fontSize": 12})),
            SemanticRole::Link
        );
    }

    #[test]
    fn container_roles_from_name_keywords() {
        assert_eq!(
            role(json!({"id": "1", "type": "INSTANCE", "name": "Button / Primary"})),
            SemanticRole::Button
        );
        assert_eq!(
            role(json!({"id": "1", "type": "FRAME", "name": "search-field"})),
            SemanticRole::Input
        );
        assert_eq!(
            role(json!({"id": "1", "type": "FRAME", "name": "Top Nav"})),
            SemanticRole::Navigation
        );
        assert_eq!(
            role(json!({"id": "1", "type": "FRAME", "name": "Product Card"})),
            SemanticRole::Card
        );
        assert_eq!(
            role(json!({"id": "1", "type": "FRAME", "name": "Frame 12"})),
            SemanticRole::Container
        );
    }

    #[test]
    fn shape_roles() {
        assert_eq!(
            role(json!({"id": "1", "type": "LINE", "name": "Line 1"})),
            SemanticRole::Divider
        );
        assert_eq!(
            role(json!({"id": "1", "type": "VECTOR", "name": "Vector", "width": 24, "height": 24})),
            SemanticRole::Icon
        );
        assert_eq!(
            role(json!({"id": "1", "type": "VECTOR", "name": "Blob", "width": 400, "height": 300})),
            SemanticRole::Container
        );
        assert_eq!(
            role(json!({"id": "1", "type": "RECTANGLE", "name": "Hero",
                        "fills": [{"type": "IMAGE", "imageHash": "abc"}]})),
            SemanticRole::Image
        );
    }

    #[test]
    fn flags() {
        let node = scene_from_value(json!({
            "id": "1", "type": "INSTANCE", "name": "Chip", "layoutMode": "HORIZONTAL",
            "reactions": [{"trigger": {"type": "ON_CLICK"}}]
        }))
        .expect("scene");
        let semantic = extract_semantic(&node);
        assert!(semantic.is_interactive);
        assert!(semantic.is_instance);
        assert!(!semantic.is_component);
        assert!(semantic.has_auto_layout);
        assert!(!semantic.is_decorative);
        assert_eq!(semantic.purpose, "layout");

        let hidden = scene_from_value(json!({"id": "2", "type": "RECTANGLE", "visible": false}))
            .expect("scene");
        assert!(extract_semantic(&hidden).is_decorative);
    }
}
