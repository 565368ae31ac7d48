//! Component linkage: main component, property overrides, variant axes.

use super::ExtractContext;
use crate::scene::{InstanceProps, NodeKind, SceneNode};
use crate::types::{ComponentLink, PropertyOverride, Relationships, VariantAxis};

/// Ordered key substrings for override classification; the first hit wins.
const OVERRIDE_KINDS: &[&str] = &["text", "fill", "stroke", "effect", "visible"];
const DEFAULT_OVERRIDE_KIND: &str = "component";

/// `Some` for instances and for component sets whose children follow the
/// `Prop=Value, Prop=Value` naming convention.
pub fn extract_relationships(
    node: &SceneNode,
    ctx: &ExtractContext<'_>,
) -> Option<Relationships> {
    match node.kind {
        NodeKind::Instance => Some(Relationships {
            main_component: Some(main_component(node, ctx)),
            overrides: node.instance().map(|i| overrides(node, i)).unwrap_or_default(),
            variant_axes: Vec::new(),
        }),
        NodeKind::ComponentSet => {
            let names = node
                .children()
                .iter()
                .filter(|c| c.kind == NodeKind::Component)
                .map(|c| c.name.as_str());
            let variant_axes = variant_axes(names);
            (!variant_axes.is_empty()).then(|| Relationships {
                variant_axes,
                ..Relationships::default()
            })
        }
        _ => None,
    }
}

/// Falls back to the instance's own name when the host could not resolve
/// the main component.
fn main_component(node: &SceneNode, ctx: &ExtractContext<'_>) -> ComponentLink {
    match ctx.snapshot.component(&node.id) {
        Some(component) => ComponentLink {
            id: component.id.clone(),
            key: component.key.clone(),
            name: component.name.clone(),
            remote: component.remote,
            resolved: true,
        },
        None => ComponentLink {
            id: node.instance().and_then(|i| i.main_component_id.clone()),
            key: None,
            name: node.name.clone(),
            remote: false,
            resolved: false,
        },
    }
}

fn overrides(node: &SceneNode, instance: &InstanceProps) -> Vec<PropertyOverride> {
    instance
        .component_properties
        .iter()
        .map(|prop| PropertyOverride {
            property: prop.name.clone(),
            value: prop.value.clone(),
            original_value: prop.default_value.clone(),
            override_type: override_type(&prop.name).to_string(),
            path: format!("{}.{}", node.name, prop.name),
        })
        .collect()
}

pub fn override_type(property: &str) -> &'static str {
    let key = property.to_ascii_lowercase();
    OVERRIDE_KINDS
        .iter()
        .find(|kind| key.contains(*kind))
        .copied()
        .unwrap_or(DEFAULT_OVERRIDE_KIND)
}

/// Axes parsed from variant names such as `Button, State=Hover, Size=Large`.
/// Axis and option order is first-seen; options are deduplicated.
pub fn variant_axes<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<VariantAxis> {
    let mut axes: Vec<VariantAxis> = Vec::new();
    for name in names {
        for (axis, option) in name.split(", ").filter_map(|t| t.split_once('=')) {
            let (axis, option) = (axis.trim(), option.trim());
            if axis.is_empty() {
                continue;
            }
            let index = match axes.iter().position(|a| a.name == axis) {
                Some(index) => index,
                None => {
                    axes.push(VariantAxis {
                        name: axis.to_string(),
                        options: Vec::new(),
                    });
                    axes.len() - 1
                }
            };
            let options = &mut axes[index].options;
            if !options.iter().any(|o| o == option) {
                options.push(option.to_string());
            }
        }
    }
    axes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;
    use crate::host::{ComponentRef, HostSnapshot};
    use crate::scene::scene_from_value;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn relationships(value: serde_json::Value, snapshot: &HostSnapshot) -> Option<Relationships> {
        let node = scene_from_value(value).expect("scene");
        let config = ExtractionConfig::default();
        extract_relationships(&node, &ExtractContext::new(snapshot, &config))
    }

    #[test]
    fn variant_names_become_axes_in_first_seen_order() {
        let r = relationships(
            json!({
                "id": "1", "type": "COMPONENT_SET", "name": "Button",
                "children": [
                    {"id": "2", "type": "COMPONENT", "name": "Button, State=Default"},
                    {"id": "3", "type": "COMPONENT", "name": "Button, State=Hover"},
                    {"id": "4", "type": "COMPONENT", "name": "Button, State=Default"}
                ]
            }),
            &HostSnapshot::new(),
        )
        .expect("relationships");

        assert_eq!(
            r.variant_axes,
            vec![VariantAxis {
                name: "State".to_string(),
                options: vec!["Default".to_string(), "Hover".to_string()],
            }]
        );
    }

    #[test]
    fn multiple_axes_and_unmatched_sets() {
        let axes = variant_axes([
            "Size=Small, Tone=Primary",
            "Size=Large, Tone=Primary",
            "Size=Small, Tone=Ghost",
        ]);
        assert_eq!(axes.len(), 2);
        assert_eq!(axes[0].name, "Size");
        assert_eq!(axes[0].options, vec!["Small", "Large"]);
        assert_eq!(axes[1].options, vec!["Primary", "Ghost"]);

        assert!(relationships(
            json!({"id": "1", "type": "COMPONENT_SET", "children": [
                {"id": "2", "type": "COMPONENT", "name": "Primary"}
            ]}),
            &HostSnapshot::new()
        )
        .is_none());
        assert!(relationships(json!({"id": "1", "type": "COMPONENT_SET"}), &HostSnapshot::new())
            .is_none());
    }

    #[test]
    fn instance_uses_resolved_component() {
        let snapshot = HostSnapshot::new().with_component(
            "10:1",
            ComponentRef {
                id: Some("5:1".to_string()),
                key: Some("abc".to_string()),
                name: "Button/Primary".to_string(),
                remote: true,
            },
        );
        let r = relationships(
            json!({"id": "10:1", "type": "INSTANCE", "name": "Buy", "componentId": "5:1"}),
            &snapshot,
        )
        .expect("relationships");
        let link = r.main_component.expect("main component");
        assert!(link.resolved);
        assert_eq!(link.name, "Button/Primary");
        assert!(link.remote);
    }

    #[test]
    fn unresolved_instance_falls_back_to_its_name() {
        let r = relationships(
            json!({
                "id": "10:1", "type": "INSTANCE", "name": "Buy", "componentId": "5:1",
                "componentProperties": {
                    "Label#1:0": {"type": "TEXT", "value": "Buy now", "defaultValue": "Button"},
                    "Show icon#2:0": {"type": "BOOLEAN", "value": false}
                }
            }),
            &HostSnapshot::new(),
        )
        .expect("relationships");

        let link = r.main_component.expect("main component");
        assert!(!link.resolved);
        assert_eq!(link.name, "Buy");
        assert_eq!(link.id.as_deref(), Some("5:1"));

        assert_eq!(r.overrides.len(), 2);
        let label = &r.overrides[0];
        assert_eq!(label.property, "Label#1:0");
        assert_eq!(label.value, json!("Buy now"));
        assert_eq!(label.original_value, Some(json!("Button")));
        assert_eq!(label.override_type, "component");
        assert_eq!(label.path, "Buy.Label#1:0");
    }

    #[test]
    fn override_type_follows_key_substrings() {
        assert_eq!(override_type("Button text"), "text");
        assert_eq!(override_type("fillColor"), "fill");
        assert_eq!(override_type("Stroke"), "stroke");
        assert_eq!(override_type("isVisible"), "visible");
        assert_eq!(override_type("Size"), "component");
    }
}
