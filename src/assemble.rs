//! Tree assembly: scene tree + host snapshot to blueprint tree.
//!
//! [`extract_blueprint`] is the library entry point. It resolves every host
//! lookup up front into a [`HostSnapshot`], then [`assemble`] walks the scene
//! synchronously in pre-order and runs each extractor on every node.

use serde::{Deserialize, Serialize};

use crate::config::ExtractionConfig;
use crate::diagnostics::{Diagnostics, Stage};
use crate::extract::geometry::extract_geometry;
use crate::extract::interactive::extract_interactions;
use crate::extract::layout::extract_layout;
use crate::extract::relationships::extract_relationships;
use crate::extract::responsive::extract_responsive;
use crate::extract::semantic::extract_semantic;
use crate::extract::tokens::extract_tokens;
use crate::extract::typography::extract_typography;
use crate::extract::visual::extract_visuals;
use crate::extract::ExtractContext;
use crate::host::{HostSnapshot, SceneHost};
use crate::scene::{LayoutMode, NodeKind, SceneNode};
use crate::types::{BlueprintNode, Typography};

/// A blueprint tree and everything that went wrong while building it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    pub root: BlueprintNode,
    pub diagnostics: Diagnostics,
}

/// Resolve host lookups for `root`, then assemble its blueprint.
///
/// Never fails: host and extractor problems end up in
/// [`Extraction::diagnostics`].
pub async fn extract_blueprint(
    host: &dyn SceneHost,
    root: &SceneNode,
    config: &ExtractionConfig,
) -> Extraction {
    let mut diagnostics = Diagnostics::new();
    let snapshot = HostSnapshot::resolve(host, root, config, &mut diagnostics).await;
    let blueprint = assemble(root, &snapshot, config, &mut diagnostics);
    tracing::info!(
        root = %root.id,
        nodes = blueprint.count_nodes(),
        warnings = diagnostics.warning_count(),
        "blueprint extracted"
    );
    Extraction {
        root: blueprint,
        diagnostics,
    }
}

/// Build the blueprint for `root` from an already resolved snapshot.
pub fn assemble(
    root: &SceneNode,
    snapshot: &HostSnapshot,
    config: &ExtractionConfig,
    diagnostics: &mut Diagnostics,
) -> BlueprintNode {
    let mut assembler = TreeAssembler {
        ctx: ExtractContext::new(snapshot, config),
        diagnostics,
    };
    assembler.node(root, Parent::root(), 0, 0)
}

/// What a child needs to know about its parent.
#[derive(Debug, Clone, Copy)]
struct Parent {
    layout_mode: Option<LayoutMode>,
    /// Top-left of the tightest box around a group's children.
    group_origin: Option<(f64, f64)>,
}

impl Parent {
    fn root() -> Self {
        Self {
            layout_mode: None,
            group_origin: None,
        }
    }

    fn of(node: &SceneNode) -> Self {
        Self {
            layout_mode: node.auto_layout().map(|al| al.mode),
            group_origin: (node.kind == NodeKind::Group)
                .then(|| group_origin(node.children()))
                .flatten(),
        }
    }
}

struct TreeAssembler<'a> {
    ctx: ExtractContext<'a>,
    diagnostics: &'a mut Diagnostics,
}

impl TreeAssembler<'_> {
    fn node(
        &mut self,
        node: &SceneNode,
        parent: Parent,
        sibling_index: usize,
        level: usize,
    ) -> BlueprintNode {
        let ctx = self.ctx;

        let mut layout = extract_layout(node, parent.layout_mode);
        if let Some((min_x, min_y)) = parent.group_origin {
            layout.x = (layout.x - min_x).max(0.0);
            layout.y = (layout.y - min_y).max(0.0);
        }

        let typography = match extract_typography(node, &ctx) {
            Ok(typography) => typography,
            Err(err) => {
                self.diagnostics.warn(
                    &node.id,
                    Stage::Typography,
                    format!("typography replaced with defaults: {err}"),
                );
                Some(Typography::default())
            }
        };

        let geometry = extract_geometry(node, &ctx).unwrap_or_else(|err| {
            self.diagnostics.warn(
                &node.id,
                Stage::Geometry,
                format!("geometry replaced with defaults: {err}"),
            );
            Default::default()
        });

        let this = Parent::of(node);
        let children = node
            .children()
            .iter()
            .enumerate()
            .map(|(index, child)| self.node(child, this, index, level + 1))
            .collect();

        BlueprintNode {
            id: node.id.clone(),
            name: node.name.clone(),
            node_type: node.type_name.clone(),
            visible: node.visible,
            sibling_index,
            hierarchy_level: level,
            visuals: extract_visuals(node, &ctx),
            typography,
            layout,
            geometry,
            semantic: extract_semantic(node),
            responsive: extract_responsive(node, &ctx),
            interactions: extract_interactions(node),
            tokens: extract_tokens(node, &ctx),
            relationships: extract_relationships(node, &ctx),
            children,
        }
    }
}

/// Top-left corner of the tightest box around `children`' local frames.
pub(crate) fn group_origin(children: &[SceneNode]) -> Option<(f64, f64)> {
    let min = |value: fn(&SceneNode) -> f64| {
        children
            .iter()
            .map(value)
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.min(v))))
    };
    Some((min(|c| c.frame.x)?, min(|c| c.frame.y)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use crate::host::StaticHost;
    use crate::scene::scene_from_value;
    use proptest::prelude::*;
    use serde_json::{json, Value};

    fn build(value: Value) -> (BlueprintNode, Diagnostics) {
        let scene = scene_from_value(value).expect("scene");
        let mut diagnostics = Diagnostics::new();
        let config = ExtractionConfig::default();
        let blueprint = assemble(&scene, &HostSnapshot::new(), &config, &mut diagnostics);
        (blueprint, diagnostics)
    }

    #[test]
    fn group_children_are_rebased_on_their_tightest_origin() {
        let (root, _) = build(json!({
            "id": "g", "type": "GROUP",
            "children": [
                {"id": "a", "type": "RECTANGLE", "x": 30, "y": 12, "width": 10, "height": 10},
                {"id": "b", "type": "RECTANGLE", "x": 10, "y": 20, "width": 10, "height": 10},
                {"id": "c", "type": "RECTANGLE", "x": 50, "y": 5, "width": 10, "height": 10}
            ]
        }));

        let xs: Vec<f64> = root.children.iter().map(|c| c.layout.x).collect();
        let ys: Vec<f64> = root.children.iter().map(|c| c.layout.y).collect();
        assert_eq!(xs, vec![20.0, 0.0, 40.0]);
        assert_eq!(ys, vec![7.0, 15.0, 0.0]);
    }

    #[test]
    fn frame_children_keep_their_position() {
        let (root, _) = build(json!({
            "id": "f", "type": "FRAME",
            "children": [{"id": "a", "type": "RECTANGLE", "x": 30, "y": 12}]
        }));
        assert_eq!((root.children[0].layout.x, root.children[0].layout.y), (30.0, 12.0));
    }

    #[test]
    fn mixed_typography_is_replaced_and_reported() {
        let (root, diagnostics) = build(json!({
            "id": "f", "type": "FRAME",
            "children": [
                {"id": "t", "type": "TEXT", "characters": "Hi", "fontName": "__mixed__"},
                {"id": "r", "type": "RECTANGLE"}
            ]
        }));

        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].typography, Some(Typography::default()));
        let warning = diagnostics.for_node("t").next().expect("diagnostic");
        assert_eq!(warning.stage, Stage::Typography);
        assert_eq!(warning.severity, Severity::Warning);
        assert_eq!(root.children[1].id, "r");
    }

    #[test]
    fn levels_and_parent_layout_flow_down() {
        let (root, _) = build(json!({
            "id": "r", "type": "FRAME", "layoutMode": "HORIZONTAL",
            "children": [
                {"id": "a", "type": "FRAME", "layoutGrow": 1,
                 "children": [{"id": "a1", "type": "TEXT", "characters": "x"}]},
                {"id": "b", "type": "RECTANGLE"}
            ]
        }));
        assert_eq!(root.hierarchy_level, 0);
        assert_eq!(root.children[0].hierarchy_level, 1);
        assert_eq!(root.children[0].children[0].hierarchy_level, 2);
        assert_eq!(root.children[1].sibling_index, 1);
        assert!(root.children[0].layout.sizing_mode.is_some());
        assert_eq!(root.children[0].children[0].layout.sizing_mode, None);
    }

    #[tokio::test]
    async fn extract_blueprint_resolves_then_assembles() {
        let scene = scene_from_value(json!({
            "id": "1", "type": "FRAME", "fillStyleId": "S:1",
            "children": [{"id": "2", "type": "INSTANCE", "name": "Card"}]
        }))
        .expect("scene");
        let host = StaticHost::new().with_style("S:1", "Surface");
        let config = ExtractionConfig {
            export_svg: false,
            ..ExtractionConfig::default()
        };

        let extraction = extract_blueprint(&host, &scene, &config).await;
        assert_eq!(extraction.root.visuals.fill_style.as_deref(), Some("Surface"));
        let link = extraction.root.children[0]
            .relationships
            .as_ref()
            .and_then(|r| r.main_component.as_ref())
            .expect("main component");
        assert!(!link.resolved);
        assert_eq!(link.name, "Card");
        assert!(extraction
            .diagnostics
            .for_node("2")
            .any(|d| d.stage == Stage::MainComponent));
    }

    fn arb_scene() -> impl Strategy<Value = Value> {
        let leaf = (0u32..1000).prop_map(|n| json!({"id": format!("l{n}"), "type": "RECTANGLE"}));
        leaf.prop_recursive(4, 48, 6, |inner| {
            (prop::collection::vec(inner, 0..6), prop::bool::ANY).prop_map(|(children, group)| {
                json!({
                    "id": "c",
                    "type": if group { "GROUP" } else { "FRAME" },
                    "children": children
                })
            })
        })
    }

    fn check_indices(node: &BlueprintNode, level: usize) {
        assert_eq!(node.hierarchy_level, level);
        for (index, child) in node.children.iter().enumerate() {
            assert_eq!(child.sibling_index, index);
            check_indices(child, level + 1);
        }
    }

    proptest! {
        #[test]
        fn blueprint_mirrors_scene_shape(value in arb_scene()) {
            let scene = scene_from_value(value).expect("scene");
            let mut diagnostics = Diagnostics::new();
            let config = ExtractionConfig::default();
            let blueprint = assemble(&scene, &HostSnapshot::new(), &config, &mut diagnostics);

            prop_assert_eq!(blueprint.count_nodes(), scene.count_nodes());
            check_indices(&blueprint, 0);
        }
    }
}
