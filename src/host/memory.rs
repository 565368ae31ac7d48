//! In-memory host and the JSON bundle it is loaded from.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use super::{ComponentRef, HostError, SceneHost, StyleRef};
use crate::error::{DbeError, Result};
use crate::scene::{scene_from_value, FontName, SceneNode};

/// A scene document plus everything a host would answer about it.
///
/// ```json
/// { "document": { ... }, "styles": { "S:1": { "name": "Brand/Blue" } },
///   "components": { "1:2": { "name": "Button" } },
///   "fonts": [{ "family": "Inter", "style": "Regular" }],
///   "svg": { "1:3": "<svg .../>" } }
/// ```
///
/// A bare scene node without a `document` key is accepted as a bundle with
/// empty host tables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractionBundle {
    pub document: Value,
    #[serde(default)]
    pub styles: HashMap<String, StyleRef>,
    /// Keyed by instance node id.
    #[serde(default)]
    pub components: HashMap<String, ComponentRef>,
    /// Available fonts. Absent means every font loads.
    #[serde(default)]
    pub fonts: Option<Vec<FontName>>,
    #[serde(default)]
    pub svg: HashMap<String, String>,
}

impl ExtractionBundle {
    pub fn from_value(value: Value) -> Result<Self> {
        if value.get("document").is_some() {
            Ok(serde_json::from_value(value)?)
        } else {
            Ok(Self {
                document: value,
                ..Self::default()
            })
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            DbeError::Config(format!("Failed to read bundle {}: {e}", path.display()))
        })?;
        Self::from_json(&contents)
    }

    /// Decode the document and build the host that answers for it.
    pub fn into_parts(self) -> Result<(StaticHost, SceneNode)> {
        let root = scene_from_value(self.document)?;
        let host = StaticHost {
            styles: self.styles,
            components: self.components,
            fonts: self.fonts.map(|fonts| fonts.into_iter().collect()),
            svg: self.svg,
        };
        Ok((host, root))
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticHost {
    styles: HashMap<String, StyleRef>,
    components: HashMap<String, ComponentRef>,
    fonts: Option<HashSet<FontName>>,
    svg: HashMap<String, String>,
}

impl StaticHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style_id: impl Into<String>, name: impl Into<String>) -> Self {
        self.styles.insert(
            style_id.into(),
            StyleRef {
                name: name.into(),
                style_type: None,
                description: None,
            },
        );
        self
    }

    pub fn with_component(mut self, instance_id: impl Into<String>, component: ComponentRef) -> Self {
        self.components.insert(instance_id.into(), component);
        self
    }

    /// Restrict loadable fonts to `fonts`.
    pub fn with_fonts(mut self, fonts: impl IntoIterator<Item = FontName>) -> Self {
        self.fonts = Some(fonts.into_iter().collect());
        self
    }

    pub fn with_svg(mut self, node_id: impl Into<String>, markup: impl Into<String>) -> Self {
        self.svg.insert(node_id.into(), markup.into());
        self
    }
}

#[async_trait]
impl SceneHost for StaticHost {
    async fn style_name(&self, style_id: &str) -> std::result::Result<StyleRef, HostError> {
        self.styles
            .get(style_id)
            .cloned()
            .ok_or_else(|| HostError::NotFound(format!("style {style_id}")))
    }

    async fn main_component(
        &self,
        instance_id: &str,
    ) -> std::result::Result<ComponentRef, HostError> {
        self.components
            .get(instance_id)
            .cloned()
            .ok_or_else(|| HostError::NotFound(format!("main component of {instance_id}")))
    }

    async fn load_font(&self, font: &FontName) -> std::result::Result<(), HostError> {
        match &self.fonts {
            Some(fonts) if !fonts.contains(font) => Err(HostError::NotFound(format!(
                "font {} {}",
                font.family, font.style
            ))),
            _ => Ok(()),
        }
    }

    async fn export_svg(&self, node_id: &str) -> std::result::Result<String, HostError> {
        self.svg
            .get(node_id)
            .cloned()
            .ok_or_else(|| HostError::Unsupported(format!("no SVG export for {node_id}")))
    }
}
