//! Pre-resolution of every host lookup a scene tree needs.

use futures::future::{BoxFuture, FutureExt};
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::time::Duration;

use super::{ComponentRef, HostError, SceneHost, StyleRef};
use crate::config::ExtractionConfig;
use crate::diagnostics::{Diagnostics, Stage};
use crate::extract::geometry::svg_export_eligible;
use crate::scene::{FontName, SceneNode};

/// Immutable answers to the host lookups of one extraction pass.
///
/// Absent entries mean the lookup failed or was never needed; the reason is
/// in the [`Diagnostics`] returned from [`HostSnapshot::resolve`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostSnapshot {
    styles: HashMap<String, StyleRef>,
    components: HashMap<String, ComponentRef>,
    fonts: HashMap<FontName, bool>,
    svg: HashMap<String, String>,
}

impl HostSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk `root` in pre-order and resolve each distinct lookup once.
    ///
    /// Calls are issued one at a time and each is bounded by
    /// `config.host_timeout`. Failures are recorded in `diagnostics`.
    pub async fn resolve(
        host: &dyn SceneHost,
        root: &SceneNode,
        config: &ExtractionConfig,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let mut resolver = Resolver {
            host,
            timeout: config.host_timeout,
            export_svg: config.export_svg,
            snapshot: HostSnapshot::default(),
            failed_styles: HashSet::new(),
            diagnostics,
        };
        resolver.visit(root).await;
        tracing::debug!(
            styles = resolver.snapshot.styles.len(),
            components = resolver.snapshot.components.len(),
            fonts = resolver.snapshot.fonts.len(),
            svg = resolver.snapshot.svg.len(),
            "host snapshot resolved"
        );
        resolver.snapshot
    }

    pub fn style(&self, style_id: &str) -> Option<&StyleRef> {
        self.styles.get(style_id)
    }

    pub fn style_name(&self, style_id: &str) -> Option<&str> {
        self.style(style_id).map(|s| s.name.as_str())
    }

    pub fn component(&self, instance_id: &str) -> Option<&ComponentRef> {
        self.components.get(instance_id)
    }

    /// `None` when the font was never requested.
    pub fn font_loaded(&self, font: &FontName) -> Option<bool> {
        self.fonts.get(font).copied()
    }

    pub fn svg(&self, node_id: &str) -> Option<&str> {
        self.svg.get(node_id).map(String::as_str)
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

    pub fn with_font(mut self, font: FontName, loaded: bool) -> Self {
        self.fonts.insert(font, loaded);
        self
    }

    pub fn with_svg(mut self, node_id: impl Into<String>, markup: impl Into<String>) -> Self {
        self.svg.insert(node_id.into(), markup.into());
        self
    }
}

struct Resolver<'a> {
    host: &'a dyn SceneHost,
    timeout: Duration,
    export_svg: bool,
    snapshot: HostSnapshot,
    failed_styles: HashSet<String>,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> Resolver<'a> {
    fn visit<'b>(&'b mut self, node: &'b SceneNode) -> BoxFuture<'b, ()> {
        async move {
            self.resolve_node(node).await;
            for child in node.children() {
                self.visit(child).await;
            }
        }
        .boxed()
    }

    async fn resolve_node(&mut self, node: &SceneNode) {
        for style_id in style_ids(node) {
            self.resolve_style(&node.id, style_id).await;
        }

        if node.instance().is_some() {
            let host = self.host;
            match self.bounded(host.main_component(&node.id)).await {
                Ok(component) => {
                    self.snapshot.components.insert(node.id.clone(), component);
                }
                Err(err) => self.diagnostics.warn(
                    &node.id,
                    Stage::MainComponent,
                    format!("main component lookup failed: {err}"),
                ),
            }
        }

        if let Some(font) = node.text().and_then(|t| t.font_name.value()) {
            if !self.snapshot.fonts.contains_key(font) {
                let host = self.host;
                let loaded = match self.bounded(host.load_font(font)).await {
                    Ok(()) => true,
                    Err(err) => {
                        self.diagnostics.warn(
                            &node.id,
                            Stage::FontLoad,
                            format!("font {} {} failed to load: {err}", font.family, font.style),
                        );
                        false
                    }
                };
                self.snapshot.fonts.insert(font.clone(), loaded);
            }
        }

        if self.export_svg {
            if svg_export_eligible(node) {
                let host = self.host;
                match self.bounded(host.export_svg(&node.id)).await {
                    Ok(markup) => {
                        self.snapshot.svg.insert(node.id.clone(), markup);
                    }
                    Err(err) => self.diagnostics.info(
                        &node.id,
                        Stage::SvgExport,
                        format!("SVG export omitted: {err}"),
                    ),
                }
            } else {
                tracing::trace!(node = %node.id, "not eligible for SVG export");
            }
        }
    }

    async fn resolve_style(&mut self, node_id: &str, style_id: &str) {
        if self.snapshot.styles.contains_key(style_id) {
            tracing::trace!(style_id, "style lookup cached");
            return;
        }
        if self.failed_styles.contains(style_id) {
            self.diagnostics.info(
                node_id,
                Stage::StyleLookup,
                format!("style {style_id} unresolved (lookup failed earlier)"),
            );
            return;
        }
        let host = self.host;
        match self.bounded(host.style_name(style_id)).await {
            Ok(style) => {
                self.snapshot.styles.insert(style_id.to_string(), style);
            }
            Err(err) => {
                self.failed_styles.insert(style_id.to_string());
                self.diagnostics.warn(
                    node_id,
                    Stage::StyleLookup,
                    format!("style {style_id} lookup failed: {err}"),
                );
            }
        }
    }

    async fn bounded<T, F>(&self, call: F) -> Result<T, HostError>
    where
        F: Future<Output = Result<T, HostError>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(HostError::Timeout(self.timeout)),
        }
    }
}

fn style_ids(node: &SceneNode) -> Vec<&str> {
    let mut ids = Vec::new();
    if let Some(paints) = node.paints() {
        ids.extend(
            [
                &paints.fill_style_id,
                &paints.stroke_style_id,
                &paints.effect_style_id,
            ]
            .into_iter()
            .flatten()
            .map(String::as_str),
        );
    }
    if let Some(id) = node.text().and_then(|t| t.text_style_id.as_deref()) {
        ids.push(id);
    }
    ids
}
