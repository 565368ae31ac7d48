//! Host platform port.
//!
//! The scene-graph host is read-only from our side. All lookups go through
//! the [`SceneHost`] trait and are resolved up front into an immutable
//! [`HostSnapshot`], so the tree transform itself stays synchronous and
//! host-independent.
//!
//! Adapters:
//! - [`StaticHost`] - in-memory maps, loaded from an [`ExtractionBundle`]
//! - [`FigmaRestHost`] - Figma REST API

pub mod figma;
pub mod memory;
pub mod snapshot;

pub use figma::{FigmaAuth, FigmaClient, FigmaRestHost, ImageExportOptions};
pub use memory::{ExtractionBundle, StaticHost};
pub use snapshot::HostSnapshot;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::scene::FontName;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum HostError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("host call timed out after {0:?}")]
    Timeout(Duration),
    #[error("host request failed: {0}")]
    Request(String),
    #[error("host API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("unsupported by host: {0}")]
    Unsupported(String),
}

/// A registry style resolved from a style reference id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The main component behind an instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub name: String,
    #[serde(default)]
    pub remote: bool,
}

/// Asynchronous, read-only lookups the host platform offers.
#[async_trait]
pub trait SceneHost: Send + Sync {
    async fn style_name(&self, style_id: &str) -> Result<StyleRef, HostError>;

    async fn main_component(&self, instance_id: &str) -> Result<ComponentRef, HostError>;

    async fn load_font(&self, font: &FontName) -> Result<(), HostError>;

    async fn export_svg(&self, node_id: &str) -> Result<String, HostError>;
}
