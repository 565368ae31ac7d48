//! Design Blueprint Extractor (DBE) Library
//!
//! Normalizes a design tool's scene graph into a tree of typed blueprint
//! nodes that downstream code generators can consume without talking to the
//! design tool. Each blueprint node carries independent value groups
//! (visuals, typography, layout, geometry, semantics, responsive hints,
//! interactions, tokens and component relationships).
//!
//! # Module Overview
//!
//! - [`scene`] - Scene node model and raw JSON decoding
//! - [`host`] - Host port, pre-resolved snapshot, in-memory and Figma REST hosts
//! - [`extract`] - Per-node extractors
//! - [`assemble`] - Tree assembly and the [`extract_blueprint`] entry point
//! - [`fidelity`] - Post-hoc fidelity scoring of a blueprint against its source
//! - [`diagnostics`] - Warnings accumulated during extraction
//! - [`config`] - Configuration file support
//! - [`types`] - Blueprint and fidelity report types
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```no_run
//! use dbe_lib::{extract_blueprint, validate_node, Config, ExtractionBundle};
//!
//! # async fn example() -> dbe_lib::Result<()> {
//! let bundle = ExtractionBundle::load(std::path::Path::new("scene.json"))?;
//! let (host, scene) = bundle.into_parts()?;
//! let config = Config::default();
//!
//! let extraction = extract_blueprint(&host, &scene, &config.extraction).await;
//! let report = validate_node(&scene, &extraction.root, &config.fidelity);
//! println!("{} nodes, overall {:.1}", extraction.root.count_nodes(), report.overall);
//! # Ok(())
//! # }
//! ```

pub mod assemble;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod fidelity;
pub mod host;
pub mod logging;
pub mod output;
pub mod resource;
pub mod scene;
pub mod types;

pub use assemble::{assemble, extract_blueprint, Extraction};
pub use config::{Config, ExtractionConfig, FidelityConfig, FigmaConfig};
pub use diagnostics::{Diagnostic, Diagnostics, Severity, Stage};
pub use error::{DbeError, ErrorCategory, ErrorPayload, Result};
pub use extract::{ExtractContext, ExtractError};
pub use fidelity::{validate_node, validate_tree, AxisChecker};
pub use host::{
    ComponentRef, ExtractionBundle, FigmaAuth, FigmaClient, FigmaRestHost, HostError,
    HostSnapshot, SceneHost, StaticHost, StyleRef,
};
pub use output::{
    DbeOutput, ErrorOutput, ExtractOutput, ExtractStats, ResourceDescriptor, ValidateOutput,
    DBE_OUTPUT_VERSION,
};
pub use resource::{parse_resource, FigmaInfo, ParsedResource, ResourceKind};
pub use scene::{scene_from_json, scene_from_value, NodeKind, SceneNode};
pub use types::{BlueprintNode, FidelityReport, TreeFidelityReport};
