//! Per-node extractors.
//!
//! Each extractor reads one [`SceneNode`](crate::scene::SceneNode) plus the
//! resolved [`HostSnapshot`] and produces one blueprint value group. None of
//! them depend on siblings, so the assembler may run them in any order.
//!
//! Extractors that can reject their input return [`ExtractResult`]; the
//! assembler substitutes an empty group and records a diagnostic.

pub mod color;
pub mod geometry;
pub mod interactive;
pub mod layout;
pub mod path;
pub mod relationships;
pub mod responsive;
pub mod semantic;
pub mod text_metrics;
pub mod tokens;
pub mod typography;
pub mod visual;

use thiserror::Error;

use crate::config::ExtractionConfig;
use crate::host::HostSnapshot;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExtractError {
    #[error("{field} differs across text ranges")]
    MixedValue { field: &'static str },
    #[error("malformed {field}: {reason}")]
    Malformed { field: &'static str, reason: String },
}

pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Read-only inputs shared by every extractor in one pass.
#[derive(Debug, Clone, Copy)]
pub struct ExtractContext<'a> {
    pub snapshot: &'a HostSnapshot,
    pub config: &'a ExtractionConfig,
}

impl<'a> ExtractContext<'a> {
    pub fn new(snapshot: &'a HostSnapshot, config: &'a ExtractionConfig) -> Self {
        Self { snapshot, config }
    }
}

pub use color::{parse_rgba, to_hex, to_rgba, Rgba8};
pub use geometry::{decompose_transform, svg_export_eligible};
pub use path::parse_path;
pub use text_metrics::{estimate_width, layout_lines, LineLayout};
pub use tokens::classify_token_key;
pub use typography::{decode_open_type, font_weight_from_style};
