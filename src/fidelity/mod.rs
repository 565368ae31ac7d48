//! Post-hoc fidelity scoring of a blueprint against its source scene.
//!
//! This module provides:
//! - [`AxisChecker`] - one weighted checklist per [`FidelityAxis`](crate::types::FidelityAxis)
//! - [`validate_node`] - score a single (scene node, blueprint node) pair
//! - [`validate_tree`] - score positionally paired trees
//! - [`generate_suggestions`] - fixed threshold rules per axis
//!
//! Scoring never mutates the blueprint and is never stored in it.

pub mod checks;
pub mod runner;
pub mod suggestions;


pub use checks::{PositioningChecker, TypographyChecker, VisualsChecker};
pub use runner::{
    default_checkers, run_checkers, score_checks, validate_node, validate_tree, AxisChecker,
    NodePair,
};
pub use suggestions::generate_suggestions;
