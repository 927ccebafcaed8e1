//! Markup processing pipeline.
//!
//! The processor module is organized into focused submodules:
//!
//! - [`core`]: `MarkupProcessor` and the public entry points
//! - `orchestrate`: runs the scanner passes and resolves transformations
//! - `paragraph`: wraps free text in paragraph shells
//! - `render`: assembles the final output in a single pass
pub mod core;
mod orchestrate;
mod paragraph;
mod render;

pub use self::core::{MarkupProcessor, transform, transform_with};
