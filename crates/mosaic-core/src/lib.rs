//! Core types for the mosaic multi-panel layout engine.
//!
//! This crate provides the shared vocabulary used across the other mosaic
//! crates:
//! - Grid value types (shapes, cells, axis spans, cell spans)
//! - Error types for resolution and assembly
//! - Advisory warning types

pub mod errors;
pub mod types;
pub mod warnings;

pub use errors::*;
pub use types::*;
pub use warnings::*;
