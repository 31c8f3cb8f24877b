//! Error types for the mosaic layout engine.

use crate::types::{CellSpan, GridShape};
use thiserror::Error;

/// Top-level error type for the mosaic engine.
#[derive(Debug, Error)]
pub enum MosaicError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Figure(#[from] FigureError),
}

/// Errors during layout resolution.
///
/// All of these are fatal for the construction call that raised them: no
/// partial layout is produced, and the caller must fix the input and
/// resolve again.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Layout resolves to zero panels")]
    EmptyGrid,

    #[error("Invalid grid shape {rows}x{cols}: both dimensions must be at least 1")]
    InvalidShape { rows: usize, cols: usize },

    #[error("Row {row} requests zero panels")]
    ZeroRowCount { row: usize },

    #[error("Least common multiple of row counts overflows")]
    LcmOverflow,

    #[error("Span {span} covers no cells")]
    InvalidSpan { span: CellSpan },

    #[error("Label grid row {row} has {found} cells, expected {expected}")]
    RaggedLabelGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Label grid contains no cells")]
    EmptyLabelGrid,

    #[error("Label {label:?} does not cover a solid rectangle of cells")]
    NonRectangularLabel { label: String },

    #[error("{found} labels provided for {expected} panels")]
    LabelCountMismatch { expected: usize, found: usize },

    #[error("Label {label:?} is assigned to more than one panel")]
    DuplicateLabel { label: String },

    #[error("Default letter labels cover at most 26 panels, layout has {panels}")]
    AlphabetExhausted { panels: usize },
}

/// Errors during figure assembly.
#[derive(Debug, Error)]
pub enum FigureError {
    #[error("Panel span {span} lies outside the {shape} grid")]
    SpanOutOfBounds { span: CellSpan, shape: GridShape },

    #[error("{found} {axis} ratios provided for a grid with {expected} {axis} tracks")]
    RatioCountMismatch {
        axis: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Canvas rejected a draw command: {reason}")]
    Canvas { reason: String },
}
