//! Advisory findings from layout resolution.
//!
//! Warnings never block construction. They are carried as values on the
//! resolved layout so the caller can inspect or surface them; overlapping
//! panels in particular may be a deliberate layering choice (an inset
//! panel, for example), so the resolver reports rather than rejects.

use std::collections::BTreeSet;

use crate::types::GridCell;
use thiserror::Error;

/// A non-fatal finding recorded while resolving a layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutWarning {
    /// Labels were given as a mapping or diagram, which defines the whole
    /// layout by itself; an explicitly supplied `grid` or `shape` is
    /// ignored.
    #[error("Labels were given as a mapping or diagram; the explicit {} input is ignored", ignored_inputs(.grid, .shape))]
    IgnoredGridInput { grid: bool, shape: bool },

    /// Two or more resolved spans claim the same grid cells.
    #[error("Overlapping panel spans claim cells [{}]", format_cells(.cells))]
    PanelOverlap { cells: BTreeSet<GridCell> },
}

fn ignored_inputs(grid: &bool, shape: &bool) -> &'static str {
    match (*grid, *shape) {
        (true, true) => "grid and shape",
        (true, false) => "grid",
        _ => "shape",
    }
}

fn format_cells(cells: &BTreeSet<GridCell>) -> String {
    let parts: Vec<String> = cells.iter().map(GridCell::to_string).collect();
    parts.join(", ")
}
