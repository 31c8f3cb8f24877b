//! Layout resolution: from caller intent to a validated grid assignment.
//!
//! One entry point, three input modes. A label mapping or label-grid
//! diagram defines the whole layout by itself; otherwise an explicit grid
//! (per-row counts or cell spans) is resolved; otherwise one panel is
//! placed in every cell of the requested shape.

use std::collections::BTreeSet;

use mosaic_core::{
    CellSpan, GridShape, LabelCase, LabelMap, LayoutError, LayoutWarning,
};

use crate::label_grid::LabelGrid;
use crate::letters::letters;
use crate::overlap::find_overlaps;
use crate::raster::build_raster;

/// Default grid shape when neither a grid nor a shape is given.
pub const DEFAULT_SHAPE: GridShape = GridShape { rows: 2, cols: 2 };

/// How the panel grid is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridSpec {
    /// The number of panels in each row; every row divides the LCM-many
    /// columns evenly between its panels.
    RowCounts(Vec<usize>),
    /// Explicit cell spans, one per panel, with the grid shape inferred
    /// from the maximum extents.
    Spans(Vec<CellSpan>),
}

/// Where panel labels come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LabelSpec {
    /// Default letters key the panels but are not drawn.
    #[default]
    Hidden,
    /// Default letters, drawn on each panel.
    Auto,
    /// Explicit labels, bound positionally to the resolved locations.
    Names(Vec<String>),
    /// An explicit label-to-span mapping; defines the layout by itself.
    Map(LabelMap),
    /// A label-grid diagram; defines the layout by itself.
    Grid(LabelGrid),
}

/// Caller intent for one layout resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutSpec {
    /// Grid shape to fill when no `grid` is given; defaults to 2x2.
    pub shape: Option<GridShape>,
    /// Explicit panel arrangement.
    pub grid: Option<GridSpec>,
    /// Label source.
    pub labels: LabelSpec,
    /// Alphabet case for default letter labels.
    pub label_case: LabelCase,
}

/// A fully resolved layout.
///
/// Resolution is deterministic: identical specs produce identical
/// resolved layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLayout {
    /// The concrete grid dimensions.
    pub shape: GridShape,
    /// One span per panel, in panel order.
    pub locations: Vec<CellSpan>,
    /// One label per panel, parallel to `locations`.
    pub labels: Vec<String>,
    /// Panel count.
    pub panels: usize,
    /// Whether labels should be drawn on the panels.
    pub draw_labels: bool,
    /// Advisory findings; never block construction.
    pub warnings: Vec<LayoutWarning>,
}

/// Resolve a layout spec into a concrete grid assignment.
pub fn resolve_layout(spec: &LayoutSpec) -> Result<ResolvedLayout, LayoutError> {
    let mut warnings = Vec::new();

    let (shape, locations, labels, draw_labels) = match &spec.labels {
        LabelSpec::Grid(grid) => {
            let map = grid.decode()?;
            ignored_input_warning(spec, &mut warnings);
            let (labels, locations) = split_map(map);
            validate_spans(&locations)?;
            // Gap cells may extend past every panel, so the diagram's own
            // dimensions are the shape, not the span extents.
            (grid.shape(), locations, labels, true)
        }
        LabelSpec::Map(map) => {
            ignored_input_warning(spec, &mut warnings);
            let (labels, locations) = split_map(map.clone());
            if locations.is_empty() {
                return Err(LayoutError::EmptyGrid);
            }
            validate_spans(&locations)?;
            (inferred_shape(&locations), locations, labels, true)
        }
        labels => {
            let (shape, locations) = resolve_grid(spec)?;
            let (labels, draw_labels) = assign_labels(labels, locations.len(), spec.label_case)?;
            (shape, locations, labels, draw_labels)
        }
    };

    let collisions = find_overlaps(&locations);
    if !collisions.is_empty() {
        warnings.push(LayoutWarning::PanelOverlap { cells: collisions });
    }

    Ok(ResolvedLayout {
        shape,
        panels: locations.len(),
        locations,
        labels,
        draw_labels,
        warnings,
    })
}

/// Resolve the grid-based path: explicit grid if given, otherwise one
/// panel per cell of the shape.
fn resolve_grid(spec: &LayoutSpec) -> Result<(GridShape, Vec<CellSpan>), LayoutError> {
    match &spec.grid {
        Some(GridSpec::RowCounts(counts)) => {
            let raster = build_raster(counts)?;
            Ok((raster.shape, raster.locations))
        }
        Some(GridSpec::Spans(spans)) => {
            if spans.is_empty() {
                return Err(LayoutError::EmptyGrid);
            }
            validate_spans(spans)?;
            Ok((inferred_shape(spans), spans.clone()))
        }
        None => {
            let shape = spec.shape.unwrap_or(DEFAULT_SHAPE);
            if shape.rows == 0 || shape.cols == 0 {
                return Err(LayoutError::InvalidShape {
                    rows: shape.rows,
                    cols: shape.cols,
                });
            }
            let mut locations = Vec::with_capacity(shape.cells());
            for row in 0..shape.rows {
                for col in 0..shape.cols {
                    locations.push(CellSpan::cell(row, col));
                }
            }
            Ok((shape, locations))
        }
    }
}

/// Bind labels to a grid-resolved location list.
fn assign_labels(
    labels: &LabelSpec,
    panels: usize,
    case: LabelCase,
) -> Result<(Vec<String>, bool), LayoutError> {
    match labels {
        LabelSpec::Names(names) => {
            if names.len() != panels {
                return Err(LayoutError::LabelCountMismatch {
                    expected: panels,
                    found: names.len(),
                });
            }
            // Labels key the panel collection, so each may name only one
            // panel.
            let mut seen = BTreeSet::new();
            for name in names {
                if !seen.insert(name.as_str()) {
                    return Err(LayoutError::DuplicateLabel {
                        label: name.clone(),
                    });
                }
            }
            Ok((names.clone(), true))
        }
        // Hidden still assigns default letters: they key the panel
        // collection, only drawing is suppressed.
        LabelSpec::Hidden | LabelSpec::Auto => {
            let alphabet = letters(case);
            if panels > alphabet.len() {
                return Err(LayoutError::AlphabetExhausted { panels });
            }
            let names = alphabet[..panels].iter().map(|s| s.to_string()).collect();
            Ok((names, matches!(labels, LabelSpec::Auto)))
        }
        LabelSpec::Map(_) | LabelSpec::Grid(_) => unreachable!("handled by the label-driven path"),
    }
}

fn split_map(map: LabelMap) -> (Vec<String>, Vec<CellSpan>) {
    map.into_iter().unzip()
}

fn validate_spans(spans: &[CellSpan]) -> Result<(), LayoutError> {
    for span in spans {
        if !span.is_valid() {
            return Err(LayoutError::InvalidSpan { span: *span });
        }
    }
    Ok(())
}

/// Smallest shape that contains every span.
fn inferred_shape(locations: &[CellSpan]) -> GridShape {
    let mut rows = 0;
    let mut cols = 0;
    for span in locations {
        rows = rows.max(span.row.last() + 1);
        cols = cols.max(span.col.last() + 1);
    }
    GridShape::new(rows, cols)
}

fn ignored_input_warning(spec: &LayoutSpec, warnings: &mut Vec<LayoutWarning>) {
    if spec.grid.is_some() || spec.shape.is_some() {
        warnings.push(LayoutWarning::IgnoredGridInput {
            grid: spec.grid.is_some(),
            shape: spec.shape.is_some(),
        });
    }
}
