//! Typed figure configuration, split per destination.

use mosaic_core::{FigureError, GridShape};

/// Style for drawn panel labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    /// Font size in points.
    pub size: f64,
    /// Numeric font weight (400 regular, 700 bold).
    pub weight: u32,
    /// Font family name.
    pub family: String,
    /// Label offset relative to each panel's own coordinate origin, in
    /// panel-local fractional coordinates. Independent of panel size;
    /// for a spanning panel the anchor is the top-left of the span.
    pub location: (f64, f64),
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            size: 14.0,
            weight: 700,
            family: "sans-serif".to_string(),
            location: (-0.1, 1.1),
        }
    }
}

/// Spacing and track sizing forwarded to the host grid.
///
/// All fields are optional; `None` leaves the host's own default in
/// place. Margins and spacing are in the host's fractional units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridOptions {
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub top: Option<f64>,
    /// Horizontal spacing between panels.
    pub wspace: Option<f64>,
    /// Vertical spacing between panels.
    pub hspace: Option<f64>,
    /// Relative column widths; length must match the resolved column count.
    pub width_ratios: Option<Vec<f64>>,
    /// Relative row heights; length must match the resolved row count.
    pub height_ratios: Option<Vec<f64>>,
}

impl GridOptions {
    /// Check ratio list lengths against the resolved shape.
    pub(crate) fn validate(&self, shape: GridShape) -> Result<(), FigureError> {
        if let Some(ratios) = &self.width_ratios {
            if ratios.len() != shape.cols {
                return Err(FigureError::RatioCountMismatch {
                    axis: "column",
                    expected: shape.cols,
                    found: ratios.len(),
                });
            }
        }
        if let Some(ratios) = &self.height_ratios {
            if ratios.len() != shape.rows {
                return Err(FigureError::RatioCountMismatch {
                    axis: "row",
                    expected: shape.rows,
                    found: ratios.len(),
                });
            }
        }
        Ok(())
    }
}

/// Canvas-level options forwarded to the host figure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FigureOptions {
    /// Canvas size in the host's units; `None` keeps the host default.
    pub size: Option<(f64, f64)>,
    /// Ask the host for constraint-based spacing.
    pub constrained_layout: bool,
}
