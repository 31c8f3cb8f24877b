//! The seam between an assembled figure and a host drawing surface.
//!
//! The figure never draws anything itself; it replays panel allocations
//! and label annotations onto a [`Canvas`] owned by the caller. A canvas
//! instance must not be shared across concurrent constructions.

use mosaic_core::FigureError;

use crate::region::PanelRegion;

/// A label annotation for one panel.
///
/// Coordinates are panel-local and fractional: `(0, 0)` is the panel's
/// bottom-left corner, `(1, 1)` its top-right, so the offset is
/// independent of panel size. For spanning panels the host anchors the
/// mark to the top-left panel corner of the span.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMark {
    /// The panel the mark belongs to.
    pub label: String,
    /// The text drawn; normally the label itself.
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub weight: u32,
    pub family: String,
}

/// A host drawing surface that receives allocated panels and label marks.
pub trait Canvas {
    /// Allocate one drawable panel covering `region`.
    fn allocate(&mut self, label: &str, region: PanelRegion) -> Result<(), FigureError>;

    /// Draw a label mark onto an allocated panel.
    fn annotate(&mut self, label: &str, mark: &LabelMark) -> Result<(), FigureError>;
}

/// A data-only canvas that records every command it receives.
///
/// Useful for tests and for hosts that want to translate the command
/// list themselves.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    allocations: Vec<(String, PanelRegion)>,
    annotations: Vec<LabelMark>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Panels allocated so far, in order.
    pub fn allocations(&self) -> &[(String, PanelRegion)] {
        &self.allocations
    }

    /// Label marks drawn so far, in order.
    pub fn annotations(&self) -> &[LabelMark] {
        &self.annotations
    }
}

impl Canvas for RecordingCanvas {
    fn allocate(&mut self, label: &str, region: PanelRegion) -> Result<(), FigureError> {
        self.allocations.push((label.to_string(), region));
        Ok(())
    }

    fn annotate(&mut self, _label: &str, mark: &LabelMark) -> Result<(), FigureError> {
        self.annotations.push(mark.clone());
        Ok(())
    }
}
