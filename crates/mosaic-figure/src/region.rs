//! Resolved panel placement in grid tracks.

use mosaic_core::{CellSpan, FigureError, GridShape};

/// Placement of one panel in grid tracks, half-open on both axes.
///
/// This is the descriptor a host canvas consumes: it carries no
/// single-versus-run distinction anymore, only the covered track ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelRegion {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl PanelRegion {
    /// Resolve a span against a grid shape.
    ///
    /// Spans reaching past the grid are rejected here, at assembly time;
    /// resolution itself never checks bounds.
    pub fn resolve(span: CellSpan, shape: GridShape) -> Result<Self, FigureError> {
        if !span.fits(shape) {
            return Err(FigureError::SpanOutOfBounds { span, shape });
        }
        let (row_start, row_end) = span.row.extent();
        let (col_start, col_end) = span.col.extent();
        Ok(Self {
            row_start,
            row_end,
            col_start,
            col_end,
        })
    }

    /// Number of row tracks covered.
    pub fn rows(&self) -> usize {
        self.row_end - self.row_start
    }

    /// Number of column tracks covered.
    pub fn cols(&self) -> usize {
        self.col_end - self.col_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_single_cell() {
        let region = PanelRegion::resolve(CellSpan::cell(1, 2), GridShape::new(2, 3)).unwrap();
        assert_eq!(
            region,
            PanelRegion {
                row_start: 1,
                row_end: 2,
                col_start: 2,
                col_end: 3,
            }
        );
        assert_eq!(region.rows(), 1);
        assert_eq!(region.cols(), 1);
    }

    #[test]
    fn test_resolve_block_span() {
        let region =
            PanelRegion::resolve(CellSpan::new(0..2, 1..3), GridShape::new(3, 3)).unwrap();
        assert_eq!(region.rows(), 2);
        assert_eq!(region.cols(), 2);
        assert_eq!(region.col_start, 1);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let result = PanelRegion::resolve(CellSpan::new(0, 0..4), GridShape::new(2, 3));
        assert!(matches!(
            result,
            Err(FigureError::SpanOutOfBounds { .. })
        ));
    }
}
