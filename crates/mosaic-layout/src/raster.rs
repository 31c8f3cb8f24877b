//! Row-raster resolution from per-row panel counts.
//!
//! A raster layout is described by how many panels each row holds. The
//! column count of the resolved grid is the least common multiple of the
//! row counts, so every row divides into its panels with exact integer
//! widths.

use mosaic_core::{AxisSpan, CellSpan, GridShape, LayoutError};

fn gcd(mut left: usize, mut right: usize) -> usize {
    while right != 0 {
        let rem = left % right;
        left = right;
        right = rem;
    }
    left
}

/// Least common multiple of a sequence of positive integers.
///
/// Folds left to right with exact integer arithmetic; the intermediate
/// product is overflow-checked. An empty sequence or a zero element is an
/// input error.
pub fn lcm_of(values: &[usize]) -> Result<usize, LayoutError> {
    if values.is_empty() {
        return Err(LayoutError::EmptyGrid);
    }
    let mut lcm = 1usize;
    for (row, &value) in values.iter().enumerate() {
        if value == 0 {
            return Err(LayoutError::ZeroRowCount { row });
        }
        lcm = (lcm / gcd(lcm, value))
            .checked_mul(value)
            .ok_or(LayoutError::LcmOverflow)?;
    }
    Ok(lcm)
}

/// A resolved row raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Grid shape: one grid row per count, LCM-many columns.
    pub shape: GridShape,
    /// One span per panel, rows top to bottom, panels left to right.
    pub locations: Vec<CellSpan>,
    /// Total panel count, the sum of the row counts.
    pub panels: usize,
}

/// Derive a grid layout from the number of panels in each row.
///
/// Each of the `k` panels in a row of count `k` spans `columns / k`
/// tracks, which is exact because `columns` is the LCM of all counts. A
/// width-1 column extent collapses to a `Single` axis rather than a
/// length-1 run.
pub fn build_raster(row_counts: &[usize]) -> Result<Raster, LayoutError> {
    let cols = lcm_of(row_counts)?;
    let panels = row_counts.iter().sum();

    let mut locations = Vec::with_capacity(panels);
    for (row, &count) in row_counts.iter().enumerate() {
        let width = cols / count;
        for panel in 0..count {
            let start = panel * width;
            locations.push(CellSpan {
                row: AxisSpan::Single(row),
                col: AxisSpan::from_extent(start, start + width),
            });
        }
    }

    Ok(Raster {
        shape: GridShape::new(row_counts.len(), cols),
        locations,
        panels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcm_examples() {
        assert_eq!(lcm_of(&[1, 2, 3, 4, 5]).unwrap(), 60);
        assert_eq!(lcm_of(&[2, 3, 1]).unwrap(), 6);
        assert_eq!(lcm_of(&[7]).unwrap(), 7);
    }

    #[test]
    fn test_lcm_rejects_empty_and_zero() {
        assert!(matches!(lcm_of(&[]), Err(LayoutError::EmptyGrid)));
        assert!(matches!(
            lcm_of(&[2, 0, 3]),
            Err(LayoutError::ZeroRowCount { row: 1 })
        ));
    }

    #[test]
    fn test_lcm_overflow() {
        assert!(matches!(
            lcm_of(&[usize::MAX, usize::MAX - 1]),
            Err(LayoutError::LcmOverflow)
        ));
    }

    #[test]
    fn test_raster_two_three_one() {
        let raster = build_raster(&[2, 3, 1]).unwrap();
        assert_eq!(raster.shape, GridShape::new(3, 6));
        assert_eq!(raster.panels, 6);
        assert_eq!(
            raster.locations,
            vec![
                CellSpan::new(0, 0..3),
                CellSpan::new(0, 3..6),
                CellSpan::new(1, 0..2),
                CellSpan::new(1, 2..4),
                CellSpan::new(1, 4..6),
                CellSpan::new(2, 0..6),
            ]
        );
    }

    #[test]
    fn test_raster_collapses_unit_width_columns() {
        // Every row has the same count, so each panel is one track wide
        // and the column axis must be Single, not a length-1 Run.
        let raster = build_raster(&[2, 2]).unwrap();
        assert_eq!(raster.shape, GridShape::new(2, 2));
        assert_eq!(
            raster.locations,
            vec![
                CellSpan::cell(0, 0),
                CellSpan::cell(0, 1),
                CellSpan::cell(1, 0),
                CellSpan::cell(1, 1),
            ]
        );
    }

    #[test]
    fn test_raster_row_widths_sum_to_columns() {
        let counts = [2, 3, 4, 6];
        let raster = build_raster(&counts).unwrap();
        for row in 0..counts.len() {
            let total: usize = raster
                .locations
                .iter()
                .filter(|span| span.row == AxisSpan::Single(row))
                .map(|span| span.col.len())
                .sum();
            assert_eq!(total, raster.shape.cols);
        }
    }
}
