//! Label-grid diagrams and their decoder.
//!
//! A label grid encodes panel identity by adjacency: every cell of a
//! rectangular grid carries a label string, and adjacent cells with the
//! same label form one panel. The grid
//!
//! ```text
//! A A D
//! B C D
//! E E E
//! ```
//!
//! describes five panels, each occupying the rectangle its label covers.
//! Cells marked with [`GAP`] belong to no panel.

use indexmap::IndexMap;
use mosaic_core::{AxisSpan, CellSpan, GridCell, GridShape, LabelMap, LayoutError};
use smallvec::SmallVec;

/// The cell marker for grid positions that belong to no panel.
pub const GAP: &str = ".";

/// A validated rectangular 2-D grid of panel labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGrid {
    cells: Vec<String>,
    rows: usize,
    cols: usize,
}

impl LabelGrid {
    /// Build a label grid from rows of label strings.
    ///
    /// Every row must have the same length; the grid must contain at
    /// least one cell.
    pub fn from_rows<R, C, S>(rows: R) -> Result<Self, LayoutError>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Self::build(rows)
    }

    /// Parse an ASCII diagram into a label grid.
    ///
    /// Blank lines are skipped; every other line is one grid row. A line
    /// with inner whitespace splits into whitespace-separated labels,
    /// otherwise every character is a single-character label.
    pub fn parse(diagram: &str) -> Result<Self, LayoutError> {
        let mut rows = Vec::new();
        for line in diagram.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let labels: Vec<String> = if line.contains(char::is_whitespace) {
                line.split_whitespace().map(str::to_string).collect()
            } else {
                line.chars().map(String::from).collect()
            };
            rows.push(labels);
        }
        Self::build(rows)
    }

    fn build(rows: Vec<Vec<String>>) -> Result<Self, LayoutError> {
        let Some(first) = rows.first() else {
            return Err(LayoutError::EmptyLabelGrid);
        };
        let cols = first.len();
        if cols == 0 {
            return Err(LayoutError::EmptyLabelGrid);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, labels) in rows.into_iter().enumerate() {
            if labels.len() != cols {
                return Err(LayoutError::RaggedLabelGrid {
                    row,
                    expected: cols,
                    found: labels.len(),
                });
            }
            cells.extend(labels);
        }

        Ok(Self {
            rows: cells.len() / cols,
            cols,
            cells,
        })
    }

    /// Grid dimensions.
    pub fn shape(&self) -> GridShape {
        GridShape::new(self.rows, self.cols)
    }

    /// The label at one cell.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        if row < self.rows && col < self.cols {
            Some(&self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Group identical adjacent labels into spans.
    ///
    /// Labels appear in the output in the order they are first seen on a
    /// row-major scan. Each label's cells must form a solid, gapless
    /// rectangle; a region with holes, or the same label in disconnected
    /// cells, fails the whole decode. One-row or one-column regions
    /// collapse to a `Single` axis.
    pub fn decode(&self) -> Result<LabelMap, LayoutError> {
        let mut coords: IndexMap<&str, SmallVec<[GridCell; 8]>> = IndexMap::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let label = &self.cells[row * self.cols + col];
                if label != GAP {
                    coords.entry(label).or_default().push(GridCell::new(row, col));
                }
            }
        }

        if coords.is_empty() {
            return Err(LayoutError::EmptyGrid);
        }

        let mut map = LabelMap::new();
        for (label, cells) in coords {
            let mut min = cells[0];
            let mut max = cells[0];
            for cell in &cells {
                min.row = min.row.min(cell.row);
                min.col = min.col.min(cell.col);
                max.row = max.row.max(cell.row);
                max.col = max.col.max(cell.col);
            }

            // Cells are distinct by construction, so covering the full
            // bounding box is exactly a count match.
            let area = (max.row - min.row + 1) * (max.col - min.col + 1);
            if cells.len() != area {
                return Err(LayoutError::NonRectangularLabel {
                    label: label.to_string(),
                });
            }

            map.insert(
                label.to_string(),
                CellSpan {
                    row: AxisSpan::from_extent(min.row, max.row + 1),
                    col: AxisSpan::from_extent(min.col, max.col + 1),
                },
            );
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_groups_adjacent_labels() {
        let grid = LabelGrid::from_rows([["A", "A", "D"], ["B", "C", "D"]]).unwrap();
        let map = grid.decode().unwrap();

        let labels: Vec<&String> = map.keys().collect();
        assert_eq!(labels, ["A", "D", "B", "C"]);

        assert_eq!(map["A"], CellSpan::new(0, AxisSpan::from_extent(0, 2)));
        assert_eq!(map["D"], CellSpan::new(AxisSpan::from_extent(0, 2), 2));
        assert_eq!(map["B"], CellSpan::cell(1, 0));
        assert_eq!(map["C"], CellSpan::cell(1, 1));
    }

    #[test]
    fn test_decode_distinct_cells_round_trip() {
        let grid = LabelGrid::from_rows([["A", "B"], ["C", "D"]]).unwrap();
        let map = grid.decode().unwrap();
        let expected: Vec<(String, CellSpan)> = vec![
            ("A".into(), CellSpan::cell(0, 0)),
            ("B".into(), CellSpan::cell(0, 1)),
            ("C".into(), CellSpan::cell(1, 0)),
            ("D".into(), CellSpan::cell(1, 1)),
        ];
        let found: Vec<(String, CellSpan)> =
            map.iter().map(|(label, span)| (label.clone(), *span)).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_decode_rejects_disconnected_label() {
        let grid = LabelGrid::from_rows([["A", "B", "A"]]).unwrap();
        assert!(matches!(
            grid.decode(),
            Err(LayoutError::NonRectangularLabel { label }) if label == "A"
        ));
    }

    #[test]
    fn test_decode_rejects_region_with_hole() {
        let grid = LabelGrid::from_rows([["A", "A", "A"], ["A", "B", "A"]]).unwrap();
        assert!(matches!(
            grid.decode(),
            Err(LayoutError::NonRectangularLabel { label }) if label == "A"
        ));
    }

    #[test]
    fn test_decode_rejects_l_shape() {
        let grid = LabelGrid::from_rows([["A", "A"], ["A", "B"]]).unwrap();
        assert!(matches!(
            grid.decode(),
            Err(LayoutError::NonRectangularLabel { label }) if label == "A"
        ));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = LabelGrid::from_rows([vec!["A", "B"], vec!["C"]]);
        assert!(matches!(
            result,
            Err(LayoutError::RaggedLabelGrid {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_empty_grids_rejected() {
        assert!(matches!(
            LabelGrid::from_rows(Vec::<Vec<String>>::new()),
            Err(LayoutError::EmptyLabelGrid)
        ));
        assert!(matches!(
            LabelGrid::from_rows([Vec::<String>::new()]),
            Err(LayoutError::EmptyLabelGrid)
        ));
    }

    #[test]
    fn test_parse_single_character_diagram() {
        let grid = LabelGrid::parse(
            "
            AAD
            BCD
            EEE
            ",
        )
        .unwrap();
        assert_eq!(grid.shape(), GridShape::new(3, 3));
        assert_eq!(grid.get(0, 2), Some("D"));

        let map = grid.decode().unwrap();
        assert_eq!(map.len(), 5);
        assert_eq!(map["E"], CellSpan::new(2, AxisSpan::from_extent(0, 3)));
    }

    #[test]
    fn test_parse_multi_character_labels() {
        let grid = LabelGrid::parse("main main side\nfoot foot side").unwrap();
        let map = grid.decode().unwrap();
        assert_eq!(
            map["main"],
            CellSpan::new(0, AxisSpan::from_extent(0, 2))
        );
        assert_eq!(
            map["side"],
            CellSpan::new(AxisSpan::from_extent(0, 2), 2)
        );
    }

    #[test]
    fn test_gap_cells_belong_to_no_panel() {
        let grid = LabelGrid::parse("A.\n.B").unwrap();
        let map = grid.decode().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["A"], CellSpan::cell(0, 0));
        assert_eq!(map["B"], CellSpan::cell(1, 1));
    }

    #[test]
    fn test_all_gap_diagram_rejected() {
        let grid = LabelGrid::parse("..\n..").unwrap();
        assert!(matches!(grid.decode(), Err(LayoutError::EmptyGrid)));
    }
}
