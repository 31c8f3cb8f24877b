//! Core value types for mosaic layouts.

use std::fmt;
use std::ops::{Range, RangeInclusive};

use indexmap::IndexMap;

/// Number of rows and columns in a resolved panel grid.
///
/// Both dimensions are at least 1 once a layout has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells in the grid.
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Check if a cell coordinate lies inside the grid.
    pub fn contains(&self, cell: GridCell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }
}

impl From<(usize, usize)> for GridShape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A single cell coordinate in a panel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

impl GridCell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for GridCell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One axis of a panel placement: a single grid track, or a contiguous
/// run of tracks.
///
/// `Run` is half-open (`start..end`). Extents derived internally collapse
/// single-track runs to `Single` via [`AxisSpan::from_extent`]; spans
/// written by the caller keep whichever variant was used, so a `Run` of
/// length 1 and a `Single` cover the same cells but compare unequal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisSpan {
    /// One grid track.
    Single(usize),
    /// A contiguous run of grid tracks, `start` inclusive, `end` exclusive.
    Run { start: usize, end: usize },
}

impl AxisSpan {
    /// Normalize a half-open extent, collapsing single-track extents to
    /// `Single`.
    pub fn from_extent(start: usize, end: usize) -> Self {
        if end == start + 1 {
            Self::Single(start)
        } else {
            Self::Run { start, end }
        }
    }

    /// First track index covered.
    pub fn first(&self) -> usize {
        match *self {
            Self::Single(index) => index,
            Self::Run { start, .. } => start,
        }
    }

    /// Last track index covered.
    pub fn last(&self) -> usize {
        match *self {
            Self::Single(index) => index,
            Self::Run { end, .. } => end.saturating_sub(1),
        }
    }

    /// Number of tracks covered.
    pub fn len(&self) -> usize {
        match *self {
            Self::Single(_) => 1,
            Self::Run { start, end } => end.saturating_sub(start),
        }
    }

    /// True when the span covers no tracks (a reversed or empty `Run`).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The covered extent as a half-open `(start, end)` pair.
    pub fn extent(&self) -> (usize, usize) {
        match *self {
            Self::Single(index) => (index, index + 1),
            Self::Run { start, end } => (start, end),
        }
    }

    /// Iterate over the covered track indices.
    pub fn indices(&self) -> Range<usize> {
        let (start, end) = self.extent();
        start..end
    }

    /// Check if every covered track lies inside an axis of `len` tracks.
    pub fn fits(&self, len: usize) -> bool {
        !self.is_empty() && self.extent().1 <= len
    }
}

impl From<usize> for AxisSpan {
    fn from(index: usize) -> Self {
        Self::Single(index)
    }
}

impl From<Range<usize>> for AxisSpan {
    fn from(range: Range<usize>) -> Self {
        Self::Run {
            start: range.start,
            end: range.end,
        }
    }
}

impl From<RangeInclusive<usize>> for AxisSpan {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::Run {
            start: *range.start(),
            end: *range.end() + 1,
        }
    }
}

impl fmt::Display for AxisSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Single(index) => write!(f, "{index}"),
            Self::Run { start, end } => write!(f, "{start}..{end}"),
        }
    }
}

/// The rectangular block of grid cells one panel occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSpan {
    pub row: AxisSpan,
    pub col: AxisSpan,
}

impl CellSpan {
    pub fn new(row: impl Into<AxisSpan>, col: impl Into<AxisSpan>) -> Self {
        Self {
            row: row.into(),
            col: col.into(),
        }
    }

    /// A span covering exactly one cell.
    pub fn cell(row: usize, col: usize) -> Self {
        Self {
            row: AxisSpan::Single(row),
            col: AxisSpan::Single(col),
        }
    }

    /// True when both axes cover at least one track.
    pub fn is_valid(&self) -> bool {
        !self.row.is_empty() && !self.col.is_empty()
    }

    /// Check if the whole block lies inside `shape`.
    pub fn fits(&self, shape: GridShape) -> bool {
        self.row.fits(shape.rows) && self.col.fits(shape.cols)
    }

    /// Iterate over every covered cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> {
        let cols = self.col.indices();
        self.row
            .indices()
            .flat_map(move |row| cols.clone().map(move |col| GridCell::new(row, col)))
    }

    /// Check if two spans claim at least one cell in common.
    pub fn intersects(&self, other: &CellSpan) -> bool {
        let (r0, r1) = self.row.extent();
        let (s0, s1) = other.row.extent();
        let (c0, c1) = self.col.extent();
        let (d0, d1) = other.col.extent();
        r0 < s1 && s0 < r1 && c0 < d1 && d0 < c1
    }
}

impl<R: Into<AxisSpan>, C: Into<AxisSpan>> From<(R, C)> for CellSpan {
    fn from((row, col): (R, C)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for CellSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Alphabet case for default panel labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelCase {
    #[default]
    Uppercase,
    Lowercase,
}

/// An order-preserving mapping from panel labels to their grid spans.
///
/// Iteration order is insertion order, which fixes panel order everywhere
/// a label map is the layout source.
pub type LabelMap = IndexMap<String, CellSpan>;
