//! Panel overlap detection.

use std::collections::BTreeSet;

use mosaic_core::{CellSpan, GridCell};

/// Every grid cell claimed by more than one span.
///
/// Compares every unordered pair of spans and collects the union of their
/// pairwise intersections; an empty result means no overlap. Quadratic in
/// the number of panels, which stays in the tens for real figures.
pub fn find_overlaps(spans: &[CellSpan]) -> BTreeSet<GridCell> {
    let mut colliding = BTreeSet::new();
    for (index, span) in spans.iter().enumerate() {
        for other in &spans[index + 1..] {
            if span.intersects(other) {
                let covered: BTreeSet<GridCell> = span.cells().collect();
                colliding.extend(other.cells().filter(|cell| covered.contains(cell)));
            }
        }
    }
    colliding
}
