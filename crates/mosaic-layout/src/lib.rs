//! Layout resolution for mosaic multi-panel figures.
//!
//! Translates the three supported layout encodings into one canonical
//! resolved form (grid shape, ordered cell spans, ordered labels):
//! - per-row panel counts, divided evenly over LCM-many columns
//! - explicit cell spans
//! - label-grid diagrams, where adjacent identical labels form one panel
//!
//! Resolution also validates the input (ragged grids, non-rectangular
//! label regions, label count mismatches) and reports advisory findings
//! such as overlapping panels.

pub mod label_grid;
pub mod letters;
pub mod overlap;
pub mod raster;
pub mod resolve;

pub use label_grid::*;
pub use letters::*;
pub use overlap::*;
pub use raster::*;
pub use resolve::*;
