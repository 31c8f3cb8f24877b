//! Figure assembly for mosaic multi-panel layouts.
//!
//! Takes a resolved layout and turns it into drawable panel handles, an
//! ordered label-keyed panel collection, and label marks, behind the
//! [`MultiPanel`] facade. Actual drawing happens on a caller-owned
//! [`Canvas`]; this crate only produces the commands.
//!
//! ## Example
//!
//! ```
//! use mosaic_figure::MultiPanel;
//!
//! let figure = MultiPanel::builder()
//!     .row_counts([2, 3, 1])
//!     .auto_labels()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(figure.len(), 6);
//! assert_eq!(figure.shape().to_string(), "3x6");
//! assert_eq!(figure.labels()[0], "A");
//! ```

pub mod canvas;
pub mod figure;
pub mod options;
pub mod panel;
pub mod region;

pub use canvas::*;
pub use figure::*;
pub use options::*;
pub use panel::*;
pub use region::*;
