//! Panel handles and the ordered panel collection.

use indexmap::IndexMap;
use mosaic_core::CellSpan;

use crate::region::PanelRegion;

/// One drawable panel handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    /// The label keying this panel.
    pub label: String,
    /// Position in the resolved panel order.
    pub index: usize,
    /// The grid span the panel was resolved from.
    pub span: CellSpan,
    /// The placement a host canvas consumes.
    pub region: PanelRegion,
}

/// An order-preserving collection of panels, keyed by label and
/// addressable by position.
///
/// Built once at assembly and immutable afterwards; iteration order is
/// the resolved panel order.
#[derive(Debug, Clone, Default)]
pub struct PanelSet {
    panels: IndexMap<String, Panel>,
}

impl PanelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, panel: Panel) {
        self.panels.insert(panel.label.clone(), panel);
    }

    /// Get a panel by label.
    pub fn get(&self, label: &str) -> Option<&Panel> {
        self.panels.get(label)
    }

    /// Get a panel by position in the resolved order.
    pub fn by_index(&self, index: usize) -> Option<&Panel> {
        self.panels.get_index(index).map(|(_, panel)| panel)
    }

    /// Check if a label has a panel.
    pub fn contains(&self, label: &str) -> bool {
        self.panels.contains_key(label)
    }

    /// Iterate over panels in resolved order.
    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.values()
    }

    /// Panel labels in resolved order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.panels.keys().map(String::as_str)
    }

    /// Number of panels.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

impl<'a> IntoIterator for &'a PanelSet {
    type Item = &'a Panel;
    type IntoIter = indexmap::map::Values<'a, String, Panel>;

    fn into_iter(self) -> Self::IntoIter {
        self.panels.values()
    }
}
