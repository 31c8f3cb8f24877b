//! The `MultiPanel` facade: resolve, validate, and assemble a figure.

use mosaic_core::{
    CellSpan, FigureError, GridShape, LabelCase, LabelMap, LayoutError, LayoutWarning,
    MosaicError,
};
use mosaic_layout::{resolve_layout, GridSpec, LabelGrid, LabelSpec, LayoutSpec};

use crate::canvas::{Canvas, LabelMark};
use crate::options::{FigureOptions, GridOptions, LabelStyle};
use crate::panel::{Panel, PanelSet};
use crate::region::PanelRegion;

/// An assembled multi-panel figure.
///
/// Holds the resolved layout, one panel handle per location, and the
/// label marks to draw. Immutable once built; [`MultiPanel::paint`]
/// replays the assembly onto a host canvas.
#[derive(Debug, Clone)]
pub struct MultiPanel {
    shape: GridShape,
    locations: Vec<CellSpan>,
    labels: Vec<String>,
    panels: PanelSet,
    marks: Vec<LabelMark>,
    warnings: Vec<LayoutWarning>,
    grid_options: GridOptions,
    figure_options: FigureOptions,
}

impl MultiPanel {
    /// Start building a figure. The default build is a 2x2 grid of four
    /// panels labeled `A` through `D`, with no labels drawn.
    pub fn builder() -> MultiPanelBuilder {
        MultiPanelBuilder::default()
    }

    /// The resolved grid dimensions.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// One span per panel, in panel order.
    pub fn locations(&self) -> &[CellSpan] {
        &self.locations
    }

    /// One label per panel, parallel to [`MultiPanel::locations`].
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The panel collection, keyed by label and ordered by position.
    pub fn panels(&self) -> &PanelSet {
        &self.panels
    }

    /// The label marks to draw; empty when labels are hidden.
    pub fn label_marks(&self) -> &[LabelMark] {
        &self.marks
    }

    /// Advisory findings recorded during resolution.
    pub fn warnings(&self) -> &[LayoutWarning] {
        &self.warnings
    }

    /// Grid spacing and sizing forwarded to the host.
    pub fn grid_options(&self) -> &GridOptions {
        &self.grid_options
    }

    /// Canvas-level options forwarded to the host.
    pub fn figure_options(&self) -> &FigureOptions {
        &self.figure_options
    }

    /// Number of panels.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Check if the figure has no panels. Never true for a built figure.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Replay the assembly onto a host canvas: allocate every panel in
    /// order, then draw every label mark.
    pub fn paint<C: Canvas>(&self, canvas: &mut C) -> Result<(), FigureError> {
        for panel in &self.panels {
            canvas.allocate(&panel.label, panel.region)?;
        }
        for mark in &self.marks {
            canvas.annotate(&mark.label, mark)?;
        }
        Ok(())
    }
}

/// Builder for [`MultiPanel`].
///
/// Every label-source method (`labels`, `auto_labels`, `hide_labels`,
/// `label_map`, `label_grid`, `diagram`) replaces whatever label source
/// was set before it; the last call wins.
#[derive(Debug, Clone, Default)]
pub struct MultiPanelBuilder {
    spec: LayoutSpec,
    diagram: Option<String>,
    map_entries: Option<Vec<(String, CellSpan)>>,
    label_style: LabelStyle,
    grid_options: GridOptions,
    figure_options: FigureOptions,
}

impl MultiPanelBuilder {
    /// Grid shape to fill with one panel per cell when no grid is given.
    pub fn shape(mut self, rows: usize, cols: usize) -> Self {
        self.spec.shape = Some(GridShape::new(rows, cols));
        self
    }

    /// Lay the grid out from the number of panels in each row.
    pub fn row_counts(mut self, counts: impl IntoIterator<Item = usize>) -> Self {
        self.spec.grid = Some(GridSpec::RowCounts(counts.into_iter().collect()));
        self
    }

    /// Lay the grid out from explicit cell spans, one per panel.
    pub fn spans<S: Into<CellSpan>>(mut self, spans: impl IntoIterator<Item = S>) -> Self {
        self.spec.grid = Some(GridSpec::Spans(spans.into_iter().map(Into::into).collect()));
        self
    }

    fn set_label_source(&mut self, labels: LabelSpec) {
        self.spec.labels = labels;
        self.diagram = None;
        self.map_entries = None;
    }

    /// Explicit labels, bound positionally; the count must match the
    /// resolved panel count and every label must be distinct.
    pub fn labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.set_label_source(LabelSpec::Names(
            labels.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Draw default letter labels on every panel.
    pub fn auto_labels(mut self) -> Self {
        self.set_label_source(LabelSpec::Auto);
        self
    }

    /// Key panels by default letters but draw nothing.
    pub fn hide_labels(mut self) -> Self {
        self.set_label_source(LabelSpec::Hidden);
        self
    }

    /// Define the whole layout from label-to-span entries; any grid or
    /// shape also given is ignored with a warning. A label appearing in
    /// more than one entry fails the build.
    pub fn label_map<S: Into<String>, C: Into<CellSpan>>(
        mut self,
        map: impl IntoIterator<Item = (S, C)>,
    ) -> Self {
        self.set_label_source(LabelSpec::Hidden);
        self.map_entries = Some(
            map.into_iter()
                .map(|(label, span)| (label.into(), span.into()))
                .collect(),
        );
        self
    }

    /// Define the whole layout from a label grid; any grid or shape also
    /// given is ignored with a warning.
    pub fn label_grid(mut self, grid: LabelGrid) -> Self {
        self.set_label_source(LabelSpec::Grid(grid));
        self
    }

    /// Define the whole layout from an ASCII diagram; parsed at build
    /// time.
    pub fn diagram(mut self, diagram: impl Into<String>) -> Self {
        self.set_label_source(LabelSpec::Hidden);
        self.diagram = Some(diagram.into());
        self
    }

    /// Alphabet case for default letter labels.
    pub fn label_case(mut self, case: LabelCase) -> Self {
        self.spec.label_case = case;
        self
    }

    /// Style for drawn labels.
    pub fn label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = style;
        self
    }

    /// Grid spacing and sizing forwarded to the host.
    pub fn grid_options(mut self, options: GridOptions) -> Self {
        self.grid_options = options;
        self
    }

    /// Canvas-level options forwarded to the host.
    pub fn figure_options(mut self, options: FigureOptions) -> Self {
        self.figure_options = options;
        self
    }

    /// Resolve the layout, validate every placement, and assemble the
    /// figure.
    pub fn build(mut self) -> Result<MultiPanel, MosaicError> {
        if let Some(diagram) = &self.diagram {
            self.spec.labels = LabelSpec::Grid(LabelGrid::parse(diagram)?);
        }
        if let Some(entries) = self.map_entries.take() {
            let mut map = LabelMap::new();
            for (label, span) in entries {
                if map.insert(label.clone(), span).is_some() {
                    return Err(LayoutError::DuplicateLabel { label }.into());
                }
            }
            self.spec.labels = LabelSpec::Map(map);
        }

        let layout = resolve_layout(&self.spec)?;
        self.grid_options.validate(layout.shape)?;

        let mut panels = PanelSet::new();
        for (index, (label, span)) in layout.labels.iter().zip(&layout.locations).enumerate() {
            let region = PanelRegion::resolve(*span, layout.shape)?;
            panels.insert(Panel {
                label: label.clone(),
                index,
                span: *span,
                region,
            });
        }

        let marks = if layout.draw_labels {
            layout
                .labels
                .iter()
                .map(|label| LabelMark {
                    label: label.clone(),
                    text: label.clone(),
                    x: self.label_style.location.0,
                    y: self.label_style.location.1,
                    size: self.label_style.size,
                    weight: self.label_style.weight,
                    family: self.label_style.family.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Ok(MultiPanel {
            shape: layout.shape,
            locations: layout.locations,
            labels: layout.labels,
            panels,
            marks,
            warnings: layout.warnings,
            grid_options: self.grid_options,
            figure_options: self.figure_options,
        })
    }
}
