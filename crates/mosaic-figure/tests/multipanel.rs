//! End-to-end figure assembly tests across all three input modes.

use mosaic_core::{CellSpan, GridShape, LabelCase, LayoutWarning};
use mosaic_figure::{LabelStyle, MultiPanel, RecordingCanvas};

#[test]
fn raster_figure_matches_published_layout() {
    // Two plots in the first row, three in the second, one full-width
    // plot in the third.
    let figure = MultiPanel::builder()
        .row_counts([2, 3, 1])
        .auto_labels()
        .build()
        .unwrap();

    assert_eq!(figure.shape(), GridShape::new(3, 6));
    assert_eq!(
        figure.locations(),
        [
            CellSpan::new(0, 0..3),
            CellSpan::new(0, 3..6),
            CellSpan::new(1, 0..2),
            CellSpan::new(1, 2..4),
            CellSpan::new(1, 4..6),
            CellSpan::new(2, 0..6),
        ]
    );
    assert_eq!(figure.labels(), ["A", "B", "C", "D", "E", "F"]);
    assert_eq!(figure.panels().by_index(5).unwrap().region.cols(), 6);
}

#[test]
fn lowercase_labels_with_custom_style() {
    let figure = MultiPanel::builder()
        .shape(1, 3)
        .auto_labels()
        .label_case(LabelCase::Lowercase)
        .label_style(LabelStyle {
            size: 10.0,
            location: (0.05, 0.95),
            ..Default::default()
        })
        .build()
        .unwrap();

    assert_eq!(figure.labels(), ["a", "b", "c"]);
    let mark = &figure.label_marks()[2];
    assert_eq!(mark.text, "c");
    assert_eq!(mark.size, 10.0);
    assert_eq!((mark.x, mark.y), (0.05, 0.95));
}

#[test]
fn hidden_labels_still_key_panels() {
    let figure = MultiPanel::builder().shape(2, 2).hide_labels().build().unwrap();
    assert!(figure.label_marks().is_empty());
    assert!(figure.panels().contains("D"));
    assert_eq!(figure.panels().get("C").unwrap().span, CellSpan::cell(1, 0));
}

#[test]
fn overlapping_inset_panel_is_built_with_warning() {
    let figure = MultiPanel::builder()
        .label_map([
            ("main", CellSpan::new(0..2, 0..3)),
            ("inset", CellSpan::cell(0, 2)),
        ])
        .build()
        .unwrap();

    assert_eq!(figure.len(), 2);
    let [LayoutWarning::PanelOverlap { cells }] = figure.warnings() else {
        panic!("expected exactly one overlap warning");
    };
    assert_eq!(cells.len(), 1);

    // Advisory only: the figure still paints both panels.
    let mut canvas = RecordingCanvas::new();
    figure.paint(&mut canvas).unwrap();
    assert_eq!(canvas.allocations().len(), 2);
    assert_eq!(canvas.annotations().len(), 2);
}

#[test]
fn diagram_with_gaps_keeps_grid_dimensions() {
    let figure = MultiPanel::builder()
        .diagram(
            "
            AAB
            .CB
            ",
        )
        .build()
        .unwrap();

    // The gap cell belongs to no panel but still counts toward the shape.
    assert_eq!(figure.shape(), GridShape::new(2, 3));
    assert_eq!(figure.labels(), ["A", "B", "C"]);
    assert_eq!(figure.len(), 3);
}

#[test]
fn identical_builders_produce_identical_figures() {
    let build = || {
        MultiPanel::builder()
            .diagram("AAD\nBCD\nEEE")
            .build()
            .unwrap()
    };
    let first = build();
    let second = build();
    assert_eq!(first.shape(), second.shape());
    assert_eq!(first.locations(), second.locations());
    assert_eq!(first.labels(), second.labels());
}
