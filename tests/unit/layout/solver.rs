use super::*;

fn items(widths: &[f64]) -> Vec<RowItem> {
    widths
        .iter()
        .map(|w| RowItem {
            width: *w,
            scale: 1.0,
        })
        .collect()
}

#[test]
fn landscape_scale_tracks_height() {
    let vp = Viewport::new(1920.0, 1080.0);
    assert!(vp.is_horizontal());
    assert!((vp.scale - 1080.0 / 2048.0).abs() < 1e-12);
    assert_eq!(vp.center_x(), 960.0);
    assert_eq!(vp.center_y(), 540.0);
}

#[test]
fn portrait_scale_tracks_width() {
    let vp = Viewport::new(1080.0, 1920.0);
    assert!(!vp.is_horizontal());
    assert!((vp.scale - 0.85 * 1080.0 / 2103.0).abs() < 1e-12);
}

#[test]
fn world_units_invert_the_scale() {
    let vp = Viewport::new(1920.0, 1080.0);
    assert!((vp.world_width() * vp.scale - 1920.0).abs() < 1e-9);
    assert!((vp.world_center_y() * vp.scale - 540.0).abs() < 1e-9);
}

#[test]
fn start_row_advances_by_half_widths_and_spacing() {
    let positions = arrange_row(
        &items(&[10.0, 20.0]),
        &RowArgs {
            align: RowAlign::Start,
            x: 0.0,
            spacing: 4.0,
            scale: 1.0,
        },
    );
    assert_eq!(positions, vec![5.0, 10.0 + 4.0 + 10.0]);
}

#[test]
fn center_row_odd_centers_on_middle_element() {
    let positions = arrange_row(&items(&[10.0, 10.0, 10.0]), &RowArgs::default());
    assert_eq!(positions[1], 0.0);
    assert_eq!(positions[0], -positions[2]);
}

#[test]
fn center_row_even_centers_on_middle_pair() {
    let positions = arrange_row(&items(&[10.0, 10.0, 10.0, 10.0]), &RowArgs::default());
    assert!((positions[1] + positions[2]).abs() < 1e-12);
    assert!((positions[0] + positions[3]).abs() < 1e-12);
}

#[test]
fn end_row_finishes_at_origin() {
    let positions = arrange_row(
        &items(&[30.0]),
        &RowArgs {
            align: RowAlign::End,
            x: 100.0,
            spacing: 4.0,
            scale: 1.0,
        },
    );
    // Row extent (width + trailing spacing) sits left of the origin.
    assert_eq!(positions, vec![100.0 - 34.0 + 15.0]);
}

#[test]
fn scales_multiply_before_placement() {
    let row = vec![
        RowItem {
            width: 100.0,
            scale: 0.5,
        },
        RowItem {
            width: 100.0,
            scale: 1.0,
        },
    ];
    let positions = arrange_row(
        &row,
        &RowArgs {
            align: RowAlign::Start,
            x: 0.0,
            spacing: 0.0,
            scale: 2.0,
        },
    );
    // First element is 100px wide after scaling, second 200px.
    assert_eq!(positions, vec![50.0, 100.0 + 100.0]);
}

#[test]
fn empty_row_yields_no_positions() {
    assert!(arrange_row(&[], &RowArgs::default()).is_empty());
}

#[test]
fn offset_shifts_every_element() {
    let base = arrange_row(&items(&[10.0, 10.0]), &RowArgs::default());
    let shifted = arrange_row(
        &items(&[10.0, 10.0]),
        &RowArgs {
            x: 25.0,
            ..RowArgs::default()
        },
    );
    for (a, b) in base.iter().zip(&shifted) {
        assert!((b - a - 25.0).abs() < 1e-12);
    }
}
