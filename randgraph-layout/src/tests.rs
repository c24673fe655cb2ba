//! Unit tests for layout geometry and hit-testing.

use rstest::rstest;

use crate::{
    ARROW_LENGTH, Layout, LayoutError, LayoutErrorCode, PICK_RADIUS, Point, Segment, Viewport,
};

#[rstest]
fn empty_graph_has_empty_layout() {
    let layout = Layout::circular(0, Viewport::default());
    assert!(layout.is_empty());
    assert_eq!(layout.hit_test(Point::new(400, 300)), None);
}

#[rstest]
fn single_vertex_sits_right_of_centre() {
    let layout = Layout::circular(1, Viewport::new(800, 600));
    assert_eq!(layout.positions(), &[Point::new(600, 300)]);
}

#[rstest]
fn vertices_are_spread_evenly_on_the_circle() {
    let layout = Layout::circular(4, Viewport::new(300, 300));
    assert_eq!(
        layout.positions(),
        &[
            Point::new(250, 150),
            Point::new(150, 250),
            Point::new(50, 150),
            Point::new(150, 50),
        ]
    );
}

#[rstest]
#[case::wide(Viewport::new(900, 300), Point::new(550, 150))]
#[case::tall(Viewport::new(300, 900), Point::new(250, 450))]
#[case::degenerate(Viewport::new(0, 0), Point::new(0, 0))]
fn radius_follows_shorter_side(#[case] viewport: Viewport, #[case] first: Point) {
    let layout = Layout::circular(3, viewport);
    assert_eq!(layout.position(0), Ok(first));
}

#[rstest]
#[case::centre(Point::new(250, 150), Some(0))]
#[case::on_radius(Point::new(250 + PICK_RADIUS, 150), Some(0))]
#[case::diagonal_inside(Point::new(260, 160), Some(0))]
#[case::just_outside(Point::new(250 + PICK_RADIUS + 1, 150), None)]
#[case::other_vertex(Point::new(148, 247), Some(1))]
#[case::empty_space(Point::new(150, 150), None)]
fn hit_test_uses_pick_radius(#[case] point: Point, #[case] expected: Option<usize>) {
    let layout = Layout::circular(4, Viewport::new(300, 300));
    assert_eq!(layout.hit_test(point), expected);
}

#[rstest]
fn hit_test_prefers_lowest_index() {
    let mut layout = Layout::circular(3, Viewport::new(300, 300));
    let target = Point::new(10, 10);
    layout.set_position(2, target).expect("vertex exists");
    layout.set_position(1, target).expect("vertex exists");
    assert_eq!(layout.hit_test(target), Some(1));
}

#[rstest]
fn position_queries_reject_unknown_vertices() {
    let mut layout = Layout::circular(2, Viewport::default());
    let expected = LayoutError::VertexOutOfRange {
        vertex: 2,
        vertex_count: 2,
    };
    assert_eq!(layout.position(2), Err(expected.clone()));
    assert_eq!(layout.set_position(2, Point::default()), Err(expected.clone()));
    assert_eq!(layout.edge_segment(0, 2), Err(expected.clone()));
    assert_eq!(layout.arrow_head(2, 0), Err(expected.clone()));
    assert_eq!(expected.code(), LayoutErrorCode::VertexOutOfRange);
    assert_eq!(expected.code().as_str(), "LAYOUT_VERTEX_OUT_OF_RANGE");
}

#[rstest]
fn edge_segments_stop_short_of_vertices() {
    let layout = Layout::circular(4, Viewport::new(300, 300));
    assert_eq!(
        layout.edge_segment(0, 2),
        Ok(Segment {
            start: Point::new(235, 150),
            end: Point::new(65, 150),
        })
    );
    assert_eq!(
        layout.edge_segment(3, 1),
        Ok(Segment {
            start: Point::new(150, 65),
            end: Point::new(150, 235),
        })
    );
}

#[rstest]
fn arrow_head_points_back_along_horizontal_edge() {
    let layout = Layout::circular(4, Viewport::new(300, 300));
    let [tip, left, right] = layout.arrow_head(0, 2).expect("vertices exist");
    assert_eq!(tip, Point::new(65, 150));
    // Half-barbs land on 4 or 5 depending on how sin(pi/6) rounds.
    assert_eq!(left.x, 73);
    assert!((145..=146).contains(&left.y));
    assert_eq!(right.x, 73);
    assert!((154..=155).contains(&right.y));
}

#[rstest]
fn arrow_head_points_back_along_vertical_edge() {
    let layout = Layout::circular(4, Viewport::new(300, 300));
    let [tip, left, right] = layout.arrow_head(3, 1).expect("vertices exist");
    assert_eq!(tip, Point::new(150, 235));
    assert_eq!(left.y, 227);
    assert!((145..=146).contains(&left.x));
    assert_eq!(right.y, 227);
    assert!((154..=155).contains(&right.x));
}

#[rstest]
#[case(0, 1)]
#[case(1, 4)]
#[case(5, 2)]
#[case(3, 3)]
fn arrow_barbs_stay_within_arrow_length(#[case] from: usize, #[case] to: usize) {
    let layout = Layout::circular(6, Viewport::default());
    let [tip, left, right] = layout.arrow_head(from, to).expect("vertices exist");
    assert_eq!(Ok(tip), layout.edge_segment(from, to).map(|segment| segment.end));
    let limit = (ARROW_LENGTH * ARROW_LENGTH) as i64;
    for barb in [left, right] {
        let reach = barb.distance_squared(tip);
        assert!((50..=limit).contains(&reach), "barb {barb:?} reach {reach}");
    }
    assert_ne!(left, right);
}

#[rstest]
fn negative_viewports_are_clamped() {
    let viewport = Viewport::new(-20, 40);
    assert_eq!(viewport.width(), 0);
    assert_eq!(viewport.height(), 40);
    assert_eq!(viewport.center(), Point::new(0, 20));
}

#[rstest]
#[case(Point::new(0, 0), Point::new(10, 20), Point::new(5, 10))]
#[case(Point::new(-4, 6), Point::new(4, -6), Point::new(0, 0))]
#[case(Point::new(i32::MAX, 0), Point::new(i32::MAX, 0), Point::new(i32::MAX, 0))]
fn segment_midpoint(#[case] start: Point, #[case] end: Point, #[case] expected: Point) {
    assert_eq!(Segment { start, end }.midpoint(), expected);
}

#[rstest]
fn point_arithmetic_saturates() {
    let sum = Point::new(i32::MAX, 1) + Point::new(5, 1);
    assert_eq!(sum, Point::new(i32::MAX, 2));
    let diff = Point::new(i32::MIN, 0) - Point::new(1, 3);
    assert_eq!(diff, Point::new(i32::MIN, -3));
}
