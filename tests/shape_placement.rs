use minicad::{
    CadApp, Config, Gesture, InputEvent, PlacementTool, Point, Shape, ShapeKind, SharedDocument,
};

fn place(kind: ShapeKind, clicks: &[(i32, i32)]) -> Vec<Shape> {
    let mut tool = PlacementTool::new(kind);
    clicks
        .iter()
        .filter_map(|&(x, y)| tool.click(Point::new(x, y)))
        .collect()
}

#[test]
fn test_rectangle_independent_of_click_order() {
    let corners = [(10, 80), (60, 20)];
    let expected = Shape::Rectangle { top_left: Point::new(10, 20), width: 50, height: 60 };

    assert_eq!(place(ShapeKind::Rectangle, &corners), vec![expected]);
    assert_eq!(place(ShapeKind::Rectangle, &[corners[1], corners[0]]), vec![expected]);
    assert_eq!(
        place(ShapeKind::Rectangle, &[(60, 80), (10, 20)]),
        vec![expected]
    );
}

#[test]
fn test_circle_radius_is_rounded_distance() {
    let cases = [
        ((0, 0), (3, 4), 5),
        ((10, 10), (13, 13), 4),
        ((5, 5), (5, 5), 0),
        ((0, 0), (-7, 1), 7),
    ];
    for ((cx, cy), (px, py), radius) in cases {
        assert_eq!(
            place(ShapeKind::Circle, &[(cx, cy), (px, py)]),
            vec![Shape::Circle { center: Point::new(cx, cy), radius }],
            "center ({cx}, {cy}) edge ({px}, {py})"
        );
    }
}

#[test]
fn test_clicks_alternate_anchor_and_complete() {
    let shapes = place(ShapeKind::Line, &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    assert_eq!(
        shapes,
        vec![
            Shape::line(Point::new(0, 0), Point::new(1, 1)),
            Shape::line(Point::new(2, 2), Point::new(3, 3)),
        ]
    );
}

#[test]
fn test_switching_kind_discards_gesture() {
    let mut tool = PlacementTool::new(ShapeKind::Line);
    assert_eq!(tool.click(Point::new(5, 5)), None);

    tool.select(ShapeKind::Circle);
    assert_eq!(tool.gesture(), Gesture::Idle);
    assert_eq!(tool.kind(), ShapeKind::Circle);

    // The old anchor is gone: this click starts a fresh circle
    assert_eq!(tool.click(Point::new(0, 0)), None);
    assert_eq!(
        tool.click(Point::new(0, 9)),
        Some(Shape::Circle { center: Point::new(0, 0), radius: 9 })
    );
}

#[test]
fn test_window_events_fill_shared_document() {
    let document = SharedDocument::new();
    let mut app = CadApp::with_document(&Config::default(), document.clone());

    let events = [
        InputEvent::Click(Point::new(1, 1)),
        InputEvent::SelectKind(ShapeKind::Line),
        InputEvent::Click(Point::new(0, 0)),
        InputEvent::SelectKind(ShapeKind::Rectangle),
        InputEvent::Click(Point::new(5, 5)),
        InputEvent::Click(Point::new(0, 0)),
    ];
    for event in events {
        app.apply(event);
    }

    assert_eq!(
        document.snapshot(),
        vec![
            Shape::point(1, 1),
            Shape::Rectangle { top_left: Point::new(0, 0), width: 5, height: 5 },
        ]
    );
}
