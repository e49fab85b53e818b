use std::fmt;

use crate::tool::ShapeKind;

/// Integer position in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

/// A primitive placed on the canvas
///
/// Shapes are plain values: once built they are never changed, and the
/// document only ever appends them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Point(Point),
    Line { start: Point, end: Point },
    Rectangle { top_left: Point, width: i32, height: i32 },
    Circle { center: Point, radius: i32 },
}

impl Shape {
    pub const fn point(x: i32, y: i32) -> Self {
        Shape::Point(Point::new(x, y))
    }

    pub const fn line(start: Point, end: Point) -> Self {
        Shape::Line { start, end }
    }

    /// Normalized rectangle spanned by two opposite corners, in either order
    pub fn rectangle_from_corners(a: Point, b: Point) -> Self {
        Shape::Rectangle {
            top_left: Point::new(a.x.min(b.x), a.y.min(b.y)),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    /// Circle around `center` passing through `edge`, radius rounded to the nearest pixel
    pub fn circle_from_center_edge(center: Point, edge: Point) -> Self {
        let dx = f64::from(edge.x - center.x);
        let dy = f64::from(edge.y - center.y);
        Shape::Circle {
            center,
            radius: dx.hypot(dy).round() as i32,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Line { .. } => ShapeKind::Line,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Circle { .. } => ShapeKind::Circle,
        }
    }

    /// Human readable draw instruction, as printed by the console `draw` command
    pub fn describe(&self) -> String {
        match self {
            Shape::Point(p) => format!("Draw Point at ({}, {})", p.x, p.y),
            Shape::Line { start, end } => format!("Draw Line from {start} to {end}"),
            Shape::Rectangle { top_left, width, height } => {
                format!("Draw Rectangle at {top_left} with size {width} x {height}")
            }
            Shape::Circle { center, radius } => {
                format!("Draw Circle at {center} with radius {radius}")
            }
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Point(p) => write!(f, "{p}"),
            Shape::Line { start, end } => write!(f, "Line({start} -> {end})"),
            Shape::Rectangle { top_left, width, height } => {
                write!(f, "Rectangle({top_left}, {width} x {height})")
            }
            Shape::Circle { center, radius } => write!(f, "Circle({center}, r={radius})"),
        }
    }
}
