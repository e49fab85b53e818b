use super::ShapeKind;
use crate::shape::{Point, Shape};

/// Progress of the current multi-click placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// First click recorded, waiting for the one that completes the shape
    Anchored(Point),
}

/// Turns canvas clicks into shapes of the selected kind
#[derive(Debug, Clone, Default)]
pub struct PlacementTool {
    kind: ShapeKind,
    gesture: Gesture,
}

impl PlacementTool {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            gesture: Gesture::Idle,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Switch to `kind`. Any half-finished gesture is dropped, even when
    /// `kind` is already selected.
    pub fn select(&mut self, kind: ShapeKind) {
        if let Gesture::Anchored(anchor) = self.gesture {
            log::debug!("Discarding unfinished {} anchored at {}", self.kind, anchor);
        }
        if kind != self.kind {
            log::info!("Shape kind changed: {} -> {}", self.kind, kind);
        }
        self.kind = kind;
        self.gesture = Gesture::Idle;
    }

    pub fn cancel(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// Feed a click. Returns the shape once the gesture is complete.
    pub fn click(&mut self, pos: Point) -> Option<Shape> {
        match (self.kind, self.gesture) {
            (ShapeKind::Point, _) => Some(Shape::Point(pos)),
            (_, Gesture::Idle) => {
                self.gesture = Gesture::Anchored(pos);
                None
            }
            (kind, Gesture::Anchored(anchor)) => {
                self.gesture = Gesture::Idle;
                Some(complete(kind, anchor, pos))
            }
        }
    }

    /// Shape the next click at `cursor` would produce, if it completes one
    pub fn preview(&self, cursor: Point) -> Option<Shape> {
        match self.gesture {
            Gesture::Anchored(anchor) => Some(complete(self.kind, anchor, cursor)),
            Gesture::Idle => None,
        }
    }

    /// One-line description of the current mode for the window overlay
    pub fn hint(&self) -> String {
        let step = match (self.kind, self.gesture) {
            (ShapeKind::Point, _) => "click to place a point",
            (ShapeKind::Line, Gesture::Idle) => "click the start point",
            (ShapeKind::Line, Gesture::Anchored(_)) => "click the end point",
            (ShapeKind::Rectangle, Gesture::Idle) => "click the first corner",
            (ShapeKind::Rectangle, Gesture::Anchored(_)) => "click the opposite corner",
            (ShapeKind::Circle, Gesture::Idle) => "click the center",
            (ShapeKind::Circle, Gesture::Anchored(_)) => "click a point on the edge",
        };
        format!(
            "[{}] {}: {}  (keys 1-4 switch shape, Esc cancels)",
            self.kind.hotkey(),
            self.kind,
            step
        )
    }
}

fn complete(kind: ShapeKind, anchor: Point, pos: Point) -> Shape {
    match kind {
        ShapeKind::Point => Shape::Point(pos),
        ShapeKind::Line => Shape::line(anchor, pos),
        ShapeKind::Rectangle => Shape::rectangle_from_corners(anchor, pos),
        ShapeKind::Circle => Shape::circle_from_center_edge(anchor, pos),
    }
}
