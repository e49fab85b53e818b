mod placement;

pub use placement::{Gesture, PlacementTool};

use std::fmt;

/// The kinds of shape the window can place, selected with keys 1-4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    #[default]
    Point,
    Line,
    Rectangle,
    Circle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Point,
        ShapeKind::Line,
        ShapeKind::Rectangle,
        ShapeKind::Circle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Point => "Point",
            ShapeKind::Line => "Line",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
        }
    }

    /// Number key bound to this kind
    pub fn hotkey(self) -> u8 {
        match self {
            ShapeKind::Point => 1,
            ShapeKind::Line => 2,
            ShapeKind::Rectangle => 3,
            ShapeKind::Circle => 4,
        }
    }

    pub fn from_key(key: egui::Key) -> Option<Self> {
        match key {
            egui::Key::Num1 => Some(ShapeKind::Point),
            egui::Key::Num2 => Some(ShapeKind::Line),
            egui::Key::Num3 => Some(ShapeKind::Rectangle),
            egui::Key::Num4 => Some(ShapeKind::Circle),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotkeys_round_trip() {
        let keys = [egui::Key::Num1, egui::Key::Num2, egui::Key::Num3, egui::Key::Num4];
        for (key, kind) in keys.into_iter().zip(ShapeKind::ALL) {
            assert_eq!(ShapeKind::from_key(key), Some(kind));
        }
        assert_eq!(ShapeKind::from_key(egui::Key::Num5), None);
        assert_eq!(ShapeKind::from_key(egui::Key::A), None);
    }
}
