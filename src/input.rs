use egui::{Context, Event, Key, PointerButton, Pos2, Rect};

use crate::shape::Point;
use crate::tool::ShapeKind;

/// Window input, already translated into canvas terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A number key picked a shape kind
    SelectKind(ShapeKind),
    /// Escape was pressed
    Cancel,
    /// Primary button pressed inside the canvas
    Click(Point),
    /// Cursor position over the canvas, `None` when it is elsewhere
    Hover(Option<Point>),
}

/// Converts raw egui input into [`InputEvent`]s for the canvas area
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self { canvas_rect }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Integer canvas position of a screen position, if it lies on the canvas
    pub fn to_canvas(&self, pos: Pos2) -> Option<Point> {
        if !self.canvas_rect.contains(pos) {
            return None;
        }
        let local = pos - self.canvas_rect.min;
        Some(Point::new(local.x.round() as i32, local.y.round() as i32))
    }

    /// Collect this frame's events. Kind selection comes before clicks so a
    /// key and a click in the same frame act on the new kind.
    pub fn process_input(&self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            for key in [Key::Num1, Key::Num2, Key::Num3, Key::Num4] {
                if input.key_pressed(key) {
                    events.extend(ShapeKind::from_key(key).map(InputEvent::SelectKind));
                }
            }
            if input.key_pressed(Key::Escape) {
                events.push(InputEvent::Cancel);
            }

            // Every press counts, a slow frame may carry several
            for event in &input.events {
                if let Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: true,
                    ..
                } = event
                {
                    events.extend(self.to_canvas(*pos).map(InputEvent::Click));
                }
            }

            let hover = input.pointer.hover_pos().and_then(|p| self.to_canvas(p));
            events.push(InputEvent::Hover(hover));
        });

        events
    }
}
