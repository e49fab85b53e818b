// src/renderer.rs
use std::fs;
use std::path::Path;

use eframe::egui::{
    self, Align2, Color32, FontData, FontDefinitions, FontFamily, FontId, Painter, Pos2, Rect,
    Stroke,
};

use crate::config::{self, StyleConfig};
use crate::error::{CadError, Result};
use crate::shape::{Point, Shape};

const HINT_FONT_NAME: &str = "hint_font";
const HINT_MARGIN: f32 = 8.0;

/// Draws the document onto the canvas
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    shape_stroke: Stroke,
    preview_stroke: Stroke,
    hint_color: Color32,
    hint_font: FontId,
    point_radius: f32,
}

impl Renderer {
    /// Creates a renderer using the colors and sizes from `style`
    pub fn new(style: &StyleConfig) -> Self {
        Self {
            background: config::color(style.background),
            shape_stroke: Stroke::new(style.stroke_width, config::color(style.shape_color)),
            preview_stroke: Stroke::new(style.stroke_width, config::color(style.preview_color)),
            hint_color: config::color(style.hint_color),
            hint_font: FontId::proportional(style.hint_size),
            point_radius: style.point_radius,
        }
    }

    /// Renders one frame
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): The canvas area; shape coordinates are relative to its top-left
    ///     shapes (&[Shape]): Committed shapes, drawn in insertion order
    ///     preview (Option<&Shape>): Shape under construction, drawn on top
    ///     hint (&str): Mode text drawn in the top-left corner
    pub fn render(
        &self,
        painter: &Painter,
        rect: Rect,
        shapes: &[Shape],
        preview: Option<&Shape>,
        hint: &str,
    ) {
        painter.rect_filled(rect, 0.0, self.background);

        let painter = painter.with_clip_rect(rect);
        for shape in shapes {
            self.draw_shape(&painter, rect.min, shape, self.shape_stroke);
        }
        if let Some(shape) = preview {
            self.draw_shape(&painter, rect.min, shape, self.preview_stroke);
        }

        if !hint.is_empty() {
            painter.text(
                rect.min + egui::vec2(HINT_MARGIN, HINT_MARGIN),
                Align2::LEFT_TOP,
                hint,
                self.hint_font.clone(),
                self.hint_color,
            );
        }
    }

    /// Draw a single shape with its canvas origin at `origin`
    pub fn draw_shape(&self, painter: &Painter, origin: Pos2, shape: &Shape, stroke: Stroke) {
        let at = |p: &Point| origin + egui::vec2(p.x as f32, p.y as f32);

        match shape {
            Shape::Point(p) => {
                painter.circle_filled(at(p), self.point_radius, stroke.color);
            }
            Shape::Line { start, end } => {
                painter.line_segment([at(start), at(end)], stroke);
            }
            Shape::Rectangle { top_left, width, height } => {
                let size = egui::vec2(*width as f32, *height as f32);
                let rect = Rect::from_min_size(at(top_left), size);
                painter.rect_stroke(rect, 0.0, stroke);
            }
            Shape::Circle { center, radius } => {
                painter.circle_stroke(at(center), *radius as f32, stroke);
            }
        }
    }
}

/// Font definitions with the font at `path` preferred for proportional text
pub fn load_hint_font(path: &Path) -> Result<FontDefinitions> {
    let bytes = fs::read(path).map_err(|source| CadError::FontLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(HINT_FONT_NAME.to_owned(), FontData::from_owned(bytes).into());
    fonts
        .families
        .entry(FontFamily::Proportional)
        .or_default()
        .insert(0, HINT_FONT_NAME.to_owned());
    Ok(fonts)
}

/// Install the configured hint font. On failure the built-in font stays in
/// place and the window keeps running.
pub fn install_hint_font(ctx: &egui::Context, path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };
    match load_hint_font(path) {
        Ok(fonts) => {
            log::info!("Using hint font {}", path.display());
            ctx.set_fonts(fonts);
        }
        Err(err) => log::error!("{err}; falling back to the built-in font"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> Renderer {
        Renderer::new(&StyleConfig::default())
    }

    #[test]
    fn test_renderer_uses_style() {
        let style = StyleConfig {
            shape_color: [10, 20, 30],
            stroke_width: 4.0,
            ..Default::default()
        };
        let renderer = Renderer::new(&style);
        assert_eq!(renderer.shape_stroke, Stroke::new(4.0, Color32::from_rgb(10, 20, 30)));
        assert_eq!(renderer.background, Color32::WHITE);
    }

    #[test]
    fn test_render_all_kinds() {
        let renderer = renderer();
        let shapes = [
            Shape::point(5, 5),
            Shape::line(Point::new(0, 0), Point::new(50, 50)),
            Shape::rectangle_from_corners(Point::new(60, 10), Point::new(20, 40)),
            Shape::circle_from_center_edge(Point::new(50, 50), Point::new(50, 70)),
        ];
        let preview = Shape::line(Point::new(1, 1), Point::new(9, 9));

        let ctx = egui::Context::default();
        let _ = ctx.run(Default::default(), |ctx| {
            let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
            let painter = ctx.layer_painter(egui::LayerId::background());
            let hint = "[2] Line: click the end point";
            renderer.render(&painter, rect, &shapes, Some(&preview), hint);
        });
    }

    #[test]
    fn test_missing_font_is_reported() {
        let result = load_hint_font(Path::new("/nonexistent/font.ttf"));
        assert!(matches!(result, Err(CadError::FontLoad { .. })));
    }

    #[test]
    fn test_missing_font_falls_back() {
        let ctx = egui::Context::default();
        install_hint_font(&ctx, Some(Path::new("/nonexistent/font.ttf")));
        install_hint_font(&ctx, None);
    }
}
