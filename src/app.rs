use crate::config::Config;
use crate::document::SharedDocument;
use crate::input::{InputEvent, InputHandler};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::{self, Renderer};
use crate::shape::{Point, Shape};
use crate::tool::{PlacementTool, ShapeKind};

/// The drawing window
pub struct CadApp {
    document: SharedDocument,
    tool: PlacementTool,
    renderer: Renderer,
    input: InputHandler,
    // Last cursor position over the canvas, drives the preview
    hover: Option<Point>,
}

impl CadApp {
    /// Called once before the first frame.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: &Config,
        document: SharedDocument,
    ) -> Self {
        renderer::install_hint_font(&cc.egui_ctx, config.hint_font.as_deref());
        Self::with_document(config, document)
    }

    /// Build the app state without a window, e.g. for tests
    pub fn with_document(config: &Config, document: SharedDocument) -> Self {
        Self {
            document,
            tool: PlacementTool::default(),
            renderer: Renderer::new(&config.style),
            input: InputHandler::new(egui::Rect::NOTHING),
            hover: None,
        }
    }

    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    pub fn tool(&self) -> &PlacementTool {
        &self.tool
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn active_kind(&self) -> ShapeKind {
        self.tool.kind()
    }

    pub fn select_kind(&mut self, kind: ShapeKind) {
        self.tool.select(kind);
    }

    /// Shape following the cursor while a gesture is in progress
    pub fn preview(&self) -> Option<Shape> {
        self.hover.and_then(|cursor| self.tool.preview(cursor))
    }

    /// Translate this frame's input for the canvas at `canvas_rect` and apply
    /// it. Returns the shapes placed by this frame's clicks.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) -> Vec<Shape> {
        self.input.set_canvas_rect(canvas_rect);
        self.input
            .process_input(ctx)
            .into_iter()
            .filter_map(|event| self.apply(event))
            .collect()
    }

    /// Apply one input event. A completed shape goes straight into the
    /// document and is returned.
    pub fn apply(&mut self, event: InputEvent) -> Option<Shape> {
        match event {
            InputEvent::SelectKind(kind) => self.tool.select(kind),
            InputEvent::Cancel => self.tool.cancel(),
            InputEvent::Click(pos) => {
                let shape = self.tool.click(pos)?;
                let total = self.document.add(shape);
                log::info!("Placed {shape} ({total} shapes)");
                return Some(shape);
            }
            InputEvent::Hover(pos) => self.hover = pos,
        }
        None
    }

    /// Lay out one frame. The document is read once, up front.
    pub fn show(&mut self, ctx: &egui::Context) {
        let mut shapes = self.document.snapshot();
        tools_panel(self, ctx, shapes.len());
        central_panel(self, ctx, &mut shapes);
    }
}

impl eframe::App for CadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> CadApp {
        CadApp::with_document(&Config::default(), SharedDocument::new())
    }

    #[test]
    fn test_two_click_rectangle() {
        let mut app = app();
        app.apply(InputEvent::SelectKind(ShapeKind::Rectangle));
        app.apply(InputEvent::Click(Point::new(40, 40)));
        app.apply(InputEvent::Hover(Some(Point::new(10, 60))));
        assert_eq!(
            app.preview(),
            Some(Shape::Rectangle { top_left: Point::new(10, 40), width: 30, height: 20 })
        );
        assert!(app.document().is_empty());

        app.apply(InputEvent::Click(Point::new(10, 60)));
        assert_eq!(
            app.document().snapshot(),
            vec![Shape::Rectangle { top_left: Point::new(10, 40), width: 30, height: 20 }]
        );
        assert_eq!(app.preview(), None);
    }

    #[test]
    fn test_frame_reads_document_once() {
        let mut app = app();
        app.document().add(Shape::point(1, 1));
        let before = app.document().lock_count();

        let ctx = egui::Context::default();
        let _ = ctx.run(Default::default(), |ctx| app.show(ctx));

        assert_eq!(app.document().lock_count() - before, 1);
    }

    #[test]
    fn test_apply_returns_placed_shape() {
        let mut app = app();
        assert_eq!(app.apply(InputEvent::SelectKind(ShapeKind::Line)), None);
        assert_eq!(app.apply(InputEvent::Click(Point::new(0, 0))), None);
        assert_eq!(
            app.apply(InputEvent::Click(Point::new(4, 4))),
            Some(Shape::line(Point::new(0, 0), Point::new(4, 4)))
        );
    }

    #[test]
    fn test_cancel_drops_gesture() {
        let mut app = app();
        app.select_kind(ShapeKind::Line);
        app.apply(InputEvent::Click(Point::new(1, 1)));
        app.apply(InputEvent::Cancel);
        app.apply(InputEvent::Click(Point::new(2, 2)));
        assert!(app.document().is_empty());
    }

    #[test]
    fn test_hover_off_canvas_hides_preview() {
        let mut app = app();
        app.select_kind(ShapeKind::Circle);
        app.apply(InputEvent::Click(Point::new(0, 0)));
        app.apply(InputEvent::Hover(Some(Point::new(3, 4))));
        assert!(app.preview().is_some());
        app.apply(InputEvent::Hover(None));
        assert_eq!(app.preview(), None);
    }
}
