use super::raster::{self, CanvasSnapshot};
use super::{DrawingSurface, SurfaceStyle};
use crate::command::{Command, CommandHistory};
use crate::document::Document;
use crate::encoded::{EncodedImage, ImageFormat};
use crate::error::SketchResult;
use crate::stroke::{MutableStroke, Stroke, StrokeKind};
use egui::{Color32, Painter, Pos2, Rect, Response, Sense, Vec2};
use futures::FutureExt as _;
use futures::future::BoxFuture;

/// Freehand stroke canvas painted with egui.
///
/// Points are stored relative to the canvas' top-left corner so the canvas can
/// move inside the window without disturbing the drawing.
#[derive(Debug)]
pub struct StrokeCanvas {
    document: Document,
    history: CommandHistory,
    // Transient state: the stroke being drawn (if any)
    current_stroke: Option<MutableStroke>,
    style: SurfaceStyle,
    erase_mode: bool,
    size: Vec2,
}

impl StrokeCanvas {
    pub fn new(size: Vec2) -> Self {
        Self {
            document: Document::new(),
            history: CommandHistory::new(),
            current_stroke: None,
            style: SurfaceStyle::default(),
            erase_mode: false,
            size,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn style(&self) -> &SurfaceStyle {
        &self.style
    }

    pub fn is_erasing(&self) -> bool {
        self.erase_mode
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn is_drawing(&self) -> bool {
        self.current_stroke.is_some()
    }

    /// Starts a stroke at `pos` with the current style
    pub fn begin_stroke(&mut self, pos: Pos2) {
        let (color, width, kind) = if self.erase_mode {
            (self.style.canvas_color, self.style.eraser_width, StrokeKind::Erase)
        } else {
            (self.style.stroke_color, self.style.stroke_width, StrokeKind::Paint)
        };
        let mut stroke = MutableStroke::new(color, width, kind);
        stroke.add_point(pos);
        self.current_stroke = Some(stroke);
    }

    pub fn extend_stroke(&mut self, pos: Pos2) {
        if let Some(stroke) = &mut self.current_stroke {
            stroke.add_point(pos);
        }
    }

    /// Finishes the stroke in progress and records it in the history
    pub fn end_stroke(&mut self) {
        if let Some(stroke) = self.current_stroke.take() {
            if !stroke.is_empty() {
                self.history
                    .execute(Command::AddStroke(stroke.to_stroke_ref()), &mut self.document);
            }
        }
    }

    /// Detached copy of what an export would show right now
    pub fn snapshot(&self) -> CanvasSnapshot {
        CanvasSnapshot {
            size: [self.size.x.round() as u32, self.size.y.round() as u32],
            background: self.style.canvas_color,
            strokes: self.document.strokes().to_vec(),
        }
    }

    /// Lays the canvas out in `rect`, turns drags into strokes and paints everything
    pub fn ui(&mut self, ui: &mut egui::Ui, rect: Rect) -> Response {
        self.size = rect.size();
        let response = ui.allocate_rect(rect, Sense::drag());
        let to_canvas = |pos: Pos2| (pos - rect.min).to_pos2();

        if let Some(pos) = response.interact_pointer_pos() {
            if response.drag_started() {
                self.begin_stroke(to_canvas(pos));
            } else if response.dragged() {
                self.extend_stroke(to_canvas(pos));
            }
        }
        if response.drag_stopped() {
            self.end_stroke();
        }

        // Erasing has to hide what is underneath, so it needs an opaque color
        let background = opaque_background(self.style.canvas_color, ui.visuals().extreme_bg_color);
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, background);
        for stroke in self.document.strokes() {
            paint_stroke(&painter, rect.min, stroke, background);
        }
        if let Some(stroke) = &self.current_stroke {
            paint_stroke(&painter, rect.min, &stroke.to_stroke(), background);
        }

        if let Some(hover) = response.hover_pos() {
            let width = if self.erase_mode {
                self.style.eraser_width
            } else {
                self.style.stroke_width
            };
            painter.circle_stroke(hover, width / 2.0, egui::Stroke::new(1.0, Color32::GRAY));
        }

        response
    }
}

/// `canvas` composited over the opaque `backdrop` the canvas sits on
fn opaque_background(canvas: Color32, backdrop: Color32) -> Color32 {
    // Color32 is premultiplied, so source-over is a per-channel add
    let [r, g, b, a] = canvas.to_array();
    let [br, bg, bb, _] = backdrop.to_array();
    let under = |channel: u8| (u16::from(channel) * u16::from(255 - a) / 255) as u8;
    Color32::from_rgb(
        r.saturating_add(under(br)),
        g.saturating_add(under(bg)),
        b.saturating_add(under(bb)),
    )
}

fn paint_stroke(painter: &Painter, origin: Pos2, stroke: &Stroke, background: Color32) {
    let color = stroke.paint_color(background);
    let offset = origin.to_vec2();
    let points: Vec<Pos2> = stroke.points().iter().map(|p| *p + offset).collect();
    let radius = stroke.width() / 2.0;

    match points.as_slice() {
        [] => {}
        [point] => {
            painter.circle_filled(*point, radius, color);
        }
        [first, .., last] => {
            // Round caps, matching what the exporter rasterizes
            painter.circle_filled(*first, radius, color);
            painter.circle_filled(*last, radius, color);
            painter.add(egui::Shape::line(points.clone(), egui::Stroke::new(stroke.width(), color)));
        }
    }
}

impl DrawingSurface for StrokeCanvas {
    fn apply_style(&mut self, style: &SurfaceStyle) {
        self.style = *style;
    }

    fn set_erase_mode(&mut self, erase: bool) {
        log::debug!("Erase mode {}", if erase { "on" } else { "off" });
        self.erase_mode = erase;
    }

    fn undo(&mut self) {
        self.current_stroke = None;
        self.history.undo(&mut self.document);
    }

    fn redo(&mut self) {
        self.history.redo(&mut self.document);
    }

    fn clear_all(&mut self) {
        self.current_stroke = None;
        if !self.document.is_empty() {
            self.history
                .execute(Command::ClearAll { removed: Vec::new() }, &mut self.document);
        }
    }

    fn export_image(&self, format: ImageFormat) -> BoxFuture<'static, SketchResult<EncodedImage>> {
        let snapshot = self.snapshot();
        async move { raster::encode(&snapshot, format) }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_line(canvas: &mut StrokeCanvas, from: Pos2, to: Pos2) {
        canvas.begin_stroke(from);
        canvas.extend_stroke(to);
        canvas.end_stroke();
    }

    #[test]
    fn test_stroke_uses_current_style() {
        let mut canvas = StrokeCanvas::new(Vec2::new(100.0, 100.0));
        canvas.apply_style(&SurfaceStyle {
            stroke_color: Color32::RED,
            stroke_width: 12.0,
            eraser_width: 12.0,
            canvas_color: Color32::WHITE,
        });
        draw_line(&mut canvas, Pos2::new(1.0, 1.0), Pos2::new(50.0, 50.0));

        let stroke = &canvas.document().strokes()[0];
        assert_eq!(stroke.color(), Color32::RED);
        assert_eq!(stroke.width(), 12.0);
        assert!(!stroke.is_eraser());
    }

    #[test]
    fn test_erase_mode_records_eraser_strokes() {
        let mut canvas = StrokeCanvas::new(Vec2::new(100.0, 100.0));
        canvas.set_erase_mode(true);
        draw_line(&mut canvas, Pos2::new(1.0, 1.0), Pos2::new(50.0, 50.0));
        assert!(canvas.document().strokes()[0].is_eraser());
    }

    #[test]
    fn test_clear_then_undo_restores() {
        let mut canvas = StrokeCanvas::new(Vec2::new(100.0, 100.0));
        draw_line(&mut canvas, Pos2::new(1.0, 1.0), Pos2::new(50.0, 50.0));
        draw_line(&mut canvas, Pos2::new(5.0, 1.0), Pos2::new(50.0, 10.0));

        canvas.clear_all();
        assert!(canvas.document().is_empty());

        canvas.undo();
        assert_eq!(canvas.document().strokes().len(), 2);
    }

    #[test]
    fn test_clear_on_empty_canvas_adds_no_history() {
        let mut canvas = StrokeCanvas::new(Vec2::new(100.0, 100.0));
        canvas.clear_all();
        assert!(!canvas.history().can_undo());
    }

    #[test]
    fn test_translucent_fill_erases_with_opaque_color() {
        let half_black = Color32::from_rgba_unmultiplied(0, 0, 0, 128);
        let background = opaque_background(half_black, Color32::WHITE);
        assert_eq!(background, Color32::from_rgb(127, 127, 127));
        assert!(background.is_opaque());

        // An eraser stroke covers red completely instead of tinting it
        let eraser = Stroke::new(background, 8.0, StrokeKind::Erase, vec![Pos2::ZERO]);
        assert_eq!(eraser.paint_color(background).a(), 255);
    }

    #[test]
    fn test_opaque_fill_is_unchanged() {
        let blue = Color32::from_rgb(10, 20, 200);
        assert_eq!(opaque_background(blue, Color32::WHITE), blue);
        assert_eq!(opaque_background(Color32::TRANSPARENT, Color32::WHITE), Color32::WHITE);
    }

    #[test]
    fn test_snapshot_size_and_background() {
        let mut canvas = StrokeCanvas::new(Vec2::new(64.4, 32.6));
        canvas.apply_style(&SurfaceStyle {
            canvas_color: Color32::LIGHT_BLUE,
            ..SurfaceStyle::default()
        });
        let snapshot = canvas.snapshot();
        assert_eq!(snapshot.size, [64, 33]);
        assert_eq!(snapshot.background, Color32::LIGHT_BLUE);
    }
}
