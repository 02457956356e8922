use crate::canvas::StrokeCanvas;
use crate::config::SketchConfig;
use crate::pad::SketchPad;
use eframe::egui;

/// Lays out the drawing surface and mounts it on first use.
/// Returns the canvas size actually used this frame.
pub fn canvas_panel(
    pad: &mut SketchPad<StrokeCanvas>,
    config: &SketchConfig,
    ctx: &egui::Context,
) -> egui::Vec2 {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(ctx.style().visuals.extreme_bg_color))
        .show(ctx, |ui| {
            let available = ui.available_rect_before_wrap();
            let size = config.canvas_size(available.size(), ctx.screen_rect().size());
            let rect = egui::Rect::from_min_size(available.min, size);

            if !pad.canvas().is_ready() {
                pad.mount(StrokeCanvas::new(size));
            }
            pad.sync_canvas();

            if let Err(err) = pad.canvas().with_surface(|canvas| canvas.ui(ui, rect)) {
                log::debug!("Canvas not painted: {}", err);
            }
            size
        })
        .inner
}
