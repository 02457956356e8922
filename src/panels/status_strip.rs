use crate::canvas::StrokeCanvas;
use crate::components::ColorSwatch;
use crate::pad::SketchPad;
use crate::state::Popover;
use eframe::egui;

/// Read-only summary of the brush and canvas along the bottom edge.
/// The color swatch doubles as a second trigger for the color picker.
pub fn status_strip(
    pad: &mut SketchPad<StrokeCanvas>,
    ctx: &egui::Context,
    canvas_size: egui::Vec2,
) {
    egui::TopBottomPanel::bottom("status_strip").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let brush = pad.session().brush().clone();

            ui.strong("Eraser:");
            ui.label(if brush.erasing { "On" } else { "Off" });
            ui.separator();

            ui.strong("Brush color:");
            let swatch = ColorSwatch::square(brush.color.color32_or_fallback())
                .show(ui)
                .on_hover_text("Pick a custom color");
            if swatch.clicked() {
                pad.toggle_popover(Popover::ColorPicker);
            }
            pad.regions_mut(Popover::ColorPicker).trigger.add(swatch.rect);
            ui.monospace(brush.color.as_str());
            ui.separator();

            ui.strong("Brush size:");
            ui.label(format!("{}px", brush.radius()));
            ui.separator();

            ui.strong("Canvas dimensions:");
            ui.label(format!(
                "{} x {}",
                canvas_size.x.round() as u32,
                canvas_size.y.round() as u32
            ));
        });
    });
}
