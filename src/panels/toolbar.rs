use crate::canvas::StrokeCanvas;
use crate::color::ColorValue;
use crate::components::{ColorSwatch, ToolButton};
use crate::pad::SketchPad;
use crate::state::Popover;
use eframe::egui;

/// Where the popover triggers ended up, so popovers can open next to them
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolbarAnchors {
    pub color_trigger: Option<egui::Rect>,
    pub brush_trigger: Option<egui::Rect>,
}

pub fn toolbar(pad: &mut SketchPad<StrokeCanvas>, ctx: &egui::Context) -> ToolbarAnchors {
    let mut anchors = ToolbarAnchors::default();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let add_color = ToolButton::new("➕", "Add a custom color")
                .selected(pad.session().popovers().color_picker)
                .show(ui);
            if add_color.clicked() {
                pad.toggle_popover(Popover::ColorPicker);
            }
            pad.regions_mut(Popover::ColorPicker).trigger.add(add_color.rect);
            anchors.color_trigger = Some(add_color.rect);

            // Collect first to avoid borrowing the session while selecting
            let entries: Vec<ColorValue> = pad.session().palette().entries().cloned().collect();
            let current = pad.session().brush().color.clone();
            let erasing = pad.session().brush().erasing;
            let mut picked = None;

            egui::ScrollArea::horizontal()
                .max_width((ui.available_width() - 320.0).max(80.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for color in &entries {
                            let selected = !erasing && *color == current;
                            let swatch = ColorSwatch::circle(color.color32_or_fallback(), selected)
                                .show(ui)
                                .on_hover_text(color.as_str());
                            if swatch.clicked() {
                                picked = Some(color.clone());
                            }
                        }
                    });
                });
            if let Some(color) = picked {
                pad.select_color(color);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ToolButton::new("💾", "Download").show(ui).clicked() {
                    log::info!("Download requested");
                    pad.download();
                }

                let brush = ToolButton::new("⚫", "Brush size")
                    .selected(pad.session().popovers().brush_slider)
                    .show(ui);
                if brush.clicked() {
                    pad.toggle_popover(Popover::BrushSlider);
                }
                pad.regions_mut(Popover::BrushSlider).trigger.add(brush.rect);
                anchors.brush_trigger = Some(brush.rect);

                if ToolButton::new("▣", "Fill canvas with brush color").show(ui).clicked() {
                    pad.fill();
                }

                let eraser = ToolButton::new("⌫", "Eraser")
                    .selected(pad.session().brush().erasing)
                    .show(ui);
                if eraser.clicked() {
                    let mode = pad.toggle_erase();
                    log::info!("Draw mode: {:?}", mode);
                }

                if ToolButton::new("🗑", "Clear").show(ui).clicked() {
                    pad.clear();
                }
                if ToolButton::new("⟳", "Redo").show(ui).clicked() {
                    pad.redo();
                }
                if ToolButton::new("⟲", "Undo").show(ui).clicked() {
                    pad.undo();
                }
            });
        });
    });

    anchors
}
