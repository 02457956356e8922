use crate::canvas::StrokeCanvas;
use crate::color::{ColorValue, FALLBACK_COLOR};
use crate::pad::SketchPad;
use crate::state::{MAX_RADIUS, MIN_RADIUS, Popover};
use eframe::egui;

const POPOVER_GAP: f32 = 6.0;

/// Custom color picker. Edits are staged and only reach the palette on "Ok".
pub fn color_picker_popover(
    pad: &mut SketchPad<StrokeCanvas>,
    ctx: &egui::Context,
    anchor: Option<egui::Rect>,
) {
    if !pad.session().popovers().color_picker {
        return;
    }
    let Some(anchor) = anchor else {
        return;
    };

    let area = egui::Area::new(egui::Id::new("custom_color_popover"))
        .order(egui::Order::Foreground)
        .fixed_pos(anchor.left_bottom() + egui::vec2(0.0, POPOVER_GAP))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                let session = pad.session();
                let mut color = session
                    .pending_color()
                    .unwrap_or(&session.brush().color)
                    .to_color32()
                    .unwrap_or(FALLBACK_COLOR);

                if egui::color_picker::color_picker_color32(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::OnlyBlend,
                ) {
                    pad.stage_custom_color(ColorValue::from_color32(color));
                }

                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        pad.cancel_custom_color();
                    }
                    if ui.button("Ok").clicked() && !pad.confirm_custom_color() {
                        log::debug!("Nothing staged, picker stays open");
                    }
                });
            });
        });

    pad.regions_mut(Popover::ColorPicker)
        .popover
        .add(area.response.rect);
}

/// Brush radius slider with a live preview of the tip
pub fn brush_slider_popover(
    pad: &mut SketchPad<StrokeCanvas>,
    ctx: &egui::Context,
    anchor: Option<egui::Rect>,
) {
    if !pad.session().popovers().brush_slider {
        return;
    }
    let Some(anchor) = anchor else {
        return;
    };

    let area = egui::Area::new(egui::Id::new("brush_size_popover"))
        .order(egui::Order::Foreground)
        .pivot(egui::Align2::RIGHT_TOP)
        .fixed_pos(anchor.right_bottom() + egui::vec2(0.0, POPOVER_GAP))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                let mut radius = pad.session().brush().radius();
                let slider = egui::Slider::new(&mut radius, MIN_RADIUS..=MAX_RADIUS).show_value(false);
                if ui.add(slider).changed() {
                    pad.set_radius(radius);
                }

                ui.horizontal(|ui| {
                    let side = MAX_RADIUS as f32 + 4.0;
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
                    let color = pad.session().brush().color.color32_or_fallback();
                    ui.painter()
                        .circle_filled(rect.center(), pad.session().brush().radius() as f32 / 2.0, color);
                    ui.label(format!("{}px", pad.session().brush().radius()));
                });
            });
        });

    pad.regions_mut(Popover::BrushSlider)
        .popover
        .add(area.response.rect);
}
