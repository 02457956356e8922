use eframe::egui::{self, Color32};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchShape {
    Circle,
    Square,
}

/// A clickable patch of color. Translucent colors are shown over white.
pub struct ColorSwatch {
    color: Color32,
    shape: SwatchShape,
    size: f32,
    selected: bool,
}

impl ColorSwatch {
    pub fn circle(color: Color32, selected: bool) -> Self {
        Self {
            color,
            shape: SwatchShape::Circle,
            size: 20.0,
            selected,
        }
    }

    pub fn square(color: Color32) -> Self {
        Self {
            color,
            shape: SwatchShape::Square,
            size: 18.0,
            selected: false,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(self.size, self.size), egui::Sense::click());
        if !ui.is_rect_visible(rect) {
            return response;
        }

        let grow = if response.hovered() { 1.0 } else { 0.0 };
        let painter = ui.painter();
        let outline = egui::Stroke::new(1.0, Color32::from_gray(160));
        match self.shape {
            SwatchShape::Circle => {
                let radius = self.size / 2.0 + grow;
                painter.circle_filled(rect.center(), radius, Color32::WHITE);
                painter.circle_filled(rect.center(), radius, self.color);
                if self.selected {
                    painter.circle_stroke(
                        rect.center(),
                        radius + 2.0,
                        egui::Stroke::new(2.0, Color32::from_gray(60)),
                    );
                }
            }
            SwatchShape::Square => {
                let rect = rect.expand(grow);
                painter.rect_filled(rect, 3.0, Color32::WHITE);
                painter.rect_filled(rect, 3.0, self.color);
                painter.rect_stroke(rect, 3.0, outline);
            }
        }
        response
    }
}
