use eframe::egui;

/// Square icon button for the toolbar, highlighted while its tool is active
pub struct ToolButton {
    pub icon: &'static str,
    pub tooltip: &'static str,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(icon: &'static str, tooltip: &'static str) -> Self {
        Self {
            icon,
            tooltip,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(36.0, 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_gray(215)
            } else if response.hovered() {
                egui::Color32::from_gray(228)
            } else {
                egui::Color32::TRANSPARENT
            };
            ui.painter().rect_filled(rect, 5.0, bg_color);

            let text_color = if response.hovered() {
                egui::Color32::from_gray(90)
            } else {
                egui::Color32::from_gray(30)
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.icon,
                egui::FontId::proportional(18.0),
                text_color,
            );
        }

        response.on_hover_text(self.tooltip)
    }
}
