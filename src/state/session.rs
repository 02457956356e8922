use crate::color::ColorValue;
use crate::config::SketchConfig;
use crate::palette::Palette;
use super::{BrushState, DrawMode, Popover, PopoverVisibility};

/// Brush and palette state for one sketch pad, from construction to drop.
///
/// The session is the single owner of everything the toolbar edits: the palette,
/// the brush, the staged custom color, the canvas fill color and which popovers
/// are open. It knows nothing about the drawing surface; the canvas adapter reads
/// the brush from here every frame.
///
/// # Draw / erase mode
///
/// ```text
///              toggle_erase()
///   ┌─────────┐ ───────────► ┌─────────┐
///   │ Drawing │              │ Erasing │
///   └─────────┘ ◄─────────── └─────────┘
///        ▲       toggle_erase(),   │
///        │       select_color(),   │
///        └─────  confirm_custom_color()
/// ```
///
/// Drawing is the initial state. There is no terminal state.
#[derive(Debug, Clone)]
pub struct SketchSession {
    palette: Palette,
    brush: BrushState,
    pending_color: Option<ColorValue>,
    popovers: PopoverVisibility,
    fill_color: ColorValue,
}

impl Default for SketchSession {
    fn default() -> Self {
        Self::new(&SketchConfig::default())
    }
}

impl SketchSession {
    /// Creates a session with the built-in palette plus the configured extra colors.
    ///
    /// The brush starts with the first built-in color, the default radius and the
    /// eraser off. The fill color comes from `initial_canvas_color`.
    pub fn new(config: &SketchConfig) -> Self {
        let palette = Palette::new(config.custom_color_palette.clone());
        for color in palette.extra() {
            warn_if_unparseable(color);
        }
        warn_if_unparseable(&config.initial_canvas_color);
        let brush = BrushState::new(palette.default_color().clone());
        Self {
            palette,
            brush,
            pending_color: None,
            popovers: PopoverVisibility::default(),
            fill_color: config.initial_canvas_color.clone(),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    pub fn mode(&self) -> DrawMode {
        self.brush.mode()
    }

    pub fn pending_color(&self) -> Option<&ColorValue> {
        self.pending_color.as_ref()
    }

    pub fn popovers(&self) -> &PopoverVisibility {
        &self.popovers
    }

    pub(crate) fn popovers_mut(&mut self) -> &mut PopoverVisibility {
        &mut self.popovers
    }

    pub fn fill_color(&self) -> &ColorValue {
        &self.fill_color
    }

    /// Makes `color` the brush color and switches back to drawing
    pub fn select_color(&mut self, color: ColorValue) {
        log::debug!("Brush color selected: {}", color);
        warn_if_unparseable(&color);
        self.brush.erasing = false;
        self.popovers.color_picker = false;
        self.brush.color = color;
    }

    /// Remembers the picker's current color without touching the brush
    pub fn stage_custom_color(&mut self, color: ColorValue) {
        self.pending_color = Some(color);
    }

    /// Promotes the staged color into the palette and the brush.
    ///
    /// Returns false and changes nothing when no color is staged.
    pub fn confirm_custom_color(&mut self) -> bool {
        let Some(color) = self.pending_color.take() else {
            return false;
        };
        log::info!("Custom color added to palette: {}", color);
        warn_if_unparseable(&color);
        self.brush.erasing = false;
        self.palette.push_user_color(color.clone());
        self.brush.color = color;
        self.popovers.color_picker = false;
        true
    }

    /// Drops the staged color and closes the picker
    pub fn cancel_custom_color(&mut self) {
        self.pending_color = None;
        self.popovers.color_picker = false;
    }

    /// Returns the stored radius, clamped to the slider range
    pub fn set_radius(&mut self, radius: u32) -> u32 {
        self.brush.set_radius(radius)
    }

    /// Flips the eraser and closes the brush slider
    pub fn toggle_erase(&mut self) -> DrawMode {
        self.brush.erasing = !self.brush.erasing;
        self.popovers.brush_slider = false;
        self.brush.mode()
    }

    /// Paints the canvas background with the current brush color
    pub fn fill(&mut self) {
        self.fill_color = self.brush.color.clone();
    }

    pub fn toggle_popover(&mut self, popover: Popover) {
        self.popovers.toggle(popover);
    }

    pub fn open_popover(&mut self, popover: Popover) {
        self.popovers.set(popover, true);
    }

    pub fn close_popover(&mut self, popover: Popover) {
        self.popovers.set(popover, false);
    }
}

/// Unparseable literals are kept as-is and painted black
fn warn_if_unparseable(color: &ColorValue) {
    if color.to_color32().is_none() {
        log::warn!("Unrecognized color literal {:?}, painting as black", color.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::BUILTIN_COLORS;

    #[test]
    fn test_initial_state() {
        let session = SketchSession::default();
        assert_eq!(session.brush().color.as_str(), BUILTIN_COLORS[0]);
        assert_eq!(session.brush().radius(), 5);
        assert_eq!(session.mode(), DrawMode::Drawing);
        assert!(session.palette().user_added().is_empty());
        assert_eq!(session.fill_color().as_str(), "#ffffff");
        assert!(!session.popovers().any_open());
    }

    #[test]
    fn test_fill_uses_brush_color() {
        let mut session = SketchSession::default();
        session.select_color(ColorValue::new("#64B5F6"));
        session.fill();
        assert_eq!(session.fill_color().as_str(), "#64B5F6");
    }

    #[test]
    fn test_cancel_keeps_palette() {
        let mut session = SketchSession::default();
        session.open_popover(Popover::ColorPicker);
        session.stage_custom_color(ColorValue::new("#010203"));
        session.cancel_custom_color();

        assert!(session.pending_color().is_none());
        assert!(session.palette().user_added().is_empty());
        assert_eq!(session.brush().color.as_str(), BUILTIN_COLORS[0]);
        assert!(!session.popovers().color_picker);
    }
}
