//! The drawing surface and the adapter the sketch pad drives it through.

mod adapter;
pub mod raster;
mod surface;

pub use adapter::{CanvasAdapter, SurfaceSlot};
pub use surface::StrokeCanvas;

use crate::color::ColorValue;
use crate::encoded::{EncodedImage, ImageFormat};
use crate::error::SketchResult;
use crate::state::BrushState;
use egui::Color32;
use futures::future::BoxFuture;

/// Style the surface uses for the next stroke and for its background
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceStyle {
    pub stroke_color: Color32,
    pub stroke_width: f32,
    pub eraser_width: f32,
    pub canvas_color: Color32,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color32::BLACK,
            stroke_width: crate::state::DEFAULT_RADIUS as f32,
            eraser_width: crate::state::DEFAULT_RADIUS as f32,
            canvas_color: Color32::WHITE,
        }
    }
}

impl SurfaceStyle {
    /// Both widths follow the brush radius
    pub fn from_brush(brush: &BrushState, fill: &ColorValue) -> Self {
        let width = brush.radius() as f32;
        Self {
            stroke_color: brush.color.color32_or_fallback(),
            stroke_width: width,
            eraser_width: width,
            canvas_color: fill.color32_or_fallback(),
        }
    }
}

/// A canvas that captures strokes and keeps their history.
///
/// The sketch pad only ever talks to the surface through this trait.
pub trait DrawingSurface {
    /// Called every frame with the current brush and fill
    fn apply_style(&mut self, style: &SurfaceStyle);

    /// Switches the next strokes between painting and erasing
    fn set_erase_mode(&mut self, erase: bool);

    fn undo(&mut self);

    fn redo(&mut self);

    /// Removes every stroke. Undoable.
    fn clear_all(&mut self);

    /// Starts encoding the current drawing. The returned future owns everything
    /// it needs, so the surface may keep changing while it runs.
    fn export_image(&self, format: ImageFormat) -> BoxFuture<'static, SketchResult<EncodedImage>>;
}
