use super::{DrawingSurface, SurfaceStyle};
use crate::color::ColorValue;
use crate::encoded::{EncodedImage, ImageFormat};
use crate::error::{SketchError, SketchResult};
use crate::export::ExportHandle;
use crate::state::BrushState;
use futures::future::BoxFuture;
use parking_lot::Mutex;
use std::sync::Arc;

/// Where the mounted surface lives. Empty until the canvas is first laid out.
pub type SurfaceSlot<S> = Arc<Mutex<Option<S>>>;

/// Thin facade over a [`DrawingSurface`].
///
/// Every command fails with [`SketchError::NotReady`] while nothing is mounted.
/// Nothing is queued for later.
#[derive(Debug)]
pub struct CanvasAdapter<S> {
    slot: SurfaceSlot<S>,
    // Erase flag last pushed to the mounted surface; None right after a mount
    pushed_erase: Option<bool>,
}

impl<S> Default for CanvasAdapter<S> {
    fn default() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            pushed_erase: None,
        }
    }
}

impl<S: DrawingSurface> CanvasAdapter<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the surface, replacing any previous one
    pub fn mount(&mut self, surface: S) {
        log::info!("Drawing surface mounted");
        *self.slot.lock() = Some(surface);
        self.pushed_erase = None;
    }

    pub fn unmount(&mut self) -> Option<S> {
        self.pushed_erase = None;
        let surface = self.slot.lock().take();
        if surface.is_some() {
            log::info!("Drawing surface unmounted");
        }
        surface
    }

    pub fn is_ready(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// Runs `f` against the mounted surface
    pub fn with_surface<R>(&self, f: impl FnOnce(&mut S) -> R) -> SketchResult<R> {
        let mut slot = self.slot.lock();
        let surface = slot.as_mut().ok_or(SketchError::NotReady)?;
        Ok(f(surface))
    }

    /// Pushes the style derived from `brush` and `fill`, and the erase flag
    /// whenever it differs from what the surface last received.
    pub fn sync(&mut self, brush: &BrushState, fill: &ColorValue) -> SketchResult<()> {
        let style = SurfaceStyle::from_brush(brush, fill);
        let push_erase = self.pushed_erase != Some(brush.erasing);
        self.with_surface(|surface| {
            surface.apply_style(&style);
            if push_erase {
                surface.set_erase_mode(brush.erasing);
            }
        })?;
        self.pushed_erase = Some(brush.erasing);
        Ok(())
    }

    pub fn undo(&self) -> SketchResult<()> {
        self.with_surface(|surface| surface.undo())
    }

    pub fn redo(&self) -> SketchResult<()> {
        self.with_surface(|surface| surface.redo())
    }

    pub fn clear(&self) -> SketchResult<()> {
        self.with_surface(|surface| surface.clear_all())
    }

    /// Starts an export. The lock is released before the returned future runs.
    pub fn export_image(
        &self,
        format: ImageFormat,
    ) -> SketchResult<BoxFuture<'static, SketchResult<EncodedImage>>> {
        self.with_surface(|surface| surface.export_image(format))
    }

    /// A handle sharing this adapter's surface slot
    pub fn export_handle(&self) -> ExportHandle<S> {
        ExportHandle::new(Arc::clone(&self.slot))
    }
}
