use crate::canvas::{CanvasAdapter, DrawingSurface};
use crate::color::ColorValue;
use crate::config::SketchConfig;
use crate::dismiss::{OutsideClickDismissal, PointerListeners, PopoverRegions};
use crate::error::SketchResult;
use crate::export::ExportHandle;
use crate::state::{DrawMode, Popover, SketchSession};
use egui::Pos2;

/// One sketch pad: session state, the canvas it drives and popover dismissal.
///
/// This is everything the panel does, minus the drawing of widgets. Toolbar
/// commands go through here so that popover changes re-sync the outside-click
/// listener immediately and canvas commands get the toolbar's error policy:
/// a canvas that is not mounted yet silently ignores them.
pub struct SketchPad<S> {
    session: SketchSession,
    canvas: CanvasAdapter<S>,
    dismissal: OutsideClickDismissal,
}

impl<S: DrawingSurface> SketchPad<S> {
    pub fn new(config: &SketchConfig, listeners: PointerListeners) -> Self {
        Self {
            session: SketchSession::new(config),
            canvas: CanvasAdapter::new(),
            dismissal: OutsideClickDismissal::new(listeners),
        }
    }

    pub fn session(&self) -> &SketchSession {
        &self.session
    }

    pub fn canvas(&self) -> &CanvasAdapter<S> {
        &self.canvas
    }

    pub fn dismissal(&self) -> &OutsideClickDismissal {
        &self.dismissal
    }

    pub fn mount(&mut self, surface: S) {
        self.canvas.mount(surface);
    }

    pub fn unmount(&mut self) -> Option<S> {
        self.canvas.unmount()
    }

    /// Pushes the brush and fill to the canvas. Called once per frame.
    pub fn sync_canvas(&mut self) {
        let result = self
            .canvas
            .sync(self.session.brush(), self.session.fill_color());
        ignore_not_ready("sync", result);
    }

    /// The export bridge for containers embedding this pad
    pub fn export_handle(&self) -> ExportHandle<S> {
        self.canvas.export_handle()
    }

    /// The toolbar's download button. Failures are logged, never returned.
    pub fn download(&self)
    where
        S: 'static,
    {
        #[cfg(not(target_arch = "wasm32"))]
        crate::export::run_download(&self.export_handle());
        #[cfg(target_arch = "wasm32")]
        crate::export::spawn_download(self.export_handle());
    }

    // Palette

    pub fn select_color(&mut self, color: ColorValue) {
        self.session.select_color(color);
        self.sync_listener();
    }

    pub fn stage_custom_color(&mut self, color: ColorValue) {
        self.session.stage_custom_color(color);
    }

    pub fn confirm_custom_color(&mut self) -> bool {
        let confirmed = self.session.confirm_custom_color();
        self.sync_listener();
        confirmed
    }

    pub fn cancel_custom_color(&mut self) {
        self.session.cancel_custom_color();
        self.sync_listener();
    }

    // Brush and tools

    pub fn set_radius(&mut self, radius: u32) -> u32 {
        self.session.set_radius(radius)
    }

    pub fn toggle_erase(&mut self) -> DrawMode {
        let mode = self.session.toggle_erase();
        self.sync_listener();
        mode
    }

    pub fn fill(&mut self) {
        self.session.fill();
    }

    pub fn undo(&mut self) {
        ignore_not_ready("undo", self.canvas.undo());
    }

    pub fn redo(&mut self) {
        ignore_not_ready("redo", self.canvas.redo());
    }

    pub fn clear(&mut self) {
        ignore_not_ready("clear", self.canvas.clear());
    }

    // Popovers

    pub fn toggle_popover(&mut self, popover: Popover) {
        self.session.toggle_popover(popover);
        self.sync_listener();
    }

    pub fn open_popover(&mut self, popover: Popover) {
        self.session.open_popover(popover);
        self.sync_listener();
    }

    pub fn close_popover(&mut self, popover: Popover) {
        self.session.close_popover(popover);
        self.sync_listener();
    }

    /// Records where a popover and its trigger were laid out this frame
    pub fn regions_mut(&mut self, popover: Popover) -> &mut PopoverRegions {
        self.dismissal.regions_mut(popover)
    }

    /// Drops last frame's regions before the next layout pass
    pub fn begin_layout(&mut self) {
        self.dismissal.reset_regions();
    }

    /// Feeds a pointer press to the outside-click dismissal
    pub fn pointer_down(&mut self, pos: Pos2) -> Vec<Popover> {
        let closed = self
            .dismissal
            .handle_pointer_down(pos, self.session.popovers_mut());
        self.sync_listener();
        closed
    }

    fn sync_listener(&mut self) {
        self.dismissal.sync(self.session.popovers());
    }
}

/// Toolbar policy: a canvas that is not mounted yet makes commands no-ops
fn ignore_not_ready(command: &str, result: SketchResult<()>) {
    match result {
        Ok(()) => {}
        Err(err) if err.is_not_ready() => log::debug!("{} ignored: {}", command, err),
        Err(err) => log::warn!("{} failed: {}", command, err),
    }
}
