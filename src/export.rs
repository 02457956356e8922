//! Getting the drawing out of the sketch pad.
//!
//! Two call sites, two failure policies:
//! - [`ExportHandle::export_drawing`] is for containers embedding the pad. It
//!   reports every failure, `NotReady` included, because the caller has no other
//!   way to find out.
//! - The toolbar's download button goes through [`export_for_download`], which
//!   logs a warning and produces nothing on failure.

use crate::canvas::{DrawingSurface, SurfaceSlot};
use crate::encoded::{EncodedImage, ImageFormat};
use crate::error::{SketchError, SketchResult};
use std::sync::Arc;

/// Export access to a sketch pad's surface, for code that does not own the pad.
///
/// Cloning is cheap; every clone sees the same surface.
pub struct ExportHandle<S> {
    slot: SurfaceSlot<S>,
}

impl<S> Clone for ExportHandle<S> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<S> std::fmt::Debug for ExportHandle<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportHandle")
            .field("ready", &self.slot.lock().is_some())
            .finish()
    }
}

impl<S: DrawingSurface> ExportHandle<S> {
    pub(crate) fn new(slot: SurfaceSlot<S>) -> Self {
        Self { slot }
    }

    pub fn is_ready(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// Encodes the current drawing as PNG.
    ///
    /// Fails with [`SketchError::NotReady`] before the canvas is mounted and with
    /// [`SketchError::ExportFailed`] when encoding fails. Concurrent calls are
    /// independent encodes.
    pub async fn export_drawing(&self) -> SketchResult<EncodedImage> {
        self.export_as(ImageFormat::Png).await
    }

    pub async fn export_as(&self, format: ImageFormat) -> SketchResult<EncodedImage> {
        let pending = {
            let slot = self.slot.lock();
            let surface = slot.as_ref().ok_or(SketchError::NotReady)?;
            surface.export_image(format)
        };
        pending.await
    }
}

/// Exports for the in-panel download button. Never fails: problems are logged
/// and reported as `None`.
pub async fn export_for_download<S: DrawingSurface>(
    handle: &ExportHandle<S>,
) -> Option<EncodedImage> {
    if !handle.is_ready() {
        log::warn!("No image to download: drawing surface is not ready");
        return None;
    }
    match handle.export_drawing().await {
        Ok(image) if !image.is_empty() => Some(image),
        Ok(_) => {
            log::warn!("No image to download: export produced no data");
            None
        }
        Err(err) => {
            log::warn!("No image to download: {}", err);
            None
        }
    }
}

/// Exports and saves into `dir` as `my-sketch-<millis>.png`. Returns the written
/// path, or `None` after logging whatever went wrong.
#[cfg(not(target_arch = "wasm32"))]
pub async fn download_into<S: DrawingSurface>(
    handle: &ExportHandle<S>,
    dir: &std::path::Path,
) -> Option<std::path::PathBuf> {
    let image = export_for_download(handle).await?;
    match save_download(&image, dir) {
        Ok(path) => Some(path),
        Err(err) => {
            log::warn!("Download failed: {}", err);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn save_download(image: &EncodedImage, dir: &std::path::Path) -> SketchResult<std::path::PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(image.download_file_name(crate::util::time::timestamp_millis()));
    std::fs::write(&path, image.bytes())?;
    log::info!("Sketch saved to {} ({} bytes)", path.display(), image.bytes().len());
    Ok(path)
}

/// The user's download directory, or the working directory when there is none
#[cfg(not(target_arch = "wasm32"))]
pub fn default_download_dir() -> std::path::PathBuf {
    dirs::download_dir().unwrap_or_else(|| std::path::PathBuf::from("."))
}

/// Runs the in-panel download to completion on the calling thread, saving into
/// [`default_download_dir`]. Encoding is synchronous work, so the frame waits for it.
#[cfg(not(target_arch = "wasm32"))]
pub fn run_download<S: DrawingSurface>(handle: &ExportHandle<S>) -> Option<std::path::PathBuf> {
    futures::executor::block_on(download_into(handle, &default_download_dir()))
}

/// Starts the in-panel download; the browser saves the file.
#[cfg(target_arch = "wasm32")]
pub fn spawn_download<S: DrawingSurface + 'static>(handle: ExportHandle<S>) {
    wasm_bindgen_futures::spawn_local(async move {
        let Some(image) = export_for_download(&handle).await else {
            return;
        };
        if let Err(err) = web::trigger_download(&image) {
            log::warn!("Download failed: {:?}", err);
        }
    });
}

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::encoded::EncodedImage;
    use eframe::wasm_bindgen::{JsCast as _, JsValue};

    /// Clicks a temporary anchor pointing at the image, then removes the anchor
    /// and releases the URL it used.
    pub fn trigger_download(image: &EncodedImage) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("no document body"))?;

        let url = image.data_uri();
        let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
        anchor.set_href(&url);
        anchor.set_download(&image.download_file_name(crate::util::time::timestamp_millis()));
        body.append_child(&anchor)?;
        anchor.click();
        body.remove_child(&anchor)?;
        web_sys::Url::revoke_object_url(&url)?;
        log::info!("Sketch download triggered");
        Ok(())
    }
}
