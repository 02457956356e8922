use thiserror::Error;

/// Errors surfaced by the drawing surface and the export bridge
#[derive(Debug, Error)]
pub enum SketchError {
    /// The drawing surface has not been mounted yet
    #[error("drawing surface is not ready")]
    NotReady,

    /// Rasterizing or encoding the drawing failed
    #[error("image export failed: {0}")]
    ExportFailed(String),

    /// Writing the downloaded image to disk failed
    #[error("failed to write download: {0}")]
    Download(#[from] std::io::Error),
}

impl From<image::ImageError> for SketchError {
    fn from(err: image::ImageError) -> Self {
        SketchError::ExportFailed(err.to_string())
    }
}

impl SketchError {
    /// True for the error toolbar commands are allowed to ignore
    pub fn is_not_ready(&self) -> bool {
        matches!(self, SketchError::NotReady)
    }
}

/// Result type for surface and export operations
pub type SketchResult<T> = Result<T, SketchError>;
