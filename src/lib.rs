#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color;
pub mod command;
pub mod components;
pub mod config;
pub mod dismiss;
pub mod document;
pub mod encoded;
pub mod error;
pub mod export;
pub mod pad;
pub mod palette;
pub mod panels;
pub mod state;
pub mod stroke;
pub mod util;

pub use app::SketchApp;
pub use canvas::{CanvasAdapter, DrawingSurface, StrokeCanvas, SurfaceStyle};
pub use color::ColorValue;
pub use command::{Command, CommandHistory};
pub use config::SketchConfig;
pub use dismiss::{OutsideClickDismissal, PointerListeners};
pub use document::Document;
pub use encoded::{EncodedImage, ImageFormat};
pub use error::{SketchError, SketchResult};
pub use export::ExportHandle;
pub use pad::SketchPad;
pub use palette::Palette;
pub use state::{BrushState, DrawMode, Popover, SketchSession};
pub use stroke::Stroke;
