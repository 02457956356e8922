mod canvas_panel;
mod popovers;
mod status_strip;
mod toolbar;

pub use canvas_panel::canvas_panel;
pub use popovers::{brush_slider_popover, color_picker_popover};
pub use status_strip::status_strip;
pub use toolbar::{ToolbarAnchors, toolbar};
