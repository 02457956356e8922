mod swatch;
mod tool_button;

pub use swatch::{ColorSwatch, SwatchShape};
pub use tool_button::ToolButton;
