mod brush;
mod popover;
mod session;

pub use brush::{BrushState, DrawMode, DEFAULT_RADIUS, MAX_RADIUS, MIN_RADIUS};
pub use popover::{Popover, PopoverVisibility};
pub use session::SketchSession;
