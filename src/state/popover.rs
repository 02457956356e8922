/// The transient panels a toolbar button can open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Popover {
    /// Brush size slider with preview
    BrushSlider,
    /// Detailed custom color picker with Cancel / Ok
    ColorPicker,
}

impl Popover {
    pub const ALL: [Popover; 2] = [Popover::BrushSlider, Popover::ColorPicker];
}

/// Open flags for each popover.
///
/// The flags are independent: both popovers may be open at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopoverVisibility {
    pub brush_slider: bool,
    pub color_picker: bool,
}

impl PopoverVisibility {
    pub fn is_open(&self, popover: Popover) -> bool {
        match popover {
            Popover::BrushSlider => self.brush_slider,
            Popover::ColorPicker => self.color_picker,
        }
    }

    pub fn set(&mut self, popover: Popover, open: bool) {
        match popover {
            Popover::BrushSlider => self.brush_slider = open,
            Popover::ColorPicker => self.color_picker = open,
        }
    }

    pub fn toggle(&mut self, popover: Popover) {
        self.set(popover, !self.is_open(popover));
    }

    pub fn any_open(&self) -> bool {
        self.brush_slider || self.color_picker
    }

    pub fn open_popovers(&self) -> impl Iterator<Item = Popover> + '_ {
        Popover::ALL.into_iter().filter(|popover| self.is_open(*popover))
    }
}
