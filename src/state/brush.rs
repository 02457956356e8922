use crate::color::ColorValue;

/// Smallest brush radius the slider allows
pub const MIN_RADIUS: u32 = 2;
/// Largest brush radius the slider allows
pub const MAX_RADIUS: u32 = 70;
/// Radius a new session starts with
pub const DEFAULT_RADIUS: u32 = 5;

/// Whether the next stroke paints or erases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    Drawing,
    Erasing,
}

/// Style applied to the next stroke
#[derive(Debug, Clone, PartialEq)]
pub struct BrushState {
    pub color: ColorValue,
    radius: u32,
    pub erasing: bool,
}

impl BrushState {
    pub fn new(color: ColorValue) -> Self {
        Self {
            color,
            radius: DEFAULT_RADIUS,
            erasing: false,
        }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Stores `radius` clamped to `MIN_RADIUS..=MAX_RADIUS` and returns the stored value
    pub fn set_radius(&mut self, radius: u32) -> u32 {
        self.radius = radius.clamp(MIN_RADIUS, MAX_RADIUS);
        self.radius
    }

    pub fn mode(&self) -> DrawMode {
        if self.erasing {
            DrawMode::Erasing
        } else {
            DrawMode::Drawing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_clamps() {
        let mut brush = BrushState::new(ColorValue::new("#000000"));
        assert_eq!(brush.radius(), DEFAULT_RADIUS);

        assert_eq!(brush.set_radius(0), MIN_RADIUS);
        assert_eq!(brush.set_radius(500), MAX_RADIUS);
        for radius in MIN_RADIUS..=MAX_RADIUS {
            assert_eq!(brush.set_radius(radius), radius);
        }
    }

    #[test]
    fn test_mode_follows_flag() {
        let mut brush = BrushState::new(ColorValue::new("#000000"));
        assert_eq!(brush.mode(), DrawMode::Drawing);
        brush.erasing = true;
        assert_eq!(brush.mode(), DrawMode::Erasing);
    }
}
