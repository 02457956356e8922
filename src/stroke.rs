use egui::{Color32, Pos2};
use std::sync::Arc;

/// What a finished stroke does to the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeKind {
    /// Paints with its own color
    Paint,
    /// Paints with whatever the canvas background is when drawn
    Erase,
}

// Immutable stroke for sharing
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
    kind: StrokeKind,
}

// Mutable stroke for editing
#[derive(Debug, Clone)]
pub struct MutableStroke {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
    kind: StrokeKind,
}

// Define a reference-counted type alias for Stroke
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    /// Points are in canvas coordinates, with the origin at the canvas' top left
    pub fn new(color: Color32, width: f32, kind: StrokeKind, points: Vec<Pos2>) -> Self {
        Self {
            points,
            color,
            width,
            kind,
        }
    }

    pub fn new_ref(color: Color32, width: f32, kind: StrokeKind, points: Vec<Pos2>) -> StrokeRef {
        Arc::new(Self::new(color, width, kind, points))
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn kind(&self) -> StrokeKind {
        self.kind
    }

    pub fn is_eraser(&self) -> bool {
        self.kind == StrokeKind::Erase
    }

    /// Color the stroke shows with on a canvas filled with `background`
    pub fn paint_color(&self, background: Color32) -> Color32 {
        match self.kind {
            StrokeKind::Paint => self.color,
            StrokeKind::Erase => background,
        }
    }
}

impl MutableStroke {
    pub fn new(color: Color32, width: f32, kind: StrokeKind) -> Self {
        Self {
            points: Vec::new(),
            color,
            width,
            kind,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        // Pointer jitter repeats the last position while the mouse is still
        if self.points.last() != Some(&point) {
            self.points.push(point);
        }
    }

    pub fn to_stroke(&self) -> Stroke {
        Stroke::new(self.color, self.width, self.kind, self.points.clone())
    }

    pub fn to_stroke_ref(&self) -> StrokeRef {
        Arc::new(self.to_stroke())
    }

    // Get a reference to the points for preview
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutable_stroke_skips_repeated_points() {
        let mut stroke = MutableStroke::new(Color32::RED, 4.0, StrokeKind::Paint);
        stroke.add_point(Pos2::new(1.0, 1.0));
        stroke.add_point(Pos2::new(1.0, 1.0));
        stroke.add_point(Pos2::new(2.0, 1.0));
        assert_eq!(stroke.points().len(), 2);

        let finished = stroke.to_stroke();
        assert_eq!(finished.width(), 4.0);
        assert!(!finished.is_eraser());
    }

    #[test]
    fn test_eraser_paints_background() {
        let eraser = Stroke::new(Color32::RED, 4.0, StrokeKind::Erase, vec![Pos2::ZERO]);
        assert_eq!(eraser.paint_color(Color32::WHITE), Color32::WHITE);

        let brush = Stroke::new(Color32::RED, 4.0, StrokeKind::Paint, vec![Pos2::ZERO]);
        assert_eq!(brush.paint_color(Color32::WHITE), Color32::RED);
    }
}
