use crate::stroke::StrokeRef;

/// Finished strokes, oldest first
#[derive(Debug, Clone, Default)]
pub struct Document {
    strokes: Vec<StrokeRef>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    pub fn add_stroke(&mut self, stroke: StrokeRef) {
        self.strokes.push(stroke);
    }

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    pub fn remove_last_stroke(&mut self) -> Option<StrokeRef> {
        self.strokes.pop()
    }

    /// Removes every stroke and hands them back
    pub fn take_strokes(&mut self) -> Vec<StrokeRef> {
        std::mem::take(&mut self.strokes)
    }

    pub fn restore_strokes(&mut self, strokes: Vec<StrokeRef>) {
        self.strokes = strokes;
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
