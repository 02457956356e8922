use crate::document::Document;
use crate::stroke::StrokeRef;

/// Canvas edits that can be undone and redone
#[derive(Clone)]
pub enum Command {
    /// Appends a finished stroke
    AddStroke(StrokeRef),
    /// Removes every stroke. Holds what it removed so undo can put it back.
    ClearAll { removed: Vec<StrokeRef> },
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::AddStroke(stroke) => f
                .debug_struct("AddStroke")
                .field("points", &stroke.points().len())
                .field("width", &stroke.width())
                .field("kind", &stroke.kind())
                .finish(),
            Command::ClearAll { removed } => f
                .debug_struct("ClearAll")
                .field("removed", &removed.len())
                .finish(),
        }
    }
}

impl Command {
    /// Applies the command. `ClearAll` records the strokes it removes.
    pub fn execute(&mut self, document: &mut Document) {
        match self {
            Command::AddStroke(stroke) => document.add_stroke(stroke.clone()),
            Command::ClearAll { removed } => *removed = document.take_strokes(),
        }
    }

    pub fn undo(&self, document: &mut Document) {
        match self {
            Command::AddStroke(_) => {
                document.remove_last_stroke();
            }
            Command::ClearAll { removed } => document.restore_strokes(removed.clone()),
        }
    }
}
