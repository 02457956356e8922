use super::Command;
use crate::document::Document;

/// Manages the history of executed commands for undo/redo functionality
#[derive(Debug, Default)]
pub struct CommandHistory {
    /// Stack of commands that can be undone
    undo_stack: Vec<Command>,
    /// Stack of commands that can be redone
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Execute a command and add it to the history
    pub fn execute(&mut self, mut command: Command, document: &mut Document) {
        command.execute(document);
        self.undo_stack.push(command);
        self.redo_stack.clear(); // Clear redo stack when new command is executed
    }

    /// Undo the last executed command. Returns false if there was nothing to undo.
    pub fn undo(&mut self, document: &mut Document) -> bool {
        let Some(command) = self.undo_stack.pop() else {
            return false;
        };
        command.undo(document);
        self.redo_stack.push(command);
        true
    }

    /// Redo the last undone command. Returns false if there was nothing to redo.
    pub fn redo(&mut self, document: &mut Document) -> bool {
        let Some(mut command) = self.redo_stack.pop() else {
            return false;
        };
        command.execute(document);
        self.undo_stack.push(command);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::{Stroke, StrokeKind};
    use egui::{Color32, Pos2};

    fn stroke_at(x: f32) -> Command {
        Command::AddStroke(Stroke::new_ref(
            Color32::RED,
            3.0,
            StrokeKind::Paint,
            vec![Pos2::new(x, 0.0), Pos2::new(x, 10.0)],
        ))
    }

    #[test]
    fn test_undo_redo_stroke() {
        let mut document = Document::new();
        let mut history = CommandHistory::new();

        history.execute(stroke_at(1.0), &mut document);
        history.execute(stroke_at(2.0), &mut document);
        assert_eq!(document.strokes().len(), 2);

        assert!(history.undo(&mut document));
        assert_eq!(document.strokes().len(), 1);
        assert!(history.can_redo());

        assert!(history.redo(&mut document));
        assert_eq!(document.strokes().len(), 2);
        assert!(!history.redo(&mut document));
    }

    #[test]
    fn test_new_command_clears_redo() {
        let mut document = Document::new();
        let mut history = CommandHistory::new();

        history.execute(stroke_at(1.0), &mut document);
        history.undo(&mut document);
        history.execute(stroke_at(2.0), &mut document);

        assert!(!history.can_redo());
        assert_eq!(document.strokes()[0].points()[0].x, 2.0);
    }

    #[test]
    fn test_clear_is_undoable() {
        let mut document = Document::new();
        let mut history = CommandHistory::new();

        history.execute(stroke_at(1.0), &mut document);
        history.execute(stroke_at(2.0), &mut document);
        history.execute(Command::ClearAll { removed: Vec::new() }, &mut document);
        assert!(document.is_empty());

        assert!(history.undo(&mut document));
        assert_eq!(document.strokes().len(), 2);

        assert!(history.redo(&mut document));
        assert!(document.is_empty());
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut document = Document::new();
        let mut history = CommandHistory::new();
        assert!(!history.undo(&mut document));
        assert!(!history.can_undo());
    }
}
