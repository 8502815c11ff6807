//! A headless code editor kernel.
//!
//! This crate implements the storage and editing primitives a code editor's UI sits on
//! top of, with no dependency on any particular rendering, windowing, or text-shaping
//! library:
//!
//! - [`line_store`] — chunked, bidirectionally-iterable line storage with CR/LF/CRLF
//!   detection and mixed-ending preservation.
//! - [`position`] / [`caret`] — logical cursor positions, selections, and the
//!   insert-and-merge multi-caret set.
//! - [`edit_engine`] — applies one user command to every caret at once, as a single
//!   undoable step.
//! - [`modification`] / [`undo_journal`] — the records an edit leaves behind and the
//!   linear history that replays them.
//! - [`host`] — the sliver of font/renderer contract the engine itself needs (column ↔
//!   pixel-x conversion for vertical caret movement); everything else about rendering,
//!   windowing, and input is the embedding application's responsibility.
//!
//! Docking, tab management, and split layout live in the sibling `editor-core-dock` crate:
//! this crate only ever concerns itself with a single buffer's text and carets.

mod caret;
mod edit_engine;
mod error;
mod host;
mod line_ending;
mod line_store;
mod modification;
mod position;
mod undo_journal;

pub use caret::{Caret, CaretSet};
pub use edit_engine::{EditEngine, EditSession, Movement};
pub use error::EditorError;
pub use host::{LineMetrics, MonospaceMetrics};
pub use line_ending::{LineEnding, NewlineStyle};
pub use line_store::{Line, LineCursor, LineStore, Lines};
pub use modification::{ModificationKind, ModificationPack, ModificationRecord};
pub use position::Position;
pub use undo_journal::UndoJournal;

/// A single user-facing editing command, grouping the operations a key binding or menu
/// action would issue in one call.
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    /// Insert literal text at every caret (typing, paste, or IME commit).
    InsertText(String),
    /// Insert a single typed codepoint at every caret, honoring the insert/overwrite-mode
    /// distinction a plain [`EditCommand::InsertText`] always skips.
    InsertChar { c: char, insert_mode: bool },
    /// Backspace at every caret.
    DeleteBackward,
    /// Delete-forward at every caret.
    DeleteForward,
    /// Undo the last command.
    Undo,
    /// Redo the last undone command.
    Redo,
}

/// A caret-movement command: which direction, and whether to extend the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorCommand {
    /// The direction/target to move to.
    pub movement: Movement,
    /// Extend the existing selection instead of collapsing to a point.
    pub extend_selection: bool,
}

impl EditEngine {
    /// Dispatch an [`EditCommand`]. Returns `Err` only for [`EditCommand::Undo`]/
    /// [`EditCommand::Redo`] with nothing left to undo/redo respectively.
    pub fn apply_edit(&mut self, command: EditCommand) -> Result<(), EditorError> {
        match command {
            EditCommand::InsertText(text) => {
                self.insert_text(&text);
                Ok(())
            }
            EditCommand::InsertChar { c, insert_mode } => {
                self.insert_char(c, insert_mode);
                Ok(())
            }
            EditCommand::DeleteBackward => {
                self.delete_backward();
                Ok(())
            }
            EditCommand::DeleteForward => {
                self.delete_forward();
                Ok(())
            }
            EditCommand::Undo => self.undo(),
            EditCommand::Redo => self.redo(),
        }
    }

    /// Dispatch a [`CursorCommand`].
    pub fn apply_cursor(&mut self, command: CursorCommand, metrics: &dyn LineMetrics) {
        self.move_carets(command.movement, command.extend_selection, metrics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_dispatch_round_trips_through_undo() {
        let mut engine = EditEngine::from_text("hi\n");
        engine.set_carets([Caret::at(Position::new(0, 2))]);
        engine
            .apply_edit(EditCommand::InsertText("!".to_string()))
            .unwrap();
        assert_eq!(engine.text(), "hi!\n");
        engine.apply_edit(EditCommand::Undo).unwrap();
        assert_eq!(engine.text(), "hi\n");
        assert!(engine.apply_edit(EditCommand::Undo).is_err());
    }
}
