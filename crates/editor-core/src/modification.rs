//! Undo/redo records: what a single sub-edit did, and how a user-visible command groups
//! them.

use crate::caret::Caret;
use crate::position::Position;

/// What happened to the document text in one sub-edit (one caret's contribution to a
/// single user command).
#[derive(Debug, Clone, PartialEq)]
pub enum ModificationKind {
    /// Text was inserted at `position`.
    Insert {
        /// Where the insertion began.
        position: Position,
        /// The inserted text, needed to undo (delete it again) without re-deriving it.
        text: String,
    },
    /// Text was deleted starting at `position`.
    Delete {
        /// Where the deleted span began.
        position: Position,
        /// The deleted text, needed to undo (re-insert it) without re-deriving it.
        text: String,
    },
}

/// One sub-edit plus the owning caret's state immediately before and after it.
///
/// The before/after caret is replayed rather than recomputed on undo/redo: recomputing
/// would require re-running the same position-fixup arithmetic the Edit Engine already
/// did once, for no benefit, and would duplicate that logic in two places.
#[derive(Debug, Clone, PartialEq)]
pub struct ModificationRecord {
    /// The edit itself.
    pub kind: ModificationKind,
    /// The owning caret's state before this sub-edit (restored on undo).
    pub caret_before: Caret,
    /// The owning caret's state after this sub-edit (restored on redo).
    pub caret_after: Caret,
}

impl ModificationRecord {
    /// The inverse of this record: undoing an insert is a delete of the same text at the
    /// same position, and vice versa. Caret before/after swap accordingly.
    pub fn inverse(&self) -> ModificationRecord {
        let kind = match &self.kind {
            ModificationKind::Insert { position, text } => ModificationKind::Delete {
                position: *position,
                text: text.clone(),
            },
            ModificationKind::Delete { position, text } => ModificationKind::Insert {
                position: *position,
                text: text.clone(),
            },
        };
        ModificationRecord {
            kind,
            caret_before: self.caret_after,
            caret_after: self.caret_before,
        }
    }
}

/// A group of [`ModificationRecord`]s produced by a single user command (e.g. typing one
/// character with three carets active produces a pack of three insert records, replayed
/// together on undo/redo).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModificationPack {
    /// Sub-edits in the order they were originally applied.
    pub records: Vec<ModificationRecord>,
}

impl ModificationPack {
    /// An empty pack, ready to accumulate records from one command.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if no sub-edits were recorded (a command that turned out to be a no-op,
    /// e.g. backspace at the document start with a single point caret).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records to replay for an undo of this pack, in reverse application order and
    /// inverted so each becomes its own undo.
    pub fn undo_records(&self) -> Vec<ModificationRecord> {
        self.records.iter().rev().map(|r| r.inverse()).collect()
    }
}
