//! The multi-caret edit engine: applies a single user command to every caret at once and
//! records it as one undoable unit.
//!
//! A command with several carets active must apply to each of them as if they were typed
//! independently and simultaneously, but the [`crate::line_store::LineStore`] underneath
//! only understands one edit at a time. [`EditSession`] processes carets in ascending
//! position order and carries three running numbers forward — `dy` (line-count drift from
//! edits already applied), `dx` (column drift, valid only for carets still on the original
//! line an edit's tail touched) and `ly` (which original line that is) — so each
//! not-yet-processed caret's stored position is translated into where it now lives in the
//! buffer before its own edit runs.
//!
//! The C++ source guards against a modification being triggered while one is already in
//! progress with a debug-only reentrancy assertion. Here an [`EditSession`] holds the sole
//! `&mut EditEngine` borrow for its lifetime, so the borrow checker rules out calling back
//! into the engine mid-session at compile time; [`Drop`] flushes the accumulated
//! [`ModificationPack`] into the undo journal exactly once, including on an early return.

use crate::caret::{Caret, CaretSet};
use crate::error::{debug_assert_or_log, EditorError};
use crate::host::LineMetrics;
use crate::line_ending::NewlineStyle;
use crate::line_store::LineStore;
use crate::modification::{ModificationKind, ModificationPack, ModificationRecord};
use crate::position::Position;
use crate::undo_journal::UndoJournal;
use unicode_segmentation::UnicodeSegmentation;

/// A headless multi-caret text buffer: storage, caret set, and undo history together.
pub struct EditEngine {
    lines: LineStore,
    carets: CaretSet,
    newline_style: NewlineStyle,
    journal: UndoJournal,
}

impl Default for EditEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EditEngine {
    /// An empty document with a single point caret at the origin.
    pub fn new() -> Self {
        Self {
            lines: LineStore::new(),
            carets: CaretSet::single(Caret::at(Position::ORIGIN)),
            newline_style: NewlineStyle::default(),
            journal: UndoJournal::new(),
        }
    }

    /// Load a document from an already-decoded string, auto-detecting its dominant line
    /// ending for future inserted lines.
    pub fn from_text(text: &str) -> Self {
        let lines = LineStore::load_str(text);
        let newline_style = lines.detect_newline_style();
        Self {
            lines,
            carets: CaretSet::single(Caret::at(Position::ORIGIN)),
            newline_style,
            journal: UndoJournal::new(),
        }
    }

    /// Load a document from raw bytes (lossy UTF-8 repair, see
    /// [`LineStore::load_bytes`]).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let lines = LineStore::load_bytes(bytes);
        let newline_style = lines.detect_newline_style();
        Self {
            lines,
            carets: CaretSet::single(Caret::at(Position::ORIGIN)),
            newline_style,
            journal: UndoJournal::new(),
        }
    }

    /// The document's line storage.
    pub fn lines(&self) -> &LineStore {
        &self.lines
    }

    /// The current caret set.
    pub fn carets(&self) -> &CaretSet {
        &self.carets
    }

    /// The line ending newly split lines are given.
    pub fn newline_style(&self) -> NewlineStyle {
        self.newline_style
    }

    /// Override the line ending used for newly split lines.
    pub fn set_newline_style(&mut self, style: NewlineStyle) {
        self.newline_style = style;
    }

    /// The full document text.
    pub fn text(&self) -> String {
        self.lines.save_to_string()
    }

    /// The content of a single line, for a host that wants to render or measure one line
    /// without walking the whole document. A host asking for a line past the end of the
    /// document is a host bug, not a reachable user condition, so this follows the
    /// `OutOfRange` programmer-error policy.
    pub fn line_content(&self, line: usize) -> Result<&str, EditorError> {
        match self.lines.line_at(line) {
            Ok(l) => Ok(l.content.as_str()),
            Err(err) => debug_assert_or_log!(err),
        }
    }

    /// Add a caret, merging it into the existing set per [`CaretSet::insert`].
    pub fn add_caret(&mut self, caret: Caret) {
        self.carets.insert(caret);
    }

    /// Replace the entire caret set.
    pub fn set_carets(&mut self, carets: impl IntoIterator<Item = Caret>) {
        self.carets.replace_all(carets);
    }

    /// Open a scope that accumulates edits into a single undo step. Most callers should
    /// use [`Self::insert_text`]/[`Self::delete_backward`]/[`Self::delete_forward`]
    /// instead; this is for a caller that needs several distinct edits (e.g. auto-indent
    /// following a newline) to undo together as one command.
    pub fn begin_edit(&mut self) -> EditSession<'_> {
        EditSession::new(self)
    }

    /// Insert `text` at every caret, replacing each caret's selection first if it has one.
    pub fn insert_text(&mut self, text: &str) {
        self.begin_edit().insert_text(text);
    }

    /// Insert a single codepoint at every caret, honoring `insert_mode`'s insert/overwrite
    /// distinction (see [`EditSession::insert_char`]).
    pub fn insert_char(&mut self, c: char, insert_mode: bool) {
        self.begin_edit().insert_char(c, insert_mode);
    }

    /// Delete each caret's selection, or the codepoint before it if it has none.
    pub fn delete_backward(&mut self) {
        self.begin_edit().delete_backward();
    }

    /// Delete each caret's selection, or the codepoint after it if it has none.
    pub fn delete_forward(&mut self) {
        self.begin_edit().delete_forward();
    }

    /// `true` if there is a command to undo.
    pub fn can_undo(&self) -> bool {
        self.journal.can_undo()
    }

    /// `true` if there is a command to redo.
    pub fn can_redo(&self) -> bool {
        self.journal.can_redo()
    }

    /// Undo the most recently applied (and not-yet-undone) command.
    pub fn undo(&mut self) -> Result<(), EditorError> {
        let records = self
            .journal
            .undo()
            .ok_or(EditorError::InvalidState("no more undo history"))?
            .undo_records();
        self.replay(&records);
        Ok(())
    }

    /// Redo the most recently undone command.
    pub fn redo(&mut self) -> Result<(), EditorError> {
        let records = self
            .journal
            .redo()
            .ok_or(EditorError::InvalidState("no more redo history"))?
            .records
            .clone();
        self.replay(&records);
        Ok(())
    }

    /// Undo if possible, reporting whether it happened. For a caller (e.g. a menu item's
    /// enabled state) that only wants a yes/no and has no interest in the edge-of-history
    /// error.
    pub fn try_undo(&mut self) -> bool {
        self.undo().is_ok()
    }

    /// Redo if possible, reporting whether it happened.
    pub fn try_redo(&mut self) -> bool {
        self.redo().is_ok()
    }

    /// Cap the undo journal to the `max_history` most recent commands, evicting older ones
    /// as new commands are recorded. Uncapped (`usize::MAX`) by default.
    pub fn set_max_history(&mut self, max_history: usize) {
        self.journal.set_max_history(max_history);
    }

    fn replay(&mut self, records: &[ModificationRecord]) {
        let mut new_carets = Vec::with_capacity(records.len());
        for record in records {
            match &record.kind {
                ModificationKind::Insert { position, text } => {
                    self.lines
                        .insert_text(*position, text, self.newline_style)
                        .expect("a recorded edit always replays against a consistent buffer");
                }
                ModificationKind::Delete { position, text } => {
                    let end = end_position_after(*position, text);
                    self.lines
                        .delete_range(*position, end)
                        .expect("a recorded edit always replays against a consistent buffer");
                }
            }
            new_carets.push(record.caret_after);
        }
        self.carets.replace_all(new_carets);
    }

    /// Move every caret per `movement`, extending or collapsing each caret's selection.
    pub fn move_carets(&mut self, movement: Movement, extend_selection: bool, metrics: &dyn LineMetrics) {
        let originals: Vec<Caret> = self.carets.carets().to_vec();
        let mut new_carets = Vec::with_capacity(originals.len());
        for caret in originals {
            new_carets.push(self.move_one(caret, movement, extend_selection, metrics));
        }
        self.carets.replace_all(new_carets);
    }

    fn move_one(&self, caret: Caret, movement: Movement, extend: bool, metrics: &dyn LineMetrics) -> Caret {
        let (new_active, baseline) = match movement {
            Movement::Left => {
                if !extend && !caret.is_point() {
                    (caret.selection().0, None)
                } else {
                    (self.prev_position(caret.active), None)
                }
            }
            Movement::Right => {
                if !extend && !caret.is_point() {
                    (caret.selection().1, None)
                } else {
                    (self.next_position(caret.active), None)
                }
            }
            Movement::WordLeft => (self.word_boundary_left(caret.active), None),
            Movement::WordRight => (self.word_boundary_right(caret.active), None),
            Movement::Home => (Position::new(caret.active.line, 0), None),
            Movement::End => {
                let len = self.line_char_len(caret.active.line);
                (Position::new(caret.active.line, len), None)
            }
            Movement::DocumentStart => (Position::ORIGIN, None),
            Movement::DocumentEnd => {
                let last = self.lines.num_lines().saturating_sub(1);
                (Position::new(last, self.line_char_len(last)), None)
            }
            Movement::Up | Movement::Down => {
                let x = caret.baseline.unwrap_or_else(|| {
                    let content = self
                        .lines
                        .line_at(caret.active.line)
                        .map(|l| l.content.as_str())
                        .unwrap_or("");
                    metrics.pixel_x_for_column(content, caret.active.column)
                });
                let target_line = match movement {
                    Movement::Up => caret.active.line.checked_sub(1),
                    Movement::Down => {
                        let next = caret.active.line + 1;
                        (next < self.lines.num_lines()).then_some(next)
                    }
                    _ => unreachable!(),
                };
                match target_line {
                    Some(line) => {
                        let content = self
                            .lines
                            .line_at(line)
                            .map(|l| l.content.clone())
                            .unwrap_or_default();
                        let column = metrics.column_for_pixel_x(&content, x);
                        (Position::new(line, column), Some(x))
                    }
                    None => (caret.active, Some(x)),
                }
            }
        };
        let anchor = if extend { caret.anchor } else { new_active };
        Caret {
            active: new_active,
            anchor,
            baseline,
        }
    }

    fn line_char_len(&self, line: usize) -> usize {
        self.lines.line_at(line).map(|l| l.char_len()).unwrap_or(0)
    }

    /// Codepoint-column offsets of every Unicode word boundary in `content`, including 0
    /// and the line's full length.
    fn word_boundaries(content: &str) -> Vec<usize> {
        let mut bounds = vec![0usize];
        let mut column = 0usize;
        for piece in content.split_word_bounds() {
            column += piece.chars().count();
            bounds.push(column);
        }
        bounds
    }

    fn word_boundary_left(&self, pos: Position) -> Position {
        let content = self
            .lines
            .line_at(pos.line)
            .map(|l| l.content.as_str())
            .unwrap_or("");
        let bounds = Self::word_boundaries(content);
        match bounds.into_iter().rev().find(|&b| b < pos.column) {
            Some(prev) => Position::new(pos.line, prev),
            None if pos.line > 0 => Position::new(pos.line - 1, self.line_char_len(pos.line - 1)),
            None => Position::new(pos.line, 0),
        }
    }

    fn word_boundary_right(&self, pos: Position) -> Position {
        let content = self
            .lines
            .line_at(pos.line)
            .map(|l| l.content.as_str())
            .unwrap_or("");
        let bounds = Self::word_boundaries(content);
        match bounds.into_iter().find(|&b| b > pos.column) {
            Some(next) => Position::new(pos.line, next),
            None if pos.line + 1 < self.lines.num_lines() => Position::new(pos.line + 1, 0),
            None => Position::new(pos.line, self.line_char_len(pos.line)),
        }
    }

    fn prev_position(&self, pos: Position) -> Position {
        if pos.column > 0 {
            Position::new(pos.line, pos.column - 1)
        } else if pos.line > 0 {
            Position::new(pos.line - 1, self.line_char_len(pos.line - 1))
        } else {
            pos
        }
    }

    fn next_position(&self, pos: Position) -> Position {
        let len = self.line_char_len(pos.line);
        if pos.column < len {
            Position::new(pos.line, pos.column + 1)
        } else if pos.line + 1 < self.lines.num_lines() {
            Position::new(pos.line + 1, 0)
        } else {
            pos
        }
    }
}

/// A cursor movement request, independent of any particular key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// One codepoint left, or to the selection start if collapsing a selection.
    Left,
    /// One codepoint right, or to the selection end if collapsing a selection.
    Right,
    /// To the start of the previous word, crossing a line boundary if already at the
    /// start of the current line.
    WordLeft,
    /// To the start of the next word, crossing a line boundary if already at the end of
    /// the current line.
    WordRight,
    /// One visual line up, preserving the caret's horizontal baseline.
    Up,
    /// One visual line down, preserving the caret's horizontal baseline.
    Down,
    /// Start of the current line.
    Home,
    /// End of the current line.
    End,
    /// Start of the document.
    DocumentStart,
    /// End of the document.
    DocumentEnd,
}

/// Translate an original caret-recorded position through the line/column drift
/// accumulated by earlier carets' edits within the same session.
fn fixup(pos: Position, dy: isize, dx: isize, ly: Option<usize>) -> Position {
    let line = (pos.line as isize + dy).max(0) as usize;
    let column = if ly == Some(pos.line) {
        (pos.column as isize + dx).max(0) as usize
    } else {
        pos.column
    };
    Position::new(line, column)
}

/// The position after hypothetically inserting `text` at `pos` — used to recompute a
/// [`ModificationKind::Delete`] record's end bound on replay, since only the start
/// position and the deleted text itself are stored.
fn end_position_after(pos: Position, text: &str) -> Position {
    let mut lines_added = 0usize;
    let mut tail_len = 0usize;
    let mut pending_cr = false;
    for c in text.chars() {
        if pending_cr {
            pending_cr = false;
            if c == '\n' {
                lines_added += 1;
                tail_len = 0;
                continue;
            }
            lines_added += 1;
            tail_len = 0;
        }
        match c {
            '\r' => pending_cr = true,
            '\n' => {
                lines_added += 1;
                tail_len = 0;
            }
            _ => tail_len += 1,
        }
    }
    if pending_cr {
        lines_added += 1;
        tail_len = 0;
    }
    if lines_added == 0 {
        Position::new(pos.line, pos.column + tail_len)
    } else {
        Position::new(pos.line + lines_added, tail_len)
    }
}

/// A scope accumulating one or more sub-edits into a single undoable [`ModificationPack`].
pub struct EditSession<'a> {
    engine: &'a mut EditEngine,
    pack: ModificationPack,
}

impl<'a> EditSession<'a> {
    fn new(engine: &'a mut EditEngine) -> Self {
        Self {
            engine,
            pack: ModificationPack::new(),
        }
    }

    /// Insert `text` at every caret, replacing each caret's selection first if it has one.
    pub fn insert_text(&mut self, text: &str) {
        let originals: Vec<Caret> = self.engine.carets.carets().to_vec();
        let mut dy: isize = 0;
        let mut dx: isize = 0;
        let mut ly: Option<usize> = None;
        let mut new_carets = Vec::with_capacity(originals.len());

        for caret in originals {
            let caret_before = Caret {
                active: fixup(caret.active, dy, dx, ly),
                anchor: fixup(caret.anchor, dy, dx, ly),
                baseline: caret.baseline,
            };
            let (min, max) = caret_before.selection();

            let mut point = min;
            if min != max {
                let deleted = self
                    .engine
                    .lines
                    .delete_range(min, max)
                    .expect("a caret's own selection is always a valid range");
                self.pack.records.push(ModificationRecord {
                    kind: ModificationKind::Delete {
                        position: min,
                        text: deleted,
                    },
                    caret_before,
                    caret_after: Caret::at(min),
                });
                point = min;
            }

            let end = if text.is_empty() {
                point
            } else {
                let end = self
                    .engine
                    .lines
                    .insert_text(point, text, self.engine.newline_style)
                    .expect("a caret's own position is always valid");
                self.pack.records.push(ModificationRecord {
                    kind: ModificationKind::Insert {
                        position: point,
                        text: text.to_string(),
                    },
                    caret_before: Caret::at(point),
                    caret_after: Caret::at(end),
                });
                end
            };

            let orig_tail_line = caret.selection().1.line;
            if ly == Some(orig_tail_line) {
                dx += end.column as isize - max.column as isize;
            } else {
                dx = end.column as isize - max.column as isize;
                ly = Some(orig_tail_line);
            }
            dy += end.line as isize - max.line as isize;

            new_carets.push(Caret::at(end));
        }

        self.engine.carets.replace_all(new_carets);
    }

    /// Insert a single codepoint at every caret. A newline always splits the current line.
    /// Otherwise, a selection, `insert_mode`, or the caret already sitting at the line's end
    /// all insert plainly; failing those, overwrite-mode mid-line replaces the codepoint
    /// under the caret instead, recording its removal as a paired deletion.
    pub fn insert_char(&mut self, c: char, insert_mode: bool) {
        let originals: Vec<Caret> = self.engine.carets.carets().to_vec();
        let mut dy: isize = 0;
        let mut dx: isize = 0;
        let mut ly: Option<usize> = None;
        let mut new_carets = Vec::with_capacity(originals.len());
        let mut buf = [0u8; 4];
        let s: &str = c.encode_utf8(&mut buf);

        for caret in originals {
            let caret_before = Caret {
                active: fixup(caret.active, dy, dx, ly),
                anchor: fixup(caret.anchor, dy, dx, ly),
                baseline: caret.baseline,
            };
            let (min, max) = caret_before.selection();
            let had_selection = min != max;

            let mut point = min;
            if had_selection {
                let deleted = self
                    .engine
                    .lines
                    .delete_range(min, max)
                    .expect("a caret's own selection is always a valid range");
                self.pack.records.push(ModificationRecord {
                    kind: ModificationKind::Delete {
                        position: min,
                        text: deleted,
                    },
                    caret_before,
                    caret_after: Caret::at(min),
                });
                point = min;
            }

            let line_len = self
                .engine
                .lines
                .line_at(point.line)
                .map(|l| l.char_len())
                .unwrap_or(0);
            let overwrite = c != '\n' && !insert_mode && !had_selection && point.column < line_len;

            if overwrite {
                let replace_end = Position::new(point.line, point.column + 1);
                let replaced = self
                    .engine
                    .lines
                    .delete_range(point, replace_end)
                    .expect("column is within the current line's length, checked above");
                self.pack.records.push(ModificationRecord {
                    kind: ModificationKind::Delete {
                        position: point,
                        text: replaced,
                    },
                    caret_before: Caret::at(point),
                    caret_after: Caret::at(point),
                });
            }

            let end = self
                .engine
                .lines
                .insert_text(point, s, self.engine.newline_style)
                .expect("a caret's own position is always valid");
            self.pack.records.push(ModificationRecord {
                kind: ModificationKind::Insert {
                    position: point,
                    text: s.to_string(),
                },
                caret_before: Caret::at(point),
                caret_after: Caret::at(end),
            });

            let orig_tail_line = caret.selection().1.line;
            if ly == Some(orig_tail_line) {
                dx += end.column as isize - max.column as isize;
            } else {
                dx = end.column as isize - max.column as isize;
                ly = Some(orig_tail_line);
            }
            dy += end.line as isize - max.line as isize;

            new_carets.push(Caret::at(end));
        }

        self.engine.carets.replace_all(new_carets);
    }

    /// Delete each caret's selection, or the codepoint before it if it has none (merging
    /// into the previous line at column 0).
    pub fn delete_backward(&mut self) {
        let originals: Vec<Caret> = self.engine.carets.carets().to_vec();
        let mut dy: isize = 0;
        let mut dx: isize = 0;
        let mut ly: Option<usize> = None;
        let mut new_carets = Vec::with_capacity(originals.len());

        for caret in originals {
            let caret_before = Caret {
                active: fixup(caret.active, dy, dx, ly),
                anchor: fixup(caret.anchor, dy, dx, ly),
                baseline: caret.baseline,
            };
            let (min, max) = caret_before.selection();
            let (d_min, d_max) = if min != max {
                (min, max)
            } else {
                (self.engine.prev_position(caret_before.active), caret_before.active)
            };
            let orig_tail_line = caret.selection().1.line;

            if d_min == d_max {
                new_carets.push(caret_before);
                if ly != Some(orig_tail_line) {
                    dx = 0;
                    ly = Some(orig_tail_line);
                }
                continue;
            }

            let deleted = self
                .engine
                .lines
                .delete_range(d_min, d_max)
                .expect("computed from the live buffer, always in range");
            self.pack.records.push(ModificationRecord {
                kind: ModificationKind::Delete {
                    position: d_min,
                    text: deleted,
                },
                caret_before,
                caret_after: Caret::at(d_min),
            });

            if ly == Some(orig_tail_line) {
                dx += d_min.column as isize - d_max.column as isize;
            } else {
                dx = d_min.column as isize - d_max.column as isize;
                ly = Some(orig_tail_line);
            }
            dy += d_min.line as isize - d_max.line as isize;

            new_carets.push(Caret::at(d_min));
        }

        self.engine.carets.replace_all(new_carets);
    }

    /// Delete each caret's selection, or the codepoint after it if it has none (merging
    /// the next line up when deleting the terminator at end-of-line).
    pub fn delete_forward(&mut self) {
        let originals: Vec<Caret> = self.engine.carets.carets().to_vec();
        let mut dy: isize = 0;
        let mut dx: isize = 0;
        let mut ly: Option<usize> = None;
        let mut new_carets = Vec::with_capacity(originals.len());

        for caret in originals {
            let caret_before = Caret {
                active: fixup(caret.active, dy, dx, ly),
                anchor: fixup(caret.anchor, dy, dx, ly),
                baseline: caret.baseline,
            };
            let (min, max) = caret_before.selection();

            let (d_min, d_max, orig_tail_line) = if min != max {
                (min, max, caret.selection().1.line)
            } else {
                let after = self.engine.next_position(caret_before.active);
                if after.line > caret_before.active.line {
                    // Deleting the line terminator itself: the content that gets pulled up
                    // belongs to the *next* original line, not this caret's own line.
                    (caret_before.active, after, caret.active.line + 1)
                } else {
                    (caret_before.active, after, caret.selection().1.line)
                }
            };

            if d_min == d_max {
                new_carets.push(caret_before);
                if ly != Some(orig_tail_line) {
                    dx = 0;
                    ly = Some(orig_tail_line);
                }
                continue;
            }

            let deleted = self
                .engine
                .lines
                .delete_range(d_min, d_max)
                .expect("computed from the live buffer, always in range");
            self.pack.records.push(ModificationRecord {
                kind: ModificationKind::Delete {
                    position: d_min,
                    text: deleted,
                },
                caret_before,
                caret_after: Caret::at(d_min),
            });

            if ly == Some(orig_tail_line) {
                dx += d_min.column as isize - d_max.column as isize;
            } else {
                dx = d_min.column as isize - d_max.column as isize;
                ly = Some(orig_tail_line);
            }
            dy += d_min.line as isize - d_max.line as isize;

            new_carets.push(Caret::at(d_min));
        }

        self.engine.carets.replace_all(new_carets);
    }
}

impl<'a> Drop for EditSession<'a> {
    fn drop(&mut self) {
        if !self.pack.is_empty() {
            let pack = std::mem::take(&mut self.pack);
            self.engine.journal.push(pack);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MonospaceMetrics;

    fn pos(line: usize, column: usize) -> Position {
        Position::new(line, column)
    }

    #[test]
    fn single_caret_insert_and_undo() {
        let mut engine = EditEngine::from_text("hello\n");
        engine.set_carets([Caret::at(pos(0, 5))]);
        engine.insert_text(" world");
        assert_eq!(engine.text(), "hello world\n");
        assert_eq!(engine.carets().carets()[0].active, pos(0, 11));

        engine.undo().unwrap();
        assert_eq!(engine.text(), "hello\n");
        assert_eq!(engine.carets().carets()[0].active, pos(0, 5));

        engine.redo().unwrap();
        assert_eq!(engine.text(), "hello world\n");
    }

    #[test]
    fn insert_char_overwrite_mode_replaces_the_codepoint_under_the_caret() {
        let mut engine = EditEngine::from_text("abcdef\n");
        engine.set_carets([Caret::at(pos(0, 2))]);
        engine.insert_char('X', false);
        assert_eq!(engine.text(), "abXdef\n");
        assert_eq!(engine.carets().carets()[0].active, pos(0, 3));

        engine.undo().unwrap();
        assert_eq!(engine.text(), "abcdef\n");
        assert_eq!(engine.carets().carets()[0].active, pos(0, 2));
    }

    #[test]
    fn insert_char_insert_mode_shifts_rather_than_replaces() {
        let mut engine = EditEngine::from_text("abcdef\n");
        engine.set_carets([Caret::at(pos(0, 2))]);
        engine.insert_char('X', true);
        assert_eq!(engine.text(), "abXcdef\n");
        assert_eq!(engine.carets().carets()[0].active, pos(0, 3));
    }

    #[test]
    fn insert_char_overwrite_mode_at_line_end_still_inserts() {
        let mut engine = EditEngine::from_text("abc\n");
        engine.set_carets([Caret::at(pos(0, 3))]);
        engine.insert_char('X', false);
        assert_eq!(engine.text(), "abcX\n");
    }

    #[test]
    fn insert_char_newline_splits_even_in_overwrite_mode() {
        let mut engine = EditEngine::from_text("abcdef\n");
        engine.set_carets([Caret::at(pos(0, 3))]);
        engine.insert_char('\n', false);
        assert_eq!(engine.text(), "abc\ndef\n");
        assert_eq!(engine.carets().carets()[0].active, pos(1, 0));
    }

    #[test]
    fn two_carets_same_line_type_independently() {
        // Concrete scenario from the spec: carets after "a" and after "b" in "abc", both
        // type "X" in one command, yielding "aXbXc" with each caret advancing by one.
        let mut engine = EditEngine::from_text("abc\n");
        engine.set_carets([Caret::at(pos(0, 1)), Caret::at(pos(0, 2))]);
        engine.insert_text("X");
        assert_eq!(engine.text(), "aXbXc\n");
        let carets = engine.carets().carets();
        assert_eq!(carets[0].active, pos(0, 2));
        assert_eq!(carets[1].active, pos(0, 4));
    }

    #[test]
    fn multi_caret_typing_undoes_as_one_command() {
        let mut engine = EditEngine::from_text("abc\n");
        engine.set_carets([Caret::at(pos(0, 0)), Caret::at(pos(0, 3))]);
        engine.insert_text("!");
        assert_eq!(engine.text(), "!abc!\n");
        engine.undo().unwrap();
        assert_eq!(engine.text(), "abc\n");
        assert!(!engine.can_undo());
    }

    #[test]
    fn backspace_merges_lines() {
        let mut engine = EditEngine::from_text("foo\nbar\n");
        engine.set_carets([Caret::at(pos(1, 0))]);
        engine.delete_backward();
        assert_eq!(engine.text(), "foobar\n");
        assert_eq!(engine.carets().carets()[0].active, pos(0, 3));
    }

    #[test]
    fn delete_forward_merges_lines_and_shifts_later_caret() {
        // First caret sits at the end of "foo" and deletes the line break, merging "bar"
        // up; the second caret, originally just after "b" in "bar", must land on the same
        // logical spot in the merged line and then delete the "a" immediately after it.
        let mut engine = EditEngine::from_text("foo\nbar\n");
        engine.set_carets([Caret::at(pos(0, 3)), Caret::at(pos(1, 1))]);
        engine.delete_forward();
        assert_eq!(engine.text(), "foobr\n");
        let carets = engine.carets().carets();
        assert_eq!(carets[0].active, pos(0, 3));
        assert_eq!(carets[1].active, pos(0, 4));
    }

    #[test]
    fn selection_replace_shifts_trailing_caret() {
        let mut engine = EditEngine::from_text("aXXXb c\n");
        engine.set_carets([
            Caret {
                active: pos(0, 1),
                anchor: pos(0, 4),
                baseline: None,
            },
            Caret::at(pos(0, 7)),
        ]);
        engine.insert_text("Y");
        assert_eq!(engine.text(), "aYb c\n");
        let carets = engine.carets().carets();
        assert_eq!(carets[1].active, pos(0, 5));
    }

    #[test]
    fn movement_left_right_respects_selection_collapse() {
        let mut engine = EditEngine::from_text("hello\n");
        let metrics = MonospaceMetrics { advance: 8.0 };
        engine.set_carets([Caret {
            active: pos(0, 1),
            anchor: pos(0, 4),
            baseline: None,
        }]);
        engine.move_carets(Movement::Left, false, &metrics);
        assert_eq!(engine.carets().carets()[0].active, pos(0, 1));
        assert!(engine.carets().carets()[0].is_point());
    }

    #[test]
    fn movement_up_down_preserves_baseline_across_short_line() {
        let mut engine = EditEngine::from_text("hello\nhi\nworld\n");
        let metrics = MonospaceMetrics { advance: 8.0 };
        engine.set_carets([Caret::at(pos(0, 4))]);
        engine.move_carets(Movement::Down, false, &metrics);
        let after_first = engine.carets().carets()[0];
        assert_eq!(after_first.active, pos(1, 2)); // "hi" clamps the column
        engine.move_carets(Movement::Down, false, &metrics);
        assert_eq!(engine.carets().carets()[0].active, pos(2, 4)); // baseline restored
    }

    #[test]
    fn line_content_reads_in_range_lines() {
        let engine = EditEngine::from_text("only one line\n");
        assert_eq!(engine.line_content(0).unwrap(), "only one line");
    }

    #[test]
    #[should_panic(expected = "programmer error")]
    fn line_content_panics_out_of_range_in_debug() {
        let engine = EditEngine::from_text("only one line\n");
        let _ = engine.line_content(5);
    }

    #[test]
    fn word_movement_skips_whole_words() {
        let mut engine = EditEngine::from_text("foo bar-baz qux\n");
        let metrics = MonospaceMetrics { advance: 8.0 };
        engine.set_carets([Caret::at(pos(0, 0))]);
        engine.move_carets(Movement::WordRight, false, &metrics);
        assert_eq!(engine.carets().carets()[0].active, pos(0, 3));
        engine.move_carets(Movement::WordRight, false, &metrics);
        assert_eq!(engine.carets().carets()[0].active, pos(0, 4));
        engine.move_carets(Movement::WordLeft, false, &metrics);
        assert_eq!(engine.carets().carets()[0].active, pos(0, 3));
    }

    #[test]
    fn redo_tail_is_discarded_by_a_new_edit() {
        let mut engine = EditEngine::from_text("ab\n");
        engine.set_carets([Caret::at(pos(0, 2))]);
        engine.insert_text("1");
        engine.undo().unwrap();
        engine.insert_text("2");
        assert_eq!(engine.text(), "ab2\n");
        assert!(!engine.can_redo());
    }

    #[test]
    fn try_undo_and_try_redo_report_whether_they_happened() {
        let mut engine = EditEngine::from_text("ab\n");
        engine.set_carets([Caret::at(pos(0, 2))]);
        assert!(!engine.try_undo());

        engine.insert_text("1");
        assert!(engine.try_undo());
        assert_eq!(engine.text(), "ab\n");
        assert!(engine.try_redo());
        assert_eq!(engine.text(), "ab1\n");
        assert!(!engine.try_redo());
    }

    #[test]
    fn max_history_bounds_how_far_back_undo_can_reach() {
        let mut engine = EditEngine::from_text("\n");
        engine.set_max_history(1);
        engine.set_carets([Caret::at(pos(0, 0))]);
        engine.insert_text("a");
        engine.insert_text("b");
        assert_eq!(engine.text(), "ab\n");

        assert!(engine.try_undo());
        assert_eq!(engine.text(), "a\n");
        assert!(!engine.try_undo());
    }
}
