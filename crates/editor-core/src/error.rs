//! Error taxonomy.
//!
//! Four kinds, matching the source's error model one-for-one:
//! - [`EditorError::OutOfRange`] / [`EditorError::InvalidState`] are programmer errors.
//!   In debug builds they additionally panic via [`debug_assert_or_log`] so bugs surface in
//!   CI; in release builds they are logged and returned as an `Err` (log-and-continue).
//! - [`EditorError::Io`] is returned to the caller unconditionally.
//! - Malformed UTF-8 on load is *not* one of these: it is silently repaired (lossy
//!   replacement) with a `log::warn!`, per spec — see [`crate::line_store::LineStore::load_bytes`].

use thiserror::Error;

/// Errors produced by the editor core's public API.
#[derive(Debug, Error)]
pub enum EditorError {
    /// An invalid line or column index was passed by the caller.
    #[error("position out of range: line {line}, column {column:?}")]
    OutOfRange {
        /// The offending line index.
        line: usize,
        /// The offending column, if the line index itself was in range.
        column: Option<usize>,
    },
    /// An operation was attempted in a state that forbids it (a second concurrent edit
    /// session, undo/redo past the journal's edge, an empty clip-stack pop, a second
    /// concurrent tab drag).
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    /// A byte-stream load/save failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// In debug builds, panics (so the programmer error is caught in CI); in release builds,
/// logs at `error` level and returns the given `Err`. Used at the boundary for
/// [`EditorError::OutOfRange`] / [`EditorError::InvalidState`], which §7 classifies as
/// programmer errors rather than recoverable conditions.
macro_rules! debug_assert_or_log {
    ($err:expr) => {{
        let err = $err;
        if cfg!(debug_assertions) {
            panic!("programmer error: {err}");
        } else {
            log::error!("programmer error (continuing): {err}");
            return Err(err);
        }
    }};
}

pub(crate) use debug_assert_or_log;
