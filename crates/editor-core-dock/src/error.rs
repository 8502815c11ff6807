//! Error taxonomy, mirroring `editor-core`'s own (see `DESIGN.md`).

use thiserror::Error;

/// Errors produced by the dock manager's public API.
#[derive(Debug, Error)]
pub enum DockError {
    /// A `Handle` referred to a slot that was never occupied, or has since been disposed.
    #[error("invalid handle: {0}")]
    InvalidHandle(&'static str),
    /// An operation was attempted in a state that forbids it (starting a second concurrent
    /// drag, moving a tab into a host that is mid-disposal).
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}

/// In debug builds, panics (so the programmer error is caught in CI); in release builds,
/// logs at `error` level and returns the given `Err`.
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
