//! A single editing panel, owned by exactly one [`crate::tab_host::TabHost`].
//!
//! Grounded on `tab`/`tab_button` in `docking.h`. The rendered glyph/texture plumbing of
//! `tab_button` is out of scope (no renderer is shipped); what survives is the data a host
//! application needs to draw its own tab strip: caption, drag x-offset, and host membership.

use crate::arena::Handle;
use crate::tab_host::TabHost;

/// `T` is the tab's payload — an `EditEngine`, a settings panel, whatever the embedding
/// application docks. This crate has no opinion on it, per §2's "reusable across editor and
/// non-editor panels alike".
#[derive(Debug)]
pub struct Tab<T> {
    pub content: T,
    caption: String,
    host: Option<Handle<TabHost<T>>>,
    /// Horizontal pixel offset of the tab button during a drag, relative to its settled
    /// position; reset to 0 once the drag completes. Mirrors `tab_button::_xoffset`.
    pub(crate) button_x_offset: f64,
}

impl<T> Tab<T> {
    pub fn new(content: T, caption: impl Into<String>) -> Self {
        Tab {
            content,
            caption: caption.into(),
            host: None,
            button_x_offset: 0.0,
        }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    pub fn host(&self) -> Option<Handle<TabHost<T>>> {
        self.host
    }

    pub(crate) fn set_host(&mut self, host: Option<Handle<TabHost<T>>>) {
        self.host = host;
    }
}
