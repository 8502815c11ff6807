//! An ordered list of tabs with one active, per `tab_host` in `docking.h`.
//!
//! Mutating operations (`add_tab`, `remove_tab`, `activate_tab`, `move_tab_before`) live on
//! [`crate::dock_manager::DockManager`] rather than here, since they must also update the
//! tab's back-reference and enqueue the host into the `changed` set — state this type does
//! not own. `TabHost` itself is read-only bookkeeping: the ordered handle list plus which
//! index is active.

use std::fmt;

use crate::arena::Handle;
use crate::tab::Tab;

pub struct TabHost<T> {
    pub(crate) tabs: Vec<Handle<Tab<T>>>,
    pub(crate) active: Option<usize>,
}

impl<T> fmt::Debug for TabHost<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabHost")
            .field("tabs", &self.tabs)
            .field("active", &self.active)
            .finish()
    }
}

impl<T> Default for TabHost<T> {
    fn default() -> Self {
        TabHost {
            tabs: Vec::new(),
            active: None,
        }
    }
}

impl<T> TabHost<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Handle<Tab<T>>] {
        &self.tabs
    }

    pub fn active_tab(&self) -> Option<Handle<Tab<T>>> {
        self.active.map(|i| self.tabs[i])
    }

    pub fn position_of(&self, tab: Handle<Tab<T>>) -> Option<usize> {
        self.tabs.iter().position(|&t| t == tab)
    }
}
