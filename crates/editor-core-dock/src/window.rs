//! A top-level window's dock tree, per `platform::window_base` + the invariant "every leaf
//! Tab Host has ≥1 tab, or else is scheduled for disposal during the next update tick".
//!
//! Mutating the tree (replacing the root when a panel collapses, disposing the window when
//! its root empties out) is [`crate::dock_manager::DockManager`]'s job, since it must also
//! update the focus-ordered host list and arenas; this module only holds the root pointer.

use std::fmt;

use crate::split_panel::DockNode;

pub struct WindowDockTree<T> {
    pub(crate) root: DockNode<T>,
}

impl<T> WindowDockTree<T> {
    pub(crate) fn new(root: DockNode<T>) -> Self {
        WindowDockTree { root }
    }

    pub fn root(&self) -> DockNode<T> {
        self.root
    }
}

impl<T> fmt::Debug for WindowDockTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowDockTree").field("root", &self.root).finish()
    }
}
