//! An interior dock-tree node with two children and a draggable separator, per
//! `split_panel` in `docking.h`.
//!
//! The separator-maintenance recursion (`_maintain_separator_position`) needs to walk into
//! sibling panels through the same [`crate::arena::Arena`] that owns them, so it lives on
//! [`crate::dock_manager::DockManager`] rather than here; this module only holds the node's
//! data and the child-slot enum.

use std::fmt;

use crate::arena::Handle;
use crate::geom::Orientation;
use crate::tab_host::TabHost;

/// A window dock tree's node: either a leaf (`TabHost`) or another interior `SplitPanel`.
///
/// Implements `Clone`/`Copy`/`Eq`/`Debug` by hand rather than deriving: a derive would add a
/// spurious `T: Clone`/`T: Debug`/... bound even though neither variant stores a `T`
/// directly, which would make this crate's handle types unusable with a tab payload (e.g.
/// an editor engine) that doesn't itself implement those traits.
pub enum DockNode<T> {
    Host(Handle<TabHost<T>>),
    Split(Handle<SplitPanel<T>>),
}

impl<T> Clone for DockNode<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for DockNode<T> {}

impl<T> PartialEq for DockNode<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DockNode::Host(a), DockNode::Host(b)) => a == b,
            (DockNode::Split(a), DockNode::Split(b)) => a == b,
            _ => false,
        }
    }
}
impl<T> Eq for DockNode<T> {}

impl<T> fmt::Debug for DockNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DockNode::Host(h) => f.debug_tuple("Host").field(h).finish(),
            DockNode::Split(s) => f.debug_tuple("Split").field(s).finish(),
        }
    }
}

pub struct SplitPanel<T> {
    pub(crate) orientation: Orientation,
    pub(crate) child1: DockNode<T>,
    pub(crate) child2: DockNode<T>,
    /// Fraction of the main-axis extent occupied by `child1`, in [0, 1].
    pub(crate) separator: f64,
}

impl<T> SplitPanel<T> {
    pub fn new(orientation: Orientation, child1: DockNode<T>, child2: DockNode<T>) -> Self {
        SplitPanel {
            orientation,
            child1,
            child2,
            separator: 0.5,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn children(&self) -> (DockNode<T>, DockNode<T>) {
        (self.child1, self.child2)
    }

    pub fn separator(&self) -> f64 {
        self.separator
    }
}

impl<T> fmt::Debug for SplitPanel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitPanel")
            .field("orientation", &self.orientation)
            .field("child1", &self.child1)
            .field("child2", &self.child2)
            .field("separator", &self.separator)
            .finish()
    }
}
