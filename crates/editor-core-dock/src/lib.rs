//! A headless docking, tab, and split-layout manager.
//!
//! This crate implements the window/panel bookkeeping a code editor's (or any other
//! document-oriented app's) UI sits on top of, with no dependency on `editor-core` or any
//! particular rendering/windowing library — a dock manager is reusable across editor and
//! non-editor panels alike:
//!
//! - [`arena`] — the generation-checked handle/arena pair every other module is built on.
//! - [`tab`] / [`tab_host`] — a single docked panel and the ordered, single-active-tab list
//!   that contains it.
//! - [`split_panel`] — the interior dock-tree node with two children and a draggable
//!   separator.
//! - [`window`] — a top-level window's dock tree (its root node, Host or Split).
//! - [`dock_manager`] — owns every arena, the focus order, and the drag state machine; all
//!   tree mutation (adding/removing tabs, collapsing emptied hosts, completing a drag) goes
//!   through it.
//! - [`geom`] — orientation/direction/rectangle value types used for layout and hit-testing.
//! - [`host`] — the sliver of platform/window and hotkey-registry contract the drag state
//!   machine needs; everything else about rendering and input is the embedding
//!   application's responsibility.

mod arena;
mod dock_manager;
mod error;
mod geom;
mod host;
mod split_panel;
mod tab;
mod tab_host;
mod window;

pub use arena::{Arena, Handle};
pub use dock_manager::{DockManager, DragCompletion, DragKind, HostHitRegion};
pub use error::DockError;
pub use geom::{Direction, Orientation, Rect};
pub use host::{HotkeyId, HotkeyMatch, HotkeyRegistry, KeyGesture, Window};
pub use split_panel::{DockNode, SplitPanel};
pub use tab::Tab;
pub use tab_host::TabHost;
pub use window::WindowDockTree;
