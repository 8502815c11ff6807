//! The multi-window docking tree and the interactive tab-drag protocol, per `dock_manager`
//! in `docking.h`. Grounded throughout on that file's `update_changed_hosts`, `update_drag`,
//! `start_drag_tab`, `_maintain_separator_position`, and `_get_drag_tab_before`.
//!
//! Back-pointers (`parent()`, `_get_host()`) are replaced per Design Notes §9(a)/(b): tabs
//! and hosts carry only the handles that are cheap to keep in sync on mutation (a tab's
//! owning host); a node's *position in the tree* (its parent split panel, or the window it
//! roots) is recomputed by downward traversal from the window list when needed, since that
//! happens rarely (disposal, focus, drag completion) compared to how often the tree is read.

use std::collections::{HashSet, VecDeque};

use crate::arena::{Arena, Handle};
use crate::error::{debug_assert_or_log, DockError};
use crate::geom::{Direction, Rect};
use crate::split_panel::{DockNode, SplitPanel};
use crate::tab::Tab;
use crate::tab_host::TabHost;
use crate::window::WindowDockTree;

/// One of the states named in the contract: `new-window`, `combine-in-tab`, `combine`,
/// `new-panel-{left,right,up,down}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    NewWindow,
    CombineInTab,
    Combine,
    NewPanel(Direction),
}

struct DragState<T> {
    tab: Handle<Tab<T>>,
    kind: DragKind,
    dest: Option<Handle<TabHost<T>>>,
    drag_diff: (f64, f64),
    drag_rect: Rect,
    stop: Box<dyn FnMut() -> bool>,
}

/// A host's current hit-test geometry for one [`DockManager::update_drag`] tick, in a
/// coordinate space the caller has already normalized across windows (e.g. by running each
/// host's rect through its own `host::Window::screen_to_client`).
pub struct HostHitRegion<T> {
    pub host: Handle<TabHost<T>>,
    pub client_rect: Rect,
    pub tab_strip_rect: Rect,
}

/// What a completed drag produced. Tree mutation (creating hosts/tabs/panels, removing the
/// dragged tab from its origin) is already applied to `self`; geometric fields are advisory
/// numbers for the caller to apply to whatever platform window it owns.
pub enum DragCompletion<T> {
    NewWindow {
        window: Handle<WindowDockTree<T>>,
        host: Handle<TabHost<T>>,
        tab: Handle<Tab<T>>,
        size: (f64, f64),
        position_hint: (f64, f64),
    },
    CombineInTab {
        host: Handle<TabHost<T>>,
        tab: Handle<Tab<T>>,
    },
    Combine {
        host: Handle<TabHost<T>>,
        tab: Handle<Tab<T>>,
    },
    NewPanel {
        panel: Handle<SplitPanel<T>>,
        host: Handle<TabHost<T>>,
        tab: Handle<Tab<T>>,
        direction: Direction,
    },
    /// The dragged tab was destroyed by other code while the drag was in flight.
    Cancelled,
}

impl<T> std::fmt::Debug for DragCompletion<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DragCompletion::NewWindow { window, host, tab, size, position_hint } => f
                .debug_struct("NewWindow")
                .field("window", window)
                .field("host", host)
                .field("tab", tab)
                .field("size", size)
                .field("position_hint", position_hint)
                .finish(),
            DragCompletion::CombineInTab { host, tab } => {
                f.debug_struct("CombineInTab").field("host", host).field("tab", tab).finish()
            }
            DragCompletion::Combine { host, tab } => {
                f.debug_struct("Combine").field("host", host).field("tab", tab).finish()
            }
            DragCompletion::NewPanel { panel, host, tab, direction } => f
                .debug_struct("NewPanel")
                .field("panel", panel)
                .field("host", host)
                .field("tab", tab)
                .field("direction", direction)
                .finish(),
            DragCompletion::Cancelled => f.write_str("Cancelled"),
        }
    }
}

enum ParentSlot<T> {
    WindowRoot(Handle<WindowDockTree<T>>),
    SplitChild1(Handle<SplitPanel<T>>),
    SplitChild2(Handle<SplitPanel<T>>),
}

pub struct DockManager<T> {
    tabs: Arena<Tab<T>>,
    hosts: Arena<TabHost<T>>,
    panels: Arena<SplitPanel<T>>,
    windows: Arena<WindowDockTree<T>>,
    /// Most-recently-focused host first, per "Window focus bookkeeping".
    focus_order: VecDeque<Handle<TabHost<T>>>,
    /// Hosts that may have emptied out, drained once per update tick.
    changed: HashSet<Handle<TabHost<T>>>,
    drag: Option<DragState<T>>,
}

impl<T> Default for DockManager<T> {
    fn default() -> Self {
        DockManager {
            tabs: Arena::new(),
            hosts: Arena::new(),
            panels: Arena::new(),
            windows: Arena::new(),
            focus_order: VecDeque::new(),
            changed: HashSet::new(),
            drag: None,
        }
    }
}

impl<T> DockManager<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty() && self.drag.is_none()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn host(&self, host: Handle<TabHost<T>>) -> Result<&TabHost<T>, DockError> {
        self.hosts.get(host)
    }

    pub fn tab(&self, tab: Handle<Tab<T>>) -> Result<&Tab<T>, DockError> {
        self.tabs.get(tab)
    }

    pub fn tab_mut(&mut self, tab: Handle<Tab<T>>) -> Result<&mut Tab<T>, DockError> {
        self.tabs.get_mut(tab)
    }

    pub fn panel(&self, panel: Handle<SplitPanel<T>>) -> Result<&SplitPanel<T>, DockError> {
        self.panels.get(panel)
    }

    pub fn window(&self, window: Handle<WindowDockTree<T>>) -> Result<&WindowDockTree<T>, DockError> {
        self.windows.get(window)
    }

    pub fn focus_order(&self) -> impl Iterator<Item = Handle<TabHost<T>>> + '_ {
        self.focus_order.iter().copied()
    }

    // ---- tab / host lifecycle -------------------------------------------------------

    /// Creates a tab and adds it to `host`, or to a brand-new window if `host` is `None`,
    /// mirroring `dock_manager::new_tab`.
    pub fn new_tab(
        &mut self,
        host: Option<Handle<TabHost<T>>>,
        content: T,
        caption: impl Into<String>,
    ) -> Result<(Handle<Tab<T>>, Handle<TabHost<T>>), DockError> {
        let host = match host {
            Some(h) => h,
            None => self.new_window_with_empty_host()?,
        };
        let tab = self.tabs.insert(Tab::new(content, caption));
        self.add_tab(host, tab)?;
        Ok((tab, host))
    }

    fn new_window_with_empty_host(&mut self) -> Result<Handle<TabHost<T>>, DockError> {
        let host = self.hosts.insert(TabHost::new());
        self.on_tab_host_created(host);
        let window = self.windows.insert(WindowDockTree::new(DockNode::Host(host)));
        log::debug!("window {window:?} created with root host {host:?}");
        Ok(host)
    }

    /// Adds `tab` to the end of `host`'s tab list, activating it if it is the only tab.
    pub fn add_tab(&mut self, host: Handle<TabHost<T>>, tab: Handle<Tab<T>>) -> Result<(), DockError> {
        self.tabs.get_mut(tab)?.set_host(Some(host));
        let h = self.hosts.get_mut(host)?;
        h.tabs.push(tab);
        if h.tabs.len() == 1 {
            h.active = Some(0);
        }
        Ok(())
    }

    /// Removes `tab` from its host, reassigning the active tab per `tab_host::remove_tab`,
    /// and enqueues the (possibly now-empty) host for disposal consideration.
    pub fn remove_tab(&mut self, tab: Handle<Tab<T>>) -> Result<(), DockError> {
        let host = self
            .tabs
            .get(tab)?
            .host()
            .ok_or(DockError::InvalidState("tab does not belong to a host"))?;
        let h = self.hosts.get_mut(host)?;
        let pos = h
            .position_of(tab)
            .ok_or(DockError::InvalidState("tab not found in its own host"))?;
        if h.active == Some(pos) {
            h.active = if h.tabs.len() == 1 {
                None
            } else if pos + 1 < h.tabs.len() {
                Some(pos + 1)
            } else {
                Some(pos - 1)
            };
        } else if let Some(active) = h.active {
            if active > pos {
                h.active = Some(active - 1);
            }
        }
        h.tabs.remove(pos);
        self.tabs.get_mut(tab)?.set_host(None);
        self.on_tab_detached(host);
        Ok(())
    }

    pub fn activate_tab(&mut self, host: Handle<TabHost<T>>, tab: Handle<Tab<T>>) -> Result<(), DockError> {
        let h = self.hosts.get_mut(host)?;
        let pos = h
            .position_of(tab)
            .ok_or(DockError::InvalidState("tab not found in host"))?;
        h.active = Some(pos);
        Ok(())
    }

    /// Moves `tab` within `host`'s list to just before `before` (or to the end if `None`),
    /// preserving which tab is active, mirroring `tab_host::move_tab_before`.
    pub fn move_tab_before(
        &mut self,
        host: Handle<TabHost<T>>,
        tab: Handle<Tab<T>>,
        before: Option<Handle<Tab<T>>>,
    ) -> Result<(), DockError> {
        let h = self.hosts.get_mut(host)?;
        let was_active = h.active_tab() == Some(tab);
        let pos = h
            .position_of(tab)
            .ok_or(DockError::InvalidState("tab not found in host"))?;
        h.tabs.remove(pos);
        let insert_at = match before {
            Some(b) => h.position_of(b).unwrap_or(h.tabs.len()),
            None => h.tabs.len(),
        };
        h.tabs.insert(insert_at, tab);
        if was_active {
            h.active = h.position_of(tab);
        }
        Ok(())
    }

    /// Drains the `changed` set, disposing every host left with zero tabs and collapsing its
    /// parent split panel (or window) around its sibling, per "Tab-host lifecycle".
    pub fn update_changed_hosts(&mut self) -> Result<(), DockError> {
        let drained: Vec<_> = self.changed.drain().collect();
        for host in drained {
            let count = match self.hosts.get(host) {
                Ok(h) => h.tab_count(),
                Err(_) => continue,
            };
            if count != 0 {
                continue;
            }
            self.on_tab_host_disposed(host);
            let node = DockNode::Host(host);
            match self.find_parent(node)? {
                Some(ParentSlot::WindowRoot(window)) => {
                    self.windows.remove(window)?;
                }
                Some(ParentSlot::SplitChild1(panel)) | Some(ParentSlot::SplitChild2(panel)) => {
                    let sibling = {
                        let p = self.panels.get(panel)?;
                        if p.child1 == node { p.child2 } else { p.child1 }
                    };
                    match self.find_parent(DockNode::Split(panel))? {
                        Some(ParentSlot::WindowRoot(window)) => {
                            self.windows.get_mut(window)?.root = sibling;
                        }
                        Some(ParentSlot::SplitChild1(gp)) => {
                            self.panels.get_mut(gp)?.child1 = sibling;
                        }
                        Some(ParentSlot::SplitChild2(gp)) => {
                            self.panels.get_mut(gp)?.child2 = sibling;
                        }
                        None => debug_assert_or_log!(DockError::InvalidState("split panel with no parent")),
                    }
                    self.panels.remove(panel)?;
                }
                None => debug_assert_or_log!(DockError::InvalidState("tab host with no parent")),
            }
            self.hosts.remove(host)?;
        }
        Ok(())
    }

    fn on_tab_host_created(&self, host: Handle<TabHost<T>>) {
        log::debug!("tab host {host:?} created");
    }

    fn on_tab_host_disposed(&mut self, host: Handle<TabHost<T>>) {
        log::debug!("tab host {host:?} disposed");
        self.focus_order.retain(|&h| h != host);
        if let Some(drag) = &mut self.drag {
            if drag.dest == Some(host) {
                log::debug!("resetting drag destination");
                drag.dest = None;
                drag.kind = DragKind::NewWindow;
            }
        }
    }

    fn on_tab_detached(&mut self, host: Handle<TabHost<T>>) {
        self.changed.insert(host);
    }

    // ---- tree navigation (recomputed, never cached) ----------------------------------

    fn find_parent(&self, target: DockNode<T>) -> Result<Option<ParentSlot<T>>, DockError> {
        for (window, tree) in self.windows.iter() {
            if tree.root == target {
                return Ok(Some(ParentSlot::WindowRoot(window)));
            }
            if let DockNode::Split(root) = tree.root {
                if let Some(found) = self.find_parent_in_subtree(root, target)? {
                    return Ok(Some(found));
                }
            }
        }
        Ok(None)
    }

    fn find_parent_in_subtree(
        &self,
        panel: Handle<SplitPanel<T>>,
        target: DockNode<T>,
    ) -> Result<Option<ParentSlot<T>>, DockError> {
        let p = self.panels.get(panel)?;
        if p.child1 == target {
            return Ok(Some(ParentSlot::SplitChild1(panel)));
        }
        if p.child2 == target {
            return Ok(Some(ParentSlot::SplitChild2(panel)));
        }
        if let DockNode::Split(c1) = p.child1 {
            if let Some(found) = self.find_parent_in_subtree(c1, target)? {
                return Ok(Some(found));
            }
        }
        if let DockNode::Split(c2) = p.child2 {
            if let Some(found) = self.find_parent_in_subtree(c2, target)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    fn hosts_in_window(&self, window: Handle<WindowDockTree<T>>) -> Result<Vec<Handle<TabHost<T>>>, DockError> {
        let root = self.windows.get(window)?.root;
        let mut out = Vec::new();
        self.collect_hosts(root, &mut out)?;
        Ok(out)
    }

    fn collect_hosts(&self, node: DockNode<T>, out: &mut Vec<Handle<TabHost<T>>>) -> Result<(), DockError> {
        match node {
            DockNode::Host(h) => out.push(h),
            DockNode::Split(p) => {
                let (c1, c2) = self.panels.get(p)?.children();
                self.collect_hosts(c1, out)?;
                self.collect_hosts(c2, out)?;
            }
        }
        Ok(())
    }

    /// Moves every host of `window` to the head of the focus-ordered list, preserving their
    /// relative order, per "Window focus bookkeeping".
    pub fn on_window_focus(&mut self, window: Handle<WindowDockTree<T>>) -> Result<(), DockError> {
        let tree_order = self.hosts_in_window(window)?;
        let mut group: Vec<Handle<TabHost<T>>> = self
            .focus_order
            .iter()
            .copied()
            .filter(|h| tree_order.contains(h))
            .collect();
        for h in &tree_order {
            if !group.contains(h) {
                group.push(*h);
            }
        }
        self.focus_order.retain(|h| !tree_order.contains(h));
        for h in group.into_iter().rev() {
            self.focus_order.push_front(h);
        }
        Ok(())
    }

    // ---- split-panel separator maintenance -------------------------------------------

    /// Moves `panel`'s separator to `new_value`, propagating to same-orientation
    /// descendants down the dragged side only, per `_maintain_separator_position` (see
    /// DESIGN.md, Open Question 2).
    pub fn set_separator(&mut self, panel: Handle<SplitPanel<T>>, new_value: f64) -> Result<(), DockError> {
        let new_value = new_value.clamp(0.0, 1.0);
        let (orientation, old_value, child1, child2) = {
            let p = self.panels.get(panel)?;
            (p.orientation, p.separator, p.child1, p.child2)
        };
        if let DockNode::Split(c1) = child1 {
            if self.panels.get(c1)?.orientation == orientation {
                self.maintain_separator_position(c1, false, old_value, new_value)?;
            }
        }
        if let DockNode::Split(c2) = child2 {
            if self.panels.get(c2)?.orientation == orientation {
                self.maintain_separator_position(c2, true, old_value, new_value)?;
            }
        }
        self.panels.get_mut(panel)?.separator = new_value;
        Ok(())
    }

    fn maintain_separator_position(
        &mut self,
        panel: Handle<SplitPanel<T>>,
        min_changed: bool,
        old_value: f64,
        new_value: f64,
    ) -> Result<(), DockError> {
        let (orientation, own_sep, child1, child2) = {
            let p = self.panels.get(panel)?;
            (p.orientation, p.separator, p.child1, p.child2)
        };
        let new_pos;
        if min_changed {
            let left_portion = old_value + (1.0 - old_value) * own_sep;
            new_pos = (left_portion - new_value) / (1.0 - new_value);
            if let DockNode::Split(c1) = child1 {
                if self.panels.get(c1)?.orientation == orientation {
                    self.maintain_separator_position(
                        c1,
                        true,
                        old_value / left_portion,
                        new_value / left_portion,
                    )?;
                }
            }
        } else {
            let left_portion = old_value * own_sep;
            let right_portion = 1.0 - left_portion;
            new_pos = left_portion / new_value;
            if let DockNode::Split(c2) = child2 {
                if self.panels.get(c2)?.orientation == orientation {
                    self.maintain_separator_position(
                        c2,
                        false,
                        (old_value - left_portion) / right_portion,
                        (new_value - left_portion) / right_portion,
                    )?;
                }
            }
        }
        self.panels.get_mut(panel)?.separator = new_pos;
        Ok(())
    }

    // ---- drag protocol ----------------------------------------------------------------

    /// Starts dragging `tab`. Initial state is `combine-in-tab` targeting the tab's current
    /// host if it has one, else `new-window`, per "Drag state machine".
    pub fn start_drag_tab(
        &mut self,
        tab: Handle<Tab<T>>,
        drag_diff: (f64, f64),
        drag_rect: Rect,
        stop: Box<dyn FnMut() -> bool>,
    ) -> Result<(), DockError> {
        if self.drag.is_some() {
            return Err(DockError::InvalidState("a drag is already in progress"));
        }
        let host = self.tabs.get(tab)?.host();
        let (kind, dest) = match host {
            Some(h) => (DragKind::CombineInTab, Some(h)),
            None => (DragKind::NewWindow, None),
        };
        self.drag = Some(DragState {
            tab,
            kind,
            dest,
            drag_diff,
            drag_rect,
            stop,
        });
        Ok(())
    }

    /// Advances the drag state machine by one tick: evaluates the stop predicate, relocates
    /// the dragged tab's hover state, or completes the drag. Returns `Ok(None)` while the
    /// drag is still in flight.
    ///
    /// `regions` lists the hosts currently hit-testable in whatever single coordinate space
    /// the caller has already normalized `cursor` into (e.g. by running each candidate
    /// host's rect through its own window's `screen_to_client`).
    pub fn update_drag(
        &mut self,
        regions: &[HostHitRegion<T>],
        cursor: (f64, f64),
    ) -> Result<Option<DragCompletion<T>>, DockError> {
        let tab = match &self.drag {
            Some(d) => d.tab,
            None => return Err(DockError::InvalidState("no drag in progress")),
        };
        if !self.tabs.contains(tab) {
            log::debug!("drag tab {tab:?} destroyed mid-drag, cancelling");
            self.drag = None;
            return Ok(Some(DragCompletion::Cancelled));
        }

        let should_stop = (self.drag.as_mut().expect("checked above").stop)();
        if should_stop {
            return self.finish_drag();
        }

        if let Some(hit) = regions.iter().find(|r| r.tab_strip_rect.contains(cursor.0, cursor.1)) {
            let drag = self.drag.as_mut().expect("checked above");
            drag.kind = DragKind::CombineInTab;
            drag.dest = Some(hit.host);
        } else if let Some((host, dx, dy)) = regions
            .iter()
            .filter(|r| r.client_rect.contains(cursor.0, cursor.1))
            .map(|r| {
                let (cx, cy) = r.client_rect.center();
                (r.host, cursor.0 - cx, cursor.1 - cy)
            })
            .min_by(|(_, adx, ady), (_, bdx, bdy)| {
                (adx * adx + ady * ady)
                    .partial_cmp(&(bdx * bdx + bdy * bdy))
                    .expect("coordinates are never NaN")
            })
        {
            let direction = if dx.abs() > dy.abs() {
                if dx > 0.0 { Direction::Right } else { Direction::Left }
            } else if dy > 0.0 {
                Direction::Down
            } else {
                Direction::Up
            };
            let drag = self.drag.as_mut().expect("checked above");
            drag.kind = DragKind::NewPanel(direction);
            drag.dest = Some(host);
        } else {
            let drag = self.drag.as_mut().expect("checked above");
            drag.kind = DragKind::NewWindow;
            drag.dest = None;
        }
        Ok(None)
    }

    fn finish_drag(&mut self) -> Result<Option<DragCompletion<T>>, DockError> {
        let drag = self.drag.take().expect("caller already checked a drag is active");
        let completion = match drag.kind {
            DragKind::NewWindow => {
                if self.tabs.get(drag.tab)?.host().is_some() {
                    self.remove_tab(drag.tab)?;
                }
                let host = self.new_window_with_empty_host()?;
                self.add_tab(host, drag.tab)?;
                let window = match self.find_parent(DockNode::Host(host))? {
                    Some(ParentSlot::WindowRoot(w)) => w,
                    _ => debug_assert_or_log!(DockError::InvalidState("freshly created host has no window")),
                };
                DragCompletion::NewWindow {
                    window,
                    host,
                    tab: drag.tab,
                    size: (drag.drag_rect.width(), drag.drag_rect.y_max - drag.drag_diff.1),
                    position_hint: drag.drag_diff,
                }
            }
            DragKind::CombineInTab => {
                let host = drag
                    .dest
                    .ok_or(DockError::InvalidState("combine-in-tab drag has no destination"))?;
                if self.tabs.get(drag.tab)?.host() != Some(host) {
                    self.remove_tab(drag.tab)?;
                    self.add_tab(host, drag.tab)?;
                }
                self.tab_mut(drag.tab)?.button_x_offset = 0.0;
                DragCompletion::CombineInTab { host, tab: drag.tab }
            }
            DragKind::Combine => {
                let host = drag
                    .dest
                    .ok_or(DockError::InvalidState("combine drag has no destination"))?;
                if self.tabs.get(drag.tab)?.host() != Some(host) {
                    self.remove_tab(drag.tab)?;
                    self.add_tab(host, drag.tab)?;
                }
                self.activate_tab(host, drag.tab)?;
                DragCompletion::Combine { host, tab: drag.tab }
            }
            DragKind::NewPanel(direction) => {
                let dest = drag
                    .dest
                    .ok_or(DockError::InvalidState("new-panel drag has no destination"))?;
                if self.tabs.get(drag.tab)?.host() != Some(dest) {
                    self.remove_tab(drag.tab)?;
                }
                let new_host = self.hosts.insert(TabHost::new());
                self.on_tab_host_created(new_host);
                self.add_tab(new_host, drag.tab)?;

                let dest_node = DockNode::Host(dest);
                let new_node = DockNode::Host(new_host);
                let (child1, child2) = if direction.new_child_is_first() {
                    (new_node, dest_node)
                } else {
                    (dest_node, new_node)
                };
                let panel = self
                    .panels
                    .insert(SplitPanel::new(direction.orientation(), child1, child2));
                match self.find_parent(dest_node)? {
                    Some(ParentSlot::WindowRoot(window)) => {
                        self.windows.get_mut(window)?.root = DockNode::Split(panel);
                    }
                    Some(ParentSlot::SplitChild1(gp)) => {
                        self.panels.get_mut(gp)?.child1 = DockNode::Split(panel);
                    }
                    Some(ParentSlot::SplitChild2(gp)) => {
                        self.panels.get_mut(gp)?.child2 = DockNode::Split(panel);
                    }
                    None => debug_assert_or_log!(DockError::InvalidState("drag destination host has no parent")),
                }
                DragCompletion::NewPanel {
                    panel,
                    host: new_host,
                    tab: drag.tab,
                    direction,
                }
            }
        };
        Ok(Some(completion))
    }

    /// Computes which peer tab the dragged tab should be inserted before within a tab
    /// strip, mirroring `dock_manager::_get_drag_tab_before`. `peer_width` supplies each
    /// tab button's rendered width (text measurement is out of this crate's scope).
    pub fn drag_insertion_point(
        dest_tabs: &[Handle<Tab<T>>],
        dragged: Handle<Tab<T>>,
        dragged_width: f64,
        pos_from_strip_left: f64,
        peer_width: impl Fn(Handle<Tab<T>>) -> f64,
    ) -> Option<Handle<Tab<T>>> {
        let half_w = dragged_width * 0.5;
        let pos_x = pos_from_strip_left + half_w;
        let mut cx = half_w;
        for &t in dest_tabs {
            if t == dragged {
                continue;
            }
            let w = peer_width(t);
            if pos_x < cx + 0.5 * w {
                return Some(t);
            }
            cx += w;
        }
        None
    }
}

impl<T> std::fmt::Debug for DockManager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DockManager")
            .field("windows", &self.windows.len())
            .field("hosts", &self.hosts.len())
            .field("tabs", &self.tabs.len())
            .field("dragging", &self.drag.is_some())
            .finish()
    }
}
