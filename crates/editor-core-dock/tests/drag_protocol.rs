//! The tab-drag protocol end to end, driven tick by tick as a host application would: report
//! hit regions and a cursor position each frame, stop once the user releases the mouse.
//!
//! Covers the "drag to a split" scenario: tab T, alone in host H, dragged to the left half
//! of host H'. After drop, H' is replaced in its parent by a new horizontal split panel
//! whose left child is a new host containing T and whose right child is H'; H is disposed,
//! and since H was the sole host of its own window, that window is disposed too.

use std::cell::Cell;
use std::rc::Rc;

use editor_core_dock::{DockManager, Direction, DockNode, DragCompletion, HostHitRegion, Orientation, Rect};

/// A stop predicate the test controls from outside, standing in for "mouse button released".
fn release_handle() -> (Rc<Cell<bool>>, Box<dyn FnMut() -> bool>) {
    let released = Rc::new(Cell::new(false));
    let flag = released.clone();
    (released, Box::new(move || flag.get()))
}

#[test]
fn dragging_a_solo_tab_onto_the_left_half_of_another_host_splits_it() {
    let mut dm: DockManager<&str> = DockManager::new();
    let (tab_t, host_h) = dm.new_tab(None, "T's content", "T").unwrap();
    let (_, host_h_prime) = dm.new_tab(None, "other content", "other").unwrap();
    assert_eq!(dm.window_count(), 2);

    let (released, stop) = release_handle();
    dm.start_drag_tab(tab_t, (5.0, 5.0), Rect::new(0.0, 100.0, 0.0, 30.0), stop)
        .unwrap();

    let h_prime_client = Rect::new(0.0, 200.0, 0.0, 100.0);
    let region = HostHitRegion {
        host: host_h_prime,
        client_rect: h_prime_client,
        tab_strip_rect: Rect::new(0.0, 200.0, 0.0, 0.0),
    };
    // Left of center (center is (100, 50)): resolves to a left-edge new-panel drag.
    let cursor = (10.0, 50.0);
    assert!(dm.update_drag(&[region], cursor).unwrap().is_none(), "still dragging");

    // Release: the next tick with the same regions completes the drag.
    released.set(true);
    let completion = dm.update_drag(&[region], cursor).unwrap();

    let (panel, new_host, dragged_tab) = match completion {
        Some(DragCompletion::NewPanel { panel, host, tab, direction }) => {
            assert_eq!(direction, Direction::Left);
            (panel, host, tab)
        }
        other => panic!("expected NewPanel completion, got {other:?}"),
    };
    assert_eq!(dragged_tab, tab_t);

    let p = dm.panel(panel).unwrap();
    assert_eq!(p.orientation(), Orientation::Horizontal);
    let (child1, child2) = p.children();
    assert_eq!(child1, DockNode::Host(new_host));
    assert_eq!(child2, DockNode::Host(host_h_prime));
    assert_eq!(dm.host(new_host).unwrap().tabs(), &[tab_t]);

    // H (the origin host) is left empty immediately; its window is untouched until the next
    // drain.
    assert_eq!(dm.host(host_h).unwrap().tab_count(), 0);
    dm.update_changed_hosts().unwrap();
    assert!(dm.host(host_h).is_err(), "H is disposed once emptied");
    assert_eq!(dm.window_count(), 1, "H's window held only H, so it is disposed too");
    assert!(dm.host(host_h_prime).is_ok(), "H' itself survives, now as a split child");
}

#[test]
fn dragging_onto_an_empty_region_opens_a_new_window() {
    let mut dm: DockManager<&str> = DockManager::new();
    let (tab, origin) = dm.new_tab(None, "solo", "solo").unwrap();

    let (released, stop) = release_handle();
    dm.start_drag_tab(tab, (0.0, 0.0), Rect::new(0.0, 80.0, 0.0, 24.0), stop)
        .unwrap();
    assert!(dm.update_drag(&[], (900.0, 900.0)).unwrap().is_none());

    released.set(true);
    let completion = dm.update_drag(&[], (900.0, 900.0)).unwrap();
    match completion {
        Some(DragCompletion::NewWindow { host, tab: t, .. }) => {
            assert_eq!(t, tab);
            assert_ne!(host, origin);
            assert_eq!(dm.host(host).unwrap().tab_count(), 1);
        }
        other => panic!("expected NewWindow completion, got {other:?}"),
    }
    dm.update_changed_hosts().unwrap();
    assert!(dm.host(origin).is_err());
    assert_eq!(dm.window_count(), 1);
}

#[test]
fn dropping_onto_another_hosts_tab_strip_combines_into_its_tabs() {
    let mut dm: DockManager<&str> = DockManager::new();
    let (tab, origin) = dm.new_tab(None, "dragged", "dragged").unwrap();
    let (resident, dest) = dm.new_tab(None, "resident", "resident").unwrap();

    let (released, stop) = release_handle();
    dm.start_drag_tab(tab, (0.0, 0.0), Rect::new(0.0, 80.0, 0.0, 24.0), stop)
        .unwrap();
    let region = HostHitRegion {
        host: dest,
        client_rect: Rect::new(0.0, 200.0, 0.0, 100.0),
        tab_strip_rect: Rect::new(0.0, 200.0, 0.0, 24.0),
    };
    let cursor = (50.0, 12.0);
    assert!(dm.update_drag(&[region], cursor).unwrap().is_none());

    released.set(true);
    let completion = dm.update_drag(&[region], cursor).unwrap();
    match completion {
        Some(DragCompletion::CombineInTab { host, tab: t }) => {
            assert_eq!(host, dest);
            assert_eq!(t, tab);
        }
        other => panic!("expected CombineInTab completion, got {other:?}"),
    }

    assert_eq!(dm.host(dest).unwrap().tabs(), &[resident, tab]);
    dm.update_changed_hosts().unwrap();
    assert!(dm.host(origin).is_err());
}
