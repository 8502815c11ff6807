//! Host contracts (§6 "External interfaces", dock-manager slice).
//!
//! The platform window and hotkey registry are external collaborators this crate does not
//! implement — "reimplementable from their interface contracts alone". Only the drag state
//! machine calls into them (cursor position, screen/client conversion); everything else
//! (rendering, focus management beyond the host list, clipboard) lives above this crate.

/// Per-window pixel conversions and cursor/keyboard queries the drag state machine needs.
pub trait Window {
    /// Converts a point in this window's screen coordinates to its client coordinates.
    fn screen_to_client(&self, screen: (f64, f64)) -> (f64, f64);
    /// The current mouse position, in screen coordinates.
    fn mouse_position(&self) -> (f64, f64);
    /// Whether `key` is currently held down.
    fn is_key_down(&self, key: u32) -> bool;
    fn set_mouse_capture(&mut self);
    fn release_mouse_capture(&mut self);
}

/// A single physical key gesture fed to a [`HotkeyRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyGesture {
    pub key: u32,
    pub modifiers: u8,
}

/// Opaque identifier for a registered hotkey action.
pub type HotkeyId = u32;

/// Result of feeding one [`KeyGesture`] to a [`HotkeyRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyMatch {
    /// No registered chain starts with the gestures fed so far.
    NoMatch,
    /// The gestures fed so far are a strict prefix of at least one registered chain.
    IntermediatePrefix,
    /// The gestures fed so far exactly match a registered chain.
    Final(HotkeyId),
    /// A previously started chain was abandoned because the next gesture matched nothing;
    /// emitted once, in place of a [`HotkeyMatch::NoMatch`], the first time this happens.
    ChainInterrupted,
}

/// A chain-aware hotkey registry: multi-gesture chords resolve over successive calls.
pub trait HotkeyRegistry {
    fn feed(&mut self, gesture: KeyGesture) -> HotkeyMatch;
    /// Abandons any in-progress chain without waiting for the next unmatched gesture.
    fn reset_chain(&mut self);
}
