//! Host contracts (§6 "External interfaces").
//!
//! The renderer, font loader, platform window, and hotkey registry are external
//! collaborators this crate does not implement — per the specification they are
//! "reimplementable from their interface contracts alone". The only sliver of that surface
//! the Edit Engine itself calls into is line-content ↔ pixel-x conversion, needed for
//! baseline-preserving vertical cursor movement (`Up`/`Down`) and for mapping a mouse click
//! to a column. That sliver is [`LineMetrics`]; the rest of the Font/Renderer/Window/Hotkey
//! contracts live above this crate, in the host application.

/// The minimal text-measurement contract the Edit Engine needs.
///
/// A host implements this on top of its real font/renderer; this crate ships no
/// implementation (not even a monospace fallback in non-test builds), since picking a
/// default font metric is a UI policy decision outside this crate's scope.
pub trait LineMetrics {
    /// The pixel x-coordinate of the left edge of the codepoint at `column` in `content`,
    /// i.e. the caret position if placed at `column`.
    fn pixel_x_for_column(&self, content: &str, column: usize) -> f64;

    /// The column whose caret position is closest to pixel x-coordinate `x` in `content`
    /// (used for vertical movement hit-testing and for mapping a mouse click to a column).
    fn column_for_pixel_x(&self, content: &str, x: f64) -> usize;
}

/// A fixed-width `LineMetrics` useful for tests and for terminal-grid hosts where every
/// codepoint occupies the same advance width.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMetrics {
    /// Pixel (or cell) width of a single codepoint.
    pub advance: f64,
}

impl LineMetrics for MonospaceMetrics {
    fn pixel_x_for_column(&self, _content: &str, column: usize) -> f64 {
        self.advance * column as f64
    }

    fn column_for_pixel_x(&self, content: &str, x: f64) -> usize {
        let len = content.chars().count();
        if self.advance <= 0.0 {
            return 0;
        }
        let col = (x / self.advance).round().max(0.0) as usize;
        col.min(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monospace_round_trip() {
        let m = MonospaceMetrics { advance: 8.0 };
        assert_eq!(m.pixel_x_for_column("hello", 3), 24.0);
        assert_eq!(m.column_for_pixel_x("hello", 24.0), 3);
        assert_eq!(m.column_for_pixel_x("hello", 1000.0), 5);
    }
}
