//! Viewport — which part of the document the host is showing.
//!
//! The viewport holds scroll state only: the first visible line, the
//! horizontal offset, and the size of the text area. After the locator moves
//! the selection, [`Viewport::reveal`] scrolls so the landing spot is on
//! screen.
//!
//! ```text
//!            ┌──────────────────────────┐
//! top_line → │ fn main() {              │ ┐
//!            │     let x = 1;           │ │ height
//!            │     x = x + 1;   ← target│ │ (centered)
//!            │     println!("{x}");     │ │
//!            │ }                        │ ┘
//!            └──────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

use crate::document::Document;
use crate::position::{Position, Range};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Convert a char column to a display column.
///
/// Tabs advance to the next multiple of `tab_width`; wide (CJK) characters
/// take two columns; a line ending stops the walk.
#[must_use]
pub fn char_col_to_display_col<I: Iterator<Item = char>>(
    chars: I,
    char_col: usize,
    tab_width: u8,
) -> usize {
    let tw = usize::from(tab_width.max(1));
    let mut display = 0;
    for ch in chars.take(char_col) {
        match ch {
            '\n' | '\r' => break,
            '\t' => display += tw - (display % tw),
            _ => display += UnicodeWidthChar::width(ch).unwrap_or(0),
        }
    }
    display
}

// ---------------------------------------------------------------------------
// RevealPolicy
// ---------------------------------------------------------------------------

/// How far to scroll when revealing a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealPolicy {
    /// Scroll only as much as needed to bring the target into view.
    Minimal,
    /// Put the target line in the vertical middle, where the document
    /// length allows it.
    #[default]
    Center,
}

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// Scroll state and size of a text area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line (0-indexed).
    top_line: usize,
    /// Horizontal scroll offset in display columns.
    left_col: usize,
    /// Visible text rows.
    height: usize,
    /// Visible text columns.
    width: usize,
    /// Tab stop width.
    tab_width: u8,
}

impl Viewport {
    /// A viewport of `height` rows and `width` columns scrolled to the top.
    #[must_use]
    pub const fn new(height: usize, width: usize) -> Self {
        Self {
            top_line: 0,
            left_col: 0,
            height,
            width,
            tab_width: 4,
        }
    }

    // -- Accessors ----------------------------------------------------------

    #[inline]
    #[must_use]
    pub const fn top_line(&self) -> usize {
        self.top_line
    }

    /// Set the tab stop width (minimum 1).
    pub fn set_tab_width(&mut self, width: u8) {
        self.tab_width = width.max(1);
    }

    // -- Scrolling ----------------------------------------------------------

    /// Scroll so the start of `target` is visible.
    ///
    /// A zero-sized viewport is left alone.
    pub fn reveal(&mut self, doc: &Document, target: Range, policy: RevealPolicy) {
        if self.height == 0 || self.width == 0 {
            return;
        }
        let pos = target.start;

        match policy {
            RevealPolicy::Minimal => self.reveal_line_minimal(pos.line),
            RevealPolicy::Center => self.center_line(doc, pos.line),
        }
        self.reveal_col(doc, pos);

        tracing::trace!(
            line = pos.line,
            top = self.top_line,
            left = self.left_col,
            ?policy,
            "revealed"
        );
    }

    fn reveal_line_minimal(&mut self, line: usize) {
        if line < self.top_line {
            self.top_line = line;
        }
        if line >= self.top_line + self.height {
            self.top_line = line + 1 - self.height;
        }
    }

    fn center_line(&mut self, doc: &Document, line: usize) {
        let max_top = doc.line_count().saturating_sub(self.height);
        self.top_line = line.saturating_sub(self.height / 2).min(max_top);
    }

    fn reveal_col(&mut self, doc: &Document, pos: Position) {
        let display_col = doc.line(pos.line).map_or(0, |line| {
            char_col_to_display_col(line.chars(), pos.col, self.tab_width)
        });

        if display_col < self.left_col {
            self.left_col = display_col;
        }
        if display_col >= self.left_col + self.width {
            self.left_col = display_col + 1 - self.width;
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(24, 80)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
