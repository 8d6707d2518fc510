//! Selection — an anchor and an active end.
//!
//! A selection is the pair of positions a user drags between: the `anchor`
//! stays put, the `active` end follows the mouse or keyboard. When the two
//! coincide the selection is a plain caret.
//!
//! The assignment locator searches from [`Selection::end`], the later of the
//! two endpoints, regardless of which way the user dragged.

use crate::position::{Position, Range};

/// A selection or caret in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Fixed end.
    pub anchor: Position,
    /// Moving end (where the caret is drawn).
    pub active: Position,
}

impl Selection {
    /// A selection from `anchor` to `active`.
    #[inline]
    #[must_use]
    pub const fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// A collapsed caret at `pos`.
    #[inline]
    #[must_use]
    pub const fn caret(pos: Position) -> Self {
        Self {
            anchor: pos,
            active: pos,
        }
    }

    /// A forward selection covering `range`.
    #[inline]
    #[must_use]
    pub const fn from_range(range: Range) -> Self {
        Self {
            anchor: range.start,
            active: range.end,
        }
    }

    /// True when no text is selected.
    #[inline]
    #[must_use]
    pub const fn is_caret(&self) -> bool {
        self.anchor.line == self.active.line && self.anchor.col == self.active.col
    }

    /// The selected range, normalized so `start <= end`.
    #[inline]
    #[must_use]
    pub fn range(&self) -> Range {
        Range::ordered(self.anchor, self.active)
    }

    /// The earlier endpoint.
    #[inline]
    #[must_use]
    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    /// The later endpoint.
    #[inline]
    #[must_use]
    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
