//! Text position and range types.
//!
//! All coordinates are **0-indexed**. Line 0 is the first line, column 0 is the
//! first character. Columns count Unicode scalar values (chars), not bytes or
//! UTF-16 units, which is how `ropey` indexes text.
//!
//! Anything shown to a user (CLI output, notices) goes through `Display`,
//! which is 1-indexed.

use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A position in a document: (line, column), both 0-indexed.
///
/// Ordered line first, then column, so "after or equal to" comparisons
/// against a search anchor are plain `>=`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    /// The origin — line 0, column 0. Wraparound restarts from here.
    pub const ZERO: Self = Self { line: 0, col: 0 };

    #[inline]
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Build from 1-indexed user input. Zero is treated as one.
    #[inline]
    #[must_use]
    pub const fn from_one_based(line: usize, col: usize) -> Self {
        Self {
            line: line.saturating_sub(1),
            col: col.saturating_sub(1),
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}:{})", self.line, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open range in a document: `[start, end)`, always `start <= end`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Create a range. Panics in debug if `start > end`.
    #[inline]
    #[must_use]
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "Range::new requires start <= end");
        Self { start, end }
    }

    /// Create a range from two arbitrary positions, swapping if needed.
    #[inline]
    #[must_use]
    pub fn ordered(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// A zero-width range at `pos`.
    #[inline]
    #[must_use]
    pub const fn point(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start.line == self.end.line && self.start.col == self.end.col
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range({}:{} .. {}:{})",
            self.start.line, self.start.col, self.end.line, self.end.col
        )
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Position -----------------------------------------------------------

    #[test]
    fn from_one_based_converts() {
        assert_eq!(Position::from_one_based(1, 1), Position::ZERO);
        assert_eq!(Position::from_one_based(10, 4), Position::new(9, 3));
        // Zero is clamped rather than underflowing.
        assert_eq!(Position::from_one_based(0, 0), Position::ZERO);
    }

    #[test]
    fn ordering_is_line_then_col() {
        let positions = [
            Position::ZERO,
            Position::new(0, 1),
            Position::new(0, 100),
            Position::new(1, 0),
            Position::new(10, 0),
        ];
        for w in positions.windows(2) {
            assert!(w[0] < w[1], "{:?} should be < {:?}", w[0], w[1]);
        }
        assert!(Position::new(3, 3) >= Position::new(3, 3));
    }

    #[test]
    fn position_formats() {
        let p = Position::new(9, 14);
        assert_eq!(format!("{p:?}"), "Pos(9:14)");
        assert_eq!(format!("{p}"), "10:15");
    }

    // -- Range --------------------------------------------------------------

    #[test]
    fn ordered_swaps_backwards_input() {
        let a = Position::new(5, 0);
        let b = Position::new(2, 3);
        let r = Range::ordered(a, b);
        assert_eq!(r.start, b);
        assert_eq!(r.end, a);
    }

    #[test]
    fn point_is_empty() {
        assert!(Range::point(Position::new(3, 7)).is_empty());
        assert!(!Range::new(Position::new(1, 0), Position::new(3, 0)).is_empty());
    }

    #[test]
    fn range_formats() {
        let r = Range::new(Position::new(0, 0), Position::new(2, 5));
        assert_eq!(format!("{r:?}"), "Range(0:0 .. 2:5)");
        assert_eq!(format!("{r}"), "1:1-3:6");
    }
}
