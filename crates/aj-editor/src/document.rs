//! Document — a read-only text snapshot with position mapping.
//!
//! A `Document` wraps a [`ropey::Rope`] and answers the questions the
//! assignment locator needs: what text is where, and how to translate
//! between the three coordinate systems in play:
//!
//! | System      | Used by                              |
//! |-------------|--------------------------------------|
//! | `Position`  | selections, carets, viewport, output |
//! | char index  | the rope                             |
//! | byte offset | regex matches over [`contents`]      |
//!
//! The snapshot is taken once per command invocation and never edited.
//!
//! [`contents`]: Document::contents

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ropey::{Rope, RopeSlice};

use crate::position::{Position, Range};

/// An immutable text document.
pub struct Document {
    rope: Rope,
    path: Option<PathBuf>,
}

impl Document {
    // -- Construction -------------------------------------------------------

    /// Create a document from a string.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            path: None,
        }
    }

    /// Load a document from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid UTF-8.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self {
            rope: Rope::from_str(&text),
            path: Some(path.to_path_buf()),
        })
    }

    // -- Text access --------------------------------------------------------

    /// The underlying rope.
    #[inline]
    #[must_use]
    pub const fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Total number of lines. An empty document has 1 line, and a trailing
    /// `\n` opens one more (empty) line.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total character count.
    #[inline]
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// A line including its line ending, or `None` past the last line.
    #[inline]
    #[must_use]
    pub fn line(&self, line: usize) -> Option<RopeSlice<'_>> {
        (line < self.rope.len_lines()).then(|| self.rope.line(line))
    }

    /// Number of chars in a line **excluding** its line ending.
    #[must_use]
    pub fn line_content_len(&self, line: usize) -> Option<usize> {
        self.line(line).map(|l| {
            let total = l.len_chars();
            if total == 0 {
                return 0;
            }
            match l.char(total - 1) {
                '\n' if total >= 2 && l.char(total - 2) == '\r' => total - 2,
                '\n' | '\r' => total - 1,
                _ => total,
            }
        })
    }

    /// Text covered by `range`, or `None` if either end is out of bounds.
    #[must_use]
    pub fn slice(&self, range: Range) -> Option<RopeSlice<'_>> {
        let start = self.pos_to_char_idx(range.start)?;
        let end = self.pos_to_char_idx(range.end)?;
        Some(self.rope.slice(start..end))
    }

    /// Text covered by `range` as an owned string.
    #[must_use]
    pub fn text_in(&self, range: Range) -> Option<String> {
        self.slice(range).map(|s| s.to_string())
    }

    /// The whole document as one contiguous string.
    ///
    /// Allocates. The regex engine needs a `&str`, so the locator calls this
    /// exactly once per invocation.
    #[must_use]
    pub fn contents(&self) -> String {
        self.rope.to_string()
    }

    // -- Coordinate conversion ----------------------------------------------

    /// Convert a position to a char index.
    ///
    /// A column equal to the line's full char count (the slot after the last
    /// char) is valid; anything beyond is `None`.
    #[must_use]
    pub fn pos_to_char_idx(&self, pos: Position) -> Option<usize> {
        if pos.line >= self.rope.len_lines() {
            return None;
        }
        let line_start = self.rope.line_to_char(pos.line);
        let line_len = self.rope.line(pos.line).len_chars();
        (pos.col <= line_len).then_some(line_start + pos.col)
    }

    /// Convert a char index to a position. `len_chars()` itself maps to the
    /// end of the document.
    #[must_use]
    pub fn char_idx_to_pos(&self, char_idx: usize) -> Option<Position> {
        if char_idx > self.rope.len_chars() {
            return None;
        }
        let line = self.rope.char_to_line(char_idx);
        let line_start = self.rope.line_to_char(line);
        Some(Position::new(line, char_idx - line_start))
    }

    /// Convert a byte offset into [`contents`](Self::contents) to a position.
    ///
    /// Offsets inside a multi-byte char resolve to that char.
    #[must_use]
    pub fn byte_idx_to_pos(&self, byte_idx: usize) -> Option<Position> {
        if byte_idx > self.rope.len_bytes() {
            return None;
        }
        self.char_idx_to_pos(self.rope.byte_to_char(byte_idx))
    }

}

impl Default for Document {
    fn default() -> Self {
        Self::from_text("")
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("lines", &self.line_count())
            .field("chars", &self.len_chars())
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
