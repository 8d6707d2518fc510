//! Word ranges — which identifier is "under the caret".
//!
//! When nothing is selected, the command searches for the word the caret
//! sits in. What counts as a word is a host decision (a Lisp mode and a C
//! mode disagree about `-`), so the lookup is a trait, [`WordResolver`],
//! injected by the caller. [`IdentifierWords`] is the default: runs of
//! the same characters the regex `\w` class matches.
//!
//! # Caret placement
//!
//! A caret touching a word from either side selects it:
//!
//! ```text
//! total = 0      caret before `t`  → total
//! total| = 0     caret after `l`   → total
//! total =| 0     caret after `=`   → nothing
//! ```

use crate::document::Document;
use crate::position::{Position, Range};

// ---------------------------------------------------------------------------
// Character classification
// ---------------------------------------------------------------------------

/// A Unicode `\w` character: letters, marks, decimal digits, connector
/// punctuation (`_`) and joiners. Must agree with the regex engine's `\b`,
/// or a name ending in a combining mark gets the wrong boundaries.
#[inline]
#[must_use]
pub fn is_word_char(ch: char) -> bool {
    regex_syntax::is_word_character(ch)
}

// ---------------------------------------------------------------------------
// WordResolver
// ---------------------------------------------------------------------------

/// Host capability: the word range at a caret position.
pub trait WordResolver {
    /// The range of the word at `pos`, or `None` if the caret is not on or
    /// next to a word.
    fn resolve_word_range_at(&self, doc: &Document, pos: Position) -> Option<Range>;
}

/// Default resolver: maximal runs of [`is_word_char`] characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierWords;

impl WordResolver for IdentifierWords {
    fn resolve_word_range_at(&self, doc: &Document, pos: Position) -> Option<Range> {
        let rope = doc.rope();
        let total = rope.len_chars();
        let idx = doc.pos_to_char_idx(pos)?;

        // Prefer the char under the caret, then the one just before it.
        let seed = if idx < total && is_word_char(rope.char(idx)) {
            idx
        } else if idx > 0 && is_word_char(rope.char(idx - 1)) {
            idx - 1
        } else {
            return None;
        };

        let mut start = seed;
        while start > 0 && is_word_char(rope.char(start - 1)) {
            start -= 1;
        }
        let mut end = seed + 1;
        while end < total && is_word_char(rope.char(end)) {
            end += 1;
        }

        Some(Range::new(
            doc.char_idx_to_pos(start)?,
            doc.char_idx_to_pos(end)?,
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn word_at(text: &str, line: usize, col: usize) -> Option<String> {
        let doc = Document::from_text(text);
        let range = IdentifierWords.resolve_word_range_at(&doc, Position::new(line, col))?;
        doc.text_in(range)
    }

    // -- is_word_char -------------------------------------------------------

    #[test]
    fn word_chars() {
        for ch in ['a', 'Z', '_', '9', 'é', '\u{301}', '\u{200D}', '‿'] {
            assert!(is_word_char(ch), "{ch:?}");
        }
        for ch in ['=', '$', '.', ' ', '\t', '\n', '²'] {
            assert!(!is_word_char(ch), "{ch:?}");
        }
    }

    // -- IdentifierWords ----------------------------------------------------

    #[test]
    fn caret_inside_word() {
        assert_eq!(word_at("let total = 0;", 0, 6).as_deref(), Some("total"));
    }

    #[test]
    fn caret_at_word_start() {
        assert_eq!(word_at("let total = 0;", 0, 4).as_deref(), Some("total"));
    }

    #[test]
    fn caret_just_after_word() {
        assert_eq!(word_at("let total = 0;", 0, 9).as_deref(), Some("total"));
    }

    #[test]
    fn caret_at_end_of_document() {
        assert_eq!(word_at("x = y", 0, 5).as_deref(), Some("y"));
    }

    #[test]
    fn caret_on_operator_between_blanks() {
        assert_eq!(word_at("a = b", 0, 2), None);
    }

    #[test]
    fn caret_on_blank_line() {
        assert_eq!(word_at("a\n\nb", 1, 0), None);
    }

    #[test]
    fn word_does_not_cross_lines() {
        assert_eq!(word_at("abc\ndef", 1, 0).as_deref(), Some("def"));
        assert_eq!(word_at("abc\ndef", 0, 3).as_deref(), Some("abc"));
    }

    #[test]
    fn underscores_and_digits_are_word() {
        assert_eq!(word_at("my_var2 <- 1", 0, 3).as_deref(), Some("my_var2"));
    }

    #[test]
    fn unicode_word() {
        assert_eq!(word_at("größe = 3", 0, 2).as_deref(), Some("größe"));
    }

    #[test]
    fn decomposed_accent_stays_in_word() {
        // `cafe` + U+0301 COMBINING ACUTE ACCENT.
        let text = "print(cafe\u{301})";
        assert_eq!(word_at(text, 0, 7).as_deref(), Some("cafe\u{301}"));
        assert_eq!(word_at(text, 0, 11).as_deref(), Some("cafe\u{301}"));
    }

    #[test]
    fn superscript_digit_is_not_word() {
        assert_eq!(word_at("x² = 1", 0, 0).as_deref(), Some("x"));
    }

    #[test]
    fn out_of_bounds_is_none() {
        assert_eq!(word_at("abc", 4, 0), None);
        assert_eq!(word_at("", 0, 0), None);
    }
}
