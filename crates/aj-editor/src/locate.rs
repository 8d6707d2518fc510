//! Assignment locator — find the next place a name is assigned.
//!
//! Given a name (the selection, or the word under the caret) and the
//! document's language, the locator builds one regex and walks its matches
//! in document order, returning the first one at or after the search anchor.
//! If there is none, it wraps to the top of the document and takes the first
//! match overall.
//!
//! # Pattern shape
//!
//! ```text
//! \b<name>\b  <gap>  (?P<op><op1>|<op2>|…)  (?:[^=]|\z)
//!             │                              └ "no `=` follows the operator"
//!             ├ strict:  \s*
//!             └ relaxed: [^=<line breaks>]*
//! ```
//!
//! The relaxed gap excludes every char the rope treats as a line break
//! (`\n`, `\r`, VT, FF, NEL, U+2028, U+2029), so a match never spans two
//! lines of the position mapping.
//!
//! The name and every operator are escaped, so `a.b` or `$x` match only
//! themselves. `\b` is placed only on an edge of the name that is a word
//! character; `\b$x` could never match at the start of a line.
//!
//! The `regex` crate has no look-around, so the trailing "not followed by
//! `=`" check consumes one extra char (or matches end of text). The scan
//! resumes at the end of the operator group rather than the end of the whole
//! match, which keeps the set of matches identical to a true `(?!=)`.
//!
//! # Positions
//!
//! Regex offsets are bytes into [`Document::contents`]. They are mapped back
//! through the rope to `(line, col)` positions before any comparison.

use aj_lang::{AssignOps, LanguageId, OperatorTable};
use regex::Regex;
use thiserror::Error;

use crate::document::Document;
use crate::options::Options;
use crate::position::{Position, Range};
use crate::selection::Selection;
use crate::word::{is_word_char, WordResolver};

// ---------------------------------------------------------------------------
// Match
// ---------------------------------------------------------------------------

/// One qualifying occurrence: the span of the name itself, not including
/// the gap or the operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    pub start: Position,
    pub end: Position,
}

impl Match {
    #[inline]
    #[must_use]
    pub fn range(&self) -> Range {
        Range::new(self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to build a search pattern.
#[derive(Debug, Error)]
pub enum LocateError {
    #[error("cannot search for an empty name")]
    EmptyTerm,

    /// The regex engine refused the pattern, e.g. a selection so large the
    /// compiled program exceeds the size limit.
    #[error("invalid assignment pattern: {0}")]
    Pattern(#[from] regex::Error),
}

// ---------------------------------------------------------------------------
// Gap policy
// ---------------------------------------------------------------------------

/// What may sit between the name and its operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gap {
    /// Whitespace only.
    Strict,
    /// Anything on the same line except `=`. "Line" is as `ropey` counts
    /// lines, Unicode separators included.
    Relaxed,
}

impl Gap {
    #[must_use]
    pub const fn from_allow_chars(allow: bool) -> Self {
        if allow { Self::Relaxed } else { Self::Strict }
    }

    const fn regex(self) -> &'static str {
        match self {
            Self::Strict => r"\s*",
            Self::Relaxed => r"[^=\n\r\x0B\x0C\x{85}\x{2028}\x{2029}]*",
        }
    }
}

// ---------------------------------------------------------------------------
// AssignmentPattern
// ---------------------------------------------------------------------------

/// A compiled "name is assigned here" pattern.
#[derive(Debug, Clone)]
pub struct AssignmentPattern {
    term: String,
    regex: Regex,
}

impl AssignmentPattern {
    /// Build the pattern for `term` followed by one of `ops`. With
    /// `allow_chars`, anything but `=` may sit between them on the same line.
    ///
    /// # Errors
    ///
    /// [`LocateError::EmptyTerm`] for an empty name, [`LocateError::Pattern`]
    /// if the regex engine rejects the result.
    pub fn new(term: &str, ops: &AssignOps, allow_chars: bool) -> Result<Self, LocateError> {
        Self::with_gap(term, ops, Gap::from_allow_chars(allow_chars))
    }

    /// Like [`new`](Self::new), with the gap policy spelled out.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn with_gap(term: &str, ops: &AssignOps, gap: Gap) -> Result<Self, LocateError> {
        if term.is_empty() {
            return Err(LocateError::EmptyTerm);
        }
        let source = pattern_source(term, ops, gap);
        let regex = Regex::new(&source)?;
        tracing::debug!(pattern = %source, "built assignment pattern");
        Ok(Self {
            term: term.to_string(),
            regex,
        })
    }

    /// The name being searched for.
    #[inline]
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The regex source.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// All non-overlapping matches, in document order.
    #[must_use]
    pub fn find_all(&self, doc: &Document) -> Vec<Match> {
        let text = doc.contents();
        let mut matches = Vec::new();
        let mut at = 0;

        while let Some(caps) = self.regex.captures_at(&text, at) {
            let (Some(whole), Some(op)) = (caps.get(0), caps.name("op")) else {
                break;
            };
            let name_start = whole.start();
            let name_end = name_start + self.term.len();

            if let (Some(start), Some(end)) =
                (doc.byte_idx_to_pos(name_start), doc.byte_idx_to_pos(name_end))
            {
                tracing::trace!(%start, op = op.as_str(), "candidate");
                matches.push(Match { start, end });
            }

            // Resume right after the operator; the char after it was only
            // inspected, not consumed. Always advances: the name is non-empty.
            at = op.end();
        }

        matches
    }
}

/// Assemble the regex source. See the module docs for the shape.
fn pattern_source(term: &str, ops: &AssignOps, gap: Gap) -> String {
    let mut src = String::with_capacity(term.len() * 2 + 32);

    if term.chars().next().is_some_and(is_word_char) {
        src.push_str(r"\b");
    }
    src.push_str(&regex::escape(term));
    if term.chars().next_back().is_some_and(is_word_char) {
        src.push_str(r"\b");
    }

    src.push_str(gap.regex());

    src.push_str("(?P<op>");
    for (i, op) in ops.iter().enumerate() {
        if i > 0 {
            src.push('|');
        }
        src.push_str(&regex::escape(op));
    }
    src.push(')');

    src.push_str(r"(?:[^=]|\z)");
    src
}

// ---------------------------------------------------------------------------
// Selection of the next match
// ---------------------------------------------------------------------------

/// First match at or after `anchor`, else the first match in the document.
///
/// Returns the match and whether the search wrapped. `matches` must be in
/// document order. "At" counts: re-running from exactly a match start lands
/// on that match again rather than skipping it.
#[must_use]
pub fn next_match(matches: &[Match], anchor: Position) -> Option<(Match, bool)> {
    if let Some(m) = matches.iter().find(|m| m.start >= anchor) {
        return Some((*m, false));
    }
    // Wraparound: restart from the origin.
    matches
        .iter()
        .find(|m| m.start >= Position::ZERO)
        .map(|m| (*m, true))
}

/// Scan `doc` with `pattern` and pick the next match from `anchor`.
#[must_use]
pub fn find_next(
    doc: &Document,
    anchor: Position,
    pattern: &AssignmentPattern,
) -> Option<(Match, bool)> {
    next_match(&pattern.find_all(doc), anchor)
}

// ---------------------------------------------------------------------------
// Locate
// ---------------------------------------------------------------------------

/// Everything one invocation reads.
pub struct LocateRequest<'a> {
    pub doc: &'a Document,
    pub selection: Selection,
    pub language: &'a LanguageId,
    pub options: &'a Options,
    pub operators: &'a OperatorTable,
    pub words: &'a dyn WordResolver,
}

/// The outcome of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located {
    /// Nothing selected and no word at the caret.
    NoTerm,
    /// The name has no qualifying assignment anywhere.
    NotFound { term: String },
    /// The next assignment.
    Found {
        term: String,
        found: Match,
        wrapped: bool,
    },
}

/// The name to search for and the range it came from.
///
/// A non-empty selection is used verbatim. A caret expands to the word
/// under it.
#[must_use]
pub fn resolve_term(
    doc: &Document,
    selection: Selection,
    words: &dyn WordResolver,
) -> Option<(String, Range)> {
    if !selection.is_caret() {
        let range = selection.range();
        return doc
            .text_in(range)
            .filter(|text| !text.is_empty())
            .map(|text| (text, range));
    }
    let range = words.resolve_word_range_at(doc, selection.active)?;
    let text = doc.text_in(range)?;
    (!text.is_empty()).then_some((text, range))
}

/// Run the whole search.
///
/// # Errors
///
/// Only when the pattern cannot be built; see [`LocateError`].
pub fn locate(req: &LocateRequest<'_>) -> Result<Located, LocateError> {
    let Some((term, source)) = resolve_term(req.doc, req.selection, req.words) else {
        tracing::debug!(selection = ?req.selection, "nothing to search");
        return Ok(Located::NoTerm);
    };

    let ops = req.operators.lookup(req.language);
    let pattern = AssignmentPattern::new(&term, ops, req.options.allow_chars_before_assign_op)?;

    let matches = pattern.find_all(req.doc);
    let anchor = source.end;
    tracing::debug!(
        term = %term,
        language = %req.language,
        ops = %ops,
        count = matches.len(),
        %anchor,
        "scanned for assignments"
    );

    Ok(match next_match(&matches, anchor) {
        Some((found, wrapped)) => {
            if wrapped {
                tracing::debug!(at = %found.start, "wrapped to top of document");
            }
            Located::Found {
                term,
                found,
                wrapped,
            }
        }
        None => Located::NotFound { term },
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
