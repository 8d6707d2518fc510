//! The jump command — what the host calls when the user triggers it.
//!
//! The host owns an [`Editor`] (document, selection, language, viewport) and
//! looks the command up by its fixed identifier, [`COMMAND_ID`]. Running it
//! asks the locator for the next assignment and then, depending on the
//! outcome:
//!
//! | Outcome                | Selection          | Viewport   | Result     |
//! |------------------------|--------------------|------------|------------|
//! | found                  | moved to the match | revealed   | `Moved`    |
//! | name never assigned    | unchanged          | unchanged  | `Message`  |
//! | nothing under caret    | unchanged          | unchanged  | `Noop`     |
//!
//! The document is never edited.

use aj_lang::{LanguageId, OperatorTable};

use crate::document::Document;
use crate::locate::{self, LocateRequest, Located};
use crate::options::{Options, SelectionPolicy};
use crate::selection::Selection;
use crate::view::Viewport;
use crate::word::WordResolver;

/// The identifier hosts bind to a key.
pub const COMMAND_ID: &str = "jumpToNextAssignment.jumpToNextAssignment";

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Commands this crate provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move to the next assignment of the selected or hovered name.
    JumpToNextAssignment,
}

impl Command {
    /// Look a command up by identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        (id.trim() == COMMAND_ID).then_some(Self::JumpToNextAssignment)
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::JumpToNextAssignment => COMMAND_ID,
        }
    }

    /// Run the command against `editor`.
    pub fn execute(self, editor: &mut Editor, ctx: &CommandContext<'_>) -> CommandResult {
        match self {
            Self::JumpToNextAssignment => {
                jump_to_next_assignment(editor, ctx.options, ctx.operators, ctx.words)
            }
        }
    }
}

/// Read-only settings and capabilities a command needs besides the editor.
#[derive(Clone, Copy)]
pub struct CommandContext<'a> {
    pub options: &'a Options,
    pub operators: &'a OperatorTable,
    pub words: &'a dyn WordResolver,
}

/// The result of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// The selection moved. `wrapped` is set when the search restarted from
    /// the top of the document.
    Moved { selection: Selection, wrapped: bool },

    /// Nothing moved; a notice for the status line.
    Message(String),

    /// Nothing to do.
    Noop,
}

// ---------------------------------------------------------------------------
// Editor
// ---------------------------------------------------------------------------

/// Host state a command runs against.
#[derive(Debug)]
pub struct Editor {
    pub document: Document,
    pub selection: Selection,
    pub language: LanguageId,
    pub viewport: Viewport,
}

impl Editor {
    /// An editor over `document` with the caret at the top.
    #[must_use]
    pub fn new(document: Document, language: LanguageId) -> Self {
        Self {
            document,
            selection: Selection::default(),
            language,
            viewport: Viewport::default(),
        }
    }

    /// Replace the selection.
    pub const fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }
}

// ---------------------------------------------------------------------------
// Jump
// ---------------------------------------------------------------------------

/// Move `editor` to the next assignment of the selected or hovered name.
pub fn jump_to_next_assignment(
    editor: &mut Editor,
    options: &Options,
    operators: &OperatorTable,
    words: &dyn WordResolver,
) -> CommandResult {
    let request = LocateRequest {
        doc: &editor.document,
        selection: editor.selection,
        language: &editor.language,
        options,
        operators,
        words,
    };

    let located = match locate::locate(&request) {
        Ok(located) => located,
        Err(e) => {
            tracing::warn!(error = %e, "assignment search failed");
            return CommandResult::Message(format!("Cannot search: {e}."));
        }
    };

    match located {
        Located::Found { found, wrapped, .. } => {
            let selection = match options.selection {
                SelectionPolicy::Reselect => Selection::from_range(found.range()),
                SelectionPolicy::Caret => Selection::caret(found.start),
            };
            editor.selection = selection;
            editor
                .viewport
                .reveal(&editor.document, found.range(), options.reveal);
            CommandResult::Moved { selection, wrapped }
        }
        Located::NotFound { term } => {
            CommandResult::Message(format!("No assignment found for '{term}'."))
        }
        Located::NoTerm => CommandResult::Noop,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
