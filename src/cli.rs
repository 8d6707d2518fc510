//! Command-line arguments.
//!
//! The binary stands in for an editor host: the file is the document, the
//! caret (or selection) comes from flags, and each run invokes the jump
//! command one or more times.

use std::path::PathBuf;

use aj_editor::options::{OptionError, OptionName, Options};
use aj_editor::position::Position;
use aj_editor::selection::Selection;
use clap::Parser;

/// Jump to the next place a name is assigned
#[derive(Parser, Debug)]
#[command(name = "assign-jump", version, about = "Jump to the next assignment of a name")]
pub struct CliArgs {
    /// File to search
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Caret line (1-indexed)
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    pub line: usize,

    /// Caret column in characters (1-indexed)
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    pub column: usize,

    /// Extend a selection from the caret to LINE:COL (1-indexed)
    #[arg(long, value_name = "LINE:COL", value_parser = parse_line_col)]
    pub to: Option<Position>,

    /// Language tag (default: guessed from the file name)
    #[arg(long, value_name = "ID")]
    pub language: Option<String>,

    /// Allow any characters except `=` between the name and the operator
    #[arg(long, overrides_with = "strict")]
    pub allow_chars: bool,

    /// Allow only whitespace between the name and the operator
    #[arg(long, overrides_with = "allow_chars")]
    pub strict: bool,

    /// Option directives, e.g. `--set "noreselect acb=on"`
    #[arg(long = "set", value_name = "OPTIONS")]
    pub set: Vec<String>,

    /// Run the command N times in a row, printing each landing
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub repeat: usize,

    /// Viewport height in rows
    #[arg(long, value_name = "ROWS")]
    pub height: Option<usize>,

    /// Viewport width in columns
    #[arg(long, value_name = "COLS")]
    pub width: Option<usize>,

    /// Config file (default: the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// The starting selection: a caret at `--line`/`--column`, extended to
    /// `--to` when given. Converted from 1-indexed to 0-indexed.
    pub const fn selection(&self) -> Selection {
        let anchor = Position::from_one_based(self.line, self.column);
        match self.to {
            Some(active) => Selection::new(anchor, active),
            None => Selection::caret(anchor),
        }
    }

    /// `--allow-chars` / `--strict`, if either was given.
    pub const fn allow_chars(&self) -> Option<bool> {
        if self.allow_chars {
            Some(true)
        } else if self.strict {
            Some(false)
        } else {
            None
        }
    }

    /// Layer the flags over `options`: the gap flags first, then each
    /// `--set` in order.
    pub fn apply_to(&self, options: &mut Options) -> Result<(), OptionError> {
        if let Some(allow) = self.allow_chars() {
            options.set(OptionName::AllowCharsBeforeAssignOp, allow);
        }
        self.set
            .iter()
            .try_for_each(|directives| options.apply_all(directives))
    }
}

/// Parse `LINE:COL` (1-indexed) into a 0-indexed position.
fn parse_line_col(s: &str) -> Result<Position, String> {
    let (line, col) = s
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COL, got `{s}`"))?;
    let line: usize = line
        .trim()
        .parse()
        .map_err(|_| format!("invalid line `{line}`"))?;
    let col: usize = col
        .trim()
        .parse()
        .map_err(|_| format!("invalid column `{col}`"))?;
    if line == 0 || col == 0 {
        return Err("line and column start at 1".to_string());
    }
    Ok(Position::from_one_based(line, col))
}
