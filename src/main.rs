// SPDX-License-Identifier: MIT
//
// assign-jump — jump to the next place a name is assigned.
//
// The binary plays the editor host for the jump command:
//
//   aj-lang   → language tags, per-language assignment operators
//   aj-editor → document, selection, viewport, the locator and the command
//
// One run:
//
//   args + config → options / operator table
//   FILE          → Document, LanguageId (from --language or the file name)
//   --line/--col  → Selection
//   Command::execute × --repeat → one output line per landing
//
// Output goes to stdout; diagnostics (RUST_LOG) go to stderr. "No
// assignment found" is a normal outcome and exits 0.

mod cli;
mod config;
mod logging;

use std::io::{self, Write};
use std::path::Path;
use std::process;

use aj_editor::command::{Command, CommandContext, CommandResult, Editor, COMMAND_ID};
use aj_editor::document::Document;
use aj_editor::position::Position;
use aj_editor::selection::Selection;
use aj_editor::view::Viewport;
use aj_editor::word::IdentifierWords;
use aj_lang::LanguageId;
use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::cli::CliArgs;
use crate::config::Config;

// ─── Run ────────────────────────────────────────────────────────────────────

fn run(args: &CliArgs, out: &mut impl Write) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;

    let mut options = config.options;
    args.apply_to(&mut options).context("invalid --set")?;
    let operators = config.operator_table();

    let document = Document::from_file(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let language = args
        .language
        .as_deref()
        .map_or_else(|| LanguageId::from_path(&args.file), LanguageId::new);

    let selection = args.selection();
    ensure_in_document(&document, selection.anchor)?;
    ensure_in_document(&document, selection.active)?;

    tracing::debug!(file = %args.file.display(), %language, ?selection, ?options, "starting");

    let mut editor = Editor::new(document, language);
    editor.set_selection(selection);
    editor.viewport = Viewport::new(
        args.height.unwrap_or(config.viewport.height),
        args.width.unwrap_or(config.viewport.width),
    );
    editor.viewport.set_tab_width(config.viewport.tab_width);

    let Some(command) = Command::from_id(COMMAND_ID) else {
        bail!("command {COMMAND_ID} is not registered");
    };
    tracing::debug!(command = command.id(), repeat = args.repeat, "running");
    let ctx = CommandContext {
        options: &options,
        operators: &operators,
        words: &IdentifierWords,
    };

    for _ in 0..args.repeat.max(1) {
        match command.execute(&mut editor, &ctx) {
            CommandResult::Moved { selection, wrapped } => {
                let line =
                    landing_line(&args.file, selection, editor.viewport.top_line(), wrapped);
                writeln!(out, "{line}")?;
            }
            CommandResult::Message(message) => {
                writeln!(out, "{message}")?;
                break;
            }
            CommandResult::Noop => {
                tracing::info!(at = %editor.selection.active, "no name at caret");
                break;
            }
        }
    }

    Ok(())
}

/// A 1-indexed position must name a real slot on a real line.
fn ensure_in_document(doc: &Document, pos: Position) -> Result<()> {
    let fits = doc
        .line_content_len(pos.line)
        .is_some_and(|len| pos.col <= len);
    if !fits {
        bail!(
            "position {pos} is outside the document ({} lines)",
            doc.line_count()
        );
    }
    Ok(())
}

/// `path:line:col start-end top=N`, all 1-indexed.
fn landing_line(path: &Path, selection: Selection, top_line: usize, wrapped: bool) -> String {
    let mut line = format!(
        "{}:{} {} top={}",
        path.display(),
        selection.start(),
        selection.range(),
        top_line + 1
    );
    if wrapped {
        line.push_str(" (wrapped)");
    }
    line
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    logging::init();
    let args = CliArgs::parse();

    let stdout = io::stdout();
    if let Err(e) = run(&args, &mut stdout.lock()) {
        eprintln!("assign-jump: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    /// A temp dir holding `name` with `text` and an empty config file.
    fn fixture(name: &str, text: &str) -> (TempDir, String, String) {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(name);
        fs::write(&file, text).unwrap();
        let config = dir.path().join("config.toml");
        fs::write(&config, "").unwrap();
        (
            dir,
            file.to_string_lossy().into_owned(),
            config.to_string_lossy().into_owned(),
        )
    }

    fn run_cli(file: &str, config: &str, extra: &[&str]) -> Result<String> {
        let mut argv = vec!["assign-jump", file, "--config", config];
        argv.extend_from_slice(extra);
        let args = CliArgs::try_parse_from(argv)?;
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    #[test]
    fn landing_line_format() {
        let sel = Selection::new(Position::new(2, 4), Position::new(2, 7));
        assert_eq!(
            landing_line(Path::new("a.py"), sel, 0, false),
            "a.py:3:5 3:5-3:8 top=1"
        );
        assert_eq!(
            landing_line(Path::new("a.py"), Selection::caret(Position::ZERO), 9, true),
            "a.py:1:1 1:1-1:1 top=10 (wrapped)"
        );
    }

    #[test]
    fn ensure_in_document_bounds() {
        let doc = Document::from_text("abc\nde");
        assert!(ensure_in_document(&doc, Position::new(0, 3)).is_ok());
        assert!(ensure_in_document(&doc, Position::new(1, 2)).is_ok());
        assert!(ensure_in_document(&doc, Position::new(0, 4)).is_err());
        assert!(ensure_in_document(&doc, Position::new(2, 0)).is_err());
    }

    // ── End to end ────────────────────────────────────────────────────────

    #[test]
    fn jumps_and_prints_landing() {
        let (_dir, file, config) = fixture("calc.py", "x = 1\nprint(x)\nx = 2\n");
        let out = run_cli(&file, &config, &["-l", "2", "-c", "7"]).unwrap();
        assert_eq!(out, format!("{file}:3:1 3:1-3:2 top=1\n"));
    }

    #[test]
    fn repeat_cycles_with_wraparound() {
        let (_dir, file, config) = fixture("loop.py", "i = 0\ni = 1\n");
        let out = run_cli(&file, &config, &["--repeat", "3"]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                format!("{file}:2:1 2:1-2:2 top=1"),
                format!("{file}:1:1 1:1-1:2 top=1 (wrapped)"),
                format!("{file}:2:1 2:1-2:2 top=1"),
            ]
        );
    }

    #[test]
    fn language_from_extension() {
        let (_dir, file, config) = fixture("model.R", "foo = 1\nfoo <- 2\n");
        let out = run_cli(&file, &config, &[]).unwrap();
        assert_eq!(out, format!("{file}:2:1 2:1-2:4 top=1\n"));
    }

    #[test]
    fn language_flag_overrides_extension() {
        let (_dir, file, config) = fixture("model.R", "foo = 1\nfoo <- 2\n");
        let out = run_cli(&file, &config, &["--language", "python", "-l", "2"]).unwrap();
        assert_eq!(out, format!("{file}:1:1 1:1-1:4 top=1 (wrapped)\n"));
    }

    #[test]
    fn allow_chars_flag() {
        let (_dir, file, config) = fixture("t.ts", "let x: number = 5;\n");
        let out = run_cli(&file, &config, &["-c", "5"]).unwrap();
        assert_eq!(out, "No assignment found for 'x'.\n");
        let out = run_cli(&file, &config, &["-c", "5", "--allow-chars"]).unwrap();
        assert_eq!(out, format!("{file}:1:5 1:5-1:6 top=1 (wrapped)\n"));
    }

    #[test]
    fn nothing_under_caret_prints_nothing() {
        let (_dir, file, config) = fixture("a.txt", "a = b\n");
        let out = run_cli(&file, &config, &["-c", "3"]).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn set_directive_overrides_config() {
        let (dir, file, _) = fixture("a.txt", "k = 1\nk = 2\n");
        let config = dir.path().join("caret.toml");
        fs::write(&config, "selection = \"caret\"\n").unwrap();
        let out = run_cli(&file, config.to_str().unwrap(), &["--set", "reselect"]).unwrap();
        assert_eq!(out, format!("{file}:2:1 2:1-2:2 top=1\n"));
    }

    #[test]
    fn bad_set_directive_fails() {
        let (_dir, file, config) = fixture("a.txt", "k = 1\n");
        let err = run_cli(&file, &config, &["--set", "center?"]).unwrap_err();
        assert!(format!("{err:#}").contains("unknown option: center?"));
    }

    #[test]
    fn caret_policy_from_config() {
        let (dir, file, _) = fixture("a.txt", "k = 1\nk = 2\n");
        let config = dir.path().join("caret.toml");
        fs::write(&config, "selection = \"caret\"\n").unwrap();
        let out = run_cli(&file, config.to_str().unwrap(), &[]).unwrap();
        assert_eq!(out, format!("{file}:2:1 2:1-2:1 top=1\n"));
    }

    #[test]
    fn caret_outside_document_fails() {
        let (_dir, file, config) = fixture("a.txt", "k = 1\n");
        let err = run_cli(&file, &config, &["-l", "9"]).unwrap_err();
        assert!(err.to_string().contains("outside the document"));
    }

    #[test]
    fn missing_file_fails() {
        let (dir, _, config) = fixture("a.txt", "");
        let missing = dir.path().join("gone.rs");
        let err = run_cli(missing.to_str().unwrap(), &config, &[]).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read"));
    }
}
