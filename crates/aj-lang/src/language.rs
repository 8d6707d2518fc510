//! Language identifiers — the syntax tag a document is classified under.
//!
//! A [`LanguageId`] is a lowercase string tag such as `"r"`, `"sql"` or
//! `"vhdl"`. Editor hosts normally hand us this tag directly; when we only
//! have a file path, [`LanguageId::from_path`] classifies it by extension.
//!
//! Tags are open-ended on purpose: an unknown tag is still a valid language,
//! it simply has no entry of its own in the operator table and falls back to
//! the default.

use std::fmt;
use std::path::Path;

// ---------------------------------------------------------------------------
// LanguageId
// ---------------------------------------------------------------------------

/// A normalized language tag (trimmed, lowercase).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LanguageId(String);

impl LanguageId {
    /// Tag used when nothing is known about the document.
    pub const PLAINTEXT: &'static str = "plaintext";

    /// Create a tag from any string. Surrounding whitespace is dropped and
    /// the tag is lowercased, so `" VHDL "` and `"vhdl"` are the same language.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.is_empty() {
            return Self::plaintext();
        }
        Self(tag.to_lowercase())
    }

    /// The `plaintext` tag.
    #[must_use]
    pub fn plaintext() -> Self {
        Self(Self::PLAINTEXT.to_string())
    }

    /// The tag as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the `plaintext` tag.
    #[inline]
    #[must_use]
    pub fn is_plaintext(&self) -> bool {
        self.0 == Self::PLAINTEXT
    }

    /// Classify a file by name and extension.
    ///
    /// Well-known file names are checked first (`Makefile`, `Dockerfile`),
    /// then the extension (case-insensitive, so `model.R` is `r`). Unknown
    /// files are `plaintext`.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return Self::plaintext();
        };

        if let Some(tag) = tag_for_file_name(name) {
            return Self(tag.to_string());
        }

        let tag = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .and_then(|ext| tag_for_extension(&ext));

        match tag {
            Some(tag) => Self(tag.to_string()),
            None => {
                tracing::debug!(path = %path.display(), "no language for file, using plaintext");
                Self::plaintext()
            }
        }
    }
}

impl Default for LanguageId {
    fn default() -> Self {
        Self::plaintext()
    }
}

impl From<&str> for LanguageId {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl fmt::Debug for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lang({})", self.0)
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Detection tables
// ---------------------------------------------------------------------------

fn tag_for_file_name(name: &str) -> Option<&'static str> {
    match name {
        "Makefile" | "makefile" | "GNUmakefile" => Some("makefile"),
        "Dockerfile" => Some("dockerfile"),
        "CMakeLists.txt" => Some("cmake"),
        ".Rprofile" => Some("r"),
        _ => None,
    }
}

/// Extension (lowercase, no dot) → language tag.
fn tag_for_extension(ext: &str) -> Option<&'static str> {
    let tag = match ext {
        // Languages with their own assignment operator.
        "r" | "rmd" => "r",
        "sql" => "sql",
        "css" => "css",
        "yaml" | "yml" => "yaml",
        "json" | "jsonc" => "json",
        "vhd" | "vhdl" => "vhdl",
        "v" | "vh" => "verilog",
        "sv" | "svh" => "systemverilog",
        "cbl" | "cob" | "cpy" => "cobol",

        // Languages using the default `=`.
        "rs" => "rust",
        "py" | "pyi" => "python",
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "javascriptreact",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "typescriptreact",
        "go" => "go",
        "c" | "h" => "c",
        "cc" | "cpp" | "cxx" | "hpp" | "hh" | "hxx" => "cpp",
        "cs" => "csharp",
        "java" => "java",
        "kt" | "kts" => "kotlin",
        "swift" => "swift",
        "rb" => "ruby",
        "php" => "php",
        "lua" => "lua",
        "sh" | "bash" | "zsh" => "shellscript",
        "toml" => "toml",
        "ini" | "cfg" => "ini",
        "m" => "matlab",
        "jl" => "julia",
        "scala" => "scala",
        "txt" | "text" => "plaintext",
        _ => return None,
    };
    Some(tag)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
