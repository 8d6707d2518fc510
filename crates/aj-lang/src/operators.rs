//! Assignment operator table — which token binds a variable in each language.
//!
//! The table is a closed, data-only mapping. Adding a language means adding a
//! row to [`BUILTIN`], never a new code path:
//!
//! | Language        | Operator(s)   |
//! |-----------------|---------------|
//! | *(default)*     | `=`           |
//! | `r`             | `<-`          |
//! | `cobol`         | `==`          |
//! | `sql`           | `:=`          |
//! | `css`           | `:`           |
//! | `yaml`          | `:`           |
//! | `json`          | `:`           |
//! | `vhdl`          | `:=`, `<=`    |
//! | `verilog`       | `=`           |
//! | `systemverilog` | `=`           |
//!
//! # Invariant
//!
//! Every [`AssignOps`] holds at least one operator and no operator is empty.
//! An empty operator would turn the search pattern into "identifier followed
//! by anything", so empties are dropped on construction and an entry left
//! with nothing falls back to the default `=`.

use std::collections::HashMap;
use std::fmt;

use crate::language::LanguageId;

/// The operator used when a language has no entry of its own.
pub const DEFAULT_OPERATOR: &str = "=";

/// Built-in rows: language tag → operators, in alternation order.
pub const BUILTIN: &[(&str, &[&str])] = &[
    ("r", &["<-"]),
    ("cobol", &["=="]),
    ("sql", &[":="]),
    ("css", &[":"]),
    ("yaml", &[":"]),
    ("json", &[":"]),
    ("vhdl", &[":=", "<="]),
    ("verilog", &["="]),
    ("systemverilog", &["="]),
];

// ---------------------------------------------------------------------------
// AssignOps
// ---------------------------------------------------------------------------

/// A non-empty, ordered set of literal assignment operators.
#[derive(Clone, PartialEq, Eq)]
pub struct AssignOps(Vec<String>);

impl AssignOps {
    /// The default operator set: just `=`.
    #[must_use]
    pub fn default_ops() -> Self {
        Self(vec![DEFAULT_OPERATOR.to_string()])
    }

    /// Build an operator set, dropping empty strings and duplicates while
    /// keeping the first-seen order. Returns `None` if nothing usable is left.
    #[must_use]
    pub fn new<I, S>(ops: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for op in ops {
            let op = op.into();
            if !op.is_empty() && !out.contains(&op) {
                out.push(op);
            }
        }
        if out.is_empty() { None } else { Some(Self(out)) }
    }

    /// Like [`new`](Self::new), but an empty result becomes the default set.
    #[must_use]
    pub fn or_default<I, S>(ops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ops).unwrap_or_else(Self::default_ops)
    }

    /// The operators in alternation order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Debug for AssignOps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

impl fmt::Display for AssignOps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "`{op}`")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// OperatorTable
// ---------------------------------------------------------------------------

/// Language → operator lookup with a default fallback.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    default: AssignOps,
    entries: HashMap<String, AssignOps>,
}

impl OperatorTable {
    /// The built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(tag, ops)| ((*tag).to_string(), AssignOps::or_default(ops.iter().copied())))
            .collect();
        Self {
            default: AssignOps::default_ops(),
            entries,
        }
    }

    /// Layer user overrides over this table.
    ///
    /// Keys are language tags (normalized like [`LanguageId::new`]); the key
    /// `"default"` replaces the fallback entry. An override whose operators
    /// are all empty is kept as the default operator rather than rejected,
    /// so a typo in a config file can never produce a degenerate pattern.
    #[must_use]
    pub fn with_overrides<I, K, V, S>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (tag, ops) in overrides {
            let tag = LanguageId::new(tag.as_ref());
            let ops = AssignOps::new(ops).unwrap_or_else(|| {
                tracing::warn!(language = %tag, "empty operator override, using `{DEFAULT_OPERATOR}`");
                AssignOps::default_ops()
            });
            if tag.as_str() == "default" {
                self.default = ops;
            } else {
                self.entries.insert(tag.as_str().to_string(), ops);
            }
        }
        self
    }

    /// Operators for a language, or the default entry if it has none.
    #[must_use]
    pub fn lookup(&self, lang: &LanguageId) -> &AssignOps {
        self.entries.get(lang.as_str()).unwrap_or(&self.default)
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ops(table: &OperatorTable, tag: &str) -> Vec<String> {
        table.lookup(&LanguageId::new(tag)).iter().map(str::to_string).collect()
    }

    // -- AssignOps ----------------------------------------------------------

    #[test]
    fn assign_ops_drops_empties_and_duplicates() {
        let set = AssignOps::new([":=", "", "<=", ":="]).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![":=", "<="]);
    }

    #[test]
    fn assign_ops_all_empty_is_none() {
        assert!(AssignOps::new(["", ""]).is_none());
        assert!(AssignOps::new(Vec::<String>::new()).is_none());
    }

    #[test]
    fn assign_ops_or_default_falls_back() {
        assert_eq!(AssignOps::or_default([""]), AssignOps::default_ops());
    }

    #[test]
    fn assign_ops_display() {
        let set = AssignOps::new([":=", "<="]).unwrap();
        assert_eq!(set.to_string(), "`:=` | `<=`");
    }

    // -- Built-in table -----------------------------------------------------

    #[test]
    fn builtin_rows() {
        let table = OperatorTable::builtin();
        assert_eq!(ops(&table, "r"), vec!["<-"]);
        assert_eq!(ops(&table, "cobol"), vec!["=="]);
        assert_eq!(ops(&table, "sql"), vec![":="]);
        assert_eq!(ops(&table, "css"), vec![":"]);
        assert_eq!(ops(&table, "yaml"), vec![":"]);
        assert_eq!(ops(&table, "json"), vec![":"]);
        assert_eq!(ops(&table, "vhdl"), vec![":=", "<="]);
        assert_eq!(ops(&table, "verilog"), vec!["="]);
        assert_eq!(ops(&table, "systemverilog"), vec!["="]);
    }

    #[test]
    fn unknown_language_uses_default() {
        let table = OperatorTable::builtin();
        assert_eq!(ops(&table, "rust"), vec!["="]);
        assert_eq!(ops(&table, "plaintext"), vec!["="]);
    }

    #[test]
    fn every_builtin_entry_is_non_empty() {
        let table = OperatorTable::builtin();
        for (tag, _) in BUILTIN {
            let set = table.lookup(&LanguageId::new(tag));
            assert!(set.iter().all(|op| !op.is_empty()), "{tag}");
        }
    }

    // -- Overrides ----------------------------------------------------------

    #[test]
    fn override_adds_language() {
        let table = OperatorTable::builtin().with_overrides([("python", vec!["=", ":="])]);
        assert_eq!(ops(&table, "python"), vec!["=", ":="]);
    }

    #[test]
    fn override_replaces_builtin() {
        let table = OperatorTable::builtin().with_overrides([("R", vec!["<-", "="])]);
        assert_eq!(ops(&table, "r"), vec!["<-", "="]);
    }

    #[test]
    fn empty_override_falls_back_to_default_operator() {
        let table = OperatorTable::builtin().with_overrides([("sql", vec![""])]);
        assert_eq!(ops(&table, "sql"), vec!["="]);
    }

    #[test]
    fn override_default_entry() {
        let table = OperatorTable::builtin().with_overrides([("default", vec![":"])]);
        assert_eq!(ops(&table, "rust"), vec![":"]);
        // Explicit rows are untouched.
        assert_eq!(ops(&table, "r"), vec!["<-"]);
    }
}
