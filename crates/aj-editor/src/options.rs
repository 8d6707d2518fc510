//! Command options and the `:set` directive syntax.
//!
//! [`Options`] holds everything the locator reads at invocation time. Values
//! come from three layers, later wins: defaults, the config file (via
//! `serde`), then `:set`-style directives given on the command line.
//!
//! # Supported syntax
//!
//! | Syntax          | Effect                        |
//! |-----------------|-------------------------------|
//! | `option`        | Enable                        |
//! | `nooption`      | Disable                       |
//! | `option=value`  | Assign (`true`/`false`, `on`/`off`, `1`/`0`, `yes`/`no`) |
//!
//! # Option names
//!
//! | Full name                  | Abbrev | Default | Meaning                                  |
//! |----------------------------|--------|---------|------------------------------------------|
//! | `allowcharsbeforeassignop` | `acb`  | false   | Allow non-`=` text between name and op   |
//! | `reselect`                 | `rs`   | true    | Select the name at the match (else caret)|
//! | `center`                   | `cen`  | true    | Center the match (else minimal scroll)   |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::RevealPolicy;

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

/// What the selection looks like after a successful jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Collapse to a caret at the start of the matched name.
    Caret,
    /// Select the matched name.
    #[default]
    Reselect,
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Options read by the jump command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Allow any characters except `=` and line breaks between the name and
    /// the operator (`x: int = 5`). Off means only whitespace may separate them.
    #[serde(alias = "allowCharsBeforeAssignOp")]
    pub allow_chars_before_assign_op: bool,

    /// Post-match selection.
    pub selection: SelectionPolicy,

    /// Post-match scrolling.
    pub reveal: RevealPolicy,
}

/// Errors from applying a `:set` directive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("unknown option: {0}")]
    Unknown(String),

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// The known options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionName {
    AllowCharsBeforeAssignOp,
    Reselect,
    Center,
}

impl OptionName {
    /// Look up a full name or abbreviation.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "allowcharsbeforeassignop" | "acb" => Some(Self::AllowCharsBeforeAssignOp),
            "reselect" | "rs" => Some(Self::Reselect),
            "center" | "cen" => Some(Self::Center),
            _ => None,
        }
    }
}

impl Options {
    /// Set an option.
    pub fn set(&mut self, name: OptionName, value: bool) {
        match name {
            OptionName::AllowCharsBeforeAssignOp => self.allow_chars_before_assign_op = value,
            OptionName::Reselect => {
                self.selection = if value {
                    SelectionPolicy::Reselect
                } else {
                    SelectionPolicy::Caret
                };
            }
            OptionName::Center => {
                self.reveal = if value {
                    RevealPolicy::Center
                } else {
                    RevealPolicy::Minimal
                };
            }
        }
    }

    /// Apply one directive.
    ///
    /// # Errors
    ///
    /// [`OptionError::Unknown`] for an unknown name, and
    /// [`OptionError::InvalidValue`] for an assignment that is not a boolean.
    pub fn apply(&mut self, directive: &SetDirective) -> Result<(), OptionError> {
        match directive {
            SetDirective::On(name) => self.set(lookup(name)?, true),
            SetDirective::Off(name) => self.set(lookup(name)?, false),
            SetDirective::Assign(name, value) => {
                let opt = lookup(name)?;
                let value = parse_bool(value).ok_or_else(|| OptionError::InvalidValue {
                    name: name.clone(),
                    value: value.clone(),
                })?;
                self.set(opt, value);
            }
        }
        Ok(())
    }

    /// Apply a whole `:set` argument string. Stops at the first failing
    /// directive; the ones before it stay applied.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn apply_all(&mut self, args: &str) -> Result<(), OptionError> {
        parse_set(args)
            .iter()
            .try_for_each(|directive| self.apply(directive))
    }
}

fn lookup(name: &str) -> Result<OptionName, OptionError> {
    OptionName::parse(name).ok_or_else(|| OptionError::Unknown(name.to_string()))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// :set directives
// ---------------------------------------------------------------------------

/// A parsed `:set` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetDirective {
    /// `option`
    On(String),
    /// `nooption`
    Off(String),
    /// `option=value`
    Assign(String, String),
}

/// Parse space-separated `:set` arguments. Blank input yields nothing.
#[must_use]
pub fn parse_set(args: &str) -> Vec<SetDirective> {
    args.split_whitespace().map(parse_set_arg).collect()
}

/// Parse a single `:set` argument.
#[must_use]
pub fn parse_set_arg(arg: &str) -> SetDirective {
    if let Some((name, value)) = arg.split_once('=') {
        return SetDirective::Assign(name.to_string(), value.to_string());
    }

    // `no` prefix only negates a known option, so a future option whose
    // name starts with "no" still parses as itself.
    if let Some(name) = arg.strip_prefix("no") {
        if OptionName::parse(name).is_some() {
            return SetDirective::Off(name.to_string());
        }
    }

    SetDirective::On(arg.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Defaults ─────────────────────────────────────────────────────────

    #[test]
    fn defaults_are_strict_reselect_center() {
        let o = Options::default();
        assert!(!o.allow_chars_before_assign_op);
        assert_eq!(o.selection, SelectionPolicy::Reselect);
        assert_eq!(o.reveal, RevealPolicy::Center);
    }

    // ── parse_set_arg ────────────────────────────────────────────────────

    #[test]
    fn parse_forms() {
        assert_eq!(parse_set_arg("acb"), SetDirective::On("acb".into()));
        assert_eq!(parse_set_arg("noacb"), SetDirective::Off("acb".into()));
        assert_eq!(
            parse_set_arg("reselect=off"),
            SetDirective::Assign("reselect".into(), "off".into())
        );
    }

    #[test]
    fn no_prefix_on_unknown_name_is_not_negation() {
        assert_eq!(parse_set_arg("nothing"), SetDirective::On("nothing".into()));
    }

    #[test]
    fn parse_set_blank_is_empty() {
        assert!(parse_set("   ").is_empty());
    }

    #[test]
    fn parse_set_multiple() {
        assert_eq!(
            parse_set("acb nocenter rs=1"),
            vec![
                SetDirective::On("acb".into()),
                SetDirective::Off("center".into()),
                SetDirective::Assign("rs".into(), "1".into()),
            ]
        );
    }

    // ── apply ────────────────────────────────────────────────────────────

    #[test]
    fn apply_changes_policies() {
        let mut o = Options::default();
        o.apply_all("allowcharsbeforeassignop noreselect nocen").unwrap();
        assert!(o.allow_chars_before_assign_op);
        assert_eq!(o.selection, SelectionPolicy::Caret);
        assert_eq!(o.reveal, RevealPolicy::Minimal);
    }

    #[test]
    fn apply_assign() {
        let mut o = Options::default();
        o.apply(&SetDirective::Assign("acb".into(), "YES".into())).unwrap();
        assert!(o.allow_chars_before_assign_op);
        o.apply(&SetDirective::Assign("acb".into(), "off".into())).unwrap();
        assert!(!o.allow_chars_before_assign_op);
    }

    #[test]
    fn apply_unknown_option_fails() {
        let mut o = Options::default();
        assert_eq!(
            o.apply_all("wrapscan"),
            Err(OptionError::Unknown("wrapscan".into()))
        );
        assert_eq!(
            o.apply_all("acb?"),
            Err(OptionError::Unknown("acb?".into()))
        );
    }

    #[test]
    fn apply_bad_value_fails() {
        let mut o = Options::default();
        let err = o.apply_all("acb=maybe").unwrap_err();
        assert_eq!(
            err,
            OptionError::InvalidValue {
                name: "acb".into(),
                value: "maybe".into()
            }
        );
        assert_eq!(err.to_string(), "invalid value for acb: maybe");
    }

    #[test]
    fn apply_stops_at_first_error() {
        let mut o = Options::default();
        assert!(o.apply_all("acb bogus nocenter").is_err());
        // `acb` took effect, `nocenter` never ran.
        assert!(o.allow_chars_before_assign_op);
        assert_eq!(o.reveal, RevealPolicy::Center);
    }
}
