//! # aj-editor — Editor model and the assignment jump for assign-jump
//!
//! This crate contains everything between a text snapshot and a moved caret:
//!
//! - **[`position`]** — `Position` (line, col) and `Range` types, 0-indexed
//! - **[`document`]** — `Document`, a read-only rope with position/byte mapping
//! - **[`selection`]** — anchor/active selection; a caret is a collapsed one
//! - **[`word`]** — the `WordResolver` capability and the identifier default
//! - **[`view`]** — viewport scroll state and reveal policies
//! - **[`options`]** — user options and the `:set`-style directive parser
//! - **[`locate`]** — the assignment locator: pattern building, scan, wraparound
//! - **[`command`]** — the command entry point the host invokes by identifier
//!
//! Operator tables and language tags live in `aj-lang`.

pub mod command;
pub mod document;
pub mod locate;
pub mod options;
pub mod position;
pub mod selection;
pub mod view;
pub mod word;
