//! # aj-lang — Language knowledge for assign-jump
//!
//! - **[`language`]** — `LanguageId` tags and file-path classification
//! - **[`operators`]** — the assignment operator table, with user overrides

pub mod language;
pub mod operators;

pub use language::LanguageId;
pub use operators::{AssignOps, OperatorTable};
