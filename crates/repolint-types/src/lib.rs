//! Stable DTOs and IDs used across the repolint workspace.
//!
//! This crate is intentionally boring:
//! - the normalized rule record and its severity level
//! - lint results and the evaluation they aggregate into
//! - the emitted report envelope
//! - stable string IDs (rules, axioms, file names, schemas)

#![forbid(unsafe_code)]

pub mod ids;
pub mod path;
pub mod report;
pub mod result;
pub mod rule;

pub use path::RepoPath;
pub use report::{LintData, LintReport, ToolMeta, Verdict, SCHEMA_REPORT_V1};
pub use result::{Evaluation, LintResult};
pub use rule::{Level, Rule};
