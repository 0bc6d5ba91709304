//! Ruleset evaluation: axioms, target resolution and rule dispatch.
//!
//! Input: a ruleset and a [`FileSystem`] constructed elsewhere.
//! Output: an evaluation (one entry of results per executed rule) plus the
//! process-wide failure flag.

#![forbid(unsafe_code)]

pub mod axioms;
pub mod error;
pub mod fs;
pub mod output;
pub mod rules;
pub mod targets;

mod engine;

#[cfg(test)]
mod test_support;

pub use axioms::{Axiom, AxiomRegistry};
pub use engine::{LintOutcome, Linter};
pub use error::{AxiomError, FsError, LintError, RuleError};
pub use fs::{compile_globs, FileSystem, PathFilter};
pub use output::{LoadedRuleset, MemoryReporter, Reporter, ResultFormatter, RulesetSource};
pub use rules::{RuleEntry, RuleRegistry};
pub use targets::resolve_targets;
