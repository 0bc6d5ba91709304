//! Use case orchestration for repolint.
//!
//! This crate coordinates the domain, repo and render layers. The CLI crate
//! depends on it and only handles argument parsing and process IO.

#![forbid(unsafe_code)]

mod lint;
mod list;
mod render;
mod report;

pub use lint::{
    exit_code, run_lint, LintInput, LintOutput, OutputFormat, StdoutReporter, EXIT_FAILED,
    EXIT_FATAL, EXIT_PASSED,
};
pub use list::{format_list, run_list, ListOutput};
pub use render::{run_annotations, run_markdown, write_text};
pub use report::{parse_report_json, serialize_report};
