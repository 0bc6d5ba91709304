//! Rendering for lint results: per-result console formatters plus report-level
//! Markdown and GitHub Actions annotations.

#![forbid(unsafe_code)]

mod formatter;
mod gha;
mod markdown;

pub use formatter::{JsonFormatter, SymbolFormatter};
pub use gha::render_github_annotations;
pub use markdown::render_markdown;
