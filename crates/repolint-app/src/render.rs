//! Render use cases: Markdown and GitHub annotations from a saved report.

use anyhow::Context;
use camino::Utf8Path;
use repolint_types::LintReport;

pub fn run_markdown(report: &LintReport) -> String {
    repolint_render::render_markdown(report)
}

pub fn run_annotations(report: &LintReport, max: usize) -> Vec<String> {
    repolint_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_text(path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write {path}"))
}
