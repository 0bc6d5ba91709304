use repolint_types::{Level, LintReport};

/// Render failing results as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path}::[{rule id}] {message}`
///
/// `file=` is present when the result's metadata carries a `path`.
pub fn render_github_annotations(report: &LintReport) -> Vec<String> {
    let mut out = Vec::new();

    for r in report.results().filter(|r| !r.passed) {
        let level = match r.rule.level {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Off | Level::Other(_) => "notice",
        };

        let path = r
            .metadata
            .as_ref()
            .and_then(|m| m.get("path"))
            .and_then(|p| p.as_str());

        let message = format!("[{}] {}", r.rule.id, r.message)
            .replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A");

        match path {
            Some(path) => out.push(format!("::{level} file={path}::{message}")),
            None => out.push(format!("::{level}::{message}")),
        }
    }

    out
}
