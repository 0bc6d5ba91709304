use crate::error::RuleError;
use crate::fs::FileSystem;
use crate::rules::utils::{nocase, not_found_message, required_globs};
use repolint_types::{LintResult, Rule};
use serde_json::json;

/// Passes when at least one file matches `files`.
pub fn run(fs: &dyn FileSystem, rule: &Rule) -> Result<Vec<LintResult>, RuleError> {
    let globs = required_globs(rule, "files")?;
    let result = match fs.find_first(&globs, nocase(rule))? {
        Some(path) => LintResult::pass(rule, format!("found ({path})"))
            .with_metadata(json!({ "path": path.as_str() })),
        None => LintResult::fail(rule, not_found_message(rule, &globs)),
    };
    Ok(vec![result])
}
