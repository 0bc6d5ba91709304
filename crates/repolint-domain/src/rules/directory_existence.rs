use crate::error::RuleError;
use crate::fs::FileSystem;
use crate::rules::utils::{nocase, not_found_message, required_globs};
use repolint_types::{LintResult, Rule};
use serde_json::json;

pub fn run(fs: &dyn FileSystem, rule: &Rule) -> Result<Vec<LintResult>, RuleError> {
    let globs = required_globs(rule, "directories")?;
    let dirs = fs.find_all_dirs(&globs, nocase(rule))?;
    let result = match dirs.first() {
        Some(dir) => LintResult::pass(rule, format!("found ({dir})"))
            .with_metadata(json!({ "path": dir.as_str() })),
        None => LintResult::fail(rule, not_found_message(rule, &globs)),
    };
    Ok(vec![result])
}
