use crate::error::RuleError;
use crate::fs::FileSystem;
use crate::rules::utils::{nocase, paths_json, required_globs};
use repolint_types::{LintResult, Rule};
use serde_json::json;

pub fn run(fs: &dyn FileSystem, rule: &Rule) -> Result<Vec<LintResult>, RuleError> {
    let globs = required_globs(rule, "files")?;
    let found = fs.find_all(&globs, nocase(rule))?;
    let result = if found.is_empty() {
        LintResult::pass(rule, format!("not found: ({})", globs.join(", ")))
    } else {
        let listed: Vec<&str> = found.iter().map(|p| p.as_str()).collect();
        LintResult::fail(rule, format!("found ({})", listed.join(", ")))
            .with_metadata(json!({ "paths": paths_json(&found) }))
    };
    Ok(vec![result])
}
