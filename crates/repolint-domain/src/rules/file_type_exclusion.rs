use crate::error::RuleError;
use crate::fs::FileSystem;
use crate::rules::utils::required_globs;
use repolint_types::{LintResult, Rule};
use serde_json::json;

/// Fails once per file matching an excluded `type` glob.
pub fn run(fs: &dyn FileSystem, rule: &Rule) -> Result<Vec<LintResult>, RuleError> {
    let types = required_globs(rule, "type")?;
    let found = fs.find_all(&types, false)?;
    if found.is_empty() {
        return Ok(vec![LintResult::pass(
            rule,
            format!("Excluded file types don't exist ({})", types.join(", ")),
        )]);
    }
    Ok(found
        .iter()
        .map(|path| {
            LintResult::fail(rule, format!("Excluded file type exists ({path})"))
                .with_metadata(json!({ "path": path.as_str() }))
        })
        .collect())
}
