use crate::axioms::{detect_license, license_globs};
use crate::error::RuleError;
use crate::fs::FileSystem;
use repolint_types::{LintResult, Rule};
use serde_json::json;

pub fn run(fs: &dyn FileSystem, rule: &Rule) -> Result<Vec<LintResult>, RuleError> {
    let mut globs = rule.option_str_list("files");
    if globs.is_empty() {
        globs = license_globs();
    }
    let nocase = rule.option_bool("nocase").unwrap_or(true);

    let Some(path) = fs.find_first(&globs, nocase)? else {
        return Ok(vec![LintResult::fail(
            rule,
            format!("no license file found ({})", globs.join(", ")),
        )]);
    };

    let text = fs.read_file(&path)?;
    let result = match detect_license(&text) {
        Some(id) => LintResult::pass(rule, format!("license detected ({id}) in {path}"))
            .with_metadata(json!({ "path": path.as_str(), "license": id })),
        None => LintResult::fail(rule, format!("license not detectable in {path}"))
            .with_metadata(json!({ "path": path.as_str() })),
    };
    Ok(vec![result])
}
