use crate::error::RuleError;
use crate::fs::FileSystem;
use crate::rules::utils::{nocase, required_globs};
use regex::RegexBuilder;
use repolint_types::{LintResult, Rule};
use serde_json::json;

/// One result per matched file: does its content match the `content` regex?
pub fn run(fs: &dyn FileSystem, rule: &Rule) -> Result<Vec<LintResult>, RuleError> {
    let globs = required_globs(rule, "files")?;
    let pattern = rule
        .option_str("content")
        .ok_or(RuleError::MissingOption("content"))?;
    let flags = rule.option_str("flags").unwrap_or("");
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(flags.contains('i'))
        .multi_line(flags.contains('m'))
        .build()
        .map_err(|e| RuleError::InvalidOption {
            option: "content",
            message: e.to_string(),
        })?;

    let files = fs.find_all(&globs, nocase(rule))?;
    if files.is_empty() {
        let fail_on_missing = rule.option_bool("fail-on-non-existent").unwrap_or(false);
        return Ok(vec![LintResult::new(
            rule,
            format!("not found: ({})", globs.join(", ")),
            !fail_on_missing,
        )]);
    }

    let mut out = Vec::with_capacity(files.len());
    for path in files {
        let text = fs.read_file(&path)?;
        let passed = regex.is_match(&text);
        let message = if passed {
            format!("File {path} contains {pattern}")
        } else {
            format!("File {path} doesn't contain {pattern}")
        };
        out.push(
            LintResult::new(rule, message, passed).with_metadata(json!({ "path": path.as_str() })),
        );
    }
    Ok(out)
}
