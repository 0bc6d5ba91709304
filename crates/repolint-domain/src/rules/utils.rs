use crate::error::RuleError;
use repolint_types::{Rule, RepoPath};
use serde_json::{json, Value};

pub fn required_globs(rule: &Rule, option: &'static str) -> Result<Vec<String>, RuleError> {
    let globs = rule.option_str_list(option);
    if globs.is_empty() {
        return Err(RuleError::MissingOption(option));
    }
    Ok(globs)
}

pub fn nocase(rule: &Rule) -> bool {
    rule.option_bool("nocase").unwrap_or(false)
}

/// `not found: (a, b) <fail-message>`
pub fn not_found_message(rule: &Rule, globs: &[String]) -> String {
    let mut msg = format!("not found: ({})", globs.join(", "));
    if let Some(extra) = rule.option_str("fail-message") {
        msg.push(' ');
        msg.push_str(extra);
    }
    msg
}

pub fn paths_json(paths: &[RepoPath]) -> Value {
    json!(paths.iter().map(RepoPath::as_str).collect::<Vec<_>>())
}
