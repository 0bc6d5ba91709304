//! Stable identifiers for built-in rules, axioms and well-known file names.
//!
//! Rule and axiom IDs are kebab-case module names as they appear in rulesets.

// Targets
pub const TARGET_ALL: &str = "all";

// Rules
pub const RULE_FILE_EXISTENCE: &str = "file-existence";
pub const RULE_FILE_NOT_EXISTS: &str = "file-not-exists";
pub const RULE_DIRECTORY_EXISTENCE: &str = "directory-existence";
pub const RULE_FILE_CONTENTS: &str = "file-contents";
pub const RULE_FILE_TYPE_EXCLUSION: &str = "file-type-exclusion";
pub const RULE_LICENSE_DETECTABLE: &str = "license-detectable";

// Axioms
pub const AXIOM_LANGUAGE: &str = "language";
pub const AXIOM_LICENSE: &str = "license";
pub const AXIOM_CONTRIBUTOR_COUNT: &str = "contributor-count";

/// Rule-section keys containing this keyword are candidate count targets.
pub const KEYWORD_CONTRIBUTOR: &str = "contributor";

// Ruleset discovery
pub const RULESET_FILE_PRIMARY: &str = "repolint.json";
pub const RULESET_FILE_LEGACY: &str = "repolinter.json";
pub const RULESET_BUNDLED_DEFAULT: &str = "<bundled default>";

pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        RULE_DIRECTORY_EXISTENCE,
        RULE_FILE_CONTENTS,
        RULE_FILE_EXISTENCE,
        RULE_FILE_NOT_EXISTS,
        RULE_FILE_TYPE_EXCLUSION,
        RULE_LICENSE_DETECTABLE,
    ]
}

pub fn all_axiom_ids() -> &'static [&'static str] {
    &[AXIOM_CONTRIBUTOR_COUNT, AXIOM_LANGUAGE, AXIOM_LICENSE]
}
