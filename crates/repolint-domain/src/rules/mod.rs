//! Rule registry and built-in rule implementations.
//!
//! A rule module resolves either to a check function or to a nested ruleset
//! that the engine evaluates recursively.

use crate::error::RuleError;
use crate::fs::FileSystem;
use repolint_settings::Ruleset;
use repolint_types::{ids, LintResult, Rule};
use std::collections::BTreeMap;
use std::sync::Arc;

mod directory_existence;
mod file_contents;
mod file_existence;
mod file_not_exists;
mod file_type_exclusion;
mod license_detectable;
mod utils;


pub type RuleFn = dyn Fn(&dyn FileSystem, &Rule) -> Result<Vec<LintResult>, RuleError>;

/// What a rule module id resolves to.
#[derive(Clone)]
pub enum RuleEntry {
    Check(Arc<RuleFn>),
    Ruleset(Arc<Ruleset>),
}

impl std::fmt::Debug for RuleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleEntry::Check(_) => f.write_str("Check"),
            RuleEntry::Ruleset(r) => f.debug_tuple("Ruleset").field(r).finish(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RuleRegistry {
    entries: BTreeMap<String, RuleEntry>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_check(ids::RULE_FILE_EXISTENCE, file_existence::run);
        registry.register_check(ids::RULE_FILE_NOT_EXISTS, file_not_exists::run);
        registry.register_check(ids::RULE_DIRECTORY_EXISTENCE, directory_existence::run);
        registry.register_check(ids::RULE_FILE_CONTENTS, file_contents::run);
        registry.register_check(ids::RULE_FILE_TYPE_EXCLUSION, file_type_exclusion::run);
        registry.register_check(ids::RULE_LICENSE_DETECTABLE, license_detectable::run);
        registry
    }

    pub fn register_check<F>(&mut self, module: impl Into<String>, f: F)
    where
        F: Fn(&dyn FileSystem, &Rule) -> Result<Vec<LintResult>, RuleError> + 'static,
    {
        self.entries
            .insert(module.into(), RuleEntry::Check(Arc::new(f)));
    }

    /// Register a module that expands into a whole nested ruleset.
    pub fn register_ruleset(&mut self, module: impl Into<String>, ruleset: Ruleset) {
        self.entries
            .insert(module.into(), RuleEntry::Ruleset(Arc::new(ruleset)));
    }

    pub fn get(&self, module: &str) -> Option<&RuleEntry> {
        self.entries.get(module)
    }

    pub fn modules(&self) -> impl Iterator<Item = (&str, &RuleEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
