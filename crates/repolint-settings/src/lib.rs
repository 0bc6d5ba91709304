//! Ruleset parsing and rule declaration normalization.
//!
//! This crate is intentionally IO-free: it parses rulesets provided as strings.
//! Finding ruleset files on disk is `repolint-repo`'s job.

#![forbid(unsafe_code)]

mod model;
mod parse;

use anyhow::Context;

pub use model::{RuleDeclaration, Ruleset};
pub use parse::{
    parse_rule_config, parse_rule_value, split_rule_key, DeclarationError, RuleConfig,
};

/// Document-ordered map used for every keyed section of a ruleset.
pub type OrderedMap<V> = indexmap::IndexMap<String, V>;

/// Schema identifier accepted in a ruleset's `$schema` field.
pub const SCHEMA_RULESET_V1: &str = "repolint.ruleset.v1";

const DEFAULT_RULESET: &str = include_str!("../rulesets/default.json");

/// Parse a `repolint.json` document into a typed model.
///
/// Rule declarations are normalized later, and only for targets that are
/// active in a run.
pub fn parse_ruleset_json(input: &str) -> anyhow::Result<Ruleset> {
    let ruleset: Ruleset = serde_json::from_str(input)?;
    validate_ruleset(&ruleset)?;
    Ok(ruleset)
}

/// The ruleset used when no `repolint.json`/`repolinter.json` is found.
pub fn bundled_default() -> anyhow::Result<Ruleset> {
    parse_ruleset_json(DEFAULT_RULESET).context("parse bundled default ruleset")
}

/// Raw text of the bundled default ruleset (for schema conformance checks).
pub fn bundled_default_text() -> &'static str {
    DEFAULT_RULESET
}

fn validate_ruleset(ruleset: &Ruleset) -> anyhow::Result<()> {
    if let Some(schema) = ruleset.schema.as_deref()
        && !schema.ends_with(SCHEMA_RULESET_V1)
    {
        anyhow::bail!("unknown ruleset schema: {schema} (expected {SCHEMA_RULESET_V1})");
    }
    Ok(())
}
