//! Normalization of rule declarations into enabled/level/options records.

use crate::model::{value_kind, RuleDeclaration};
use repolint_types::{Level, Rule};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeclarationError {
    #[error("rule declaration must be a boolean, a string, or an array; got {0}")]
    Shape(&'static str),

    #[error("rule declaration array must contain at least one element")]
    EmptyArray,

    #[error("rule options must be an object; got {0}")]
    OptionsNotObject(&'static str),
}

/// The enabled/level/options part of a rule, before `id`/`module` are known.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleConfig {
    pub enabled: bool,
    pub level: Level,
    pub options: Map<String, Value>,
}

impl RuleConfig {
    /// Attach the identity derived from the rule key.
    pub fn into_rule(self, key: &str) -> Rule {
        let (id, module) = split_rule_key(key);
        Rule {
            id: id.to_string(),
            module: module.to_string(),
            enabled: self.enabled,
            level: self.level,
            options: self.options,
        }
    }
}

/// Normalize a raw declaration as it appears under a target in the ruleset.
pub fn parse_rule_value(value: &Value) -> Result<RuleConfig, DeclarationError> {
    parse_rule_config(&RuleDeclaration::try_from(value.clone())?)
}

pub fn parse_rule_config(decl: &RuleDeclaration) -> Result<RuleConfig, DeclarationError> {
    match decl {
        RuleDeclaration::Toggle(b) => Ok(RuleConfig {
            enabled: *b,
            level: Level::Error,
            options: Map::new(),
        }),
        RuleDeclaration::Level(s) => Ok(RuleConfig {
            enabled: enabled_from_str(s),
            level: level_from_str(s),
            options: Map::new(),
        }),
        RuleDeclaration::WithOptions(items) => {
            let spec = items.first().ok_or(DeclarationError::EmptyArray)?;
            let options = match items.get(1) {
                None => Map::new(),
                Some(Value::Object(map)) => map.clone(),
                Some(other) => return Err(DeclarationError::OptionsNotObject(value_kind(other))),
            };
            Ok(RuleConfig {
                enabled: parse_enabled(spec),
                level: parse_level(spec),
                options,
            })
        }
    }
}

/// Split `id:module` rule keys. Without exactly one `:` the id doubles as the module.
pub fn split_rule_key(key: &str) -> (&str, &str) {
    let parts: Vec<&str> = key.split(':').collect();
    let id = parts[0];
    let module = if parts.len() == 2 { parts[1] } else { id };
    (id, module)
}

fn parse_enabled(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => enabled_from_str(s),
        Value::Object(map) => {
            // Object specs are always enabled; an explicit `false` is not honored.
            if map.get("enabled").and_then(Value::as_bool) == Some(false) {
                warn!("object rule spec sets \"enabled\": false, which is ignored; use \"off\" or false instead");
            }
            true
        }
        _ => true,
    }
}

fn parse_level(value: &Value) -> Level {
    match value {
        Value::String(s) => level_from_str(s),
        _ => Level::Error,
    }
}

fn enabled_from_str(s: &str) -> bool {
    s.to_lowercase() != "off"
}

fn level_from_str(s: &str) -> Level {
    Level::from(s.trim().to_lowercase())
}
