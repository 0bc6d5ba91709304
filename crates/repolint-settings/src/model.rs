use crate::OrderedMap;
use crate::parse::DeclarationError;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `repolint.json` ruleset document.
///
/// This is a *user-facing* model: unknown top-level keys are ignored so older
/// rulesets keep loading.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Ruleset {
    /// Optional schema string for tooling (`repolint.ruleset.v1`).
    #[serde(
        default,
        rename = "$schema",
        skip_serializing_if = "Option::is_none"
    )]
    pub schema: Option<String>,

    /// Map of axiom id -> target name, evaluated in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axioms: Option<OrderedMap<String>>,

    /// Map of target label -> (rule key -> declaration).
    ///
    /// Declarations stay raw until their target is active, so a malformed
    /// rule under an inactive target does not reject the ruleset.
    #[serde(default)]
    #[schemars(with = "OrderedMap<OrderedMap<RuleDeclaration>>")]
    pub rules: OrderedMap<OrderedMap<Value>>,
}

impl Ruleset {
    /// Declared axioms as `(axiom_id, target_name)` pairs, in document order.
    pub fn axiom_declarations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.axioms
            .iter()
            .flat_map(|a| a.iter().map(|(id, name)| (id.as_str(), name.as_str())))
    }

    pub fn target_labels(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

/// Raw rule declaration as written in a ruleset.
///
/// - `true` / `false`
/// - `"off"`, `"warning"`, `"error"` (any string)
/// - `[spec, options?]` where `spec` is a boolean, a level string, or an object
#[derive(Clone, Debug, PartialEq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum RuleDeclaration {
    Toggle(bool),
    Level(String),
    WithOptions(Vec<Value>),
}

impl TryFrom<Value> for RuleDeclaration {
    type Error = DeclarationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(RuleDeclaration::Toggle(b)),
            Value::String(s) => Ok(RuleDeclaration::Level(s)),
            Value::Array(items) => Ok(RuleDeclaration::WithOptions(items)),
            other => Err(DeclarationError::Shape(value_kind(&other))),
        }
    }
}

impl<'de> Deserialize<'de> for RuleDeclaration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        RuleDeclaration::try_from(value).map_err(serde::de::Error::custom)
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
