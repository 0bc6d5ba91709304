use crate::rule::Rule;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One pass/fail judgment produced by a rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LintResult {
    pub rule: Rule,
    pub message: String,

    /// Rule-specific structured payload (matched paths, detected values).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonValue>,

    pub passed: bool,
}

impl LintResult {
    pub fn new(rule: &Rule, message: impl Into<String>, passed: bool) -> Self {
        Self {
            rule: rule.clone(),
            message: message.into(),
            metadata: None,
            passed,
        }
    }

    pub fn pass(rule: &Rule, message: impl Into<String>) -> Self {
        Self::new(rule, message, true)
    }

    pub fn fail(rule: &Rule, message: impl Into<String>) -> Self {
        Self::new(rule, message, false)
    }

    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// A failing result at error level: the only kind that fails a run.
    pub fn is_blocking(&self) -> bool {
        !self.passed && self.rule.level.is_error()
    }
}

/// Results of one lint invocation: one entry per executed rule, in execution order.
pub type Evaluation = Vec<Vec<LintResult>>;
