use crate::result::LintResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for repolint reports.
pub const SCHEMA_REPORT_V1: &str = "repolint.report.v1";

/// Verdict is intentionally binary: it maps directly to the process exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Repolint-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct LintData {
    pub target_dir: String,

    /// Where the ruleset came from (file path or the bundled default marker).
    pub ruleset: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_paths: Vec<String>,

    /// Active target labels, in resolution order.
    pub targets: Vec<String>,

    pub rules_run: u32,
    pub results_total: u32,
    pub results_failed: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LintReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub evaluation: Vec<Vec<LintResult>>,
    pub data: LintData,
}

impl LintReport {
    pub fn results(&self) -> impl Iterator<Item = &LintResult> {
        self.evaluation.iter().flatten()
    }
}
