use repolint_domain::ResultFormatter;
use repolint_types::{Level, LintResult};

const SYMBOL_PASS: &str = "✔";
const SYMBOL_ERROR: &str = "✖";
const SYMBOL_WARNING: &str = "⚠";
const SYMBOL_INFO: &str = "ℹ";

/// One console line per result: `<symbol> <rule id>: <message>`.
///
/// Failing results pick their symbol from the rule level.
#[derive(Clone, Copy, Debug, Default)]
pub struct SymbolFormatter;

impl SymbolFormatter {
    fn symbol(result: &LintResult) -> &'static str {
        if result.passed {
            return SYMBOL_PASS;
        }
        match result.rule.level {
            Level::Error => SYMBOL_ERROR,
            Level::Warning => SYMBOL_WARNING,
            Level::Off | Level::Other(_) => SYMBOL_INFO,
        }
    }
}

impl ResultFormatter for SymbolFormatter {
    fn format(&self, result: &LintResult) -> Option<String> {
        Some(format!(
            "{} {}: {}",
            Self::symbol(result),
            result.rule.id,
            result.message
        ))
    }
}

/// One compact JSON object per result.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonFormatter;

impl ResultFormatter for JsonFormatter {
    fn format(&self, result: &LintResult) -> Option<String> {
        serde_json::to_string(result).ok()
    }
}
