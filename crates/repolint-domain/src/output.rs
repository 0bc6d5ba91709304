//! Seams the engine reports through: result formatting, line output and
//! ruleset discovery. Implementations live in `repolint-render` and `repolint-repo`.

use camino::Utf8Path;
use repolint_settings::Ruleset;
use repolint_types::LintResult;

/// Turns one result into a printable line. `None` suppresses the result.
pub trait ResultFormatter {
    fn format(&self, result: &LintResult) -> Option<String>;
}

/// Sink for the engine's informational lines and formatted results.
pub trait Reporter {
    fn output_info(&mut self, line: &str);
    fn output_result(&mut self, line: &str);
}

/// A ruleset plus a label describing where it came from (a path or
/// `<bundled default>`).
#[derive(Clone, Debug)]
pub struct LoadedRuleset {
    pub origin: String,
    pub ruleset: Ruleset,
}

/// Finds a ruleset for a target directory when the caller supplied none.
pub trait RulesetSource {
    fn load(
        &self,
        target_dir: &Utf8Path,
    ) -> Result<LoadedRuleset, Box<dyn std::error::Error + Send + Sync>>;
}

/// Reporter that keeps every line in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryReporter {
    pub info: Vec<String>,
    pub results: Vec<String>,
}

impl Reporter for MemoryReporter {
    fn output_info(&mut self, line: &str) {
        self.info.push(line.to_string());
    }

    fn output_result(&mut self, line: &str) {
        self.results.push(line.to_string());
    }
}
