//! The `lint` use case: evaluate a ruleset against a directory and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use repolint_domain::{Linter, Reporter, ResultFormatter};
use repolint_render::{JsonFormatter, SymbolFormatter};
use repolint_repo::{load_ruleset_file, DiskRulesetSource, LocalFileSystem};
use repolint_types::{
    Evaluation, LintData, LintReport, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;
use tracing::info;

pub const EXIT_PASSED: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_FATAL: i32 = 2;

/// How results are printed while linting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `✔ rule: message` lines, preceded by informational lines.
    #[default]
    Symbol,
    /// One JSON object per result and nothing else.
    Json,
}

/// Input for the lint use case.
#[derive(Clone, Debug)]
pub struct LintInput<'a> {
    pub target_dir: &'a Utf8Path,
    /// Explicit ruleset file; discovery runs when absent.
    pub ruleset_path: Option<&'a Utf8Path>,
    /// Inclusion globs; empty means the whole target directory.
    pub filter_paths: Vec<String>,
    pub format: OutputFormat,
}

/// Output from the lint use case.
#[derive(Clone, Debug)]
pub struct LintOutput {
    pub report: LintReport,
    /// The process-wide failure flag, including nested rulesets.
    pub failed: bool,
}

/// Prints engine output to stdout.
#[derive(Clone, Copy, Debug)]
pub struct StdoutReporter {
    show_info: bool,
}

impl StdoutReporter {
    pub fn for_format(format: OutputFormat) -> Self {
        Self {
            show_info: format == OutputFormat::Symbol,
        }
    }
}

impl Reporter for StdoutReporter {
    fn output_info(&mut self, line: &str) {
        if self.show_info {
            println!("{line}");
        }
    }

    fn output_result(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Run the lint use case: load or discover the ruleset, lint, build the report.
pub fn run_lint(input: LintInput<'_>, reporter: &mut dyn Reporter) -> anyhow::Result<LintOutput> {
    let started_at = OffsetDateTime::now_utc();

    let explicit = match input.ruleset_path {
        Some(path) => Some(load_ruleset_file(path).context("load ruleset")?),
        None => None,
    };

    let formatter: Box<dyn ResultFormatter> = match input.format {
        OutputFormat::Symbol => Box::new(SymbolFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    let mut linter = Linter::new(Box::new(LocalFileSystem::new(input.target_dir)), formatter)
        .with_ruleset_source(DiskRulesetSource);

    let outcome = linter
        .lint(
            input.target_dir,
            &input.filter_paths,
            explicit.as_ref(),
            reporter,
        )
        .with_context(|| format!("lint {}", input.target_dir))?;

    let finished_at = OffsetDateTime::now_utc();
    let ruleset = match (input.ruleset_path, outcome.ruleset_origin) {
        (Some(path), _) => path.to_string(),
        (None, Some(origin)) => origin,
        (None, None) => String::new(),
    };
    let data = summarize(
        &outcome.evaluation,
        LintData {
            target_dir: input.target_dir.to_string(),
            ruleset,
            filter_paths: input.filter_paths.clone(),
            targets: outcome.targets,
            ..LintData::default()
        },
    );
    info!(
        rules_run = data.rules_run,
        results_failed = data.results_failed,
        failed = outcome.failed,
        "lint finished"
    );

    let report = LintReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "repolint".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: if outcome.failed {
            Verdict::Fail
        } else {
            Verdict::Pass
        },
        evaluation: outcome.evaluation,
        data,
    };

    Ok(LintOutput {
        report,
        failed: outcome.failed,
    })
}

fn summarize(evaluation: &Evaluation, mut data: LintData) -> LintData {
    data.rules_run = evaluation.len() as u32;
    data.results_total = evaluation.iter().map(|e| e.len() as u32).sum();
    data.results_failed = evaluation
        .iter()
        .flatten()
        .filter(|r| !r.passed)
        .count() as u32;
    data
}

/// Map the failure flag to the process exit code.
pub fn exit_code(failed: bool) -> i32 {
    if failed { EXIT_FAILED } else { EXIT_PASSED }
}
