use crate::axioms::AxiomRegistry;
use crate::error::{LintError, RuleError, MAX_NESTING};
use crate::fs::FileSystem;
use crate::output::{Reporter, ResultFormatter, RulesetSource};
use crate::rules::{RuleEntry, RuleRegistry};
use crate::targets::resolve_targets;
use camino::Utf8Path;
use repolint_settings::{parse_rule_value, Ruleset};
use repolint_types::{Evaluation, LintResult};
use std::any::Any;
use std::collections::BTreeSet;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, instrument, warn};

/// Result of one `lint` call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LintOutcome {
    /// One entry per executed rule, in execution order. Results of nested
    /// rulesets are reported by the nested run and not included here.
    pub evaluation: Evaluation,

    /// Set when an enabled error-level rule returned a failing result,
    /// here or in any nested ruleset.
    pub failed: bool,

    /// Target labels the ruleset was evaluated against.
    pub targets: Vec<String>,

    /// Where the ruleset came from, when it was discovered rather than supplied.
    pub ruleset_origin: Option<String>,
}

/// The lint engine: resolves targets, runs matching rules and reports results.
pub struct Linter {
    fs: Box<dyn FileSystem>,
    formatter: Box<dyn ResultFormatter>,
    axioms: AxiomRegistry,
    rules: RuleRegistry,
    source: Option<Box<dyn RulesetSource>>,
    depth: usize,
}

impl Linter {
    /// Engine with the built-in axioms and rules and no ruleset source.
    pub fn new(fs: Box<dyn FileSystem>, formatter: Box<dyn ResultFormatter>) -> Self {
        Self {
            fs,
            formatter,
            axioms: AxiomRegistry::with_builtins(),
            rules: RuleRegistry::with_builtins(),
            source: None,
            depth: 0,
        }
    }

    pub fn with_axioms(mut self, axioms: AxiomRegistry) -> Self {
        self.axioms = axioms;
        self
    }

    pub fn with_rules(mut self, rules: RuleRegistry) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_ruleset_source(mut self, source: impl RulesetSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Lint `target_dir` against `ruleset`, or against a discovered ruleset
    /// when `None` is passed.
    ///
    /// Configuration problems (unknown or failing axioms, malformed rule
    /// declarations, discovery failures) abort the run. Rule failures,
    /// panics and broken nested rulesets never do: each becomes a failing
    /// result for the rule that referred to it.
    #[instrument(skip_all, fields(target_dir = %target_dir, depth = self.depth))]
    pub fn lint(
        &mut self,
        target_dir: &Utf8Path,
        filter_paths: &[String],
        ruleset: Option<&Ruleset>,
        reporter: &mut dyn Reporter,
    ) -> Result<LintOutcome, LintError> {
        self.fs.set_scope(target_dir, filter_paths);
        reporter.output_info(&format!("Target directory: {target_dir}"));
        if !filter_paths.is_empty() {
            reporter.output_info(&format!(
                "Paths to include in checks:\n\t{}",
                filter_paths.join("\n\t")
            ));
        }

        let discovered;
        let (ruleset, ruleset_origin) = match ruleset {
            Some(r) => (r, None),
            None => {
                let source = self.source.as_ref().ok_or(LintError::NoRuleset)?;
                discovered = source
                    .load(target_dir)
                    .map_err(|source| LintError::Discovery {
                        target_dir: target_dir.to_string(),
                        source,
                    })?;
                reporter.output_info(&format!("Ruleset: {}", discovered.origin));
                (&discovered.ruleset, Some(discovered.origin.clone()))
            }
        };

        let targets = resolve_targets(ruleset, &self.axioms, self.fs.as_ref())?;

        let mut evaluation = Evaluation::new();
        let mut failed = false;
        let mut seen = BTreeSet::new();

        for target in &targets {
            if !seen.insert(target.clone()) {
                continue;
            }
            let Some(section) = ruleset.rules.get(target) else {
                continue;
            };
            debug!(target = %target, rules = section.len(), "running target");

            for (key, decl) in section.iter() {
                let rule = parse_rule_value(decl)
                    .map_err(|source| LintError::InvalidRule {
                        key: key.to_string(),
                        source,
                    })?
                    .into_rule(key);
                if !rule.enabled {
                    debug!(rule = %rule.id, "rule disabled");
                    continue;
                }

                match self.rules.get(&rule.module).cloned() {
                    Some(RuleEntry::Check(check)) => {
                        let results = match run_isolated(|| check(self.fs.as_ref(), &rule)) {
                            Ok(results) => {
                                failed |= results.iter().any(LintResult::is_blocking);
                                results
                            }
                            Err(message) => {
                                warn!(rule = %rule.id, error = %message, "rule did not complete");
                                vec![LintResult::fail(&rule, message)]
                            }
                        };
                        evaluation.push(results);
                    }
                    Some(RuleEntry::Ruleset(child)) => {
                        match self.lint_nested(target_dir, filter_paths, &rule.module, &child, reporter) {
                            Ok(nested) => failed |= nested.failed,
                            Err(err) => {
                                warn!(rule = %rule.id, error = %err, "nested ruleset did not complete");
                                evaluation.push(vec![LintResult::fail(&rule, err.to_string())]);
                            }
                        }
                    }
                    None => {
                        warn!(rule = %rule.id, module = %rule.module, "no rule registered for module; skipped");
                    }
                }
            }
        }

        self.render(&evaluation, reporter);

        Ok(LintOutcome {
            evaluation,
            failed,
            targets,
            ruleset_origin,
        })
    }

    /// Recurse into a registered ruleset with the same provider. Any error
    /// here belongs to the referring rule, not to the outer run.
    fn lint_nested(
        &mut self,
        target_dir: &Utf8Path,
        filter_paths: &[String],
        module: &str,
        child: &Ruleset,
        reporter: &mut dyn Reporter,
    ) -> Result<LintOutcome, LintError> {
        if self.depth >= MAX_NESTING {
            return Err(LintError::NestingTooDeep(module.to_string()));
        }
        debug!(module, "entering nested ruleset");
        self.depth += 1;
        let nested = self.lint(target_dir, filter_paths, Some(child), reporter);
        self.depth -= 1;
        nested
    }

    fn render(&self, evaluation: &Evaluation, reporter: &mut dyn Reporter) {
        for results in evaluation {
            let (failing, passing): (Vec<&LintResult>, Vec<&LintResult>) =
                results.iter().partition(|r| !r.passed);
            for result in failing.into_iter().chain(passing) {
                if let Some(line) = self.formatter.format(result) {
                    reporter.output_result(&line);
                }
            }
        }
    }
}

/// Run a rule, turning both `Err` and panics into an error message.
fn run_isolated(
    f: impl FnOnce() -> Result<Vec<LintResult>, RuleError>,
) -> Result<Vec<LintResult>, String> {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(results)) => Ok(results),
        Ok(Err(err)) => Err(err.to_string()),
        Err(payload) => Err(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "rule panicked".to_string()
    }
}
