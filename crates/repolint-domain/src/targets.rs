//! Target resolution: which rule sections of a ruleset apply to this repository.

use crate::axioms::{Axiom, AxiomRegistry};
use crate::error::LintError;
use crate::fs::FileSystem;
use regex::Regex;
use repolint_settings::Ruleset;
use repolint_types::ids;
use std::sync::LazyLock;
use tracing::{debug, instrument};

static OPERATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[<>=]").expect("valid regex"));
static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// Comparison embedded in a counting target key such as `contributors>10`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Comparison {
    pub op: CompareOp,
    pub threshold: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareOp {
    Lt,
    Gt,
    Eq,
}

impl Comparison {
    /// First operator character and first digit run in `key`, if both exist.
    pub fn parse(key: &str) -> Option<Self> {
        let op = match OPERATOR.find(key)?.as_str() {
            "<" => CompareOp::Lt,
            ">" => CompareOp::Gt,
            _ => CompareOp::Eq,
        };
        let threshold = NUMBER.find(key)?.as_str().parse().ok()?;
        Some(Self { op, threshold })
    }

    pub fn holds(&self, value: i64) -> bool {
        match self.op {
            CompareOp::Lt => value < self.threshold,
            CompareOp::Gt => value > self.threshold,
            CompareOp::Eq => value == self.threshold,
        }
    }
}

/// Labels of every target that applies, starting with `all`.
///
/// Duplicates are possible when two axioms yield the same label; the engine
/// tolerates them.
#[instrument(skip_all)]
pub fn resolve_targets(
    ruleset: &Ruleset,
    axioms: &AxiomRegistry,
    fs: &dyn FileSystem,
) -> Result<Vec<String>, LintError> {
    let mut targets = vec![ids::TARGET_ALL.to_string()];

    for (axiom_id, name) in ruleset.axiom_declarations() {
        let axiom = axioms
            .get(axiom_id)
            .ok_or_else(|| LintError::UnknownAxiom(axiom_id.to_string()))?;
        targets.push(format!("{name}=*"));

        match axiom {
            Axiom::Categorical(run) => {
                let outcomes = run(fs).map_err(|source| LintError::Axiom {
                    id: axiom_id.to_string(),
                    source,
                })?;
                debug!(axiom = axiom_id, ?outcomes, "categorical axiom evaluated");
                targets.extend(outcomes.into_iter().map(|v| format!("{name}={v}")));
            }
            Axiom::Counting { keyword, count } => {
                let candidates: Vec<&str> = ruleset
                    .target_labels()
                    .filter(|label| label.contains(keyword.as_str()))
                    .collect();
                if candidates.is_empty() {
                    continue;
                }
                let value = count(fs).map_err(|source| LintError::Axiom {
                    id: axiom_id.to_string(),
                    source,
                })?;
                debug!(axiom = axiom_id, value, "counting axiom evaluated");
                for label in candidates {
                    match Comparison::parse(label) {
                        Some(cmp) if cmp.holds(value) => targets.push(label.to_string()),
                        Some(_) => {}
                        None => debug!(label, "no comparison in counting target; skipped"),
                    }
                }
            }
        }
    }

    debug!(?targets, "targets resolved");
    Ok(targets)
}
