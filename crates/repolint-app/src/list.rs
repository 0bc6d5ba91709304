//! The `list` use case: show what the built-in registries provide.

use repolint_domain::{Axiom, AxiomRegistry, RuleEntry, RuleRegistry};

/// Registered rule modules and axioms, sorted by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListOutput {
    pub rules: Vec<String>,
    /// `(axiom id, kind)` where kind is `categorical` or `counting (<keyword>)`.
    pub axioms: Vec<(String, String)>,
}

pub fn run_list() -> ListOutput {
    let rules = RuleRegistry::with_builtins();
    let axioms = AxiomRegistry::with_builtins();

    ListOutput {
        rules: rules
            .modules()
            .map(|(module, entry)| match entry {
                RuleEntry::Check(_) => module.to_string(),
                RuleEntry::Ruleset(_) => format!("{module} (ruleset)"),
            })
            .collect(),
        axioms: axioms
            .ids()
            .filter_map(|id| {
                let kind = match axioms.get(id)? {
                    Axiom::Categorical(_) => "categorical".to_string(),
                    Axiom::Counting { keyword, .. } => format!("counting ({keyword})"),
                };
                Some((id.to_string(), kind))
            })
            .collect(),
    }
}

pub fn format_list(list: &ListOutput) -> String {
    let mut out = String::new();

    out.push_str("Rules:\n");
    for rule in &list.rules {
        out.push_str(&format!("  - {rule}\n"));
    }
    out.push_str("\nAxioms:\n");
    for (id, kind) in &list.axioms {
        out.push_str(&format!("  - {id}: {kind}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use repolint_types::ids;

    #[test]
    fn lists_every_builtin() {
        let list = run_list();
        assert_eq!(list.rules, ids::all_rule_ids());
        let axiom_ids: Vec<&str> = list.axioms.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(axiom_ids, ids::all_axiom_ids());
    }

    #[test]
    fn formats_axiom_kinds() {
        let text = format_list(&run_list());
        assert!(text.contains("  - file-existence\n"));
        assert!(text.contains("  - contributor-count: counting (contributor)\n"));
        assert!(text.contains("  - license: categorical\n"));
    }
}
