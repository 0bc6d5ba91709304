use repolint_types::{Level, LintReport, LintResult, Verdict};

pub fn render_markdown(report: &LintReport) -> String {
    let mut out = String::new();

    out.push_str("# Repolint report\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Ruleset: `{}`\n- Results: {} (total) / {} (failed)\n",
        verdict, report.data.ruleset, report.data.results_total, report.data.results_failed
    ));
    if !report.data.targets.is_empty() {
        let targets: Vec<String> = report
            .data
            .targets
            .iter()
            .map(|t| format!("`{t}`"))
            .collect();
        out.push_str(&format!("- Targets: {}\n", targets.join(", ")));
    }
    out.push('\n');

    if report.evaluation.is_empty() {
        out.push_str("No rules ran.\n");
        return out;
    }

    let (failing, passing): (Vec<&LintResult>, Vec<&LintResult>) =
        report.results().partition(|r| !r.passed);

    if !failing.is_empty() {
        out.push_str("## Failing\n\n");
        for r in &failing {
            let level = match &r.rule.level {
                Level::Error => "ERROR".to_string(),
                Level::Warning => "WARN".to_string(),
                other => other.as_str().to_uppercase(),
            };
            out.push_str(&format!("- [{}] `{}`: {}\n", level, r.rule.id, r.message));
        }
        out.push('\n');
    }

    if !passing.is_empty() {
        out.push_str("## Passing\n\n");
        for r in &passing {
            out.push_str(&format!("- `{}`: {}\n", r.rule.id, r.message));
        }
    }

    out
}
