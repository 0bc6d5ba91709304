//! Developer tasks: JSON schema generation and ruleset conformance checks.
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use repolint_types::{
    LintData, LintReport, LintResult, Rule, SCHEMA_REPORT_V1, ToolMeta, Verdict,
};
use schemars::schema_for;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

/// Workspace root (parent of the xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest_dir.to_path_buf())
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_ruleset_schema() -> schemars::Schema {
    schema_for!(repolint_settings::Ruleset)
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(repolint_types::LintReport)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "repolint.ruleset.v1.json",
            generate: generate_ruleset_schema,
        },
        SchemaSpec {
            filename: "repolint.report.v1.json",
            generate: generate_report_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas/ matches what the Rust types generate.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }
        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {name}");
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {name}");
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn compile(schema: schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(&schema).context("Failed to serialize schema")?;
    jsonschema::validator_for(&value).map_err(|e| anyhow::anyhow!("Failed to compile schema: {e}"))
}

fn schema_errors(validator: &jsonschema::Validator, instance: &Value) -> Vec<String> {
    validator
        .iter_errors(instance)
        .map(|e| e.to_string())
        .collect()
}

/// Ruleset files checked by `conform`: the bundled default plus every fixture ruleset.
fn conformance_rulesets() -> anyhow::Result<Vec<(String, String)>> {
    let mut out = vec![(
        "<bundled default>".to_string(),
        repolint_settings::bundled_default_text().to_string(),
    )];

    let dir = fixtures_dir();
    let mut entries: Vec<PathBuf> = fs::read_dir(&dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path().join("repolint.json"))
        .filter(|p| p.is_file())
        .collect();
    entries.sort();

    for path in entries {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        out.push((path.display().to_string(), text));
    }
    Ok(out)
}

fn sample_report() -> LintReport {
    let rule = Rule::new("license", "file-existence");
    let now = OffsetDateTime::now_utc();
    LintReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "repolint".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        evaluation: vec![vec![
            LintResult::fail(&rule, "not found: (LICENSE*)")
                .with_metadata(serde_json::json!({ "path": "LICENSE" })),
        ]],
        data: LintData {
            target_dir: ".".to_string(),
            ruleset: "<bundled default>".to_string(),
            targets: vec!["all".to_string()],
            rules_run: 1,
            results_total: 1,
            results_failed: 1,
            ..LintData::default()
        },
    }
}

/// Validate rulesets and a sample report against the generated schemas.
///
/// Every ruleset must also load through the real parser, with every
/// declaration normalizing, active target or not.
fn conform() -> anyhow::Result<()> {
    let ruleset_validator = compile(generate_ruleset_schema())?;
    let report_validator = compile(generate_report_schema())?;
    let mut errors = Vec::new();

    let rulesets = conformance_rulesets()?;
    for (name, text) in &rulesets {
        let value: Value = match serde_json::from_str(text) {
            Ok(v) => v,
            Err(e) => {
                errors.push(format!("{name}: invalid JSON: {e}"));
                continue;
            }
        };
        for err in schema_errors(&ruleset_validator, &value) {
            errors.push(format!("{name}: {err}"));
        }
        match repolint_settings::parse_ruleset_json(text) {
            Ok(ruleset) => {
                for (target, section) in &ruleset.rules {
                    for (key, decl) in section {
                        if let Err(e) = repolint_settings::parse_rule_value(decl) {
                            errors.push(format!("{name}: rule '{key}' under '{target}': {e}"));
                        }
                    }
                }
            }
            Err(e) => errors.push(format!("{name}: {e:#}")),
        }
    }

    let report = serde_json::to_value(sample_report()).context("Failed to serialize report")?;
    for err in schema_errors(&report_validator, &report) {
        errors.push(format!("sample report: {err}"));
    }
    let round_trip: LintReport =
        serde_json::from_value(report).context("Sample report does not round-trip")?;
    if round_trip.schema != SCHEMA_REPORT_V1 {
        errors.push(format!("sample report: schema is {}", round_trip.schema));
    }

    if !errors.is_empty() {
        for err in &errors {
            eprintln!("  - {err}");
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }
    println!("Checked {} rulesets and the sample report.", rulesets.len());
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate bundled and fixture rulesets against the ruleset schema");
}

fn main() -> anyhow::Result<()> {
    let cmd = std::env::args().nth(1).unwrap_or_else(|| "help".to_string());
    match cmd.as_str() {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "print-schema-ids" => {
            println!("{}", repolint_settings::SCHEMA_RULESET_V1);
            println!("{SCHEMA_REPORT_V1}");
            Ok(())
        }
        "conform" => conform(),
        other => bail!("unknown xtask command: {other}"),
    }
}
