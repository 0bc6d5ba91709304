//! End-to-end CLI tests against the fixture trees in `tests/fixtures/`.
//!
//! Exit codes: 0 when no error-level rule failed, 1 when one did, 2 for
//! configuration or runtime errors.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(deprecated)]
fn repolint_cmd() -> Command {
    Command::cargo_bin("repolint").expect("repolint binary not found - run `cargo build` first")
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("repolint-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn read_json(path: &std::path::Path) -> Value {
    let text = std::fs::read_to_string(path).expect("read report");
    serde_json::from_str(&text).expect("parse report json")
}

#[test]
fn healthy_fixture_passes() {
    repolint_cmd()
        .arg(fixture("healthy"))
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Target directory: "))
        .stdout(predicate::str::contains("Ruleset: repolint.json\n"))
        .stdout(predicate::str::contains("✔ readme: found (README.md)"))
        .stdout(predicate::str::contains("✔ license-detectable: license detected (MIT) in LICENSE"));
}

#[test]
fn target_dir_flag_matches_positional() {
    repolint_cmd()
        .arg("--target-dir")
        .arg(fixture("missing_license"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✖ license: not found"));
}

#[test]
fn missing_license_fails_with_exit_one() {
    repolint_cmd()
        .arg(fixture("missing_license"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✖ license: not found: (LICENSE*, COPYING*)"))
        .stdout(predicate::str::contains(
            "⚠ changelog: not found: (CHANGELOG*) Consider keeping a changelog.",
        ));
}

#[test]
fn language_axiom_selects_rust_rules() {
    repolint_cmd()
        .arg("lint")
        .arg(fixture("language_rust"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✖ cargo-manifest: not found: (Cargo.toml)"));

    repolint_cmd()
        .arg(fixture("healthy"))
        .assert()
        .stdout(predicate::str::contains("cargo-manifest").not());
}

#[test]
fn report_and_markdown_artifacts() {
    let tmp = TempDir::new().expect("temp dir");
    let report_path = tmp.path().join("out/report.json");
    let md_path = tmp.path().join("out/report.md");

    repolint_cmd()
        .arg(fixture("missing_license"))
        .arg("--report-out")
        .arg(&report_path)
        .arg("--markdown-out")
        .arg(&md_path)
        .assert()
        .code(1);

    let report = read_json(&report_path);
    assert_eq!(report["schema"], "repolint.report.v1");
    assert_eq!(report["verdict"], "fail");
    assert_eq!(report["tool"]["name"], "repolint");
    let targets = report["data"]["targets"].as_array().expect("targets");
    assert!(targets.iter().any(|t| t == "license=*"));
    assert_eq!(report["data"]["ruleset"], "repolint.json");

    let md = std::fs::read_to_string(&md_path).expect("read markdown");
    assert!(md.contains("Verdict: **FAIL**"));
    assert!(md.contains("## Failing"));

    repolint_cmd()
        .arg("md")
        .arg("--report")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Repolint report"));

    repolint_cmd()
        .arg("annotations")
        .arg("--report")
        .arg(&report_path)
        .arg("--max")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("::error::[license]"))
        .stdout(predicate::str::contains("\n::").not());
}

#[test]
fn json_format_prints_only_results() {
    let output = repolint_cmd()
        .arg(fixture("healthy"))
        .arg("--format")
        .arg("json")
        .output()
        .expect("run repolint");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(!stdout.is_empty());
    for line in stdout.lines() {
        let value: Value = serde_json::from_str(line).expect("each line is a json result");
        assert!(value["rule"]["id"].is_string());
        assert_eq!(value["passed"], true);
    }
}

#[test]
fn explicit_ruleset_and_path_filter() {
    let tmp = TempDir::new().expect("temp dir");
    let ruleset = tmp.path().join("rules.json");
    std::fs::write(
        &ruleset,
        r#"{"rules": {"all": {"docs-readme:file-existence": ["error", {"files": ["**/README*"]}]}}}"#,
    )
    .expect("write ruleset");

    repolint_cmd()
        .arg(fixture("language_rust"))
        .arg("--ruleset")
        .arg(&ruleset)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Ruleset: ").not());

    repolint_cmd()
        .arg(fixture("language_rust"))
        .arg("--ruleset")
        .arg(&ruleset)
        .arg("--paths")
        .arg("src")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Paths to include in checks:\n\tsrc"))
        .stdout(predicate::str::contains("✖ docs-readme: not found: (**/README*)"));
}

#[test]
fn fatal_configuration_errors_exit_two() {
    let tmp = TempDir::new().expect("temp dir");
    let ruleset = tmp.path().join("rules.json");
    std::fs::write(
        &ruleset,
        r#"{"axioms": {"linguist": "language"}, "rules": {"all": {}}}"#,
    )
    .expect("write ruleset");

    repolint_cmd()
        .arg(tmp.path())
        .arg("--ruleset")
        .arg(&ruleset)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown axiom: linguist"));

    repolint_cmd()
        .arg(tmp.path().join("does-not-exist"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("target directory does not exist"));
}
