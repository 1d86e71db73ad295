//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PASS: &str = "Congratulations! You meet the minimum entry requirements.";
const FAIL: &str = "Sorry, you do not meet the minimum entry requirements";

/// Run in an empty directory with no rule file on any search path.
fn entrycheck(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("entrycheck").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("ENTRYCHECK_RULES");
    cmd
}

#[test]
fn evaluate_spm_pass() {
    let dir = TempDir::new().unwrap();
    entrycheck(&dir)
        .args(["evaluate", "--qualification", "spm"])
        .args(["--credits", "5", "--english", "B", "--bm", "C", "--math", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains(PASS))
        .stdout(predicate::str::contains("Note for SPM"));
}

#[test]
fn evaluate_spm_fail_math() {
    let dir = TempDir::new().unwrap();
    entrycheck(&dir)
        .args(["evaluate", "-q", "spm"])
        .args(["--credits", "5", "--english", "A", "--bm", "A", "--math", "C"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(FAIL));
}

#[test]
fn evaluate_olevel_ignores_bm() {
    let dir = TempDir::new().unwrap();
    entrycheck(&dir)
        .args(["evaluate", "--qualification", "olevel"])
        .args(["--credits", "6", "--english", "C", "--math", "B", "--bm", "F"])
        .assert()
        .success()
        .stdout(predicate::str::contains(PASS))
        .stdout(predicate::str::contains("Note for SPM").not());
}

#[test]
fn evaluate_uec_insufficient_credits() {
    let dir = TempDir::new().unwrap();
    entrycheck(&dir)
        .args(["evaluate", "--qualification", "UEC"])
        .args(["--credits", "2", "--english", "A", "--math", "A"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(FAIL));
}

#[test]
fn evaluate_non_numeric_credits() {
    let dir = TempDir::new().unwrap();
    entrycheck(&dir)
        .args(["evaluate", "--qualification", "uec"])
        .args(["--credits", "three", "--english", "A", "--math", "A"])
        .assert()
        .code(2);
}

#[test]
fn evaluate_json_output() {
    let dir = TempDir::new().unwrap();
    let output = entrycheck(&dir)
        .args(["evaluate", "--qualification", "spm", "--format", "json"])
        .args(["--credits", "5", "--english", "B", "--bm", "C", "--math", "A"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["result"]["passed"], true);
    assert_eq!(json["input"]["qualification"], "SPM");
    assert_eq!(json["input"]["relevant_credits"], 5);
}

#[test]
fn evaluate_unknown_qualification() {
    let dir = TempDir::new().unwrap();
    entrycheck(&dir)
        .args(["evaluate", "--qualification", "stpm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown qualification"));
}

#[test]
fn evaluate_with_custom_rules() {
    let dir = TempDir::new().unwrap();
    let rules = dir.path().join("lenient.toml");
    std::fs::write(
        &rules,
        r#"
[[qualifications]]
qualification = "UEC"
min_credits = 1

[qualifications.grades]
english = "D"
"#,
    )
    .unwrap();

    entrycheck(&dir)
        .args(["evaluate", "--qualification", "uec", "--credits", "1"])
        .args(["--english", "D", "--math", "F", "--rules"])
        .arg(&rules)
        .assert()
        .success()
        .stdout(predicate::str::contains(PASS));
}

#[test]
fn evaluate_picks_up_local_rule_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("entrycheck.toml"),
        r#"
[[qualifications]]
qualification = "SPM"
min_credits = 9
"#,
    )
    .unwrap();

    entrycheck(&dir)
        .args(["evaluate", "--qualification", "spm"])
        .args(["--credits", "5", "--english", "A", "--bm", "A", "--math", "A"])
        .assert()
        .code(2);
}

const STRICT_SPM: &str = r#"
[[qualifications]]
qualification = "SPM"
min_credits = 9
"#;

const LENIENT_SPM: &str = r#"
[[qualifications]]
qualification = "SPM"
min_credits = 1
"#;

/// Passes the built-in SPM rule, fails `STRICT_SPM`, passes `LENIENT_SPM`.
fn evaluate_spm_five_credits(cmd: &mut Command) -> &mut Command {
    cmd.args(["evaluate", "--qualification", "spm"])
        .args(["--credits", "5", "--english", "A", "--bm", "A", "--math", "A"])
}

#[test]
fn evaluate_uses_rules_env_var() {
    let dir = TempDir::new().unwrap();
    let rules = dir.path().join("strict.toml");
    std::fs::write(&rules, STRICT_SPM).unwrap();

    evaluate_spm_five_credits(&mut entrycheck(&dir))
        .assert()
        .success();

    evaluate_spm_five_credits(entrycheck(&dir).env("ENTRYCHECK_RULES", &rules))
        .assert()
        .code(2)
        .stdout(predicate::str::contains(FAIL));
}

#[test]
fn evaluate_uses_home_config_rules() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join(".config").join("entrycheck");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("rules.toml"), STRICT_SPM).unwrap();

    evaluate_spm_five_credits(&mut entrycheck(&dir))
        .assert()
        .code(2)
        .stdout(predicate::str::contains(FAIL));

    entrycheck(&dir)
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("rules.toml"));
}

#[test]
fn local_rule_file_beats_home_config() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join(".config").join("entrycheck");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("rules.toml"), STRICT_SPM).unwrap();
    std::fs::write(dir.path().join("entrycheck.toml"), LENIENT_SPM).unwrap();

    evaluate_spm_five_credits(&mut entrycheck(&dir))
        .assert()
        .success()
        .stdout(predicate::str::contains(PASS));
}

#[test]
fn rules_flag_overrides_env_var() {
    let dir = TempDir::new().unwrap();
    let strict = dir.path().join("strict.toml");
    let lenient = dir.path().join("lenient.toml");
    std::fs::write(&strict, STRICT_SPM).unwrap();
    std::fs::write(&lenient, LENIENT_SPM).unwrap();

    evaluate_spm_five_credits(entrycheck(&dir).env("ENTRYCHECK_RULES", &strict))
        .arg("--rules")
        .arg(&lenient)
        .assert()
        .success()
        .stdout(predicate::str::contains(PASS));
}

#[test]
fn evaluate_missing_rules_file() {
    let dir = TempDir::new().unwrap();
    entrycheck(&dir)
        .args(["evaluate", "--qualification", "spm", "--rules", "nope.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn rules_lists_builtin_table() {
    let dir = TempDir::new().unwrap();
    entrycheck(&dir)
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rules: built-in"))
        .stdout(predicate::str::contains("SPM"))
        .stdout(predicate::str::contains("OLevel"))
        .stdout(predicate::str::contains("UEC"))
        .stdout(predicate::str::contains("Bahasa Malaysia"));
}

#[test]
fn rules_filters_qualification() {
    let dir = TempDir::new().unwrap();
    entrycheck(&dir)
        .args(["rules", "--qualification", "uec"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UEC"))
        .stdout(predicate::str::contains("OLevel").not());
}

#[test]
fn init_creates_rule_file() {
    let dir = TempDir::new().unwrap();

    entrycheck(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created entrycheck.toml"));

    assert!(dir.path().join("entrycheck.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    entrycheck(&dir).arg("init").assert().success();

    entrycheck(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn init_output_validates_clean() {
    let dir = TempDir::new().unwrap();
    entrycheck(&dir).arg("init").assert().success();

    entrycheck(&dir)
        .args(["validate", "--rules", "entrycheck.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 qualifications"))
        .stdout(predicate::str::contains("Rule table valid"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let rules = dir.path().join("partial.toml");
    std::fs::write(
        &rules,
        r#"
[[qualifications]]
qualification = "OLevel"
min_credits = 0
"#,
    )
    .unwrap();

    entrycheck(&dir)
        .arg("validate")
        .arg("--rules")
        .arg(&rules)
        .assert()
        .success()
        .stdout(predicate::str::contains("[SPM] WARNING: no rule"))
        .stdout(predicate::str::contains("min_credits is 0"));
}

#[test]
fn validate_bad_grade() {
    let dir = TempDir::new().unwrap();
    let rules = dir.path().join("bad.toml");
    std::fs::write(
        &rules,
        r#"
[[qualifications]]
qualification = "SPM"
min_credits = 5

[qualifications.grades]
mathematics = "B+"
"#,
    )
    .unwrap();

    entrycheck(&dir)
        .arg("validate")
        .arg("--rules")
        .arg(&rules)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid grade"));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();
    entrycheck(&dir)
        .args(["validate", "--rules", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn interactive_session() {
    let dir = TempDir::new().unwrap();
    entrycheck(&dir)
        .arg("interactive")
        .write_stdin("select olevel\nset credits 6\nset english C\nset math B\nevaluate\nselect uec\nshow\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(PASS))
        .stdout(predicate::str::contains("Qualification: UEC (fields cleared)"))
        .stdout(predicate::str::contains("Result: (none)"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    entrycheck(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Minimum entry-requirement checker"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    entrycheck(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("entrycheck"));
}
