//! Integration tests for the pubdiff binary.

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("pubdiff-adapters")
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn pubdiff() -> Command {
    let mut cmd = Command::cargo_bin("pubdiff").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_subcommands() {
    pubdiff()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("inspect"));
}

#[test]
fn version_flag() {
    pubdiff()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_color_env_accepts_any_value() {
    let base = fixture("textile-base.toml");
    for value in ["1", "true", "yes"] {
        pubdiff()
            .env("NO_COLOR", value)
            .arg("compare")
            .arg("-b")
            .arg(&base)
            .arg("-n")
            .arg(&base)
            .assert()
            .success();
    }
}

#[test]
fn identical_builds_print_nothing() {
    let base = fixture("textile-base.toml");
    pubdiff()
        .arg("compare")
        .arg("--baseline")
        .arg(&base)
        .arg("--challenger")
        .arg(&base)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn plain_output_marks_each_side() {
    let assert = pubdiff()
        .arg("compare")
        .arg("-b")
        .arg(fixture("textile-base.toml"))
        .arg("-n")
        .arg(fixture("textile-visibility.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "+ Textile.Blocks.HyperLinkBlockModifier System.String m_rel",
        ))
        .stdout(predicate::str::contains("- Textile.Blocks.CapitalsBlockModifier "));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 14);
    assert_eq!(lines.iter().filter(|l| l.starts_with("- ")).count(), 8);
    assert_eq!(lines.iter().filter(|l| l.starts_with("+ ")).count(), 6);
}

#[test]
fn json_output_carries_counts() {
    let assert = pubdiff()
        .args(["--output-format", "json", "compare"])
        .arg("-b")
        .arg(fixture("textile-base.toml"))
        .arg("-n")
        .arg(fixture("textile-visibility.toml"))
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["baseline"], "Textile-base");
    assert_eq!(value["count"], 14);
    assert_eq!(value["removed"], 8);
    assert_eq!(value["added"], 6);
}

#[test]
fn fail_on_differences_exits_five() {
    pubdiff()
        .arg("compare")
        .arg("-b")
        .arg(fixture("textile-base.toml"))
        .arg("-n")
        .arg(fixture("textile-visibility.toml"))
        .arg("--fail-on-differences")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("14 public interface difference(s) found"));
}

#[test]
fn fail_on_differences_passes_for_identical_builds() {
    let base = fixture("textile-base.toml");
    pubdiff()
        .arg("compare")
        .arg("-b")
        .arg(&base)
        .arg("-n")
        .arg(&base)
        .arg("--fail-on-differences")
        .assert()
        .success();
}

#[test]
fn report_and_variables_files() {
    let temp = TempDir::new().unwrap();
    let report = temp.path().join("out").join("api-changes.txt");
    let vars = temp.path().join("build.properties");
    fs::write(&vars, "version=1.2\napi.changes=0\n").unwrap();

    pubdiff()
        .arg("-q")
        .arg("compare")
        .arg("-b")
        .arg(fixture("textile-base.toml"))
        .arg("-n")
        .arg(fixture("textile-visibility.toml"))
        .arg("--report")
        .arg(&report)
        .args(["--property", "api.changes", "--variables-file"])
        .arg(&vars)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let lines = fs::read_to_string(&report).unwrap();
    assert_eq!(lines.lines().count(), 14);
    assert!(lines.lines().all(|l| !l.starts_with("- ") && !l.starts_with("+ ")));
    assert_eq!(
        fs::read_to_string(&vars).unwrap(),
        "version=1.2\napi.changes=14\n"
    );
}

#[test]
fn property_without_file_goes_to_stdout() {
    let base = fixture("textile-base.toml");
    pubdiff()
        .arg("compare")
        .arg("-b")
        .arg(&base)
        .arg("-n")
        .arg(&base)
        .args(["--property", "api.changes"])
        .assert()
        .success()
        .stdout("api.changes=0\n");
}

#[test]
fn missing_descriptor_exits_three() {
    let temp = TempDir::new().unwrap();
    pubdiff()
        .arg("compare")
        .arg("-b")
        .arg(temp.path().join("absent.toml"))
        .arg("-n")
        .arg(fixture("textile-base.toml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to load descriptor"));
}

#[test]
fn malformed_descriptor_exits_two() {
    let temp = TempDir::new().unwrap();
    let broken = temp.path().join("broken.toml");
    fs::write(&broken, "types = 7\n").unwrap();

    pubdiff()
        .arg("compare")
        .arg("-b")
        .arg(&broken)
        .arg("-n")
        .arg(fixture("textile-base.toml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("broken.toml"));
}

#[test]
fn missing_arguments_exit_two() {
    pubdiff().args(["compare", "-b", "x.toml"]).assert().code(2);
}

#[test]
fn inspect_hides_internal_types() {
    pubdiff()
        .arg("inspect")
        .arg(fixture("textile-base.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("public Textile.TextileFormatter"))
        .stdout(predicate::str::contains("Textile.Utilities").not());
}

#[test]
fn inspect_unknown_type_exits_three() {
    pubdiff()
        .arg("inspect")
        .arg(fixture("textile-base.toml"))
        .args(["--type", "Textile.Nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Textile.Nope"));
}

#[test]
fn explicit_config_supplies_defaults() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("pubdiff.toml");
    fs::write(&config, "[compare]\nfail_on_differences = true\n").unwrap();

    pubdiff()
        .arg("--config")
        .arg(&config)
        .arg("compare")
        .arg("-b")
        .arg(fixture("textile-visibility.toml"))
        .arg("-n")
        .arg(fixture("textile-base.toml"))
        .assert()
        .code(5);
}

#[test]
fn missing_explicit_config_exits_four() {
    let temp = TempDir::new().unwrap();
    pubdiff()
        .arg("--config")
        .arg(temp.path().join("absent.toml"))
        .args(["config", "list"])
        .assert()
        .code(4);
}

#[test]
fn init_writes_loadable_config() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("pubdiff.toml");

    pubdiff()
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success();
    assert!(config.exists());

    pubdiff()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout("auto\n");
}

#[test]
fn completions_for_bash() {
    pubdiff()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pubdiff"));
}
