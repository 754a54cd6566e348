//! End-to-end tests for the `uconv` binary: stdout contract, exit codes,
//! help surface.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn uconv() -> Command {
    Command::cargo_bin("uconv").unwrap()
}

#[test]
fn mass_conversion_prints_result_line() {
    let temp = TempDir::new().unwrap();
    uconv()
        .current_dir(temp.path())
        .args(["1000", "--from", "граммы", "--to", "килограммы"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1000 граммы = 1 килограммы"));
}

#[test]
fn temperature_conversion_prints_result_line() {
    let temp = TempDir::new().unwrap();
    uconv()
        .current_dir(temp.path())
        .args(["0", "--from", "Цельсий", "--to", "Фаренгейт"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 Цельсий = 32 Фаренгейт"));
}

#[test]
fn length_conversion_accepts_short_flags() {
    let temp = TempDir::new().unwrap();
    uconv()
        .current_dir(temp.path())
        .args(["1", "-f", "километры", "-t", "метры"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 километры = 1000 метры"));
}

#[test]
fn negative_values_are_accepted() {
    let temp = TempDir::new().unwrap();
    uconv()
        .current_dir(temp.path())
        .args(["-40", "--from", "Цельсий", "--to", "Фаренгейт"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-40 Цельсий = -40 Фаренгейт"));
}

#[test]
fn unknown_unit_reports_failure_and_exits_normally() {
    let temp = TempDir::new().unwrap();
    uconv()
        .current_dir(temp.path())
        .args(["5", "--from", "литры", "--to", "граммы"])
        .assert()
        .success() // a reported outcome, not a crash
        .stdout(predicate::str::contains(
            "Ошибка: Неверные единицы измерения.",
        ));
}

#[test]
fn mismatched_families_report_failure() {
    let temp = TempDir::new().unwrap();
    uconv()
        .current_dir(temp.path())
        .args(["5", "--from", "граммы", "--to", "метры"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ошибка"));
}

#[test]
fn failure_hints_list_known_units_on_stderr() {
    let temp = TempDir::new().unwrap();
    uconv()
        .current_dir(temp.path())
        .args(["5", "--from", "литры", "--to", "граммы"])
        .assert()
        .success()
        .stderr(predicate::str::contains("граммы"));
}

#[test]
fn quiet_suppresses_failure_hints_but_not_the_message() {
    let temp = TempDir::new().unwrap();
    uconv()
        .current_dir(temp.path())
        .args(["-q", "5", "--from", "литры", "--to", "граммы"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ошибка"))
        .stderr(predicate::str::contains("Known units:").not());
}

#[test]
fn non_numeric_value_is_a_usage_error() {
    let temp = TempDir::new().unwrap();
    uconv()
        .current_dir(temp.path())
        .args(["abc", "--from", "граммы", "--to", "унции"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn missing_target_unit_is_a_usage_error() {
    let temp = TempDir::new().unwrap();
    uconv()
        .current_dir(temp.path())
        .args(["1", "--from", "граммы"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn help_lists_the_unit_vocabulary() {
    uconv()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--from"))
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("Цельсий"));
}

#[test]
fn version_flag_matches_cargo() {
    uconv()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
