// Integration tests for the asos CLI.
//
// These tests use assert_cmd to invoke the binary and verify exit codes and
// stdout/stderr output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the asos binary.
fn asos() -> Command {
    Command::cargo_bin("asos").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    asos()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("asos"));
}

#[test]
fn cli_help_flag() {
    asos()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sustainability scoring"));
}

#[test]
fn score_requires_electricity_and_water() {
    asos()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn score_reports_deductions_for_heavy_usage() {
    asos()
        .args([
            "score",
            "--electricity",
            "400",
            "--water",
            "0",
            "--transport",
            "car",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sustainability score: 55/100"))
        .stdout(predicate::str::contains("378.00 kg CO2e"))
        .stdout(predicate::str::contains("carpool"));
}

#[test]
fn score_appends_positive_message_for_clean_reading() {
    asos()
        .args(["score", "--electricity", "120", "--water", "80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100/100"))
        .stdout(predicate::str::contains(
            "Your sustainability habits are strong.",
        ));
}

#[test]
fn score_json_format_emits_structured_output() {
    asos()
        .args([
            "score",
            "--electricity",
            "400",
            "--water",
            "0",
            "--transport",
            "car",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 55"))
        .stdout(predicate::str::contains("\"estimated_carbon_kg\": 378.0"));
}

#[test]
fn score_boost_caps_at_one_hundred() {
    asos()
        .args([
            "score",
            "--electricity",
            "0",
            "--water",
            "0",
            "--boost",
            "solar",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("100/100"));
}

#[test]
fn score_rejects_negative_readings() {
    asos()
        .args(["score", "--electricity", "-5", "--water", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid input"))
        .stderr(predicate::str::contains("electricity_kwh"));
}

#[test]
fn score_rejects_unknown_transport_mode() {
    asos()
        .args([
            "score",
            "--electricity",
            "10",
            "--water",
            "10",
            "--transport",
            "rocket",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn policy_sums_selected_impacts() {
    asos()
        .args(["policy", "solar-subsidy", "ev-incentive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Combined impact: -30%"));
}

#[test]
fn policy_ignores_unknown_ids() {
    asos()
        .args(["policy", "solar-subsidy", "fusion-reactor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Combined impact: -22%"));
}

#[test]
fn policy_with_no_selection_reports_zero_impact() {
    asos()
        .arg("policy")
        .assert()
        .success()
        .stdout(predicate::str::contains("Combined impact: -0%"));
}

#[test]
fn policy_list_prints_catalog() {
    asos()
        .args(["policy", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("solar-subsidy"))
        .stdout(predicate::str::contains("Peak Hour Pricing"));
}

#[test]
fn community_reports_savings() {
    asos()
        .args(["community", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Households: 50"))
        .stdout(predicate::str::contains("Total electricity: 8000"))
        .stdout(predicate::str::contains("Savings: 8000"));
}

#[test]
fn community_zero_strength_keeps_baseline() {
    asos()
        .args(["community", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total electricity: 16000"))
        .stdout(predicate::str::contains("Savings: 0"));
}
