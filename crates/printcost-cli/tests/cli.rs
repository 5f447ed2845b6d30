//! End-to-end tests for the `printcost` binary.
//!
//! Every test points `--state` at a temporary file so the user's real state
//! is never touched.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn printcost(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("printcost").unwrap();
    cmd.env_remove("PRINTCOST_STATE")
        .env_remove("RUST_LOG")
        .arg("--state")
        .arg(dir.path().join("state.json"));
    cmd
}

#[test]
fn quote_defaults_minimal() {
    let dir = TempDir::new().unwrap();
    printcost(&dir)
        .args(["quote", "--format", "minimal"])
        .assert()
        .success()
        .stdout("COP 32,840\n");
}

#[test]
fn quote_table_shows_headline_amounts() {
    let dir = TempDir::new().unwrap();
    printcost(&dir)
        .arg("quote")
        .assert()
        .success()
        .stdout(predicate::str::contains("Suggested price"))
        .stdout(predicate::str::contains("COP 32,840"))
        .stdout(predicate::str::contains("COP 23,457"));
}

#[test]
fn quote_in_usd() {
    let dir = TempDir::new().unwrap();
    printcost(&dir)
        .args(["quote", "--currency", "USD", "-f", "minimal"])
        .assert()
        .success()
        .stdout("$ 8.01 USD\n");
}

#[test]
fn quote_json_has_result_record() {
    let dir = TempDir::new().unwrap();
    let output = printcost(&dir)
        .args(["quote", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["result"]["filamentCost"], 5250.0);
    assert_eq!(json["result"]["laborCost"], 11250.0);
    assert_eq!(json["currency"], "COP");
    assert_eq!(json["formatted"]["suggestedPrice"], "COP 32,840");
}

#[test]
fn quote_edits_are_not_saved_without_flag() {
    let dir = TempDir::new().unwrap();
    printcost(&dir)
        .args(["quote", "--set", "profit.margin=0", "--set", "variable.failure_rate=0"])
        .args(["-f", "minimal"])
        .assert()
        .success()
        .stdout("COP 21,325\n");

    assert!(!dir.path().join("state.json").exists());
    printcost(&dir)
        .args(["quote", "-f", "minimal"])
        .assert()
        .success()
        .stdout("COP 32,840\n");
}

#[test]
fn quote_save_persists_edits() {
    let dir = TempDir::new().unwrap();
    printcost(&dir)
        .args(["quote", "--set", "profit.margin=0", "--save", "-q"])
        .assert()
        .success();

    printcost(&dir)
        .args(["state", "show", "-f", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("profit.margin=0\n"));
}

#[test]
fn quote_rejects_bad_assignment() {
    let dir = TempDir::new().unwrap();
    printcost(&dir)
        .args(["quote", "--set", "no.such.field=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no.such.field"));
}

#[test]
fn state_set_then_show() {
    let dir = TempDir::new().unwrap();
    printcost(&dir)
        .args(["state", "set", "variable.part_mass", "1,000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("variable.part_mass = 1000"));

    let output = printcost(&dir)
        .args(["state", "show", "--format", "json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["variableCosts"]["partMass"], 1000.0);
    assert_eq!(json["variableCosts"]["printTimeHours"], 4.0);
}

#[test]
fn state_set_rejects_wrong_kind() {
    let dir = TempDir::new().unwrap();
    printcost(&dir)
        .args(["state", "set", "fixed.rent_frequency", "weekly"])
        .assert()
        .failure();
    assert!(!dir.path().join("state.json").exists());
}

#[test]
fn state_set_unparseable_number_becomes_zero() {
    let dir = TempDir::new().unwrap();
    printcost(&dir)
        .args(["state", "set", "labor.hourly_rate", "abc", "-f", "minimal"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn state_set_rejects_extra_decimal_point() {
    let dir = TempDir::new().unwrap();
    printcost(&dir)
        .args(["state", "set", "labor.hourly_rate", "20000", "-q"])
        .assert()
        .success();
    printcost(&dir)
        .args(["state", "set", "labor.hourly_rate", "1.2.3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1.2.3"));

    printcost(&dir)
        .args(["state", "show", "-f", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("labor.hourly_rate=20000\n"));
}

#[test]
fn state_survives_overlong_number() {
    let dir = TempDir::new().unwrap();
    let digits = "9".repeat(400);
    printcost(&dir)
        .args(["state", "set", "fixed.rent", digits.as_str(), "-q"])
        .assert()
        .success();
    printcost(&dir)
        .args(["state", "show", "-f", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fixed.rent=0\n"));
}

#[test]
fn quote_rejects_non_finite_exchange_rate() {
    let dir = TempDir::new().unwrap();
    printcost(&dir)
        .args(["quote", "--exchange-rate", "inf", "--save"])
        .assert()
        .failure();
    assert!(!dir.path().join("state.json").exists());
}

#[test]
fn state_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    printcost(&dir)
        .args(["state", "set", "profit.margin", "90", "-q"])
        .assert()
        .success();
    printcost(&dir)
        .args(["state", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset"));
    printcost(&dir)
        .args(["quote", "-f", "minimal"])
        .assert()
        .success()
        .stdout("COP 32,840\n");
}

#[test]
fn state_path_reports_flag() {
    let dir = TempDir::new().unwrap();
    printcost(&dir)
        .args(["state", "path", "-f", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("state.json"));
}

#[test]
fn state_path_from_env() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("from-env.json");
    Command::cargo_bin("printcost")
        .unwrap()
        .env("PRINTCOST_STATE", &path)
        .args(["state", "path", "-f", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from-env.json"));
}

#[test]
fn state_fields_lists_keys() {
    let dir = TempDir::new().unwrap();
    printcost(&dir)
        .args(["state", "fields", "-f", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("variable.part_mass"))
        .stdout(predicate::str::contains("display.exchange_rate"));
}

#[test]
fn legacy_snapshot_is_restored() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("state.json"),
        r#"{"calc3d_state_final": {"variableCosts": {"partWeight": 10}, "monthlyPrintingHours": 100}}"#,
    )
    .unwrap();

    let output = printcost(&dir)
        .args(["state", "show", "-f", "json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["variableCosts"]["partMass"], 10.0);
    assert_eq!(json["monthlyPrintingHours"], 100.0);
}

#[test]
fn corrupt_state_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("state.json"), "{ not json").unwrap();
    printcost(&dir)
        .arg("quote")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Deserialization"));
}

#[test]
fn breakdown_minimal_lists_components() {
    let dir = TempDir::new().unwrap();
    printcost(&dir)
        .args(["breakdown", "-f", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("fixed "))
        .stdout(predicate::str::contains("filament "))
        .stdout(predicate::str::contains("materials "));
}

#[test]
fn breakdown_minimal_skips_zero_components() {
    let dir = TempDir::new().unwrap();
    printcost(&dir)
        .args(["breakdown", "--set", "variable.other_materials=0", "-f", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("filament "))
        .stdout(predicate::str::contains("materials ").not());
}

#[test]
fn quote_table_shows_capacity_use() {
    let dir = TempDir::new().unwrap();
    printcost(&dir)
        .args(["quote", "--set", "capacity.monthly_hours=1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Capacity use"))
        .stdout(predicate::str::contains("100.0%"));
}

#[test]
fn breakdown_json_shares() {
    let dir = TempDir::new().unwrap();
    let output = printcost(&dir)
        .args(["breakdown", "-f", "json"])
        .output()
        .unwrap();
    let shares: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shares.len(), 5);
    assert_eq!(shares[1]["component"], "filament");
    assert_eq!(shares[1]["amount"], 5250.0);

    let total: f64 = shares.iter().map(|s| s["percent"].as_f64().unwrap()).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn defaults_json() {
    let dir = TempDir::new().unwrap();
    let output = printcost(&dir)
        .args(["defaults", "--format", "json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["variableCosts"]["filamentPricePerUnitMass"], 105000.0);
    assert_eq!(json["exchangeRate"], 4100.0);
    assert_eq!(json["displayCurrency"], "COP");
}
