use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::process::Command;

mod common;

fn compare_json(args: &[&str]) -> serde_json::Value {
    let output = Command::new(cargo_bin!("savings-calc"))
        .args(args)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

fn money(value: &serde_json::Value) -> Decimal {
    value.as_str().unwrap().parse().unwrap()
}

#[test]
fn test_cli_compare_default_table() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("savings-calc"));
    cmd.arg("compare");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Switching from Toast to Our Platform would save $1,064/month",
        ))
        .stdout(predicate::str::contains("Transactions per location: 2222"))
        .stdout(predicate::str::contains("Stablecoin Rails (Future)"));

    Ok(())
}

#[test]
fn test_cli_compare_json() {
    let json = compare_json(&["compare", "--format", "json", "--locations", "2"]);

    assert_eq!(json["transaction_count"], 2222);
    assert_eq!(json["breakdown"].as_array().unwrap().len(), 3);
    assert_eq!(json["timeline"].as_array().unwrap().len(), 5);
    assert_eq!(json["current_processor"]["id"], "toast");
    assert_eq!(money(&json["monthly_savings"]), dec!(2128.20));
}

#[test]
fn test_cli_compare_csv() {
    let mut cmd = Command::new(cargo_bin!("savings-calc"));
    cmd.args(["compare", "--processor", "square", "--format", "csv"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "processor,processing_fees,fixed_fees,monthly_fee,setup_cost,hardware_cost,total",
        ))
        .stdout(predicate::str::contains("Square,2780"))
        .stdout(predicate::str::contains("Our Platform,1640"));
}

#[test]
fn test_cli_preset_with_override() {
    // Chain preset is 100000 / 35 / 10 locations; the ticket size is overridden.
    let json = compare_json(&[
        "compare", "--preset", "chain", "--avg-ticket", "45", "--format", "json",
    ]);

    assert_eq!(json["transaction_count"], 2222);
    assert_eq!(money(&json["monthly_savings"]), dec!(10641));
}

#[test]
fn test_cli_processors() {
    let mut cmd = Command::new(cargo_bin!("savings-calc"));
    cmd.arg("processors");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("toast"))
        .stdout(predicate::str::contains("square"))
        .stdout(predicate::str::contains("clover"))
        .stdout(predicate::str::contains("future-rail"))
        .stdout(predicate::str::contains("2.49%"));
}

#[test]
fn test_cli_unknown_processor() {
    let mut cmd = Command::new(cargo_bin!("savings-calc"));
    cmd.args(["compare", "--processor", "doesnotexist"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown processor: doesnotexist"));
}

#[test]
fn test_cli_zero_ticket_is_rejected() {
    let mut cmd = Command::new(cargo_bin!("savings-calc"));
    cmd.args(["compare", "--avg-ticket", "0"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("average transaction size must be positive"));
}

#[test]
fn test_cli_oversized_inputs_are_rejected() {
    let mut cmd = Command::new(cargo_bin!("savings-calc"));
    cmd.args([
        "compare",
        "--volume",
        "100000000000000000000",
        "--avg-ticket",
        "100000",
        "--locations",
        "4294967295",
    ]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_cli_card_present_out_of_range() {
    let mut cmd = Command::new(cargo_bin!("savings-calc"));
    cmd.args(["compare", "--card-present", "120"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_cli_custom_fee_schedules() {
    let file = common::write_fee_schedules(&common::waived_setup_rows()).unwrap();
    let path = file.path().to_str().unwrap();

    let json = compare_json(&["--fee-schedules", path, "compare", "--format", "json"]);

    // Without Toast's $13000 setup, five years of savings is just 5 * 12769.20.
    assert_eq!(money(&json["five_year_savings"]), dec!(63846));
    assert_eq!(json["current_processor"]["description"], "Setup waived");
}

#[test]
fn test_cli_fee_schedules_missing_current() {
    let file = common::write_fee_schedules(&common::waived_setup_rows()).unwrap();

    let mut cmd = Command::new(cargo_bin!("savings-calc"));
    cmd.arg("--fee-schedules")
        .arg(file.path())
        .args(["compare", "--processor", "clover"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown processor: clover"));
}
