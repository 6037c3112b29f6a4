//! End-to-end tests for the `audcurve` binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SHORT: &str = "4.35,4.34,4.30,4.20";
const BONDS: &str = "3.80,3.85,4.00,4.40";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../audcurve-ext-file/tests/data")
        .join(name)
}

/// Runs the binary with the user configuration directory pointed at `home`.
fn audcurve(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("audcurve").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env_remove("AUDCURVE_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn curve_from_manual_rates_applies_spread() {
    let home = TempDir::new().unwrap();
    audcurve(&home)
        .args(["-f", "minimal", "curve", "--short", SHORT, "--bonds", BONDS])
        .args(["--spread", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cash=4.3500"))
        .stdout(predicate::str::contains("1M=4.0400"))
        .stdout(predicate::str::contains("6M=3.9000"))
        .stdout(predicate::str::contains("10Y=4.4000"));
}

#[test]
fn reduced_curve_drops_cash() {
    let home = TempDir::new().unwrap();
    audcurve(&home)
        .args(["-f", "minimal", "curve", "--short", SHORT, "--bonds", BONDS])
        .arg("--reduced")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cash=").not())
        .stdout(predicate::str::contains("1M=4.3400"));
}

#[test]
fn curve_json_reports_manual_source() {
    let home = TempDir::new().unwrap();
    audcurve(&home)
        .args(["-f", "json", "curve", "--short", SHORT, "--bonds", BONDS])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"data_source\": \"Manual\""));
}

#[test]
fn curve_from_rba_files() {
    let home = TempDir::new().unwrap();
    audcurve(&home)
        .args(["-f", "minimal", "curve"])
        .arg("--f1")
        .arg(fixture("f1.1-data.csv"))
        .arg("--f2")
        .arg(fixture("f2-data.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("3M=4.3000"))
        .stdout(predicate::str::contains("2Y=3.8000"));
}

#[test]
fn missing_bond_file_warns_and_leaves_curve_empty() {
    let home = TempDir::new().unwrap();
    audcurve(&home)
        .args(["-f", "minimal", "curve"])
        .arg("--f1")
        .arg(fixture("f1.1-data.csv"))
        .arg("--f2")
        .arg(home.path().join("missing.csv"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to load Bonds:"));
}

#[test]
fn monthly_linear_minimal() {
    let home = TempDir::new().unwrap();
    audcurve(&home)
        .args(["-f", "minimal", "monthly", "--short", SHORT, "--bonds", BONDS])
        .args(["--method", "linear", "--horizon", "3"])
        .assert()
        .success()
        .stdout("4.3400\n4.3200\n4.3000\n");
}

#[test]
fn export_writes_both_tables() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("curve.csv");

    audcurve(&home)
        .args(["-q", "export", "--short", SHORT, "--bonds", BONDS, "--spread", "30"])
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("Forward Curve Data Points\nTenor,Months,Rate (%),Source\n"));
    assert!(text.contains("\n1M,1,4.0400,BBSW (adj)\n"));
    assert!(text.contains(
        "\nMonthly Interpolated Forward Curve (Linear vs Cubic Spline)\n\
         Month,Linear Interpolation (%),Cubic Spline Interpolation (%)\n"
    ));
    assert!(text.contains("\n96,"));
}

#[test]
fn export_to_stdout() {
    let home = TempDir::new().unwrap();
    audcurve(&home)
        .args(["export", "--short", SHORT, "--bonds", BONDS, "--horizon", "2"])
        .args(["--output", "-"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Forward Curve Data Points\n"))
        .stdout(predicate::str::contains("\n2,4.3200,"));
}

#[test]
fn query_linear_between_knots() {
    let home = TempDir::new().unwrap();
    audcurve(&home)
        .args(["-f", "minimal", "query", "--short", SHORT, "--bonds", BONDS])
        .args(["--month", "2", "--method", "linear"])
        .assert()
        .success()
        .stdout("4.3200\n");
}

#[test]
fn query_spline_hits_knot() {
    let home = TempDir::new().unwrap();
    audcurve(&home)
        .args(["-f", "minimal", "query", "--short", SHORT, "--bonds", BONDS])
        .args(["--month", "24"])
        .assert()
        .success()
        .stdout("3.8000\n");
}

#[test]
fn query_without_data_fails() {
    let home = TempDir::new().unwrap();
    audcurve(&home)
        .args(["query", "--month", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 are needed"));
}

#[test]
fn bad_rate_list_fails() {
    let home = TempDir::new().unwrap();
    audcurve(&home)
        .args(["curve", "--short", "4.35,4.34", "--bonds", BONDS])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expects 4"));
}

#[test]
fn schedule_lists_standard_tenors() {
    let home = TempDir::new().unwrap();
    audcurve(&home)
        .args(["-f", "csv", "schedule"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cash,0,"))
        .stdout(predicate::str::contains("10Y,120,"));
}

#[test]
fn config_init_then_show() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("audcurve.toml");

    audcurve(&home)
        .args(["-q", "config", "init"])
        .arg("--config")
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    audcurve(&home)
        .args(["config", "init"])
        .arg("--config")
        .arg(&path)
        .assert()
        .failure();

    audcurve(&home)
        .args(["-f", "json", "config", "show"])
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"horizon_months\": 96"));
}

#[test]
fn config_spread_is_used() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("audcurve.toml");
    std::fs::write(&path, "spread_bps = 10.0\n").unwrap();

    audcurve(&home)
        .args(["-f", "minimal", "curve", "--short", SHORT, "--bonds", BONDS])
        .env("AUDCURVE_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1M=4.2400"));
}

#[test]
fn missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    audcurve(&home)
        .args(["schedule", "--config"])
        .arg(home.path().join("nope.toml"))
        .assert()
        .failure();
}
