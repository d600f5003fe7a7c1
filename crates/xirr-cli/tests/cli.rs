use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

fn xirr() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("xirr"));
    cmd.env_remove("RUST_LOG").env_remove("XIRR_CONFIG");
    cmd
}

const SHORT_FLOWS: [&str; 5] = [
    "2008-01-01:-10000",
    "2008-03-01:2750",
    "2008-10-30:4250",
    "2009-02-15:3250",
    "2009-04-01:2750",
];

const LOSS_FLOWS: [&str; 4] = [
    "2013-12-30:-15000000",
    "2014-05-02:142371",
    "2015-04-17:238467",
    "2015-07-30:955477",
];

fn with_flows<'a>(cmd: &'a mut Command, flows: &[&str]) -> &'a mut Command {
    for flow in flows {
        cmd.arg("--flow").arg(flow);
    }
    cmd
}

#[test]
fn calc_minimal_prints_percentage() {
    let mut cmd = xirr();
    cmd.args(["calc", "--format", "minimal"]);
    with_flows(&mut cmd, &SHORT_FLOWS)
        .assert()
        .success()
        .stdout("37.34\n");
}

#[test]
fn calc_falls_back_for_heavy_loss() {
    let mut cmd = xirr();
    cmd.args(["calc", "-f", "minimal"]);
    with_flows(&mut cmd, &LOSS_FLOWS)
        .assert()
        .success()
        .stdout("-80.59\n");
}

#[test]
fn calc_reads_csv_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "date,amount").unwrap();
    for row in [
        "2013-12-30,-15000000",
        "2014-05-02,142371",
        "2015-04-17,238467",
        "2015-07-30,955477",
        "2015-10-31,14997088",
    ] {
        writeln!(file, "{row}").unwrap();
    }

    xirr()
        .args(["calc", "--format", "minimal", "--file"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("4.85\n");
}

#[test]
fn calc_json_reports_method() {
    let mut cmd = xirr();
    cmd.args(["calc", "--format", "json"]);
    let assert = with_flows(&mut cmd, &LOSS_FLOWS).assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["xirr_percent"], "-80.59");
    assert_eq!(report["method"], "Bisection");
    assert_eq!(report["flows"], 4);
}

#[test]
fn calc_csv_prints_one_record() {
    let mut cmd = xirr();
    cmd.args(["calc", "--format", "csv"]);
    let assert = with_flows(&mut cmd, &SHORT_FLOWS).assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "xirr_percent,growth_factor,annual_rate,iterations,method,flows"
    );
    assert!(lines[1].starts_with("37.34,"));
    assert!(lines[1].ends_with(",Newton,5"));
}

#[test]
fn npv_json_prints_one_object() {
    let assert = xirr()
        .args([
            "npv",
            "--format",
            "json",
            "--rate",
            "1.0",
            "--flow",
            "2021-01-01:-1000",
            "--flow",
            "2022-01-01:1100",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["flows"], 2);
    assert_eq!(report["npv"], 100.0);
}

#[test]
fn calc_table_lists_flows() {
    let mut cmd = xirr();
    cmd.arg("calc");
    with_flows(&mut cmd, &SHORT_FLOWS)
        .assert()
        .success()
        .stdout(predicate::str::contains("2008-10-30"))
        .stdout(predicate::str::contains("37.34%"));
}

#[test]
fn calc_reversed_order_has_no_result() {
    let mut cmd = xirr();
    cmd.arg("calc");
    with_flows(&mut cmd, &["2009-04-01:2750", "2008-01-01:-10000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No result"))
        .stderr(predicate::str::contains("precedes"));
}

#[test]
fn calc_without_sign_change_has_no_result() {
    let mut cmd = xirr();
    cmd.arg("calc");
    with_flows(&mut cmd, &["2020-01-01:100", "2021-01-01:200"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive and one negative"));
}

#[test]
fn calc_without_flows_fails() {
    xirr()
        .arg("calc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no cash flows"));
}

#[test]
fn calc_rejects_malformed_flow() {
    xirr()
        .args(["calc", "--flow", "2020-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATE:AMOUNT"));
}

#[test]
fn calc_honours_config_file() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "bracket_fallback = false").unwrap();

    let mut cmd = xirr();
    cmd.args(["calc", "--config"]).arg(config.path());
    with_flows(&mut cmd, &LOSS_FLOWS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside"));
}

#[test]
fn npv_at_zero_rate_is_total() {
    xirr()
        .args([
            "npv",
            "--format",
            "minimal",
            "--rate",
            "1.0",
            "--flow",
            "2021-01-01:-1000",
            "--flow",
            "2022-01-01:1100",
        ])
        .assert()
        .success()
        .stdout("100.00\n");
}
