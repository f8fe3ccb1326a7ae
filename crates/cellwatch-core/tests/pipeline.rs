//! End-to-end flow: raw status text through extraction, classification,
//! and the append-only log sink.

use chrono::{DateTime, Local, TimeZone};

use cellwatch_core::classify::{assess, Baseline};
use cellwatch_core::fields::extract;
use cellwatch_core::report;

fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 8, 6, h, m, s).unwrap()
}

#[test]
fn anomalous_snapshot_lands_in_the_log_in_rule_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("anomalies.log");
    let baseline = Baseline::new("310", "260");

    let snapshot = "\
  --------------------------------
  Status   |              access tech: 'gsm'
  --------------------------------
  3GPP     |                      MCC: '234'
           |                      MNC: '15'
  --------------------------------";

    let assessment = assess(&extract(snapshot), &baseline, at(9, 30, 0));
    assert_eq!(assessment.records.len(), 2);

    report::append(&path, &assessment.records).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("2026-08-06 09:30:00 [WARNING] "));
    assert!(lines[0].contains("MCC=234"));
    assert!(lines[0].contains("MNC=15"));
    assert!(lines[1].starts_with("2026-08-06 09:30:00 [ALERT] "));
    assert!(lines[1].contains("GSM"));
}

#[test]
fn healthy_snapshot_leaves_the_log_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("anomalies.log");
    let baseline = Baseline::new("310", "260");

    // Seed the log with one real anomaly first.
    let bad = assess(
        &extract("MCC: '310'\nMNC: '999'"),
        &baseline,
        at(9, 30, 0),
    );
    report::append(&path, &bad.records).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    // A healthy poll produces a display note only; the log must not change.
    let healthy = assess(
        &extract("MCC: '310'\nMNC: '260'\naccess tech: 'lte'"),
        &baseline,
        at(9, 30, 10),
    );
    assert!(healthy.records.is_empty());
    assert_eq!(healthy.tech_note.as_deref(), Some("lte"));

    report::append(&path, &healthy.records).unwrap();
    let after = std::fs::read_to_string(&path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn uninformative_snapshot_produces_nothing_at_all() {
    let baseline = Baseline::new("310", "260");
    let assessment = assess(
        &extract("error: couldn't query registration state"),
        &baseline,
        at(9, 30, 0),
    );
    assert!(assessment.is_quiet());
}
