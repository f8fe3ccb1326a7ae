//! Console presentation for anomalies and status notes.
//!
//! Stateless helpers: color choice is keyed on a record's severity, never on
//! ambient output state. Anomalies go to stdout for the operator; diagnostic
//! logging stays on stderr via `tracing`.

use cellwatch_core::classify::{AnomalyRecord, Severity};
use owo_colors::OwoColorize;

/// Render one anomaly with severity-appropriate color.
pub fn print_record(record: &AnomalyRecord) {
    let line = format!("[!] {}: {}", record.severity().label(), record.message);
    match record.severity() {
        Severity::Alert => println!("{}", line.red()),
        Severity::Warning => println!("{}", line.yellow()),
    }
}

/// Informational note about a healthy (non-2G) access technology.
pub fn print_tech_note(tech: &str) {
    println!("{}", format!("[+] access tech: {tech}").green());
}

pub fn print_banner() {
    println!("{}", "[+] cellwatch starting".green());
    println!("This tool surfaces registration anomalies only; it does not prove interception.\n");
}

pub fn print_farewell() {
    println!("{}", "[+] cellwatch exiting".yellow());
}
