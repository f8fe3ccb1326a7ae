//! Snapshot acquisition — real `mmcli` queries and the simulated source.
//!
//! The real path shells out to ModemManager's CLI and treats almost every
//! failure as "no snapshot this cycle". The one exception is a missing
//! `mmcli` binary, which no amount of retrying will fix.

use std::io;
use std::process::Command;

use cellwatch_core::classify::Baseline;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    /// ModemManager's CLI is not installed; polling cannot proceed.
    #[error("mmcli not found, install ModemManager to query modem state")]
    MmcliMissing,
    /// mmcli exists but could not be spawned at all.
    #[error("failed to invoke mmcli: {0}")]
    Spawn(io::Error),
}

/// Query `mmcli -m <index>` for the modem's current status text.
///
/// `Ok(None)` means the snapshot is unavailable this cycle (modem gone,
/// transient ModemManager error, empty or undecodable output); the caller
/// skips the cycle and keeps polling.
pub fn fetch_status(index: u32) -> Result<Option<String>, QueryError> {
    let output = match Command::new("mmcli").arg("-m").arg(index.to_string()).output() {
        Ok(output) => output,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(QueryError::MmcliMissing),
        Err(e) => return Err(QueryError::Spawn(e)),
    };

    if !output.status.success() {
        tracing::warn!(modem = index, status = %output.status, "mmcli query failed, skipping cycle");
        return Ok(None);
    }

    let text = match String::from_utf8(output.stdout) {
        Ok(text) => text,
        Err(_) => {
            tracing::warn!(modem = index, "mmcli produced non-UTF-8 output, skipping cycle");
            return Ok(None);
        }
    };

    if text.trim().is_empty() {
        tracing::debug!(modem = index, "mmcli returned no status text, skipping cycle");
        return Ok(None);
    }

    Ok(Some(text))
}

/// Generate an mmcli-shaped status block without touching real hardware.
///
/// Mostly reports the baseline operator on LTE; roughly one cycle in five
/// wanders onto a foreign network or falls back to GSM so every display and
/// logging path can be watched during local development.
pub fn simulated_status(baseline: &Baseline) -> String {
    use rand::RngExt;
    let mut rng = rand::rng();

    let (mcc, mnc, tech) = match rng.random_range(0..10) {
        0 => (baseline.mcc.as_str(), "999", "lte"),
        1 => (baseline.mcc.as_str(), baseline.mnc.as_str(), "gsm"),
        _ => (baseline.mcc.as_str(), baseline.mnc.as_str(), "lte"),
    };

    let signal = 50 + rng.random_range(0..40);
    format!(
        "\
  --------------------------------
  Status   |           signal quality: '{signal}' (recent)
           |              access tech: '{tech}'
  --------------------------------
  3GPP     |                      MCC: '{mcc}'
           |                      MNC: '{mnc}'
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellwatch_core::fields::extract;

    #[test]
    fn simulated_status_always_extracts_cleanly() {
        let baseline = Baseline::new("310", "260");
        for _ in 0..50 {
            let snapshot = simulated_status(&baseline);
            let fields = extract(&snapshot);
            assert_eq!(fields.mcc.as_deref(), Some("310"));
            assert!(fields.mnc.is_some());
            assert!(fields.access_tech.is_some());
        }
    }

    #[test]
    fn simulated_tech_is_a_known_label() {
        let baseline = Baseline::new("310", "260");
        for _ in 0..50 {
            let fields = extract(&simulated_status(&baseline));
            let tech = fields.access_tech.unwrap();
            assert!(tech == "lte" || tech == "gsm", "unexpected label {tech:?}");
        }
    }
}
