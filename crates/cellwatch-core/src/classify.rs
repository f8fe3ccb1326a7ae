//! Registration-state classification against an operator baseline.
//!
//! Two rules, evaluated independently and in a fixed order; both may fire
//! for the same snapshot:
//!
//! 1. **Network mismatch** (warning) — MCC and MNC are both present and at
//!    least one differs from the baseline. Partial presence stays silent.
//! 2. **Technology downgrade** (alert) — the access technology label
//!    contains a GSM-family marker, case-insensitively. 2G carries no
//!    mutual authentication, which is why a fallback is the loudest signal
//!    this tool produces. A present but non-GSM label becomes a
//!    display-only note instead of a record.
//!
//! Classification is a pure function of (fields, baseline, timestamp); the
//! agent owns every side effect.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::fields::RegistrationFields;

/// Substring identifying the 2G technology family in access-tech labels.
const DOWNGRADE_MARKER: &str = "gsm";

/// Expected home-network identity, fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct Baseline {
    /// Expected mobile country code.
    pub mcc: String,
    /// Expected mobile network code.
    pub mnc: String,
}

impl Baseline {
    pub fn new(mcc: impl Into<String>, mnc: impl Into<String>) -> Self {
        Baseline {
            mcc: mcc.into(),
            mnc: mnc.into(),
        }
    }
}

/// How loudly an anomaly should be surfaced. `Alert` outranks `Warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Alert,
}

impl Severity {
    /// Bracketed-severity label used in log lines and console output.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Warning => "WARNING",
            Severity::Alert => "ALERT",
        }
    }
}

/// The kind of deviation a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    NetworkMismatch,
    TechnologyDowngrade,
}

impl AnomalyKind {
    pub fn severity(&self) -> Severity {
        match self {
            AnomalyKind::NetworkMismatch => Severity::Warning,
            AnomalyKind::TechnologyDowngrade => Severity::Alert,
        }
    }
}

/// One timestamped anomaly, produced while analyzing a single snapshot and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct AnomalyRecord {
    /// Local wall-clock time of the analysis, second precision.
    pub timestamp: DateTime<Local>,
    pub kind: AnomalyKind,
    pub message: String,
}

impl AnomalyRecord {
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// Log-file form: `YYYY-MM-DD HH:MM:SS [SEVERITY] message`.
    pub fn log_line(&self) -> String {
        format!(
            "{} [{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.severity().label(),
            self.message
        )
    }
}

/// Everything one snapshot produced: anomaly records in rule order, plus an
/// optional display-only note about a healthy access technology.
///
/// The note is rendered to the console but never written to the log sink.
#[derive(Debug, Clone, Default)]
pub struct Assessment {
    pub records: Vec<AnomalyRecord>,
    pub tech_note: Option<String>,
}

impl Assessment {
    /// True when this snapshot produced neither records nor a note.
    pub fn is_quiet(&self) -> bool {
        self.records.is_empty() && self.tech_note.is_none()
    }
}

/// Classify `fields` against `baseline` at the given timestamp.
pub fn assess(
    fields: &RegistrationFields,
    baseline: &Baseline,
    timestamp: DateTime<Local>,
) -> Assessment {
    let mut assessment = Assessment::default();

    // Rule 1: both identifiers must be present before the mismatch rule
    // applies; a lone MCC or MNC is no information.
    if let (Some(mcc), Some(mnc)) = (&fields.mcc, &fields.mnc) {
        if mcc != &baseline.mcc || mnc != &baseline.mnc {
            assessment.records.push(AnomalyRecord {
                timestamp,
                kind: AnomalyKind::NetworkMismatch,
                message: format!(
                    "unexpected network: observed MCC={mcc} MNC={mnc}, expected MCC={} MNC={}",
                    baseline.mcc, baseline.mnc
                ),
            });
        }
    }

    // Rule 2: GSM-family fallback.
    if let Some(tech) = &fields.access_tech {
        if tech.to_lowercase().contains(DOWNGRADE_MARKER) {
            assessment.records.push(AnomalyRecord {
                timestamp,
                kind: AnomalyKind::TechnologyDowngrade,
                message: format!(
                    "downgraded to {} (2G), possible interception",
                    tech.to_uppercase()
                ),
            });
        } else {
            assessment.tech_note = Some(tech.clone());
        }
    }

    assessment
}

/// [`assess`] stamped with the current local wall-clock time.
pub fn assess_now(fields: &RegistrationFields, baseline: &Baseline) -> Assessment {
    assess(fields, baseline, Local::now())
}
