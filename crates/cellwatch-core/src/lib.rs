//! Decision core for the cellwatch modem monitor.
//!
//! This crate contains:
//! - **Field extraction** — pulls MCC/MNC/access-technology out of raw
//!   ModemManager status text, each field independently optional
//! - **Classification** — compares extracted fields against the expected
//!   operator baseline and emits timestamped anomaly records
//! - **Log sink** — append-only flat-file persistence for anomaly records
//!
//! Everything here is heuristic: an anomaly record flags a deviation worth a
//! human look, it does not prove an interception attack. Process spawning,
//! terminal output, and the polling cadence live in the agent binary, not
//! here.

pub mod classify;
pub mod fields;
pub mod report;
