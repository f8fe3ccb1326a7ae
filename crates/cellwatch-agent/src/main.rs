//! Cellwatch agent — polls one modem and flags registration anomalies.
//!
//! - Reads registration state via `mmcli` (or synthesizes it in `--simulate`)
//! - Classifies MCC/MNC and access technology against the expected baseline
//! - Prints anomalies with severity colors; optionally appends them to a log
//! - Polls on a fixed interval until interrupted

mod modem;
mod render;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::RecvTimeoutError;
use tracing_subscriber::EnvFilter;

use cellwatch_core::classify::{self, Baseline};
use cellwatch_core::{fields, report};

/// Heuristic cellular registration anomaly monitor.
#[derive(Parser, Debug)]
#[command(name = "cellwatch", about = "Heuristic cellular registration anomaly monitor")]
struct Cli {
    /// ModemManager modem index to poll.
    #[arg(short = 'm', long, default_value_t = 0)]
    modem: u32,

    /// Expected mobile country code.
    #[arg(long, default_value = "310")]
    mcc: String,

    /// Expected mobile network code.
    #[arg(long, default_value = "260")]
    mnc: String,

    /// Polling interval in seconds.
    #[arg(short = 'i', long, default_value_t = 10)]
    interval: u64,

    /// Append anomalies to this file (logging disabled when absent).
    #[arg(short = 'l', long)]
    log: Option<PathBuf>,

    /// Generate synthetic modem status instead of querying mmcli.
    #[arg(long, default_value_t = false)]
    simulate: bool,

    /// Run a single poll cycle and exit.
    #[arg(long, default_value_t = false)]
    once: bool,
}

fn main() -> anyhow::Result<()> {
    // ── Logging ─────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();
    let baseline = Baseline::new(cli.mcc.clone(), cli.mnc.clone());

    tracing::info!(
        modem = cli.modem,
        mcc = %baseline.mcc,
        mnc = %baseline.mnc,
        interval_s = cli.interval,
        log = ?cli.log,
        simulate = cli.simulate,
        "cellwatch starting"
    );

    // ── Graceful shutdown ───────────────────────────────────────
    // An interrupt delivers one message here; the poll loop's sleep at the
    // bottom doubles as the cancellation checkpoint.
    let (shutdown_tx, shutdown_rx) = crossbeam_channel::bounded::<()>(1);
    ctrlc::set_handler(move || {
        let _ = shutdown_tx.try_send(());
    })
    .context("failed to install interrupt handler")?;

    render::print_banner();

    // ── Poll loop ───────────────────────────────────────────────
    let interval = Duration::from_secs(cli.interval);
    loop {
        poll_once(&cli, &baseline)?;

        if cli.once {
            break;
        }

        match shutdown_rx.recv_timeout(interval) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
    }

    render::print_farewell();
    Ok(())
}

/// One poll cycle: fetch a snapshot, classify it, display, optionally log.
///
/// An unavailable snapshot skips the cycle; only a missing mmcli binary
/// propagates out and ends the process.
fn poll_once(cli: &Cli, baseline: &Baseline) -> anyhow::Result<()> {
    let snapshot = if cli.simulate {
        Some(modem::simulated_status(baseline))
    } else {
        modem::fetch_status(cli.modem)?
    };

    let Some(snapshot) = snapshot else {
        return Ok(());
    };

    let extracted = fields::extract(&snapshot);
    let assessment = classify::assess_now(&extracted, baseline);

    // Display first: a failing log sink must never suppress console output.
    for record in &assessment.records {
        render::print_record(record);
    }
    if let Some(tech) = &assessment.tech_note {
        render::print_tech_note(tech);
    }

    if let Some(path) = &cli.log {
        if let Err(e) = report::append(path, &assessment.records) {
            tracing::warn!(path = %path.display(), error = %e, "failed to append anomaly log");
        }
    }

    Ok(())
}
