//! Append-only anomaly log sink.
//!
//! Ownership of the file handle is transient: it is opened, appended to,
//! and released within one [`append`] call, so a concurrent reader never
//! observes a handle held across poll cycles. There is no rotation and no
//! size cap.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::classify::AnomalyRecord;

/// Append `records` to the log at `path`, one line per record, in order.
///
/// An empty batch is a no-op that leaves the filesystem untouched: a poll
/// that produced only a display note never creates or modifies the log.
pub fn append(path: &Path, records: &[AnomalyRecord]) -> io::Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for record in records {
        writeln!(file, "{}", record.log_line())?;
    }
    Ok(())
}
