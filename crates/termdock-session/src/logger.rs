use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::json;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use termdock_types::{ConfirmOnKill, DisposalOutcome, DisposalRequest};

/// Append-only JSON-lines log of disposal decisions.
///
/// One line per guard call: timestamp, placement, the policy in effect, the
/// child-process flag, and the outcome. Meant for after-the-fact debugging
/// of "why did closing that terminal (not) prompt me?".
pub struct DisposalLogger {
    log_file: File,
}

impl DisposalLogger {
    /// Open (creating if needed) `disposals.log` under `log_dir`.
    pub fn new(log_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&log_dir)
            .context("Failed to create log directory")?;

        let log_path = log_dir.join("disposals.log");
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .context("Failed to create disposal log file")?;

        Ok(Self { log_file })
    }

    /// Log one disposal decision.
    pub fn log_decision(
        &mut self,
        request: &DisposalRequest,
        policy: ConfirmOnKill,
        outcome: DisposalOutcome,
    ) -> Result<()> {
        let entry = json!({
            "timestamp": Utc::now().to_rfc3339(),
            "location": request.location.to_string(),
            "policy": policy.to_string(),
            "has_child_processes": request.has_child_processes,
            "outcome": outcome.to_string(),
        });

        writeln!(self.log_file, "{}", entry)
            .context("Failed to write to disposal log")?;
        self.log_file.flush()?;

        Ok(())
    }
}
