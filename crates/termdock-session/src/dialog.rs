//! Confirmation dialog abstraction.
//!
//! The guard only needs a single yes/no question answered asynchronously;
//! how the question reaches the user (modal dialog, web client, TUI prompt)
//! is the host's business. `PendingConfirmations` is a ready-made
//! implementation for event-driven hosts that surface prompts out-of-band
//! and answer them later.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{oneshot, RwLock};

/// Asynchronous yes/no confirmation capability.
///
/// Single-shot per call: no retry is built in, and a failure to produce a
/// decision propagates to the caller uninterpreted.
#[async_trait]
pub trait ConfirmationDialog: Send + Sync {
    async fn confirm(&self, message: &str) -> Result<bool>;
}

/// A prompt waiting for an answer.
pub struct PendingConfirmation {
    pub message: String,
    responder: oneshot::Sender<bool>,
}

/// Dialog implementation that parks each question until the host answers it.
///
/// `confirm` registers the question and suspends; the host lists open
/// questions with [`pending`](Self::pending) and resolves one with
/// [`respond`](Self::respond). Dropping a pending entry without responding
/// (e.g. via [`clear`](Self::clear)) fails the suspended `confirm` call,
/// which the guard reports as an error rather than silently deciding either
/// way.
#[derive(Default)]
pub struct PendingConfirmations {
    pending: Arc<RwLock<HashMap<u64, PendingConfirmation>>>,
    next_id: AtomicU64,
}

impl PendingConfirmations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of open questions as `(id, message)` pairs.
    pub async fn pending(&self) -> Vec<(u64, String)> {
        self.pending
            .read()
            .await
            .iter()
            .map(|(id, p)| (*id, p.message.clone()))
            .collect()
    }

    /// Answer a pending question. Returns false when the id is unknown
    /// (already answered or cleared).
    pub async fn respond(&self, id: u64, confirmed: bool) -> bool {
        if let Some(pending) = self.pending.write().await.remove(&id) {
            // Ignore error if the asking side gave up waiting
            let _ = pending.responder.send(confirmed);
            true
        } else {
            false
        }
    }

    /// Drop all open questions, failing their suspended `confirm` calls.
    pub async fn clear(&self) {
        self.pending.write().await.clear();
    }
}

#[async_trait]
impl ConfirmationDialog for PendingConfirmations {
    async fn confirm(&self, message: &str) -> Result<bool> {
        let (tx, rx) = oneshot::channel();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.pending.write().await.insert(
            id,
            PendingConfirmation {
                message: message.to_string(),
                responder: tx,
            },
        );
        rx.await
            .context("confirmation dismissed without a decision")
    }
}
