use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use termdock_session::dialog::ConfirmationDialog;

/// Dialog double with a preset reply, mutable between calls, plus a counter
/// so tests can assert the dialog was never consulted.
pub struct StubDialog {
    reply: AtomicBool,
    asked: AtomicUsize,
}

impl StubDialog {
    pub fn replying(reply: bool) -> Self {
        Self {
            reply: AtomicBool::new(reply),
            asked: AtomicUsize::new(0),
        }
    }

    pub fn set_reply(&self, reply: bool) {
        self.reply.store(reply, Ordering::SeqCst);
    }

    pub fn times_asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfirmationDialog for StubDialog {
    async fn confirm(&self, _message: &str) -> Result<bool> {
        self.asked.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.load(Ordering::SeqCst))
    }
}
