//! Settings access for the disposal guard.
//!
//! The guard never caches the policy: it reads through this trait on every
//! invocation, so a user changing the setting takes effect on the next close
//! request without any re-wiring.

use std::sync::{Arc, RwLock};
use termdock_types::ConfirmOnKill;

/// Synchronous view of the latest user-set configuration.
pub trait SettingsReader: Send + Sync {
    /// Current `terminal.confirmOnKill` value.
    fn confirm_on_kill(&self) -> ConfirmOnKill;
}

/// Shared in-memory settings, mutable at any time from the host side.
///
/// Cloning shares the underlying store, so a host can hand one handle to the
/// guard and keep another to apply configuration changes.
#[derive(Debug, Clone, Default)]
pub struct SharedSettings {
    confirm_on_kill: Arc<RwLock<ConfirmOnKill>>,
}

impl SharedSettings {
    pub fn new(policy: ConfirmOnKill) -> Self {
        Self {
            confirm_on_kill: Arc::new(RwLock::new(policy)),
        }
    }

    /// Update the policy; affects subsequent guard calls only, never a
    /// confirmation that is already pending.
    pub fn set_confirm_on_kill(&self, policy: ConfirmOnKill) {
        *self.confirm_on_kill.write().unwrap() = policy;
    }
}

impl SettingsReader for SharedSettings {
    fn confirm_on_kill(&self) -> ConfirmOnKill {
        *self.confirm_on_kill.read().unwrap()
    }
}
