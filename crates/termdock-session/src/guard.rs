use anyhow::Result;
use std::sync::{Arc, Mutex};

use crate::dialog::ConfirmationDialog;
use crate::logger::DisposalLogger;
use crate::settings::SettingsReader;
use termdock_types::{ConfirmOnKill, DisposalOutcome, DisposalRequest, TerminalLocation};

/// Prompt shown before killing a session with live child processes.
pub const CONFIRM_KILL_MESSAGE: &str =
    "The terminal has active child processes. Do you want to terminate it anyway?";

/// Decides, per close request, whether a terminal session may be torn down
/// immediately, needs user confirmation first, or is abandoned.
///
/// Stateless per call: the policy is read fresh on every invocation and no
/// state is carried between calls, so any number of disposals can be pending
/// concurrently without ordering guarantees between them.
pub struct DisposalGuard {
    settings: Arc<dyn SettingsReader>,
    dialog: Arc<dyn ConfirmationDialog>,
    logger: Option<Mutex<DisposalLogger>>,
}

impl std::fmt::Debug for DisposalGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisposalGuard")
            .field("policy", &self.settings.confirm_on_kill())
            .field("logging", &self.logger.is_some())
            .finish()
    }
}

impl DisposalGuard {
    pub fn new(settings: Arc<dyn SettingsReader>, dialog: Arc<dyn ConfirmationDialog>) -> Self {
        Self {
            settings,
            dialog,
            logger: None,
        }
    }

    /// Record every disposal decision to a JSON-lines log.
    pub fn with_logger(mut self, logger: DisposalLogger) -> Self {
        self.logger = Some(Mutex::new(logger));
        self
    }

    /// Run the close decision for one session and invoke `dispose` if (and
    /// only if) teardown is authorized. `dispose` runs at most once.
    ///
    /// Editor-placed sessions never prompt here: the editor's own tab-close
    /// flow owns that confirmation, and prompting again would ask the user
    /// twice for the same action. A dialog fault propagates as an error
    /// without invoking `dispose`; a declined prompt completes normally with
    /// [`DisposalOutcome::Declined`].
    pub async fn dispose(
        &self,
        request: DisposalRequest,
        dispose: impl FnOnce(),
    ) -> Result<DisposalOutcome> {
        let policy = self.settings.confirm_on_kill();

        let outcome = match (request.location, policy) {
            (TerminalLocation::Editor, _) => {
                dispose();
                DisposalOutcome::Disposed
            }
            (_, ConfirmOnKill::Never | ConfirmOnKill::Editor) => {
                dispose();
                DisposalOutcome::Disposed
            }
            (_, ConfirmOnKill::Panel | ConfirmOnKill::Always) => {
                if !request.has_child_processes {
                    dispose();
                    DisposalOutcome::Disposed
                } else if self.dialog.confirm(CONFIRM_KILL_MESSAGE).await? {
                    dispose();
                    DisposalOutcome::DisposedAfterConfirm
                } else {
                    DisposalOutcome::Declined
                }
            }
        };

        if let Some(logger) = &self.logger {
            // Logging failures never affect the disposal decision
            let _ = logger.lock().unwrap().log_decision(&request, policy, outcome);
        }

        Ok(outcome)
    }
}
