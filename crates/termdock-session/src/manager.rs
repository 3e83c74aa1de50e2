use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use crate::dialog::ConfirmationDialog;
use crate::guard::DisposalGuard;
use crate::logger::DisposalLogger;
use crate::profile::resolve_launch_config;
use crate::settings::SettingsReader;
use termdock_types::{DisposalOutcome, DisposalRequest, LaunchConfig, LaunchSource};

/// Facade bundling the launch-resolution and disposal-guard entry points
/// behind one object, so an embedding host wires its collaborators once.
///
/// Pure delegation: no semantics beyond [`resolve_launch_config`] and
/// [`DisposalGuard::dispose`].
pub struct SessionLifecycle {
    guard: DisposalGuard,
}

impl std::fmt::Debug for SessionLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionLifecycle")
            .field("guard", &self.guard)
            .finish()
    }
}

impl SessionLifecycle {
    pub fn new(settings: Arc<dyn SettingsReader>, dialog: Arc<dyn ConfirmationDialog>) -> Self {
        Self {
            guard: DisposalGuard::new(settings, dialog),
        }
    }

    /// Like [`new`](Self::new), additionally logging every disposal decision
    /// under `log_dir`.
    pub fn with_logging(
        settings: Arc<dyn SettingsReader>,
        dialog: Arc<dyn ConfirmationDialog>,
        log_dir: PathBuf,
    ) -> Result<Self> {
        let logger = DisposalLogger::new(log_dir)?;
        Ok(Self {
            guard: DisposalGuard::new(settings, dialog).with_logger(logger),
        })
    }

    /// Normalize a profile-or-config value into a launch configuration.
    pub fn resolve_launch_config(
        &self,
        source: Option<LaunchSource>,
        cwd: Option<&str>,
    ) -> LaunchConfig {
        resolve_launch_config(source, cwd)
    }

    /// Close one session, prompting first when placement, policy, and live
    /// child processes require it.
    pub async fn safe_dispose(
        &self,
        request: DisposalRequest,
        dispose: impl FnOnce(),
    ) -> Result<DisposalOutcome> {
        self.guard.dispose(request, dispose).await
    }
}
