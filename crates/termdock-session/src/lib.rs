// Terminal session lifecycle module
//
// This module covers the two decisions a host makes around a terminal
// session's lifetime: turning a selected shell profile into a concrete
// launch configuration, and deciding whether a close request needs a
// confirmation prompt before the session is torn down.

mod guard;
mod logger;
mod manager;
mod profile;
pub mod dialog;
pub mod settings;

// Re-export public API
pub use guard::{DisposalGuard, CONFIRM_KILL_MESSAGE};
pub use logger::DisposalLogger;
pub use manager::SessionLifecycle;
pub use profile::{default_shell_profile, resolve_launch_config};

/// Settings key the guard reads its policy from, as exposed by hosts.
pub const CONFIRM_ON_KILL_SETTING: &str = "terminal.confirmOnKill";
