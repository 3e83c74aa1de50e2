//! Core types and structures for termdock
//!
//! This crate provides the foundational types shared by the termdock crates:
//! launch configurations, shell profiles, and the disposal-policy vocabulary.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Launch shapes
// ============================================================================

/// Normalized session-start descriptor, ready for a process spawner.
///
/// Produced fresh on every resolution call; the caller owns the value after
/// return and the resolver keeps no reference to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchConfig {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub executable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cwd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub args: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub env: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
}

impl LaunchConfig {
    /// True when no field is set, i.e. the `{}` config.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A named, discoverable shell definition from which a concrete
/// [`LaunchConfig`] can be derived.
///
/// Field names follow the host configuration surface these shapes arrive
/// from, hence the camelCase wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellProfile {
    pub profile_name: String,
    pub path: String,
    #[serde(default)]
    pub is_default: bool,
    /// When true, the profile name becomes the resolved config's `name`.
    #[serde(default)]
    pub override_name: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub args: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub env: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub icon: Option<String>,
}

/// Resolver input: either an already-resolved config or a profile still to
/// be converted. The tag is computed once at ingestion instead of re-checked
/// field-by-field inside the resolver.
#[derive(Debug, Clone, PartialEq)]
pub enum LaunchSource {
    Config(LaunchConfig),
    Profile(ShellProfile),
}

impl LaunchSource {
    /// Ingest an untyped host value, applying the structural rule: a `path`
    /// field marks a profile; anything else (including `{}`) is treated as
    /// an already-resolved launch config.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        if value.get("path").is_some() {
            serde_json::from_value::<ShellProfile>(value).map(Self::Profile)
        } else {
            serde_json::from_value::<LaunchConfig>(value).map(Self::Config)
        }
    }
}

impl From<LaunchConfig> for LaunchSource {
    fn from(config: LaunchConfig) -> Self {
        Self::Config(config)
    }
}

impl From<ShellProfile> for LaunchSource {
    fn from(profile: ShellProfile) -> Self {
        Self::Profile(profile)
    }
}

// ============================================================================
// Placement and policy
// ============================================================================

/// Where a terminal session is hosted in the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalLocation {
    /// Hosted as an editor tab; tab close owns its own confirmation flow.
    Editor,
    /// Hosted in the terminal panel.
    Panel,
}

impl std::fmt::Display for TerminalLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Editor => write!(f, "editor"),
            Self::Panel => write!(f, "panel"),
        }
    }
}

impl std::str::FromStr for TerminalLocation {
    type Err = InvalidSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "editor" => Ok(Self::Editor),
            "panel" => Ok(Self::Panel),
            _ => Err(InvalidSettingError {
                setting: "terminal location",
                value: s.to_string(),
                valid: "'editor', 'panel'",
            }),
        }
    }
}

/// User-configured policy controlling when a close-with-live-children
/// confirmation prompt is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmOnKill {
    /// Never prompt, regardless of placement or child processes.
    Never,
    /// Prompt only for editor-placed sessions (handled by the editor's own
    /// tab-close flow, so the guard itself never prompts under this value).
    Editor,
    /// Prompt for panel-placed sessions with live children.
    Panel,
    /// Prompt everywhere a prompt is not already owned by the editor flow.
    Always,
}

impl Default for ConfirmOnKill {
    fn default() -> Self {
        Self::Editor
    }
}

impl std::fmt::Display for ConfirmOnKill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Never => write!(f, "never"),
            Self::Editor => write!(f, "editor"),
            Self::Panel => write!(f, "panel"),
            Self::Always => write!(f, "always"),
        }
    }
}

impl std::str::FromStr for ConfirmOnKill {
    type Err = InvalidSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "never" => Ok(Self::Never),
            "editor" => Ok(Self::Editor),
            "panel" => Ok(Self::Panel),
            "always" => Ok(Self::Always),
            _ => Err(InvalidSettingError {
                setting: "confirmOnKill",
                value: s.to_string(),
                valid: "'never', 'editor', 'panel', 'always'",
            }),
        }
    }
}

/// Error for unknown setting strings.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid {setting} value: '{value}'. Valid options: {valid}")]
pub struct InvalidSettingError {
    pub setting: &'static str,
    pub value: String,
    pub valid: &'static str,
}

// ============================================================================
// Disposal
// ============================================================================

/// Per-call input to the disposal guard, built by the caller from live
/// session state at the moment of the close request. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisposalRequest {
    pub location: TerminalLocation,
    pub has_child_processes: bool,
}

/// Terminal outcome of a disposal request.
///
/// Declining is a first-class outcome, not an error: the call completed
/// normally without having disposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisposalOutcome {
    /// Disposed immediately, no prompt shown.
    Disposed,
    /// Disposed after the user confirmed.
    DisposedAfterConfirm,
    /// The user declined; the close request was abandoned.
    Declined,
}

impl DisposalOutcome {
    pub fn disposed(&self) -> bool {
        matches!(self, Self::Disposed | Self::DisposedAfterConfirm)
    }
}

impl std::fmt::Display for DisposalOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disposed => write!(f, "disposed"),
            Self::DisposedAfterConfirm => write!(f, "disposed_after_confirm"),
            Self::Declined => write!(f, "declined"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_confirm_on_kill_round_trip() {
        for policy in [
            ConfirmOnKill::Never,
            ConfirmOnKill::Editor,
            ConfirmOnKill::Panel,
            ConfirmOnKill::Always,
        ] {
            assert_eq!(ConfirmOnKill::from_str(&policy.to_string()).unwrap(), policy);
        }
    }

    #[test]
    fn test_confirm_on_kill_rejects_unknown() {
        let err = ConfirmOnKill::from_str("sometimes").unwrap_err();
        assert!(err.to_string().contains("sometimes"));
    }

    #[test]
    fn test_confirm_on_kill_default_is_editor() {
        assert_eq!(ConfirmOnKill::default(), ConfirmOnKill::Editor);
    }

    #[test]
    fn test_launch_source_tags_on_path_presence() {
        let profile = LaunchSource::from_value(serde_json::json!({
            "profileName": "bash",
            "path": "/bin/bash",
            "isDefault": true
        }))
        .unwrap();
        assert!(matches!(profile, LaunchSource::Profile(_)));

        let config = LaunchSource::from_value(serde_json::json!({
            "executable": "/bin/zsh",
            "cwd": "/tmp"
        }))
        .unwrap();
        assert!(matches!(config, LaunchSource::Config(_)));

        // The empty object is an already-resolved (empty) config.
        let empty = LaunchSource::from_value(serde_json::json!({})).unwrap();
        assert_eq!(empty, LaunchSource::Config(LaunchConfig::default()));
    }

    #[test]
    fn test_launch_config_skips_absent_fields() {
        let json = serde_json::to_string(&LaunchConfig::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
