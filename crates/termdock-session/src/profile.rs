use termdock_types::{LaunchConfig, LaunchSource, ShellProfile};

/// Normalize a profile-or-config value into a launch configuration.
///
/// Three cases, checked in order:
/// 1. No source at all yields the empty config; a `cwd` override is NOT
///    applied in this case (legacy behavior, kept deliberately).
/// 2. An already-resolved config passes through unchanged, except a supplied
///    `cwd` override replaces its working directory.
/// 3. A profile is converted field-by-field: `path` becomes `executable`,
///    the override `cwd` becomes the working directory (a profile carries
///    none of its own), and `profile_name` becomes `name` only when the
///    profile opts in via `override_name`.
///
/// Pure and total: no error conditions, no side effects.
pub fn resolve_launch_config(
    source: Option<LaunchSource>,
    cwd: Option<&str>,
) -> LaunchConfig {
    match source {
        None => LaunchConfig::default(),
        Some(LaunchSource::Config(mut config)) => {
            if let Some(cwd) = cwd {
                config.cwd = Some(cwd.to_string());
            }
            config
        }
        Some(LaunchSource::Profile(profile)) => LaunchConfig {
            executable: Some(profile.path),
            cwd: cwd.map(str::to_string),
            args: profile.args,
            env: profile.env,
            color: profile.color,
            icon: profile.icon,
            name: if profile.override_name {
                Some(profile.profile_name)
            } else {
                None
            },
        },
    }
}

/// Build a platform-default shell profile for hosts with no configured
/// profiles, so the same resolver path still produces a launchable config.
pub fn default_shell_profile() -> ShellProfile {
    let path = if cfg!(windows) {
        "cmd.exe".to_string()
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/bash".to_string())
    };

    ShellProfile {
        profile_name: path.rsplit(['/', '\\']).next().unwrap_or(&path).to_string(),
        path,
        is_default: true,
        override_name: false,
        args: None,
        color: None,
        env: None,
        icon: None,
    }
}
