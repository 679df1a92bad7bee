//! CLI configuration: thin wrapper around `roombook_config` shared types.
//!
//! Re-exports the shared types and layers `GlobalOpts` flag overrides
//! (--server, --timezone, --insecure, --timeout) on top of a profile.

use roombook_core::ClientConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use roombook_config::{
    Config, Defaults, Profile, config_path, load_config_or_default, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Translate a `Profile` + global flags into a `ClientConfig`.
///
/// Each setting comes from the flag (or its env var) when given, then the
/// profile, then the config-wide `defaults`.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
    global: &GlobalOpts,
) -> Result<ClientConfig, CliError> {
    let mut profile = profile.clone();
    if let Some(ref server) = global.server {
        profile.server.clone_from(server);
    }
    if let Some(ref zone) = global.timezone {
        profile.timezone = Some(zone.clone());
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }

    Ok(roombook_config::profile_to_client_config(
        &profile,
        profile_name,
        defaults,
    )?)
}

/// Build a `ClientConfig` from the config file, profile, and CLI overrides.
pub fn build_client_config(global: &GlobalOpts) -> Result<ClientConfig, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    let profile = cfg.profile(&profile_name).map_err(|_| {
        let mut available: Vec<_> = cfg.profiles.keys().cloned().collect();
        available.sort();
        CliError::ProfileNotFound {
            name: profile_name.clone(),
            available: if available.is_empty() {
                "(none)".into()
            } else {
                available.join(", ")
            },
        }
    })?;

    resolve_profile(&profile, &profile_name, &cfg.defaults, global)
}
