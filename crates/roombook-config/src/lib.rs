//! Configuration for the roombook CLI.
//!
//! TOML profiles, service credential resolution (env + keyring +
//! plaintext), and translation to `roombook_core::ClientConfig`. The CLI
//! layers its flag overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use roombook_core::{ClientConfig, ServiceCredentials, TlsVerification, ZoneSetting};

/// Public demo deployment used when a profile names no server.
pub const DEFAULT_SERVER: &str = "https://roomreservation.cleverapps.io/api/";

/// Keyring service name for stored secrets.
pub const KEYRING_SERVICE: &str = "roombook";

/// Env var consulted for the service password when a profile names none.
pub const PASSWORD_ENV: &str = "ROOMBOOK_API_PASSWORD";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{profile}' not found")]
    UnknownProfile { profile: String },

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named service profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named reservation service profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// API base URL (e.g., "https://rooms.example.com/api/").
    #[serde(default = "default_server")]
    pub server: String,

    /// Service account username (basic auth).
    pub api_username: Option<String>,

    /// Service account password (plaintext; prefer keyring or env var).
    pub api_password: Option<String>,

    /// Environment variable name containing the service password.
    pub api_password_env: Option<String>,

    /// Zone for entering and showing booking times: "local", "UTC",
    /// "-05:00", or an IANA name.
    pub timezone: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout.
    pub timeout: Option<u64>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            server: default_server(),
            api_username: None,
            api_password: None,
            api_password_env: None,
            timezone: None,
            ca_cert: None,
            insecure: None,
            timeout: None,
        }
    }
}

fn default_server() -> String {
    DEFAULT_SERVER.into()
}

impl Config {
    /// Look up a profile; the default profile falls back to the built-in
    /// demo service when it is not configured.
    pub fn profile(&self, name: &str) -> Result<Profile, ConfigError> {
        match self.profiles.get(name) {
            Some(profile) => Ok(profile.clone()),
            None if name == "default" => Ok(Profile::default()),
            None => Err(ConfigError::UnknownProfile {
                profile: name.into(),
            }),
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "roombook", "roombook").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("roombook");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load config from `path` + environment (`ROOMBOOK_` prefix).
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("ROOMBOOK_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

// ── Credential resolution ───────────────────────────────────────────

fn keyring_entry(profile_name: &str) -> Result<keyring::Entry, keyring::Error> {
    keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/api-password"))
}

/// Store the service password for `profile_name` in the system keyring.
pub fn store_password(profile_name: &str, password: &str) -> Result<(), ConfigError> {
    keyring_entry(profile_name)?.set_password(password)?;
    Ok(())
}

/// Resolve the service account credentials for a profile.
///
/// Password lookup order: the env var named by `api_password_env`,
/// `ROOMBOOK_API_PASSWORD`, the system keyring, the plaintext field, and
/// finally the demo service default.
pub fn resolve_service_credentials(profile: &Profile, profile_name: &str) -> ServiceCredentials {
    let defaults = ServiceCredentials::default();
    let username = profile.api_username.clone().unwrap_or(defaults.username);

    // 1. Profile's api_password_env → env var lookup
    if let Some(ref env_name) = profile.api_password_env {
        if let Ok(val) = std::env::var(env_name) {
            return ServiceCredentials {
                username,
                password: SecretString::from(val),
            };
        }
    }

    // 2. Global env var
    if let Ok(val) = std::env::var(PASSWORD_ENV) {
        return ServiceCredentials {
            username,
            password: SecretString::from(val),
        };
    }

    // 3. System keyring
    if let Ok(secret) = keyring_entry(profile_name).and_then(|e| e.get_password()) {
        return ServiceCredentials {
            username,
            password: SecretString::from(secret),
        };
    }

    // 4. Plaintext in config
    if let Some(ref pw) = profile.api_password {
        return ServiceCredentials {
            username,
            password: SecretString::from(pw.clone()),
        };
    }

    debug!(profile = profile_name, "using default service credentials");
    ServiceCredentials {
        username,
        password: defaults.password,
    }
}

/// Parse a profile's `timezone`, defaulting to the device zone.
pub fn resolve_zone(profile: &Profile) -> Result<ZoneSetting, ConfigError> {
    match profile.timezone.as_deref() {
        None => Ok(ZoneSetting::System),
        Some(raw) => raw.parse().map_err(|e: roombook_core::TimeError| ConfigError::Validation {
            field: "timezone".into(),
            reason: e.to_string(),
        }),
    }
}

/// Build a `ClientConfig` from a profile. Settings the profile leaves
/// unset come from `defaults`.
pub fn profile_to_client_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<ClientConfig, ConfigError> {
    let url: url::Url = profile.server.parse().map_err(|_| ConfigError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {}", profile.server),
    })?;

    let tls = if profile.insecure.unwrap_or(defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    Ok(ClientConfig {
        url,
        credentials: resolve_service_credentials(profile, profile_name),
        tls,
        timeout: Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout)),
        zone: resolve_zone(profile)?,
    })
}
