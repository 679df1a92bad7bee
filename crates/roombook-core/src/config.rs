// ── Runtime connection configuration ──
//
// These types describe *how* to reach the reservation service and which
// zone the user works in. They carry credential data and connection
// tuning, but never touch disk. The CLI constructs a `ClientConfig` and
// hands it in.

use std::path::PathBuf;
use std::time::Duration;

use roombook_api::auth::{DEFAULT_SERVICE_PASSWORD, DEFAULT_SERVICE_USERNAME};
use secrecy::SecretString;
use url::Url;

use crate::time::ZoneSetting;

/// Service-level basic-auth credentials.
#[derive(Debug, Clone)]
pub struct ServiceCredentials {
    pub username: String,
    pub password: SecretString,
}

impl Default for ServiceCredentials {
    fn default() -> Self {
        Self {
            username: DEFAULT_SERVICE_USERNAME.into(),
            password: SecretString::from(DEFAULT_SERVICE_PASSWORD.to_owned()),
        }
    }
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed test deployments).
    DangerAcceptInvalid,
}

/// Everything needed to talk to one reservation service deployment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., `https://rooms.example.com/api/`).
    pub url: Url,
    pub credentials: ServiceCredentials,
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
    /// Zone that local booking times are entered and shown in.
    pub zone: ZoneSetting,
}

impl ClientConfig {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            credentials: ServiceCredentials::default(),
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            zone: ZoneSetting::default(),
        }
    }
}
