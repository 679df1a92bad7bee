// Service-level authentication
//
// The reservation API sits behind HTTP basic auth with a shared service
// account. End-user login is a separate endpoint (`users.rs`); these
// credentials only open the door to the API itself.

use secrecy::{ExposeSecret, SecretString};

/// Username used by the public demo deployment.
pub const DEFAULT_SERVICE_USERNAME: &str = "admin";

/// Password used by the public demo deployment.
pub const DEFAULT_SERVICE_PASSWORD: &str = "admin";

/// Basic-auth credentials applied to every request.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    pub username: String,
    pub password: SecretString,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    /// Apply the credentials to a request builder.
    pub(crate) fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.basic_auth(&self.username, Some(self.password.expose_secret()))
    }
}

impl Default for BasicAuth {
    fn default() -> Self {
        Self {
            username: DEFAULT_SERVICE_USERNAME.into(),
            password: SecretString::from(DEFAULT_SERVICE_PASSWORD.to_owned()),
        }
    }
}
