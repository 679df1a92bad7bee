// User account endpoints
//
// Sign-up, login, and account maintenance. Passwords travel as plain JSON
// strings (the API offers nothing else); they are kept in `SecretString`
// until the moment the body is built.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{UserCommand, UserId, UserRecord};

impl ApiClient {
    /// Register a new account.
    ///
    /// `POST users`. The service answers HTTP 400 when the email is
    /// already registered.
    pub async fn create_user(&self, command: &UserCommand) -> Result<UserRecord, Error> {
        debug!(email = %command.email, "creating user");
        self.post("users", command).await
    }

    /// Authenticate an end user.
    ///
    /// `POST auth/login` with `{"email": "...", "password": "..."}`
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<UserRecord, Error> {
        debug!(email, "logging in");
        let body = json!({
            "email": email,
            "password": password.expose_secret(),
        });
        self.post("auth/login", &body).await
    }

    /// Fetch a user by id.
    ///
    /// `GET users/{id}`
    pub async fn get_user(&self, id: UserId) -> Result<UserRecord, Error> {
        self.get(&format!("users/{id}")).await
    }

    /// Replace a user's profile.
    ///
    /// `PUT users/{id}`
    pub async fn update_user(&self, id: UserId, command: &UserCommand) -> Result<UserRecord, Error> {
        debug!(id, "updating user");
        self.put(&format!("users/{id}"), command).await
    }

    /// Delete a user account.
    ///
    /// `DELETE users/{id}`
    pub async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        debug!(id, "deleting user");
        self.delete(&format!("users/{id}")).await
    }
}
