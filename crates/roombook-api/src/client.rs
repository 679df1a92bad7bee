// Async HTTP client for the room reservation API.
//
// Base path: https://{host}/api/
// Auth: HTTP basic (service account) on every request
//
// Endpoint groups (bookings, rooms, users) are implemented as inherent
// methods in separate files to keep this module focused on transport.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::auth::BasicAuth;
use crate::error::Error;
use crate::transport::TransportConfig;

/// Default public deployment of the reservation service.
pub const DEFAULT_BASE_URL: &str = "https://roomreservation.cleverapps.io/api/";

// ── Error response shape ─────────────────────────────────────────────

/// Spring-style error body: `{"status":409,"error":"Conflict","message":"..."}`.
#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the reservation REST API.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its
/// connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    auth: BasicAuth,
    timeout_secs: u64,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL, service credentials, and transport config.
    pub fn new(base_url: &str, auth: BasicAuth, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
            auth,
            timeout_secs: transport.timeout_secs(),
        })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client, auth: BasicAuth) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
            auth,
            timeout_secs: 0,
        })
    }

    /// Ensure the base path ends with `/` so relative joins append
    /// rather than replace the last segment.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    /// The normalized API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.send(self.http.get(url)).await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url} params={params:?}");

        let resp = self.send(self.http.get(url).query(params)).await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.send(self.http.post(url).json(body)).await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");

        let resp = self.send(self.http.put(url).json(body)).await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");

        let resp = self.send(self.http.delete(url)).await?;
        self.handle_empty(resp).await
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, Error> {
        self.auth.apply(builder).send().await.map_err(|e| {
            if e.is_timeout() && self.timeout_secs > 0 {
                Error::Timeout {
                    timeout_secs: self.timeout_secs,
                }
            } else {
                Error::Transport(e)
            }
        })
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    /// Turn a non-2xx response into `Error::Http`, keeping the server's
    /// message verbatim. A JSON error object contributes its `message`
    /// (or `error`) field; any other body is passed through as-is.
    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), "request rejected");

        let message = match serde_json::from_str::<ErrorResponse>(&raw) {
            Ok(err) => err.message.or(err.error).filter(|m| !m.is_empty()),
            Err(_) if raw.trim().is_empty() => None,
            Err(_) => Some(raw),
        };

        Error::Http {
            status: status.as_u16(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::from_reqwest(base, reqwest::Client::new(), BasicAuth::default()).unwrap()
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let c = client("https://rooms.example.com/api");
        assert_eq!(c.base_url().as_str(), "https://rooms.example.com/api/");
        assert_eq!(
            c.url("bookings/user/7").unwrap().as_str(),
            "https://rooms.example.com/api/bookings/user/7"
        );
    }

    #[test]
    fn default_base_url_is_valid() {
        let c = client(DEFAULT_BASE_URL);
        assert_eq!(
            c.url("rooms").unwrap().as_str(),
            "https://roomreservation.cleverapps.io/api/rooms"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ApiClient::from_reqwest("not a url", reqwest::Client::new(), BasicAuth::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
