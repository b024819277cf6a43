use anyhow::{Context, Result, bail};

use crate::models::{Credentials, LoginResponse, Session};

/// Client for a wavepipe-style music-streaming JSON API.
///
/// Deliberately minimal: no retries, no backoff, no session refresh. A smoke
/// run is a linear one-shot flow, and the first failure should abort it.
pub struct WavepipeClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl WavepipeClient {
    /// `base_url` is scheme + host, e.g. `http://localhost:8080`, with no
    /// trailing slash.
    pub fn new(http: reqwest::Client, base_url: String, credentials: Credentials) -> Self {
        Self { http, base_url, credentials }
    }

    /// Fetch a resource path with a freshly authenticated `s` token and
    /// return the response body. The token is appended verbatim, matching
    /// the wire format the server parses: colons are legal in query values
    /// and must not be percent-encoded.
    pub async fn fetch(&self, resource: &str) -> Result<String> {
        let token = self.credentials.token("GET", resource);
        let url = format!("{}{}?s={}", self.base_url, resource, token);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request for {resource} failed"))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .with_context(|| format!("Failed to read response body for {resource}"))?;

        if !status.is_success() {
            bail!("HTTP {} for {}: {}", status, resource, body);
        }

        Ok(body)
    }
}

/// Log in with plaintext `u`/`p` query parameters and return the session
/// from the response. API-level errors (a populated `error` object) and a
/// missing session are both fatal.
pub async fn login(
    http: &reqwest::Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<Session> {
    let resp = http
        .get(format!("{base_url}/api/v0/login"))
        .query(&[("u", username), ("p", password)])
        .send()
        .await
        .context("Login request failed")?;

    let status = resp.status();
    let login: LoginResponse = resp
        .json()
        .await
        .context("Failed to decode login JSON")?;

    if let Some(err) = login.error {
        bail!("Login rejected (HTTP {}): {} ({})", status, err.message, err.code);
    }

    login.session.context("Login response has no session")
}
