use anyhow::{Result, bail};
use serde::Deserialize;

use crate::auth::{DEFAULT_NONCE_LENGTH, api_signature, generate_nonce};

// --- API response types (serde) ---

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub code: u32,
    pub message: String,
}

/// JSON body returned by `GET /api/v0/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub error: Option<ApiError>,
    pub session: Option<Session>,
}

/// An API session as returned by the login endpoint. Depending on server
/// version the session carries a bearer-style `key`, a `publicKey` +
/// `secretKey` pair for signed requests, or both.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Option<u64>,
    pub user_id: Option<u64>,
    pub client: Option<String>,
    pub expire: Option<i64>,
    pub key: Option<String>,
    pub public_key: Option<String>,
    pub secret_key: Option<String>,
}

// --- Domain types ---

/// Which credential flavor to derive from a login session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Per-request HMAC-SHA1 signatures over identifier/nonce/method/resource.
    Signed,
    /// The session key passed verbatim as a bearer token, no signing.
    SessionKey,
}

/// Credentials for authenticating API requests, derived from a login session.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Identifier (public key, or decimal user ID) plus HMAC secret.
    Keypair { identifier: String, secret: String },
    /// Opaque session key used directly as the `s` parameter.
    SessionKey(String),
}

impl Credentials {
    /// Derive credentials from a login session.
    ///
    /// For [`AuthMode::Signed`] the identifier is the session's public key,
    /// falling back to the decimal user ID when no public key is present.
    /// A session missing the fields the requested mode needs is an error.
    pub fn from_session(session: &Session, mode: AuthMode) -> Result<Self> {
        match mode {
            AuthMode::Signed => {
                let secret = match &session.secret_key {
                    Some(s) => s.clone(),
                    None => bail!("login session has no secretKey"),
                };
                let identifier = match (&session.public_key, session.user_id) {
                    (Some(public), _) => public.clone(),
                    (None, Some(user_id)) => user_id.to_string(),
                    (None, None) => bail!("login session has no publicKey or userId"),
                };
                Ok(Credentials::Keypair { identifier, secret })
            }
            AuthMode::SessionKey => match &session.key {
                Some(key) => Ok(Credentials::SessionKey(key.clone())),
                None => bail!("login session has no key"),
            },
        }
    }

    /// Build the `s` query-parameter token for one request, using the given
    /// nonce. For the keypair variant this is the colon-delimited triple
    /// `identifier:nonce:signature`; the session-key variant is the key
    /// itself and ignores the nonce.
    pub fn token_with_nonce(&self, nonce: &str, method: &str, resource: &str) -> String {
        match self {
            Credentials::Keypair { identifier, secret } => {
                let signature = api_signature(identifier, nonce, method, resource, secret);
                format!("{identifier}:{nonce}:{signature}")
            }
            Credentials::SessionKey(key) => key.clone(),
        }
    }

    /// Build the `s` token for one request with a freshly generated nonce.
    pub fn token(&self, method: &str, resource: &str) -> String {
        self.token_with_nonce(&generate_nonce(DEFAULT_NONCE_LENGTH), method, resource)
    }
}
