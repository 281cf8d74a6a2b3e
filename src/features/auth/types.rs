//! Session credentials and the identity payloads returned by the auth
//! endpoints. Identifiers and tokens are wrapped in `secrecy` types so they
//! never show up in `Debug` output or logs.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One-time identifier delivered by the identity provider in the URL fragment.
/// It is consumed by a single exchange and never persisted.
pub struct SessionId(SecretString);

impl SessionId {
    /// Returns `None` for empty or whitespace-only values. Anything else is
    /// kept exactly as delivered.
    pub fn parse(value: &str) -> Option<Self> {
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(SecretString::from(value.to_string())))
        }
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("SessionId([REDACTED])")
    }
}

/// Opaque credential issued by the backend. The client stores and presents it
/// but never decodes it; validity is decided by the backend alone.
pub struct SessionToken(SecretString);

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::from(value.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// `Authorization` header carrying this token.
    pub fn bearer_header(&self) -> (String, String) {
        (
            "Authorization".to_string(),
            format!("Bearer {}", self.expose()),
        )
    }
}

impl Clone for SessionToken {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl PartialEq for SessionToken {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for SessionToken {}

impl fmt::Debug for SessionToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("SessionToken([REDACTED])")
    }
}

impl<'de> Deserialize<'de> for SessionToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Headers for a request authenticated by the stored token, if any.
pub fn auth_headers(token: Option<&SessionToken>) -> Vec<(String, String)> {
    token.map(SessionToken::bearer_header).into_iter().collect()
}

/// User attributes returned by `/auth/session` and `/auth/me`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserIdentity {
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
}

impl UserIdentity {
    pub fn is_creator(&self) -> bool {
        self.user_type.as_deref() == Some("creator")
    }
}

/// Response of the one-time identifier exchange.
#[derive(Clone, Debug, Deserialize)]
pub struct SessionGrant {
    pub session_token: SessionToken,
    pub user: UserIdentity,
}
