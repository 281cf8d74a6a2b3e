//! Seams between the session core and the browser. The wasm build plugs in the
//! `gloo-net` client and `localStorage`; tests plug in in-memory fakes.

use super::types::{SessionGrant, SessionId, SessionToken, UserIdentity};
use crate::app_lib::AppError;
use async_trait::async_trait;
use std::cell::RefCell;

/// The three auth endpoints of the marketplace API.
#[async_trait(?Send)]
pub trait SessionApi {
    /// `POST /auth/session` with the identifier in `X-Session-ID`.
    async fn exchange_session(&self, session_id: &SessionId) -> Result<SessionGrant, AppError>;

    /// `GET /auth/me`, authenticated by `token` when present.
    async fn current_user(&self, token: Option<&SessionToken>) -> Result<UserIdentity, AppError>;

    /// `POST /auth/logout`, authenticated by `token` when present.
    async fn logout(&self, token: Option<&SessionToken>) -> Result<(), AppError>;
}

/// Durable single-slot storage for the session token. Last write wins.
pub trait TokenStore {
    fn load(&self) -> Option<SessionToken>;
    fn save(&self, token: &SessionToken) -> Result<(), AppError>;
    fn clear(&self);
}

/// Token store that lives as long as the page. Used when `localStorage` is
/// unavailable (private mode, sandboxed iframes) and in tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RefCell<Option<SessionToken>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: SessionToken) -> Self {
        Self {
            slot: RefCell::new(Some(token)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<SessionToken> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &SessionToken) -> Result<(), AppError> {
        self.slot.replace(Some(token.clone()));
        Ok(())
    }

    fn clear(&self) {
        self.slot.replace(None);
    }
}
