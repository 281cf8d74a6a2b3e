//! In-memory doubles for the auth seams, shared by the unit tests.

use super::{
    ports::SessionApi,
    types::{SessionGrant, SessionId, SessionToken, UserIdentity},
};
use crate::app_lib::AppError;
use async_trait::async_trait;
use std::{
    cell::{Cell, RefCell},
    future::poll_fn,
    rc::Rc,
    task::Poll,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Exchange(String),
    CurrentUser(Option<String>),
    Logout(Option<String>),
}

/// Holds calls until opened. Lets tests observe a request that is in flight.
#[derive(Clone, Default)]
pub(crate) struct Gate(Rc<Cell<bool>>);

impl Gate {
    pub(crate) fn open(&self) {
        self.0.set(true);
    }

    async fn wait(&self) {
        poll_fn(|cx| {
            if self.0.get() {
                Poll::Ready(())
            } else {
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        })
        .await;
    }
}

pub(crate) struct FakeSessionApi {
    pub(crate) calls: RefCell<Vec<Call>>,
    pub(crate) exchange_result: Result<SessionGrant, AppError>,
    pub(crate) me_result: Result<UserIdentity, AppError>,
    pub(crate) logout_result: Result<(), AppError>,
    /// When set, `/auth/me` answers `me_result` only for this token and 401
    /// for anything else, including no token at all.
    pub(crate) accepted_token: Option<&'static str>,
    pub(crate) gate: Option<Gate>,
}

impl Default for FakeSessionApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            exchange_result: Err(AppError::http(401, "Invalid session")),
            me_result: Err(AppError::http(401, "Unauthorized")),
            logout_result: Ok(()),
            accepted_token: None,
            gate: None,
        }
    }
}

impl FakeSessionApi {
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    async fn pass_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.wait().await;
        }
    }
}

#[async_trait(?Send)]
impl SessionApi for FakeSessionApi {
    async fn exchange_session(&self, session_id: &SessionId) -> Result<SessionGrant, AppError> {
        self.calls
            .borrow_mut()
            .push(Call::Exchange(session_id.expose().to_string()));
        self.pass_gate().await;
        self.exchange_result.clone()
    }

    async fn current_user(&self, token: Option<&SessionToken>) -> Result<UserIdentity, AppError> {
        self.calls
            .borrow_mut()
            .push(Call::CurrentUser(token.map(|t| t.expose().to_string())));
        self.pass_gate().await;
        match self.accepted_token {
            Some(accepted) if token.map(SessionToken::expose) != Some(accepted) => {
                Err(AppError::http(401, "Not authenticated"))
            }
            _ => self.me_result.clone(),
        }
    }

    async fn logout(&self, token: Option<&SessionToken>) -> Result<(), AppError> {
        self.calls
            .borrow_mut()
            .push(Call::Logout(token.map(|t| t.expose().to_string())));
        self.pass_gate().await;
        self.logout_result.clone()
    }
}

pub(crate) fn identity(name: &str) -> UserIdentity {
    UserIdentity {
        user_id: format!("user_{}", name.to_lowercase()),
        name: name.to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        picture: None,
        user_type: Some("client".to_string()),
    }
}

pub(crate) fn grant(token: &str, name: &str) -> SessionGrant {
    SessionGrant {
        session_token: SessionToken::new(token),
        user: identity(name),
    }
}

/// Store whose writes always fail, like `localStorage` over quota.
#[derive(Default)]
pub(crate) struct FailingTokenStore;

impl super::ports::TokenStore for FailingTokenStore {
    fn load(&self) -> Option<SessionToken> {
        None
    }

    fn save(&self, _token: &SessionToken) -> Result<(), AppError> {
        Err(AppError::Storage("quota exceeded".to_string()))
    }

    fn clear(&self) {}
}
