//! The session context: one value built at the application root that owns the
//! auth API, the token store and the in-memory identity. Identity only changes
//! through [`Session::exchange`], [`Session::check`] and [`Session::logout`].

use super::{
    guard::GuardState,
    navigation::Destination,
    ports::{SessionApi, TokenStore},
    types::{SessionId, SessionToken, UserIdentity},
};
use crate::app_lib::AppError;
use std::{cell::RefCell, rc::Rc};
use tracing::{debug, info, warn};

pub struct Session {
    api: Rc<dyn SessionApi>,
    store: Rc<dyn TokenStore>,
    identity: RefCell<Option<UserIdentity>>,
}

impl Session {
    pub fn new(api: Rc<dyn SessionApi>, store: Rc<dyn TokenStore>) -> Self {
        Self {
            api,
            store,
            identity: RefCell::new(None),
        }
    }

    /// Identity from the latest successful exchange or check on this page.
    pub fn identity(&self) -> Option<UserIdentity> {
        self.identity.borrow().clone()
    }

    /// Currently stored token, for authenticating other API calls.
    pub fn token(&self) -> Option<SessionToken> {
        self.store.load()
    }

    /// Trades a one-time identifier for a session token and persists it.
    /// Nothing is written unless the whole exchange succeeded.
    pub async fn exchange(&self, session_id: &SessionId) -> Result<UserIdentity, AppError> {
        let grant = self.api.exchange_session(session_id).await?;
        self.store.save(&grant.session_token)?;
        info!(user_id = %grant.user.user_id, "session established");
        self.identity.replace(Some(grant.user.clone()));
        Ok(grant.user)
    }

    /// Asks the backend who the stored token belongs to. Every failure means
    /// "not signed in"; the distinction only affects the log level.
    pub async fn check(&self) -> GuardState {
        let token = self.store.load();
        match self.api.current_user(token.as_ref()).await {
            Ok(identity) => {
                self.identity.replace(Some(identity.clone()));
                GuardState::Authenticated(identity)
            }
            Err(err) => {
                if err.is_rejection() {
                    debug!(error = %err, has_token = token.is_some(), "no valid session");
                } else if err.is_transient() {
                    warn!(error = %err, "identity check failed, treating as signed out");
                } else {
                    warn!(error = %err, "unexpected identity response, treating as signed out");
                }
                self.identity.replace(None);
                GuardState::Unauthenticated
            }
        }
    }

    /// Signs out. The backend call is best effort; local state is always
    /// cleared and the user always lands on the public page.
    pub async fn logout(&self) -> Destination {
        let token = self.store.load();
        if let Err(err) = self.api.logout(token.as_ref()).await {
            warn!(error = %err, "backend logout failed, clearing local session anyway");
        }
        self.store.clear();
        self.identity.replace(None);
        info!("signed out");
        Destination::landing()
    }
}
