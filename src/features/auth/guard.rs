//! Session guard state for protected views.
//!
//! Each mount starts in [`GuardState::Checking`] and settles once into
//! `Authenticated` or `Unauthenticated`. [`GuardState::view`] maps the state to
//! what the wrapper renders, so "loading, never content, never redirect" while
//! checking is decided in one place.

use super::{navigation::Destination, types::UserIdentity};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Checking,
    Authenticated(UserIdentity),
    Unauthenticated,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardView {
    Loading,
    Content(UserIdentity),
    Redirect(Destination),
}

impl GuardState {
    /// What to render for this state. `requested` is the protected path the
    /// user navigated to; it travels with the redirect.
    pub fn view(&self, requested: &str) -> GuardView {
        match self {
            Self::Checking => GuardView::Loading,
            Self::Authenticated(identity) => GuardView::Content(identity.clone()),
            Self::Unauthenticated => GuardView::Redirect(Destination::Landing {
                from: Some(requested.to_string()).filter(|path| !path.is_empty()),
            }),
        }
    }
}

/// Tracks whether the guard that started a check is still mounted. A check
/// that finishes after unmount is dropped instead of written to dead state.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Runs `apply` with `value` only while still mounted.
    pub fn settle<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_alive() {
            apply(value);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GuardState, GuardView, Liveness};
    use crate::app_lib::AppError;
    use crate::features::auth::{
        navigation::Destination,
        ports::{MemoryTokenStore, TokenStore},
        session::Session,
        test_support::{Call, FakeSessionApi, Gate, identity},
        types::SessionToken,
    };
    use std::{
        pin::pin,
        rc::Rc,
        task::{Context, Poll, Waker},
    };

    #[test]
    fn checking_renders_only_loading() {
        let state = GuardState::default();
        assert_eq!(state, GuardState::Checking);
        assert_eq!(state.view("/dashboard"), GuardView::Loading);
    }

    #[test]
    fn unauthenticated_redirects_with_requested_path() {
        assert_eq!(
            GuardState::Unauthenticated.view("/dashboard"),
            GuardView::Redirect(Destination::Landing {
                from: Some("/dashboard".to_string())
            })
        );
        assert_eq!(
            GuardState::Unauthenticated.view(""),
            GuardView::Redirect(Destination::landing())
        );
    }

    #[tokio::test]
    async fn check_stays_checking_until_the_backend_answers() {
        let gate = Gate::default();
        let api = Rc::new(FakeSessionApi {
            me_result: Ok(identity("Ada")),
            gate: Some(gate.clone()),
            ..FakeSessionApi::default()
        });
        let session = Session::new(api.clone(), Rc::new(MemoryTokenStore::default()));
        let mut state = GuardState::Checking;

        let mut check = pin!(session.check());
        let mut cx = Context::from_waker(Waker::noop());
        assert!(check.as_mut().poll(&mut cx).is_pending());
        assert_eq!(state.view("/dashboard"), GuardView::Loading);
        assert_eq!(session.identity(), None);

        gate.open();
        let Poll::Ready(settled) = check.as_mut().poll(&mut cx) else {
            panic!("check should settle once the gate opens");
        };
        state = settled;

        assert_eq!(state.view("/dashboard"), GuardView::Content(identity("Ada")));
    }

    #[tokio::test]
    async fn failing_check_redirects_and_never_shows_content() {
        let api = Rc::new(FakeSessionApi {
            me_result: Err(AppError::http(401, "Unauthorized")),
            ..FakeSessionApi::default()
        });
        let store = Rc::new(MemoryTokenStore::with_token(SessionToken::new("expired")));
        let session = Session::new(api.clone(), store);

        let state = session.check().await;

        assert_eq!(state, GuardState::Unauthenticated);
        assert!(matches!(state.view("/dashboard"), GuardView::Redirect(_)));
        assert_eq!(
            api.calls(),
            vec![Call::CurrentUser(Some("expired".to_string()))]
        );
    }

    #[tokio::test]
    async fn transient_failures_are_also_unauthenticated() {
        let api = Rc::new(FakeSessionApi {
            me_result: Err(AppError::Timeout("Request timed out.".to_string())),
            ..FakeSessionApi::default()
        });
        let session = Session::new(api, Rc::new(MemoryTokenStore::default()));

        assert_eq!(session.check().await, GuardState::Unauthenticated);
    }

    #[tokio::test]
    async fn missing_token_is_asked_about_without_credentials() {
        let api = Rc::new(FakeSessionApi::default());
        let session = Session::new(api.clone(), Rc::new(MemoryTokenStore::default()));

        assert_eq!(session.check().await, GuardState::Unauthenticated);
        assert_eq!(api.calls(), vec![Call::CurrentUser(None)]);
    }

    #[tokio::test]
    async fn every_mount_checks_again() {
        let api = Rc::new(FakeSessionApi {
            me_result: Ok(identity("Ada")),
            accepted_token: Some("tok123"),
            ..FakeSessionApi::default()
        });
        let store = Rc::new(MemoryTokenStore::with_token(SessionToken::new("tok123")));
        let session = Session::new(api.clone(), store.clone());

        assert!(matches!(session.check().await, GuardState::Authenticated(_)));
        assert!(matches!(session.check().await, GuardState::Authenticated(_)));
        assert_eq!(api.calls().len(), 2);

        store.clear();
        assert_eq!(session.check().await, GuardState::Unauthenticated);
        assert_eq!(session.identity(), None);
        assert_eq!(api.calls().last(), Some(&Call::CurrentUser(None)));
    }

    #[test]
    fn results_after_unmount_are_discarded() {
        let liveness = Liveness::new();
        let mut applied = Vec::new();

        assert!(liveness.settle(1, |value| applied.push(value)));
        liveness.clone().end();
        assert!(!liveness.settle(2, |value| applied.push(value)));

        assert_eq!(applied, vec![1]);
    }
}
