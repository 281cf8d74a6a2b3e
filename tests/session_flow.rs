#![allow(clippy::unwrap_used, clippy::expect_used)]

use async_trait::async_trait;
use creativehub::app_lib::AppError;
use creativehub::features::auth::{
    MemoryTokenStore, Session, SessionApi, TokenStore,
    bootstrap::{Bootstrap, BootstrapPhase},
    guard::{GuardState, GuardView, Liveness},
    navigation::{Destination, NoticeKind},
    types::{SessionGrant, SessionId, SessionToken, UserIdentity},
};
use std::{cell::RefCell, rc::Rc};

/// Backend double that issues one token per identifier and only recognises
/// tokens it issued and has not revoked.
#[derive(Default)]
struct Backend {
    issued: RefCell<Vec<String>>,
    requests: RefCell<Vec<String>>,
}

impl Backend {
    fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    fn user() -> UserIdentity {
        UserIdentity {
            user_id: "user_42".to_string(),
            name: "Grace".to_string(),
            email: Some("grace@example.com".to_string()),
            picture: None,
            user_type: Some("creator".to_string()),
        }
    }

    fn knows(&self, token: Option<&SessionToken>) -> bool {
        token.is_some_and(|token| self.issued.borrow().iter().any(|t| t == token.expose()))
    }
}

#[async_trait(?Send)]
impl SessionApi for Backend {
    async fn exchange_session(&self, session_id: &SessionId) -> Result<SessionGrant, AppError> {
        self.requests.borrow_mut().push("POST /auth/session".to_string());
        if session_id.expose() != "abc" {
            return Err(AppError::http(401, "Invalid session"));
        }
        let token = format!("tok-{}", session_id.expose());
        self.issued.borrow_mut().push(token.clone());
        Ok(SessionGrant {
            session_token: SessionToken::new(token),
            user: Self::user(),
        })
    }

    async fn current_user(&self, token: Option<&SessionToken>) -> Result<UserIdentity, AppError> {
        self.requests.borrow_mut().push("GET /auth/me".to_string());
        if self.knows(token) {
            Ok(Self::user())
        } else {
            Err(AppError::http(401, "Not authenticated"))
        }
    }

    async fn logout(&self, token: Option<&SessionToken>) -> Result<(), AppError> {
        self.requests.borrow_mut().push("POST /auth/logout".to_string());
        if let Some(token) = token {
            self.issued.borrow_mut().retain(|t| t != token.expose());
        }
        Ok(())
    }
}

fn session(backend: &Rc<Backend>, store: &Rc<MemoryTokenStore>) -> Rc<Session> {
    Rc::new(Session::new(backend.clone(), store.clone()))
}

#[tokio::test]
async fn sign_in_visit_dashboard_and_sign_out() {
    let backend = Rc::new(Backend::default());
    let store = Rc::new(MemoryTokenStore::default());
    let session = session(&backend, &store);

    let bootstrap = Bootstrap::new();
    let outcome = bootstrap
        .start(session.clone(), "#session_id=abc")
        .expect("first start")
        .await;

    assert_eq!(outcome.notice.kind, NoticeKind::Success);
    assert_eq!(outcome.notice.message, "Welcome, Grace!");
    assert_eq!(outcome.destination, Destination::Dashboard);
    assert_eq!(bootstrap.phase(), BootstrapPhase::Done);
    assert_eq!(store.load(), Some(SessionToken::new("tok-abc")));

    // Guard mount on the dashboard.
    let state = session.check().await;
    match state.view("/dashboard") {
        GuardView::Content(identity) => assert!(identity.is_creator()),
        other => panic!("expected content, got {other:?}"),
    }

    assert_eq!(session.logout().await, Destination::landing());
    assert_eq!(store.load(), None);
    assert_eq!(session.identity(), None);

    // The next protected mount is turned away.
    let state = session.check().await;
    assert_eq!(
        state.view("/dashboard"),
        GuardView::Redirect(Destination::Landing {
            from: Some("/dashboard".to_string())
        })
    );
    assert_eq!(
        backend.requests(),
        [
            "POST /auth/session",
            "GET /auth/me",
            "POST /auth/logout",
            "GET /auth/me"
        ]
    );
}

#[tokio::test]
async fn rejected_identifier_lands_on_public_page() {
    let backend = Rc::new(Backend::default());
    let store = Rc::new(MemoryTokenStore::default());
    let session = session(&backend, &store);

    let outcome = Bootstrap::new()
        .start(session.clone(), "session_id=stale")
        .expect("first start")
        .await;

    assert_eq!(outcome.notice.kind, NoticeKind::Error);
    assert_eq!(outcome.notice.message, "Authentication failed");
    assert_eq!(outcome.destination, Destination::landing());
    assert_eq!(store.load(), None);
    assert_eq!(session.check().await, GuardState::Unauthenticated);
}

#[tokio::test]
async fn fragment_without_identifier_never_reaches_backend() {
    let backend = Rc::new(Backend::default());
    let store = Rc::new(MemoryTokenStore::default());

    let outcome = Bootstrap::new()
        .start(session(&backend, &store), "#session_id=%20%20&state=x")
        .expect("first start")
        .await;

    assert_eq!(outcome.notice.message, "Invalid auth callback");
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn stored_token_survives_into_a_new_page_load() {
    let backend = Rc::new(Backend::default());
    let store = Rc::new(MemoryTokenStore::default());
    Bootstrap::new()
        .start(session(&backend, &store), "#session_id=abc")
        .expect("first start")
        .await;

    // A reload builds a fresh session over the same durable store.
    let reloaded = session(&backend, &store);
    assert_eq!(reloaded.identity(), None);

    let liveness = Liveness::new();
    let mut rendered = GuardState::Checking;
    let state = reloaded.check().await;
    assert!(liveness.settle(state, |state| rendered = state));

    assert!(matches!(rendered, GuardState::Authenticated(ref user) if user.name == "Grace"));
    assert_eq!(reloaded.identity().map(|user| user.user_id), Some("user_42".to_string()));
}
