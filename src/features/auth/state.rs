//! Session context for the Leptos tree. The provider builds the one
//! [`Session`] for the page and shares it with every view; the identity signal
//! mirrors the core's in-memory identity so headers and pages can react to it.
//! Tokens never enter a signal.

use super::{
    client::HttpSessionApi,
    navigation::Destination,
    session::Session,
    storage::default_store,
    types::{SessionToken, UserIdentity},
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{NavigateOptions, location::State};
use std::rc::Rc;
use wasm_bindgen::JsValue;

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct SessionContext {
    session: StoredValue<Rc<Session>, LocalStorage>,
    pub identity: RwSignal<Option<UserIdentity>>,
    pub is_authenticated: Signal<bool>,
}

impl SessionContext {
    fn new(session: Session) -> Self {
        let identity = RwSignal::new(session.identity());
        let is_authenticated = Signal::derive(move || identity.get().is_some());
        Self {
            session: StoredValue::new_local(Rc::new(session)),
            identity,
            is_authenticated,
        }
    }

    /// The core session, for starting exchanges and checks.
    pub fn session(&self) -> Rc<Session> {
        self.session.get_value()
    }

    pub fn token(&self) -> Option<SessionToken> {
        self.session().token()
    }

    /// Copies the core identity into the signal after a core mutation.
    pub fn sync(&self) {
        let _ = self.identity.try_set(self.session().identity());
    }

    /// Signs out locally and on the backend; always yields the landing page.
    pub async fn logout(self) -> Destination {
        let destination = self.session().logout().await;
        self.sync();
        destination
    }
}

/// Provides the session context. Built once at the application root; a stored
/// token is checked right away so public pages know who is signed in.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let context = SessionContext::new(Session::new(Rc::new(HttpSessionApi), default_store()));
    provide_context(context);

    let session = context.session();
    if session.token().is_some() {
        spawn_local(async move {
            let _ = session.check().await;
            context.sync();
        });
    }

    view! { {children()} }
}

/// Returns the current session context or a fresh one outside the provider.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        SessionContext::new(Session::new(Rc::new(HttpSessionApi), default_store()))
    })
}

/// Identity handed down by the guard to the protected content it wraps.
pub fn use_current_user() -> Option<UserIdentity> {
    use_context::<UserIdentity>()
}

/// Router options for a destination: history is replaced, and a landing
/// redirect carries the protected path the user asked for as history state.
pub fn navigate_options(destination: &Destination) -> NavigateOptions {
    let state = match destination {
        Destination::Landing { from: Some(from) } => State::new(Some(JsValue::from_str(from))),
        _ => State::new(None),
    };
    NavigateOptions {
        replace: true,
        state,
        ..Default::default()
    }
}
