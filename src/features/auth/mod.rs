//! Auth feature module: the redirect callback, the one-shot bootstrap
//! exchange, the session guard and logout. The state machines live in
//! platform-neutral modules; `client`, `storage`, `state` and `guards` bind them
//! to the browser. This module handles credentials and must never log the
//! one-time identifier or the session token.
//!
//! Flow overview: the identity provider redirects back with
//! `#session_id=<opaque>`; the bootstrap view trades it once for a session
//! token through `POST /auth/session` and stores the token. Protected views
//! then call `GET /auth/me` on every mount and redirect to the landing page
//! when the backend does not recognise the token.

pub mod bootstrap;
pub mod callback;
pub mod guard;
pub mod navigation;
pub mod ports;
pub mod session;
pub mod sign_in;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
mod guards;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod storage;

#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireSession;
pub use ports::{MemoryTokenStore, SessionApi, TokenStore};
pub use session::Session;
