//! One-shot exchange of the redirect fragment for a session token.
//!
//! The handler is an explicit state machine, `Idle -> Exchanging -> Done`. The
//! transition out of `Idle` happens synchronously in [`Bootstrap::start`],
//! before any future exists, so re-running the view's effect during the same
//! mount cannot issue a second exchange.

use super::{
    callback,
    navigation::{Destination, Notice},
    session::Session,
};
use std::{cell::Cell, future::Future, rc::Rc};
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootstrapPhase {
    Idle,
    Exchanging,
    Done,
}

/// How a bootstrap run ended: one notice and one navigation, on every path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootstrapOutcome {
    pub notice: Notice,
    pub destination: Destination,
}

#[derive(Clone, Debug)]
pub struct Bootstrap {
    phase: Rc<Cell<BootstrapPhase>>,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self {
            phase: Rc::new(Cell::new(BootstrapPhase::Idle)),
        }
    }
}

impl Bootstrap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> BootstrapPhase {
        self.phase.get()
    }

    /// Starts the exchange for `fragment`. Returns `None` if this handler
    /// already started, which makes repeated calls harmless.
    pub fn start(
        &self,
        session: Rc<Session>,
        fragment: &str,
    ) -> Option<impl Future<Output = BootstrapOutcome> + use<>> {
        if self.phase.get() != BootstrapPhase::Idle {
            return None;
        }
        self.phase.set(BootstrapPhase::Exchanging);

        let session_id = callback::extract_session_id(fragment);
        let phase = Rc::clone(&self.phase);

        Some(async move {
            let outcome = match session_id {
                None => {
                    warn!("auth callback without a session identifier");
                    BootstrapOutcome {
                        notice: Notice::error("Invalid auth callback"),
                        destination: Destination::landing(),
                    }
                }
                Some(session_id) => match session.exchange(&session_id).await {
                    Ok(user) => BootstrapOutcome {
                        notice: Notice::success(format!("Welcome, {}!", user.name)),
                        destination: Destination::Dashboard,
                    },
                    Err(err) => {
                        warn!(error = %err, "session exchange failed");
                        BootstrapOutcome {
                            notice: Notice::error("Authentication failed"),
                            destination: Destination::landing(),
                        }
                    }
                },
            };
            phase.set(BootstrapPhase::Done);
            outcome
        })
    }
}
