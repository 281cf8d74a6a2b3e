//! Where a flow ends up and what the user is told about it. The views turn
//! these values into router navigation and toasts; the core only decides.

use crate::app_lib::paths;

/// In-app navigation target at the end of a session flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    /// Public landing page. `from` is the protected path the user asked for.
    Landing { from: Option<String> },
    /// Protected dashboard.
    Dashboard,
}

impl Destination {
    pub fn landing() -> Self {
        Self::Landing { from: None }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Landing { .. } => paths::LANDING,
            Self::Dashboard => paths::DASHBOARD,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-visible notification. Messages must never contain credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}
