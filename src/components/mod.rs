//! Shared UI components exported for routes and features.

pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use layout::AppShell;
pub(crate) use ui::{Alert, AlertKind, Button, LoadingScreen, Spinner, Toaster, use_toasts};
