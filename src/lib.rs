//! CreativeHub browser front-end.
//!
//! The session core (callback parsing, bootstrap exchange, guard checks, logout)
//! is platform neutral and talks to the outside world through the
//! [`features::auth::SessionApi`] and [`features::auth::TokenStore`] traits.
//! The Leptos views, the `gloo-net` transport and the `localStorage` store only
//! exist on `wasm32`.

#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod routes;

/// Installs logging and mounts the application into `<body>`.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    let config = app_lib::config::AppConfig::load();
    app_lib::telemetry::init(&config.log_filter);
    tracing::info!(
        commit = app_lib::build_info::git_commit_hash(),
        "starting creativehub web"
    );
    leptos::prelude::mount_to_body(app::App);
}
