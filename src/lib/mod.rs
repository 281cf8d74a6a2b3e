//! Shared frontend utilities for API access, configuration, errors, logging and
//! build metadata.
//!
//! All backend calls go through [`api`], which applies the configured base URL,
//! a request timeout and consistent error mapping. Feature clients build on
//! these helpers instead of talking to `gloo-net` directly. Nothing here stores
//! secrets; callers attach the session token per request and must never log it.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
#[cfg(target_arch = "wasm32")]
pub(crate) mod browser;
pub mod build_info;
pub mod config;
pub mod errors;
pub mod paths;
pub mod telemetry;

pub use errors::AppError;
