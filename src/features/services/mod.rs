//! Public service catalog: listing with category and search filters, and the
//! detail view with pricing tiers. Catalog reads need no session.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub mod query;
pub mod types;
