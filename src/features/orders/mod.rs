//! Orders and payment checkout. Placing an order creates it on the backend,
//! asks for a payment checkout session and then hands the browser off to the
//! payment page. Every call here is authenticated by the session token.

pub mod checkout;
#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub mod summary;
pub mod types;
