//! Domain-level frontend features (auth, catalog, orders) and their shared
//! logic. Routes import these modules to keep view code focused while keeping
//! session handling and API access in dedicated feature areas.

pub mod auth;
pub mod orders;
pub mod services;
