//! Client-side route paths shared by the router, guards and navigation code.

pub const LANDING: &str = "/";
pub const SERVICES: &str = "/services";
pub const DASHBOARD: &str = "/dashboard";

/// Detail page path for a single service.
pub fn service_detail(service_id: &str) -> String {
    format!("{SERVICES}/{service_id}")
}
