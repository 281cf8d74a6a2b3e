//! Client helpers for catalog endpoints. Catalog reads are public, so no
//! credentials are attached.

use super::{
    query::{ServiceQuery, service_path},
    types::{Service, ServiceList},
};
use crate::app_lib::{AppError, api::get_json_with_headers};

/// Lists active services matching the query.
pub async fn list_services(query: &ServiceQuery) -> Result<ServiceList, AppError> {
    get_json_with_headers(&query.to_path(), &[]).await
}

/// Fetches one service with its tiers.
pub async fn fetch_service(service_id: &str) -> Result<Service, AppError> {
    get_json_with_headers(&service_path(service_id), &[]).await
}
