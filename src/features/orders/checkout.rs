//! Order placement: local validation, order creation, then a payment checkout
//! session whose URL the caller hands the browser off to.

use super::types::{CheckoutRequest, CheckoutSession, CreateOrderRequest, Order};
use crate::{app_lib::AppError, features::auth::types::SessionToken};
use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

#[async_trait(?Send)]
pub trait OrderApi {
    /// `POST /orders`.
    async fn create_order(
        &self,
        token: Option<&SessionToken>,
        request: &CreateOrderRequest,
    ) -> Result<Order, AppError>;

    /// `POST /payments/checkout`.
    async fn create_checkout(
        &self,
        token: Option<&SessionToken>,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, AppError>;
}

/// Reasons an order is refused before any request is made.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum OrderRejection {
    #[error("Please sign in to place an order")]
    SignedOut,
    #[error("Please choose a package")]
    MissingTier,
    #[error("Please provide your requirements")]
    MissingRequirements,
}

/// Checks the form and builds the request.
pub fn validate_order(
    signed_in: bool,
    service_id: &str,
    tier_name: Option<&str>,
    requirements: &str,
) -> Result<CreateOrderRequest, OrderRejection> {
    if !signed_in {
        return Err(OrderRejection::SignedOut);
    }
    let tier_name = tier_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(OrderRejection::MissingTier)?;
    let requirements = requirements.trim();
    if requirements.is_empty() {
        return Err(OrderRejection::MissingRequirements);
    }

    Ok(CreateOrderRequest {
        service_id: service_id.to_string(),
        tier_name: tier_name.to_string(),
        requirements: requirements.to_string(),
    })
}

/// Creates the order and its checkout session. The returned URL is where
/// the browser must be handed off to pay.
pub async fn place_order(
    api: &dyn OrderApi,
    token: Option<&SessionToken>,
    request: &CreateOrderRequest,
    origin: &str,
) -> Result<CheckoutSession, AppError> {
    let order = api.create_order(token, request).await?;
    info!(order_id = %order.order_id, "order created");

    let checkout = CheckoutRequest {
        order_id: order.order_id,
        origin: origin.to_string(),
    };
    api.create_checkout(token, &checkout).await
}
