//! Client helpers for order and payment endpoints, authenticated with the
//! stored session token.

use super::{
    checkout::OrderApi,
    types::{CheckoutRequest, CheckoutSession, CreateOrderRequest, Order, OrderList},
};
use crate::{
    app_lib::{
        AppError,
        api::{get_json_with_headers, post_json_with_headers_response},
    },
    features::auth::types::{SessionToken, auth_headers},
};
use async_trait::async_trait;

#[derive(Clone, Copy, Debug, Default)]
pub struct HttpOrderApi;

#[async_trait(?Send)]
impl OrderApi for HttpOrderApi {
    async fn create_order(
        &self,
        token: Option<&SessionToken>,
        request: &CreateOrderRequest,
    ) -> Result<Order, AppError> {
        post_json_with_headers_response("/orders", request, &auth_headers(token)).await
    }

    async fn create_checkout(
        &self,
        token: Option<&SessionToken>,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, AppError> {
        post_json_with_headers_response("/payments/checkout", request, &auth_headers(token)).await
    }
}

/// Orders where the signed-in user is the client (or the creator).
pub async fn list_orders(token: Option<&SessionToken>) -> Result<OrderList, AppError> {
    get_json_with_headers("/orders", &auth_headers(token)).await
}
