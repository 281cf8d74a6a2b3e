//! `gloo-net` implementation of the auth endpoints. The one-time identifier
//! only ever travels in the `X-Session-ID` header, never in a query string or
//! body, so it stays out of access logs and history.

use super::{
    ports::SessionApi,
    types::{SessionGrant, SessionId, SessionToken, UserIdentity, auth_headers},
};
use crate::app_lib::{
    AppError,
    api::{get_json_with_headers, post_empty_with_headers, post_empty_with_headers_response},
    config::SESSION_ID_HEADER,
};
use async_trait::async_trait;

#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSessionApi;

#[async_trait(?Send)]
impl SessionApi for HttpSessionApi {
    async fn exchange_session(&self, session_id: &SessionId) -> Result<SessionGrant, AppError> {
        let headers = vec![(
            SESSION_ID_HEADER.to_string(),
            session_id.expose().to_string(),
        )];
        post_empty_with_headers_response("/auth/session", &headers).await
    }

    async fn current_user(&self, token: Option<&SessionToken>) -> Result<UserIdentity, AppError> {
        get_json_with_headers("/auth/me", &auth_headers(token)).await
    }

    async fn logout(&self, token: Option<&SessionToken>) -> Result<(), AppError> {
        post_empty_with_headers("/auth/logout", &auth_headers(token)).await
    }
}
