//! `localStorage`-backed token slot. Only the opaque token is persisted, under
//! a single fixed key.

use super::{
    ports::{MemoryTokenStore, TokenStore},
    types::SessionToken,
};
use crate::app_lib::{AppError, config::SESSION_TOKEN_KEY};
use std::rc::Rc;
use web_sys::Storage;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn is_available() -> bool {
        Self::storage().is_some()
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<SessionToken> {
        Self::storage()?
            .get_item(SESSION_TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|value| !value.trim().is_empty())
            .map(SessionToken::new)
    }

    fn save(&self, token: &SessionToken) -> Result<(), AppError> {
        let storage = Self::storage()
            .ok_or_else(|| AppError::Storage("Local storage is unavailable.".to_string()))?;
        storage
            .set_item(SESSION_TOKEN_KEY, token.expose())
            .map_err(|_| AppError::Storage("Failed to persist the session.".to_string()))
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage()
            && storage.remove_item(SESSION_TOKEN_KEY).is_err()
        {
            tracing::warn!("failed to remove the stored session token");
        }
    }
}

/// Picks `localStorage` when the browser allows it, memory otherwise.
pub fn default_store() -> Rc<dyn TokenStore> {
    if LocalStorageTokenStore::is_available() {
        Rc::new(LocalStorageTokenStore)
    } else {
        tracing::warn!("local storage unavailable, session will not survive a reload");
        Rc::new(MemoryTokenStore::default())
    }
}
