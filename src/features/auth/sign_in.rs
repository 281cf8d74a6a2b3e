//! Sign-in hand-off to the external identity provider.
//!
//! The return URL is always computed from the page's own origin at click time
//! and sent as the single `redirect` parameter. The provider validates that
//! origin strictly, so there are no hardcoded targets and no fallbacks.

use crate::app_lib::{AppError, paths};
use url::Url;

/// Builds `<provider>?redirect=<origin>/dashboard`.
pub fn provider_url(provider: &str, origin: &str) -> Result<Url, AppError> {
    let origin = Url::parse(origin.trim())
        .map_err(|err| AppError::Config(format!("Invalid page origin: {err}")))?;
    if origin.cannot_be_a_base() {
        return Err(AppError::Config("Page origin is not a web origin.".to_string()));
    }
    let redirect = origin
        .join(paths::DASHBOARD)
        .map_err(|err| AppError::Config(format!("Invalid redirect target: {err}")))?;

    let mut url = Url::parse(provider.trim())
        .map_err(|err| AppError::Config(format!("Invalid identity provider URL: {err}")))?;
    url.query_pairs_mut()
        .clear()
        .append_pair("redirect", redirect.as_str());
    Ok(url)
}

/// Leaves the app for the identity provider. Returns only on failure.
#[cfg(target_arch = "wasm32")]
pub fn begin() -> Result<(), AppError> {
    use crate::app_lib::{browser, config::AppConfig};

    let config = AppConfig::load();
    let origin = browser::current_origin()
        .ok_or_else(|| AppError::Config("Page origin is unavailable.".to_string()))?;
    let url = provider_url(&config.auth_provider_url, &origin)?;
    tracing::info!("handing off to the identity provider");
    browser::hand_off(url.as_str());
    Ok(())
}
