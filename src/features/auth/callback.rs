//! Parsing of the identity provider redirect. The provider appends the one-time
//! identifier as `#session_id=<opaque>`; the fragment never reaches the server
//! and is read exactly once by the bootstrap view.

use super::types::SessionId;
use crate::app_lib::config::SESSION_ID_PARAM;
use url::form_urlencoded;

fn fragment_pairs(fragment: &str) -> form_urlencoded::Parse<'_> {
    form_urlencoded::parse(fragment.trim().trim_start_matches('#').as_bytes())
}

/// True when the fragment carries the one-time session marker, even if its
/// value is empty. The router uses this to hand control to the bootstrap view.
pub fn has_session_marker(fragment: &str) -> bool {
    fragment_pairs(fragment).any(|(key, _)| key == SESSION_ID_PARAM)
}

/// Extracts the first `session_id` value. Empty values count as missing.
pub fn extract_session_id(fragment: &str) -> Option<SessionId> {
    fragment_pairs(fragment)
        .find(|(key, _)| key == SESSION_ID_PARAM)
        .and_then(|(_, value)| SessionId::parse(&value))
}
