//! Build-time configuration for the API base, the identity provider and the
//! log filter, with an optional runtime override. The runtime config is read
//! from `window.CREATIVEHUB_CONFIG` (if present) so static deployments can
//! change endpoints without rebuilding. Configuration values are public; do not
//! store secrets here.

/// `localStorage` key holding the opaque session token.
pub const SESSION_TOKEN_KEY: &str = "session_token";
/// URL fragment parameter carrying the one-time session identifier.
pub const SESSION_ID_PARAM: &str = "session_id";
/// Request header used to present the one-time session identifier.
pub const SESSION_ID_HEADER: &str = "X-Session-ID";

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_AUTH_URL: &str = "https://auth.emergentagent.com/";
const DEFAULT_LOG_FILTER: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub auth_provider_url: String,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            auth_provider_url: DEFAULT_AUTH_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let defaults = Self::default();
        let mut config = Self {
            api_base_url: option_env!("CREATIVEHUB_API_BASE_URL")
                .and_then(normalize_runtime_value)
                .unwrap_or(defaults.api_base_url),
            auth_provider_url: option_env!("CREATIVEHUB_AUTH_URL")
                .and_then(normalize_runtime_value)
                .unwrap_or(defaults.auth_provider_url),
            log_filter: option_env!("CREATIVEHUB_LOG")
                .and_then(normalize_runtime_value)
                .unwrap_or(defaults.log_filter),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Joins `path` onto the API base with exactly one slash between them.
    pub fn api_url(&self, path: &str) -> String {
        let base = self.api_base_url.trim().trim_end_matches('/');
        let path = path.trim();

        if base.is_empty() {
            path.to_string()
        } else {
            format!("{}/{}", base, path.trim_start_matches('/'))
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    auth_provider_url: Option<String>,
    log_filter: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.auth_provider_url {
        config.auth_provider_url = value;
    }
    if let Some(value) = runtime.log_filter {
        config.log_filter = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("CREATIVEHUB_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        auth_provider_url: read_runtime_value(&object, "auth_provider_url"),
        log_filter: read_runtime_value(&object, "log_filter"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value};

    fn defaults() -> AppConfig {
        AppConfig {
            api_base_url: "https://api.default/api".to_string(),
            auth_provider_url: "https://auth.default/".to_string(),
            log_filter: "info".to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.creativehub.dev "),
            Some("https://api.creativehub.dev".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            auth_provider_url: normalize_runtime_value("  "),
            log_filter: None,
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, defaults());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override/api"),
            auth_provider_url: normalize_runtime_value("https://auth.override/"),
            log_filter: normalize_runtime_value("creativehub=debug"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override/api");
        assert_eq!(config.auth_provider_url, "https://auth.override/");
        assert_eq!(config.log_filter, "creativehub=debug");
    }

    #[test]
    fn api_url_joins_base_and_path_with_single_slash() {
        let mut config = defaults();
        config.api_base_url = "/api/".to_string();
        assert_eq!(config.api_url("/auth/me"), "/api/auth/me");

        config.api_base_url = "https://hub.example/api".to_string();
        assert_eq!(config.api_url("services"), "https://hub.example/api/services");

        config.api_base_url = "  ".to_string();
        assert_eq!(config.api_url("/auth/me"), "/auth/me");
    }

    #[test]
    fn load_falls_back_to_defaults_without_overrides() {
        let config = AppConfig::load();
        assert!(!config.api_base_url.is_empty());
        assert!(!config.auth_provider_url.is_empty());
        assert!(!config.log_filter.is_empty());
    }
}
