use serde::Deserialize;
use std::cell::OnceCell;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub icons: IconsConfig,
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct IconsConfig {
    /// Where the icon library is fetched from when the page does not ship it
    pub script_url: String,
    /// Readiness check interval after the script has loaded
    pub poll_interval_ms: u32,
    /// Bound on fetch + initialization
    pub timeout_ms: u32,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            script_url: FEATHER_CDN_URL.to_string(),
            poll_interval_ms: 50,
            timeout_ms: 5000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NotificationsConfig {
    pub success_timeout_ms: u32,
    /// Errors, warnings and infos stay longer
    pub other_timeout_ms: u32,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            success_timeout_ms: 5000,
            other_timeout_ms: 8000,
        }
    }
}

const FEATHER_CDN_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/feather-icons/4.29.0/feather.min.js";

/// Id of the optional `<script type="application/toml">` carrying overrides
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[icons]
script_url = "https://cdnjs.cloudflare.com/ajax/libs/feather-icons/4.29.0/feather.min.js"
poll_interval_ms = 50
timeout_ms = 5000

[notifications]
success_timeout_ms = 5000
other_timeout_ms = 8000
"#;

pub fn parse_config(text: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Load the page configuration
///
/// Search order:
/// 1. Inline `<script id="app-config" type="application/toml">` in the page
/// 2. Falls back to the embedded default config
pub fn load_config() -> AppConfig {
    if let Some(text) = inline_config() {
        match parse_config(&text) {
            Ok(config) => {
                log::info!("Loading config from #{}", CONFIG_ELEMENT_ID);
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e),
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG).unwrap_or_default()
}

thread_local! {
    static PAGE_CONFIG: OnceCell<AppConfig> = const { OnceCell::new() };
}

/// Configuration of this page, loaded from the document on first use
pub fn page_config() -> AppConfig {
    PAGE_CONFIG.with(|cell| cached(cell, load_config))
}

fn cached(cell: &OnceCell<AppConfig>, load: impl FnOnce() -> AppConfig) -> AppConfig {
    cell.get_or_init(load).clone()
}

fn inline_config() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.icons.poll_interval_ms, 50);
        assert_eq!(config.icons.timeout_ms, 5000);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = parse_config("[icons]\ntimeout_ms = 1500\n").unwrap();
        assert_eq!(config.icons.timeout_ms, 1500);
        assert_eq!(config.icons.poll_interval_ms, 50);
        assert_eq!(config.icons.script_url, FEATHER_CDN_URL);
        assert_eq!(config.notifications, NotificationsConfig::default());
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        assert!(parse_config("[icons]\ntimeout_ms = \"soon\"\n").is_err());
    }

    #[test]
    fn test_config_is_loaded_once_per_page() {
        let cell = OnceCell::new();
        let mut loads = 0;

        let first = cached(&cell, || {
            loads += 1;
            parse_config("[icons]\ntimeout_ms = 1500\n").unwrap()
        });
        let second = cached(&cell, || {
            loads += 1;
            AppConfig::default()
        });

        assert_eq!(loads, 1);
        assert_eq!(first.icons.timeout_ms, 1500);
        assert_eq!(second, first);
    }
}
