//! Application configuration.
//!
//! Search order:
//! 1. `<script id="app-config" type="text/toml">` in `index.html` (per deployment)
//! 2. Falls back to the embedded default config
//!
//! The result is loaded once and cached for the lifetime of the page.

use once_cell::sync::OnceCell;
use serde::Deserialize;

use super::pagination::PageSizeBounds;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub table: TableConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute backend URL. Empty means "same host as the page, on `port`".
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    pub default_rows_per_page: usize,
    pub min_rows_per_page: usize,
    pub max_rows_per_page: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_rows_per_page: 10,
            min_rows_per_page: 5,
            max_rows_per_page: 100,
            page_size_options: vec![10, 25, 50, 100],
        }
    }
}

impl TableConfig {
    pub fn bounds(&self) -> PageSizeBounds {
        PageSizeBounds::new(self.min_rows_per_page, self.max_rows_per_page)
    }

    /// Page size options that fall inside the bounds.
    pub fn page_size_options(&self) -> Vec<usize> {
        let bounds = self.bounds();
        self.page_size_options
            .iter()
            .copied()
            .filter(|n| (bounds.min..=bounds.max).contains(n))
            .collect()
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Unknown level names fall back to `Info`.
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Info)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000

[table]
default_rows_per_page = 10
min_rows_per_page = 5
max_rows_per_page = 100
page_size_options = [10, 25, 50, 100]

[logging]
level = "debug"
"#;

const CONFIG_ELEMENT_ID: &str = "app-config";

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

pub fn parse_config(text: &str) -> anyhow::Result<AppConfig> {
    Ok(toml::from_str(text)?)
}

pub fn default_config() -> AppConfig {
    parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("Embedded config is invalid, using built-in values: {}", e);
        AppConfig::default()
    })
}

fn read_inline_config() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

/// Load configuration from the page, falling back to the embedded default.
pub fn load_config() -> AppConfig {
    if let Some(text) = read_inline_config() {
        match parse_config(&text) {
            Ok(config) => {
                log::info!("Loaded config from #{}", CONFIG_ELEMENT_ID);
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid #{} config: {}", CONFIG_ELEMENT_ID, e),
        }
    }
    default_config()
}

/// Process-wide configuration, loaded on first access.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(load_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 3000);
        assert!(config.api.base_url.is_empty());
        assert_eq!(config.table.default_rows_per_page, 10);
        assert_eq!(config.table.bounds(), PageSizeBounds::new(5, 100));
        assert_eq!(config.logging.level(), log::Level::Debug);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config(
            r#"
            [api]
            base_url = "https://api.example.com"

            [table]
            default_rows_per_page = 20
            min_rows_per_page = 10
            max_rows_per_page = 50
            page_size_options = [5, 10, 20, 50, 200]
            "#,
        )
        .unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.table.page_size_options(), vec![10, 20, 50]);
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(parse_config("[table]\nmin_rows_per_page = \"x\"").is_err());
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let logging = LoggingConfig {
            level: "chatty".into(),
        };
        assert_eq!(logging.level(), log::Level::Info);
    }
}
