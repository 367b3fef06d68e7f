use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ApiConfig {
    /// Empty means "same host, port 3000"
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u32,
    /// Enabled filter modes, in toggle order
    #[serde(default = "default_filter_modes")]
    pub filter_modes: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_desktop_breakpoint_px")]
    pub desktop_breakpoint_px: u32,
    #[serde(default = "default_toast_timeout_ms")]
    pub toast_timeout_ms: u64,
}

fn default_page_size() -> usize {
    10
}

fn default_page_size_options() -> Vec<usize> {
    vec![10, 20, 30, 40, 50]
}

fn default_debounce_ms() -> u32 {
    300
}

fn default_filter_modes() -> Vec<String> {
    vec!["expert".to_string(), "command".to_string()]
}

fn default_desktop_breakpoint_px() -> u32 {
    640
}

fn default_toast_timeout_ms() -> u64 {
    4000
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            debounce_ms: default_debounce_ms(),
            filter_modes: default_filter_modes(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            desktop_breakpoint_px: default_desktop_breakpoint_px(),
            toast_timeout_ms: default_toast_timeout_ms(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        parse_config(DEFAULT_CONFIG).unwrap_or_else(|_| Self {
            api: ApiConfig::default(),
            table: TableConfig::default(),
            ui: UiConfig::default(),
        })
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[table]
page_size = 10
page_size_options = [10, 20, 30, 40, 50]
debounce_ms = 300
filter_modes = ["expert", "command"]

[ui]
desktop_breakpoint_px = 640
toast_timeout_ms = 4000
"#;

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let mut config: AppConfig = toml::from_str(contents)?;
    if config.table.page_size == 0 {
        anyhow::bail!("table.page_size must be greater than zero");
    }
    if !config.table.page_size_options.contains(&config.table.page_size) {
        config.table.page_size_options.push(config.table.page_size);
        config.table.page_size_options.sort_unstable();
    }
    Ok(config)
}

/// Load configuration.
///
/// Search order:
/// 1. `config.toml` served next to the bundle
/// 2. Falls back to embedded default config
pub async fn load_config() -> anyhow::Result<AppConfig> {
    match gloo_net::http::Request::get("/config.toml").send().await {
        Ok(response) if response.ok() => {
            let contents = response.text().await?;
            log::info!("Loading config from /config.toml");
            match parse_config(&contents) {
                Ok(config) => return Ok(config),
                Err(e) => log::warn!("Invalid /config.toml, using defaults: {}", e),
            }
        }
        Ok(response) => {
            log::warn!("config.toml not found ({})", response.status());
        }
        Err(e) => {
            log::warn!("Failed to fetch config.toml: {}", e);
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Install the active config. Only the first call wins.
pub fn init(config: AppConfig) {
    if CONFIG.set(config).is_err() {
        log::debug!("config already initialised");
    }
}

/// Active configuration (embedded default until `init`)
pub fn get() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.table.page_size, 10);
        assert_eq!(config.ui.desktop_breakpoint_px, 640);
        assert_eq!(config.table.filter_modes, vec!["expert", "command"]);
        assert!(config.api.base_url.is_empty());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[api]\nbase_url = \"https://tasks.example.com\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://tasks.example.com");
        assert_eq!(config.table, TableConfig::default());
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_page_size_is_added_to_options() {
        let config = parse_config("[table]\npage_size = 25\n").unwrap();
        assert!(config.table.page_size_options.contains(&25));
        assert!(parse_config("[table]\npage_size = 0\n").is_err());
    }
}
