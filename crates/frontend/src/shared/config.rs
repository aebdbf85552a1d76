use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://zero7-api-rest.onrender.com/api";
pub const DEFAULT_PAGE_SIZE: usize = 6;
pub const DEFAULT_TOAST_DURATION_MS: u32 = 4000;

/// Runtime configuration passed explicitly into API clients and list controllers
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub toast: ToastConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    pub page_size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ToastConfig {
    pub duration_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://zero7-api-rest.onrender.com/api"

[list]
page_size = 6

[toast]
duration_ms = 4000
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_API_BASE_URL.to_string(),
            },
            list: ListConfig {
                page_size: DEFAULT_PAGE_SIZE,
            },
            toast: ToastConfig {
                duration_ms: DEFAULT_TOAST_DURATION_MS,
            },
        }
    }
}

impl AppConfig {
    /// Full endpoint for a resource: `{base}/{resource}`
    pub fn endpoint(&self, resource: &str) -> String {
        format!(
            "{}/{}",
            self.api.base_url.trim_end_matches('/'),
            resource.trim_start_matches('/')
        )
    }

    pub fn page_size(&self) -> usize {
        self.list.page_size
    }
}

/// Load configuration
///
/// Sources, later wins:
/// 1. Embedded default config
/// 2. `API_BASE_URL` / `ITEMS_PER_PAGE` captured at build time
pub fn load_config() -> anyhow::Result<AppConfig> {
    let config = parse_config(DEFAULT_CONFIG)?;
    apply_overrides(
        config,
        option_env!("API_BASE_URL"),
        option_env!("ITEMS_PER_PAGE"),
    )
}

pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents).context("invalid configuration")?;
    validate(&config)?;
    Ok(config)
}

fn apply_overrides(
    mut config: AppConfig,
    base_url: Option<&str>,
    page_size: Option<&str>,
) -> anyhow::Result<AppConfig> {
    if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
        log::info!("API base URL overridden: {}", url);
        config.api.base_url = url.to_string();
    }
    if let Some(raw) = page_size.map(str::trim).filter(|p| !p.is_empty()) {
        config.list.page_size = raw
            .parse()
            .with_context(|| format!("ITEMS_PER_PAGE is not a number: {raw}"))?;
    }
    validate(&config)?;
    Ok(config)
}

fn validate(config: &AppConfig) -> anyhow::Result<()> {
    anyhow::ensure!(config.list.page_size > 0, "page size must be greater than zero");
    anyhow::ensure!(
        !config.api.base_url.trim().is_empty(),
        "API base URL must not be empty"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.page_size(), 6);
        assert_eq!(config.toast.duration_ms, 4000);
    }

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        let mut config = AppConfig::default();
        assert_eq!(
            config.endpoint("customer"),
            "https://zero7-api-rest.onrender.com/api/customer"
        );
        config.api.base_url = "http://localhost:8080/api/".into();
        assert_eq!(config.endpoint("/dish"), "http://localhost:8080/api/dish");
    }

    #[test]
    fn test_overrides() {
        let config =
            apply_overrides(AppConfig::default(), Some("http://127.0.0.1:3000"), Some("10")).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.page_size(), 10);

        let untouched = apply_overrides(AppConfig::default(), Some("  "), None).unwrap();
        assert_eq!(untouched, AppConfig::default());
    }

    #[test]
    fn test_invalid_page_size_is_rejected() {
        assert!(apply_overrides(AppConfig::default(), None, Some("six")).is_err());
        assert!(apply_overrides(AppConfig::default(), None, Some("0")).is_err());
        assert!(parse_config("[api]\nbase_url = \"x\"\n[list]\npage_size = 0\n[toast]\nduration_ms = 1\n").is_err());
    }
}
