use crate::types::{ContentType, Method};
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub request: RequestSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestSettings {
    /// Prefills the URL input on startup
    pub default_url: Option<String>,
    /// Methods offered by the selector, in display order
    pub methods: Vec<Method>,
    /// Transport timeout in seconds, 0 disables it
    pub timeout_secs: u64,
    /// Whether the body row shows a content-type selector
    pub offer_content_type: bool,
    pub default_content_type: ContentType,
}

impl Default for RequestSettings {
    fn default() -> Self {
        Self {
            default_url: None,
            methods: vec![Method::Get, Method::Post, Method::Delete],
            timeout_secs: 30,
            offer_content_type: true,
            default_content_type: ContentType::Form,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub file: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: std::env::temp_dir().join("http-tui.log"),
        }
    }
}

impl RequestSettings {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        // Use ~/.config instead of the platform-specific directory
        let home_dir = dirs::home_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find home directory"))?;

        Ok(home_dir.join(".config").join("http-tui").join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config = Self::parse(&contents)
            .map_err(|e| color_eyre::eyre::eyre!("{}: {e}", config_path.display()))?;

        Ok(config)
    }

    /// Parse and validate config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config
            .validate()
            .map_err(|msg| color_eyre::eyre::eyre!(msg))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        let methods = &self.request.methods;
        if methods.is_empty() {
            return Err("request.methods must list at least one HTTP method".to_string());
        }

        for (idx, method) in methods.iter().enumerate() {
            if methods[..idx].contains(method) {
                return Err(format!("request.methods lists {method} more than once"));
            }
        }

        if let Some(url) = &self.request.default_url {
            validate_url(url)?;
        }

        Ok(())
    }
}

/// Simple URL sanity check for the configured default URL
pub fn validate_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("URL cannot be empty".to_string());
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }

    url::Url::parse(url).map_err(|e| format!("Invalid URL: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(
            config.request.methods,
            vec![Method::Get, Method::Post, Method::Delete]
        );
        assert_eq!(config.request.default_content_type, ContentType::Form);
        assert!(config.request.offer_content_type);
        assert_eq!(config.request.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_parse_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_full_file() {
        let config = Config::parse(
            r#"
            [request]
            default_url = "https://httpbin.org/anything"
            methods = ["GET", "POST", "PUT", "PATCH", "DELETE"]
            timeout_secs = 0
            offer_content_type = false
            default_content_type = "json"

            [log]
            file = "/var/tmp/http-tui.log"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.request.default_url.as_deref(),
            Some("https://httpbin.org/anything")
        );
        assert_eq!(config.request.methods.len(), 5);
        assert_eq!(config.request.timeout(), None);
        assert!(!config.request.offer_content_type);
        assert_eq!(config.request.default_content_type, ContentType::Json);
        assert_eq!(config.log.file, PathBuf::from("/var/tmp/http-tui.log"));
    }

    #[test]
    fn test_parse_rejects_unknown_method() {
        assert!(Config::parse("[request]\nmethods = [\"TRACE\"]").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_and_duplicate_methods() {
        assert!(Config::parse("[request]\nmethods = []").is_err());
        assert!(Config::parse("[request]\nmethods = [\"GET\", \"GET\"]").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_content_type() {
        assert!(Config::parse("[request]\ndefault_content_type = \"xml\"").is_err());
    }

    #[test]
    fn test_content_type_alias() {
        let config = Config::parse("[request]\ndefault_content_type = \"form-urlencoded\"").unwrap();
        assert_eq!(config.request.default_content_type, ContentType::Form);
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("http://localhost:5000").is_ok());
        assert!(validate_url("https://example.com/path?q=1").is_ok());
        assert!(validate_url("").is_err());
        assert!(validate_url("localhost:5000").is_err());
    }

    #[test]
    fn test_invalid_default_url_rejected() {
        assert!(Config::parse("[request]\ndefault_url = \"ftp://x\"").is_err());
    }
}
