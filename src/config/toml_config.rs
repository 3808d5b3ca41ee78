use crate::core::tracker::{CYCLE_LENGTH_RANGE, PERIOD_LENGTH_RANGE};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{HealthError, Result};
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_STORAGE_PATH: &str = "./data";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    pub backend: BackendConfig,
    pub notifier: NotifierConfig,
    pub storage: StorageConfig,
    pub tracker: TrackerConfig,
    pub consent: ConsentConfig,
    pub schemes: SchemesConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub headers: HashMap<String, String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            timeout_seconds: None,
            headers: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    pub webhook_url: Option<String>,
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_STORAGE_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub period_length: Option<u32>,
    pub cycle_length: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsentConfig {
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemesConfig {
    pub catalog_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub session_id: Option<String>,
}

impl HealthConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HealthError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HealthError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HealthError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.backend.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn consent_delay(&self) -> Duration {
        self.consent
            .delay_ms
            .map(Duration::from_millis)
            .unwrap_or(crate::core::consent::DEFAULT_DELAY)
    }

    pub fn period_length(&self) -> u32 {
        self.tracker
            .period_length
            .unwrap_or(crate::core::tracker::DEFAULT_PERIOD_LENGTH)
    }

    pub fn cycle_length(&self) -> u32 {
        self.tracker
            .cycle_length
            .unwrap_or(crate::core::tracker::DEFAULT_CYCLE_LENGTH)
    }

    pub fn country_code(&self) -> &str {
        self.notifier
            .country_code
            .as_deref()
            .unwrap_or(crate::app::booking::DEFAULT_COUNTRY_CODE)
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("backend.base_url", &self.backend.base_url)?;
        if let Some(timeout) = self.backend.timeout_seconds {
            validate_positive_number("backend.timeout_seconds", timeout, 1)?;
        }
        if let Some(webhook) = &self.notifier.webhook_url {
            validate_url("notifier.webhook_url", webhook)?;
        }
        validate_path("storage.path", &self.storage.path)?;
        if let Some(catalog) = &self.schemes.catalog_path {
            validate_path("schemes.catalog_path", catalog)?;
        }
        if let Some(period) = self.tracker.period_length {
            validate_range("tracker.period_length", period, PERIOD_LENGTH_RANGE.0, PERIOD_LENGTH_RANGE.1)?;
        }
        if let Some(cycle) = self.tracker.cycle_length {
            validate_range("tracker.cycle_length", cycle, CYCLE_LENGTH_RANGE.0, CYCLE_LENGTH_RANGE.1)?;
        }
        Ok(())
    }
}

impl ConfigProvider for HealthConfig {
    fn backend_url(&self) -> &str {
        &self.backend.base_url
    }

    fn backend_headers(&self) -> &HashMap<String, String> {
        &self.backend.headers
    }

    fn request_timeout(&self) -> Duration {
        self.timeout()
    }

    fn storage_path(&self) -> &str {
        &self.storage.path
    }

    fn notifier_url(&self) -> Option<&str> {
        self.notifier.webhook_url.as_deref()
    }
}

impl Validate for HealthConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = HealthConfig::from_toml_str("").unwrap();

        assert_eq!(config.backend_url(), DEFAULT_BACKEND_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.storage_path(), "./data");
        assert_eq!(config.period_length(), 5);
        assert_eq!(config.cycle_length(), 28);
        assert_eq!(config.consent_delay(), Duration::from_millis(1500));
        assert_eq!(config.country_code(), "+91");
        assert!(config.notifier_url().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[backend]
base_url = "https://ai.example.com"
timeout_seconds = 10
headers = { "X-Api-Key" = "secret" }

[notifier]
webhook_url = "https://sms.example.com/send-message"
country_code = "+1"

[storage]
path = "/var/lib/health-hub"

[tracker]
period_length = 6
cycle_length = 30

[consent]
delay_ms = 200
"#;

        let config = HealthConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.backend_url(), "https://ai.example.com");
        assert_eq!(config.backend_headers().get("X-Api-Key").map(String::as_str), Some("secret"));
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.notifier_url(), Some("https://sms.example.com/send-message"));
        assert_eq!(config.country_code(), "+1");
        assert_eq!(config.period_length(), 6);
        assert_eq!(config.consent_delay(), Duration::from_millis(200));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("HEALTH_HUB_TEST_BACKEND", "https://test.api.com");

        let toml_content = r#"
[backend]
base_url = "${HEALTH_HUB_TEST_BACKEND}"
"#;

        let config = HealthConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.backend.base_url, "https://test.api.com");

        std::env::remove_var("HEALTH_HUB_TEST_BACKEND");
    }

    #[test]
    fn test_config_validation() {
        let invalid_url = HealthConfig::from_toml_str("[backend]\nbase_url = \"invalid-url\"\n").unwrap();
        assert!(invalid_url.validate().is_err());

        let bad_cycle = HealthConfig::from_toml_str("[tracker]\ncycle_length = 60\n").unwrap();
        let err = bad_cycle.validate().unwrap_err();
        assert!(matches!(err, HealthError::InvalidConfigValueError { ref field, .. } if field == "tracker.cycle_length"));

        let zero_timeout = HealthConfig::from_toml_str("[backend]\ntimeout_seconds = 0\n").unwrap();
        assert!(zero_timeout.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = HealthConfig::from_toml_str("[backend\nbase_url = 1").unwrap_err();
        assert!(matches!(err, HealthError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[storage]\npath = \"./appointments\"\n")
            .unwrap();

        let config = HealthConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.storage_path(), "./appointments");
    }
}
