#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::{
    default_blacklist_flags, DEFAULT_ENDPOINT, DEFAULT_JOKE_TYPE, DEFAULT_TIMEOUT_SECONDS,
};
use crate::adapters::terminal::DEFAULT_ERROR_PREFIX;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_positive_number, validate_query_token, validate_query_tokens, validate_url, Validate,
};
use toml_config::TomlConfig;

/// Fully resolved settings: defaults, then the TOML file, then command line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub blacklist_flags: Vec<String>,
    pub joke_type: String,
    pub timeout_seconds: u64,
    pub error_prefix: String,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            blacklist_flags: default_blacklist_flags(),
            joke_type: DEFAULT_JOKE_TYPE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            error_prefix: DEFAULT_ERROR_PREFIX.to_string(),
            json_logs: false,
        }
    }
}

impl Settings {
    pub fn apply_toml(&mut self, config: &TomlConfig) {
        if let Some(source) = &config.source {
            if let Some(endpoint) = &source.endpoint {
                self.endpoint = endpoint.clone();
            }
            if let Some(flags) = &source.blacklist_flags {
                self.blacklist_flags = flags.clone();
            }
            if let Some(joke_type) = &source.joke_type {
                self.joke_type = joke_type.clone();
            }
            if let Some(timeout) = source.timeout_seconds {
                self.timeout_seconds = timeout;
            }
        }

        if let Some(prefix) = config.display.as_ref().and_then(|d| d.error_prefix.as_ref()) {
            self.error_prefix = prefix.clone();
        }

        if let Some(format) = config.logging.as_ref().and_then(|l| l.format.as_deref()) {
            self.json_logs = format.eq_ignore_ascii_case("json");
        }
    }
}

impl ConfigProvider for Settings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn blacklist_flags(&self) -> &[String] {
        &self.blacklist_flags
    }

    fn joke_type(&self) -> &str {
        &self.joke_type
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_query_tokens("blacklist_flags", &self.blacklist_flags)?;
        validate_query_token("joke_type", &self.joke_type)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.joke_type, "single");
        assert_eq!(
            settings.blacklist_flags.join(","),
            "nsfw,religious,political,racist,sexist,explicit"
        );
    }

    #[test]
    fn test_apply_toml_overrides_only_present_fields() {
        let config = TomlConfig::from_toml_str(
            r#"
[source]
timeout_seconds = 3

[logging]
format = "JSON"
"#,
        )
        .unwrap();

        let mut settings = Settings::default();
        settings.apply_toml(&config);

        assert_eq!(settings.timeout_seconds, 3);
        assert!(settings.json_logs);
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.joke_type, DEFAULT_JOKE_TYPE);
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let settings = Settings {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
