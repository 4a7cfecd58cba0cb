use std::env;

use anyhow::{bail, Context};

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_seconds: u64,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("GROQ_API_KEY")
            .context("GROQ_API_KEY environment variable not set")?;

        let base_url = env::var("GROQ_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let model = env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout_seconds = env::var("GROQ_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .context("Invalid GROQ_TIMEOUT_SECONDS value")?;

        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .context("Invalid SERVER_PORT value")?;

        let config = Self {
            api_key,
            base_url,
            model,
            timeout_seconds,
            host,
            port,
        };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.is_empty() {
            bail!("API key cannot be empty");
        }
        if !self.base_url.starts_with("http") {
            bail!("Base URL must start with http or https");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            api_key: "test-key".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: 30,
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }

    #[test]
    fn test_config_from_env() {
        env::set_var("GROQ_API_KEY", "test-api-key");
        env::remove_var("GROQ_BASE_URL");
        env::remove_var("GROQ_MODEL");

        let config = AppConfig::from_env().expect("Config should be created from env");

        assert_eq!(config.api_key, "test-api-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.port, 8000);

        env::remove_var("GROQ_API_KEY");
    }

    #[test]
    fn test_config_validation() {
        assert!(test_config().validate().is_ok());

        let mut empty_key = test_config();
        empty_key.api_key = String::new();
        assert!(empty_key.validate().is_err());

        let mut bad_url = test_config();
        bad_url.base_url = "not-a-url".to_string();
        assert!(bad_url.validate().is_err());
    }
}
