//! Configuration management

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::models::Credentials;

/// Default Datamarket OAuth2 token endpoint
pub const DEFAULT_TOKEN_ENDPOINT: &str =
    "https://datamarket.accesscontrol.windows.net/v2/OAuth2-13";

/// Default translation service base URL
pub const DEFAULT_API_ENDPOINT: &str = "https://api.microsofttranslator.com/V2";

/// Scope requested with the client-credentials grant
pub const DEFAULT_SCOPE: &str = "http://api.microsofttranslator.com";

/// Configuration for translator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    pub credentials: Credentials,
    pub token_endpoint: String,
    pub api_endpoint: String,
    pub scope: String,
    pub timeout_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::new(
                std::env::var("AZURE_CLIENT_ID").unwrap_or_default(),
                std::env::var("AZURE_CLIENT_SECRET").unwrap_or_default(),
            ),
            token_endpoint: DEFAULT_TOKEN_ENDPOINT.to_string(),
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            timeout_ms: 30000,
        }
    }
}

impl TranslatorConfig {
    /// Build a configuration from explicit credentials and the default endpoints
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let client_id = std::env::var("AZURE_CLIENT_ID")
            .map_err(|_| anyhow::anyhow!("AZURE_CLIENT_ID environment variable is required"))?;

        let client_secret = std::env::var("AZURE_CLIENT_SECRET")
            .map_err(|_| anyhow::anyhow!("AZURE_CLIENT_SECRET environment variable is required"))?;

        let token_endpoint = std::env::var("AZURE_TOKEN_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_TOKEN_ENDPOINT.to_string());

        let api_endpoint = std::env::var("AZURE_API_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string());

        let timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".to_string())
            .parse::<u64>()?;

        info!("Loaded translator configuration from environment");

        Ok(Self {
            credentials: Credentials::new(client_id, client_secret),
            token_endpoint,
            api_endpoint,
            scope: DEFAULT_SCOPE.to_string(),
            timeout_ms,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.credentials.is_complete() {
            return Err(anyhow::anyhow!("Client id and client secret are required"));
        }

        if self.token_endpoint.is_empty() {
            return Err(anyhow::anyhow!("Token endpoint is required"));
        }

        if self.api_endpoint.is_empty() {
            return Err(anyhow::anyhow!("API endpoint is required"));
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        Ok(())
    }

    /// URL of the single-string translate operation
    pub fn translate_url(&self) -> String {
        format!("{}/Translate", self.api_endpoint.trim_end_matches('/'))
    }

    /// URL of the batch translate operation
    pub fn translate_array_url(&self) -> String {
        format!("{}/TranslateArray", self.api_endpoint.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = TranslatorConfig::new(Credentials::new("test_id", "test_secret"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_missing_secret() {
        let config = TranslatorConfig::new(Credentials::new("test_id", ""));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_missing_endpoint() {
        let config = TranslatorConfig {
            api_endpoint: "".to_string(),
            ..TranslatorConfig::new(Credentials::new("test_id", "test_secret"))
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_operation_urls() {
        let config = TranslatorConfig::new(Credentials::new("id", "secret"));
        assert_eq!(
            config.translate_url(),
            "https://api.microsofttranslator.com/V2/Translate"
        );
        assert_eq!(
            config.translate_array_url(),
            "https://api.microsofttranslator.com/V2/TranslateArray"
        );
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let config = TranslatorConfig {
            api_endpoint: "https://example.com/V2/".to_string(),
            ..TranslatorConfig::new(Credentials::new("id", "secret"))
        };
        assert_eq!(config.translate_url(), "https://example.com/V2/Translate");
    }
}
