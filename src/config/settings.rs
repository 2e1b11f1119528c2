//! Client Configuration
//!
//! Defines the configuration schema for the Shelfware client.

use serde::{Deserialize, Serialize};

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Environment variable overriding the backend base URL
pub const BASE_URL_ENV: &str = "SHELFWARE_BASE_URL";

/// Default environment variable holding the API token
pub const API_TOKEN_ENV: &str = "SHELFWARE_API_TOKEN";

/// Client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL (e.g. "https://shelfware.example.com")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// API token value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Environment variable name to read the API token from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token_env: Option<String>,
}

impl ClientConfig {
    /// Get the effective base URL (env override wins, then config, then default)
    pub fn get_base_url(&self) -> String {
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            return url;
        }

        self.base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Resolve the API token
    ///
    /// Checks the configured env var (or the default one) first, then the
    /// raw `api_token` value.
    pub fn get_api_token(&self) -> Option<String> {
        let env_var = self.api_token_env.as_deref().unwrap_or(API_TOKEN_ENV);
        if let Ok(token) = std::env::var(env_var) {
            if !token.is_empty() {
                return Some(token);
            }
        }

        self.api_token.clone()
    }

    /// Merge another config into this one (the other's set fields win)
    pub fn merge(&mut self, other: ClientConfig) {
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.api_token.is_some() {
            self.api_token = other.api_token;
        }
        if other.api_token_env.is_some() {
            self.api_token_env = other.api_token_env;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_client_config() {
        let json = r#"{
            "base_url": "https://shelfware.example.com",
            "api_token_env": "MY_SHELFWARE_TOKEN"
        }"#;

        let config: ClientConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://shelfware.example.com")
        );
        assert_eq!(config.api_token_env.as_deref(), Some("MY_SHELFWARE_TOKEN"));
        assert!(config.api_token.is_none());
    }

    #[test]
    fn test_default_base_url() {
        let config = ClientConfig::default();
        if std::env::var(BASE_URL_ENV).is_err() {
            assert_eq!(config.get_base_url(), DEFAULT_BASE_URL);
        }
    }

    #[test]
    fn test_merge_set_fields_win() {
        let mut base = ClientConfig {
            base_url: Some("http://a".to_string()),
            api_token: Some("tok-a".to_string()),
            api_token_env: None,
        };

        base.merge(ClientConfig {
            base_url: Some("http://b".to_string()),
            api_token: None,
            api_token_env: None,
        });

        assert_eq!(base.base_url.as_deref(), Some("http://b"));
        assert_eq!(base.api_token.as_deref(), Some("tok-a"));
    }

    #[test]
    fn test_raw_token_used_when_env_unset() {
        let config = ClientConfig {
            base_url: None,
            api_token: Some("raw-token".to_string()),
            api_token_env: Some("SHELFWARE_TEST_TOKEN_UNSET".to_string()),
        };

        assert_eq!(config.get_api_token().as_deref(), Some("raw-token"));
    }
}
