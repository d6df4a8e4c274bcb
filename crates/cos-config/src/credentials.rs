//! COS authentication credentials.

use serde::{Deserialize, Serialize};

use crate::config::{CosConfig, non_empty};
use crate::error::{ConfigError, Result};

/// Resolved authentication credentials for a COS client.
///
/// Exactly one variant is produced per successful resolution. IAM (OAuth)
/// credentials take precedence: when an API key is configured, any HMAC
/// fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CosCredentials {
    /// IAM API-key credentials with an optional service-instance scope.
    #[serde(rename = "oauth")]
    OAuth {
        /// IAM API key.
        #[serde(skip_serializing)]
        api_key: String,
        /// Service instance id for bucket listing and bucket creation.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        service_instance_id: Option<String>,
    },

    /// HMAC signing key pair.
    Hmac {
        /// Access key.
        access_key: String,
        /// Secret key.
        #[serde(skip_serializing)]
        secret_key: String,
    },
}

impl CosCredentials {
    /// Resolves the credential variant for a configuration bundle.
    ///
    /// A non-empty API key selects [`CosCredentials::OAuth`]; otherwise both
    /// HMAC keys must be non-empty to select [`CosCredentials::Hmac`]. Empty
    /// strings count as absent, so an empty environment variable behaves
    /// like an unset one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] when no variant is
    /// resolvable, including a partial HMAC pair.
    pub fn resolve(config: &CosConfig) -> Result<Self> {
        if let Some(api_key) = non_empty(&config.api_key) {
            return Ok(Self::OAuth {
                api_key: api_key.to_owned(),
                service_instance_id: non_empty(&config.service_instance_id).map(str::to_owned),
            });
        }

        match (non_empty(&config.access_key), non_empty(&config.secret_key)) {
            (Some(access_key), Some(secret_key)) => Ok(Self::Hmac {
                access_key: access_key.to_owned(),
                secret_key: secret_key.to_owned(),
            }),
            _ => Err(ConfigError::MissingCredentials),
        }
    }

    /// Returns the credential kind as a static string.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OAuth { .. } => "oauth",
            Self::Hmac { .. } => "hmac",
        }
    }

    /// Returns a masked form of the primary key for logging.
    ///
    /// Shows at most the first four characters followed by asterisks.
    pub fn masked_key(&self) -> String {
        let key = match self {
            Self::OAuth { api_key, .. } => api_key,
            Self::Hmac { access_key, .. } => access_key,
        };

        match key.char_indices().nth(4) {
            Some((idx, _)) => format!("{}***", &key[..idx]),
            None => "*".repeat(key.chars().count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_oauth_over_hmac() {
        let config = CosConfig::new()
            .with_api_key("myApiKey")
            .with_hmac_keys("myAccessKey", "mySecretKey");

        let credentials = CosCredentials::resolve(&config).unwrap();
        assert_eq!(
            credentials,
            CosCredentials::OAuth {
                api_key: "myApiKey".to_owned(),
                service_instance_id: None,
            }
        );
    }

    #[test]
    fn resolve_carries_service_instance_id() {
        let config = CosConfig::new()
            .with_api_key("myApiKey")
            .with_service_instance_id("myServiceInstanceId");

        let credentials = CosCredentials::resolve(&config).unwrap();
        assert_eq!(
            credentials,
            CosCredentials::OAuth {
                api_key: "myApiKey".to_owned(),
                service_instance_id: Some("myServiceInstanceId".to_owned()),
            }
        );
    }

    #[test]
    fn resolve_selects_hmac_without_api_key() {
        let config = CosConfig::new().with_hmac_keys("myAccessKey", "mySecretKey");

        let credentials = CosCredentials::resolve(&config).unwrap();
        assert_eq!(
            credentials,
            CosCredentials::Hmac {
                access_key: "myAccessKey".to_owned(),
                secret_key: "mySecretKey".to_owned(),
            }
        );
    }

    #[test]
    fn resolve_rejects_empty_bundle() {
        let config = CosConfig::new();
        assert_eq!(
            CosCredentials::resolve(&config).unwrap_err(),
            ConfigError::MissingCredentials
        );
    }

    #[test]
    fn resolve_rejects_partial_hmac_pair() {
        let mut config = CosConfig::new();
        config.secret_key = Some("mySecretKey".to_owned());
        assert_eq!(
            CosCredentials::resolve(&config).unwrap_err(),
            ConfigError::MissingCredentials
        );

        let mut config = CosConfig::new();
        config.access_key = Some("myAccessKey".to_owned());
        assert_eq!(
            CosCredentials::resolve(&config).unwrap_err(),
            ConfigError::MissingCredentials
        );
    }

    #[test]
    fn resolve_treats_empty_api_key_as_absent() {
        let config = CosConfig::new()
            .with_api_key("")
            .with_hmac_keys("myAccessKey", "mySecretKey");

        let credentials = CosCredentials::resolve(&config).unwrap();
        assert_eq!(credentials.kind(), "hmac");
    }

    #[test]
    fn masked_key_hides_all_but_prefix() {
        let config = CosConfig::new().with_hmac_keys("AKIATEST12345", "secret");
        let credentials = CosCredentials::resolve(&config).unwrap();
        assert_eq!(credentials.masked_key(), "AKIA***");

        let config = CosConfig::new().with_api_key("abc");
        let credentials = CosCredentials::resolve(&config).unwrap();
        assert_eq!(credentials.masked_key(), "***");
    }
}
