//! COS configuration bundle.

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::TRACING_TARGET_CONFIG;
use crate::credentials::CosCredentials;
use crate::error::{ConfigError, Result};

/// Connection settings for an IBM Cloud Object Storage instance.
///
/// Every field is optional at rest; validation happens when a client builder
/// is constructed from the bundle (or explicitly via [`validate`]). For
/// authentication, either `api_key` (IAM) or `access_key` plus `secret_key`
/// (HMAC) must be provided. An API key takes precedence when both are set.
///
/// With the `config` feature enabled the bundle can be flattened into a
/// host binary's argument parser; each field then also binds to its
/// `COS_*` environment variable.
///
/// [`validate`]: CosConfig::validate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct CosConfig {
    /// Service endpoint URL, e.g. `https://s3.us-south.cloud-object-storage.appdomain.cloud`.
    #[cfg_attr(feature = "config", arg(long = "cos-endpoint", env = "COS_ENDPOINT"))]
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Bucket location, carried verbatim into the request signing region.
    #[cfg_attr(feature = "config", arg(long = "cos-location", env = "COS_LOCATION"))]
    #[serde(default)]
    pub location: Option<String>,

    /// IAM API key.
    #[cfg_attr(feature = "config", arg(long = "cos-api-key", env = "COS_API_KEY"))]
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Service instance id, scoping IAM credentials for bucket listing and
    /// bucket creation. Meaningful only together with `api_key`.
    #[cfg_attr(
        feature = "config",
        arg(long = "cos-service-instance-id", env = "COS_SERVICE_INSTANCE_ID")
    )]
    #[serde(default)]
    pub service_instance_id: Option<String>,

    /// HMAC access key, used only when no API key is set.
    #[cfg_attr(feature = "config", arg(long = "cos-access-key", env = "COS_ACCESS_KEY"))]
    #[serde(default)]
    pub access_key: Option<String>,

    /// HMAC secret key, used only when no API key is set.
    #[cfg_attr(feature = "config", arg(long = "cos-secret-key", env = "COS_SECRET_KEY"))]
    #[serde(default, skip_serializing)]
    pub secret_key: Option<String>,
}

impl CosConfig {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the bucket location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the IAM API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the service instance id.
    pub fn with_service_instance_id(mut self, service_instance_id: impl Into<String>) -> Self {
        self.service_instance_id = Some(service_instance_id.into());
        self
    }

    /// Sets the HMAC key pair.
    pub fn with_hmac_keys(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Parses the configured endpoint into a URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEndpoint`] if the endpoint is unset or
    /// empty, and [`ConfigError::InvalidEndpoint`] if it does not parse as
    /// an HTTP(S) URL with a host.
    pub fn endpoint_url(&self) -> Result<Url> {
        let raw = non_empty(&self.endpoint).ok_or(ConfigError::MissingEndpoint)?;

        let url = Url::parse(raw).map_err(|e| ConfigError::InvalidEndpoint {
            endpoint: raw.to_owned(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpoint {
                endpoint: raw.to_owned(),
                reason: format!("unsupported scheme `{}`", url.scheme()),
            });
        }

        if url.host_str().is_none() {
            return Err(ConfigError::InvalidEndpoint {
                endpoint: raw.to_owned(),
                reason: "missing host".to_owned(),
            });
        }

        Ok(url)
    }

    /// Validates the bundle without constructing a builder.
    ///
    /// Runs the same checks as the builder factory: endpoint first, then
    /// credential resolution.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered.
    pub fn validate(&self) -> Result<()> {
        self.endpoint_url()?;
        CosCredentials::resolve(self)?;
        Ok(())
    }

    /// Logs the bundle at debug level with secrets reduced to presence flags.
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            endpoint = ?self.endpoint,
            location = ?self.location,
            has_api_key = non_empty(&self.api_key).is_some(),
            has_service_instance_id = non_empty(&self.service_instance_id).is_some(),
            has_access_key = non_empty(&self.access_key).is_some(),
            has_secret_key = non_empty(&self.secret_key).is_some(),
            "Loaded COS configuration"
        );
    }
}

/// Treats empty values as absent, mirroring unset environment variables.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_methods_set_fields() {
        let config = CosConfig::new()
            .with_endpoint("http://ibm.com")
            .with_location("us-south")
            .with_api_key("myApiKey")
            .with_service_instance_id("myServiceInstanceId");

        assert_eq!(config.endpoint.as_deref(), Some("http://ibm.com"));
        assert_eq!(config.location.as_deref(), Some("us-south"));
        assert_eq!(config.api_key.as_deref(), Some("myApiKey"));
        assert_eq!(
            config.service_instance_id.as_deref(),
            Some("myServiceInstanceId")
        );
    }

    #[test]
    fn endpoint_url_parses_valid_endpoint() {
        let config = CosConfig::new().with_endpoint("http://ibm.com");
        let url = config.endpoint_url().unwrap();
        assert_eq!(url.as_str(), "http://ibm.com/");
    }

    #[test]
    fn endpoint_url_rejects_missing_endpoint() {
        let config = CosConfig::new();
        assert_eq!(config.endpoint_url().unwrap_err(), ConfigError::MissingEndpoint);
    }

    #[test]
    fn endpoint_url_treats_empty_endpoint_as_missing() {
        let config = CosConfig::new().with_endpoint("");
        assert_eq!(config.endpoint_url().unwrap_err(), ConfigError::MissingEndpoint);
    }

    #[test]
    fn endpoint_url_rejects_unparseable_endpoint() {
        let config = CosConfig::new().with_endpoint("notAUrl");
        assert!(matches!(
            config.endpoint_url().unwrap_err(),
            ConfigError::InvalidEndpoint { .. }
        ));
    }

    #[test]
    fn endpoint_url_rejects_non_http_scheme() {
        let config = CosConfig::new().with_endpoint("ftp://ibm.com");
        assert!(matches!(
            config.endpoint_url().unwrap_err(),
            ConfigError::InvalidEndpoint { .. }
        ));
    }

    #[test]
    fn validate_matches_factory_checks() {
        let valid = CosConfig::new()
            .with_endpoint("http://ibm.com")
            .with_api_key("myApiKey");
        assert!(valid.validate().is_ok());

        let no_credentials = CosConfig::new()
            .with_endpoint("http://ibm.com")
            .with_location("us-south");
        assert_eq!(
            no_credentials.validate().unwrap_err(),
            ConfigError::MissingCredentials
        );
    }

    #[test]
    fn deserialize_partial_config() {
        let config: CosConfig =
            serde_json::from_str(r#"{"endpoint":"http://ibm.com","api_key":"myApiKey"}"#).unwrap();

        assert_eq!(config.endpoint.as_deref(), Some("http://ibm.com"));
        assert_eq!(config.api_key.as_deref(), Some("myApiKey"));
        assert!(config.location.is_none());
        assert!(config.secret_key.is_none());
    }

    #[test]
    fn serialize_skips_secrets() {
        let config = CosConfig::new()
            .with_endpoint("http://ibm.com")
            .with_api_key("myApiKey")
            .with_hmac_keys("myAccessKey", "mySecretKey");

        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("api_key").is_none());
        assert!(json.get("secret_key").is_none());
        assert_eq!(
            json.get("access_key").and_then(|v| v.as_str()),
            Some("myAccessKey")
        );
    }
}
