//! Client-builder construction from configuration.

use url::Url;

use crate::TRACING_TARGET_BUILDER;
use crate::config::CosConfig;
use crate::credentials::CosCredentials;
use crate::error::{ConfigError, Result};

/// Pre-validated description of a COS client.
///
/// Produced by [`from_config`] and consumed by a client implementation.
/// Descriptors are immutable and cheap to clone: build one per configuration
/// and keep it for the process lifetime. Two descriptors built from equal
/// bundles compare equal.
///
/// [`from_config`]: CosClientBuilder::from_config
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a client builder does nothing until a client is realized from it"]
pub struct CosClientBuilder {
    endpoint: Url,
    signing_region: Option<String>,
    credentials: CosCredentials,
    user_agent_suffix: String,
    path_style: bool,
}

impl CosClientBuilder {
    /// Validates a configuration bundle and assembles a client builder.
    ///
    /// Validation order: endpoint presence and syntax first, then credential
    /// resolution. The location is carried over verbatim as the signing
    /// region. Path-style addressing is enabled on every descriptor, as COS
    /// requires it; [`with_path_style`] can flip it afterwards.
    ///
    /// [`with_path_style`]: CosClientBuilder::with_path_style
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEndpoint`],
    /// [`ConfigError::InvalidEndpoint`] or
    /// [`ConfigError::MissingCredentials`].
    pub fn from_config(config: &CosConfig) -> Result<Self> {
        let endpoint = config.endpoint_url()?;
        let credentials = CosCredentials::resolve(config)?;

        let builder = Self {
            endpoint,
            signing_region: config.location.clone(),
            credentials,
            user_agent_suffix: user_agent_suffix(),
            path_style: true,
        };

        tracing::debug!(
            target: TRACING_TARGET_BUILDER,
            endpoint = %builder.endpoint,
            signing_region = ?builder.signing_region,
            credentials = builder.credentials.kind(),
            key = %builder.credentials.masked_key(),
            "Client builder assembled"
        );

        Ok(builder)
    }

    /// Sets whether to use path-style request addressing.
    ///
    /// When true, buckets are addressed as `endpoint/bucket`; when false,
    /// as `bucket.endpoint`.
    pub fn with_path_style(mut self, path_style: bool) -> Self {
        self.path_style = path_style;
        self
    }

    /// Returns the service endpoint.
    #[inline]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns the signing region, if one was configured.
    #[inline]
    pub fn signing_region(&self) -> Option<&str> {
        self.signing_region.as_deref()
    }

    /// Returns the resolved credentials.
    #[inline]
    pub fn credentials(&self) -> &CosCredentials {
        &self.credentials
    }

    /// Returns the user-agent suffix reported by clients built from this
    /// descriptor.
    #[inline]
    pub fn user_agent_suffix(&self) -> &str {
        &self.user_agent_suffix
    }

    /// Returns whether path-style request addressing is enabled.
    #[inline]
    pub fn path_style(&self) -> bool {
        self.path_style
    }
}

impl TryFrom<&CosConfig> for CosClientBuilder {
    type Error = ConfigError;

    fn try_from(config: &CosConfig) -> Result<Self> {
        Self::from_config(config)
    }
}

/// User-agent suffix attached to every descriptor, `<crate>/<version>`.
///
/// Informational only; it identifies this integration layer in request logs.
pub fn user_agent_suffix() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
