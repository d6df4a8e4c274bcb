//! Realized COS client handle.

use std::time::Duration;

use cos_config::{CosClientBuilder, CosCredentials};
use url::Url;

use crate::TRACING_TARGET_CLIENT;
use crate::error::{Error, Result};

/// Default timeout applied to requests issued through the handle: 30 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Realized COS client.
///
/// Holds an HTTP transport configured from a [`CosClientBuilder`] together
/// with the resolved connection parameters, and computes request addressing.
/// Issuing and signing storage requests is left to the protocol layer
/// driving the handle.
#[derive(Clone)]
pub struct CosClient {
    http: reqwest::Client,
    endpoint: Url,
    signing_region: Option<String>,
    credentials: CosCredentials,
    user_agent: String,
    path_style: bool,
}

impl CosClient {
    /// Realizes a client from a pre-validated builder.
    ///
    /// The transport is configured with a composed `User-Agent` (this crate
    /// plus the builder's suffix) and [`DEFAULT_TIMEOUT`]. Construction
    /// performs no network access.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the HTTP client cannot be built.
    pub fn new(builder: &CosClientBuilder) -> Result<Self> {
        let user_agent = format!(
            "{}/{} {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            builder.user_agent_suffix()
        );

        let http = reqwest::Client::builder()
            .user_agent(user_agent.clone())
            .timeout(DEFAULT_TIMEOUT)
            .build()?;

        tracing::info!(
            target: TRACING_TARGET_CLIENT,
            endpoint = %builder.endpoint(),
            signing_region = ?builder.signing_region(),
            credentials = builder.credentials().kind(),
            key = %builder.credentials().masked_key(),
            path_style = builder.path_style(),
            "COS client realized"
        );

        Ok(Self {
            http,
            endpoint: builder.endpoint().clone(),
            signing_region: builder.signing_region().map(str::to_owned),
            credentials: builder.credentials().clone(),
            user_agent,
            path_style: builder.path_style(),
        })
    }

    /// Returns the underlying HTTP transport.
    #[inline]
    pub fn http(&self) -> &reqwest::Client {
        &self.http
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

    /// Returns the composed user agent sent with every request.
    #[inline]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns whether path-style request addressing is enabled.
    #[inline]
    pub fn path_style(&self) -> bool {
        self.path_style
    }

    /// Returns the URL addressing a bucket.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Addressing`] if a URL cannot be derived from the
    /// endpoint.
    pub fn bucket_url(&self, bucket: &str) -> Result<Url> {
        self.storage_url(bucket, &[])
    }

    /// Returns the URL addressing an object within a bucket.
    ///
    /// Key segments are percent-encoded individually, so keys may contain
    /// `/` separators.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Addressing`] if a URL cannot be derived from the
    /// endpoint.
    pub fn object_url(&self, bucket: &str, key: &str) -> Result<Url> {
        self.storage_url(bucket, &key.split('/').collect::<Vec<_>>())
    }

    fn storage_url(&self, bucket: &str, key_segments: &[&str]) -> Result<Url> {
        let mut url = self.endpoint.clone();

        if self.path_style {
            // Path-style: the bucket is the first path segment.
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::Addressing("endpoint cannot be a base URL".to_owned()))?;
            segments.pop_if_empty().push(bucket).extend(key_segments);
        } else {
            // Virtual-hosted style: the bucket becomes a host label.
            let host = url
                .host_str()
                .ok_or_else(|| Error::Addressing("endpoint has no host".to_owned()))?;
            let host = format!("{bucket}.{host}");
            url.set_host(Some(&host))
                .map_err(|e| Error::Addressing(e.to_string()))?;

            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::Addressing("endpoint cannot be a base URL".to_owned()))?;
            segments.pop_if_empty().extend(key_segments);
        }

        Ok(url)
    }
}

impl TryFrom<&CosClientBuilder> for CosClient {
    type Error = Error;

    fn try_from(builder: &CosClientBuilder) -> Result<Self> {
        Self::new(builder)
    }
}

impl std::fmt::Debug for CosClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("signing_region", &self.signing_region)
            .field("credentials", &self.credentials.kind())
            .field("key", &self.credentials.masked_key())
            .field("path_style", &self.path_style)
            .finish()
    }
}
