//! Configuration error types.

/// Result type for configuration validation and builder construction.
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

/// Errors raised while turning a [`CosConfig`] into a client builder.
///
/// All variants are construction-time failures. The factory neither retries
/// nor degrades; callers are expected to surface the error and abort startup.
///
/// [`CosConfig`]: crate::CosConfig
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[must_use = "errors should be handled appropriately"]
pub enum ConfigError {
    /// No endpoint was configured.
    #[error("endpoint is not configured")]
    MissingEndpoint,

    /// The configured endpoint is not a usable HTTP(S) URL.
    #[error("invalid endpoint `{endpoint}`: {reason}")]
    InvalidEndpoint {
        /// The raw value that was rejected.
        endpoint: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Neither an API key nor a complete HMAC key pair was configured.
    ///
    /// A lone access key or a lone secret key also lands here: a partial
    /// HMAC pair cannot sign requests.
    #[error("missing credentials: set an API key or both an access key and a secret key")]
    MissingCredentials,
}
