//! Client and registry error types.

use cos_config::ConfigError;

/// Result type for client construction and registry operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while realizing or registering a COS client.
#[derive(Debug, thiserror::Error)]
#[must_use = "errors should be handled appropriately"]
pub enum Error {
    /// The configuration bundle failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP transport could not be constructed.
    #[error("failed to construct HTTP transport: {0}")]
    Transport(#[from] reqwest::Error),

    /// A request URL could not be derived from the endpoint.
    #[error("could not derive request URL: {0}")]
    Addressing(String),

    /// A client builder override is already registered.
    #[error("a client builder is already registered")]
    BuilderAlreadyRegistered,

    /// A client override is already registered.
    #[error("a client is already registered")]
    ClientAlreadyRegistered,
}
