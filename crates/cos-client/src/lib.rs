#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for client construction.
pub const TRACING_TARGET_CLIENT: &str = "cos_client::client";

/// Tracing target for registry initialization.
pub const TRACING_TARGET_REGISTRY: &str = "cos_client::registry";

mod client;
mod error;
mod registry;

// Re-export the configuration layer for convenience
pub use cos_config::{ConfigError, CosClientBuilder, CosConfig, CosCredentials};

pub use crate::client::{CosClient, DEFAULT_TIMEOUT};
pub use crate::error::{Error, Result};
pub use crate::registry::CosRegistry;
