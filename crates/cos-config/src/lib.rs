#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for configuration loading and validation.
pub const TRACING_TARGET_CONFIG: &str = "cos_config::config";

/// Tracing target for client-builder construction.
pub const TRACING_TARGET_BUILDER: &str = "cos_config::builder";

mod builder;
mod config;
mod credentials;
mod error;

pub use crate::builder::{CosClientBuilder, user_agent_suffix};
pub use crate::config::CosConfig;
pub use crate::credentials::CosCredentials;
pub use crate::error::{ConfigError, Result};
