//! Singleton registration for the client builder and client.

use std::sync::{Arc, OnceLock};

use cos_config::{CosClientBuilder, CosConfig};

use crate::TRACING_TARGET_REGISTRY;
use crate::client::CosClient;
use crate::error::{Error, Result};

/// Process-wide registry for the client builder and the realized client.
///
/// Replaces container-managed conditional registration with an explicit,
/// ordered startup routine: install overrides first, then [`initialize`]
/// fills whatever is still empty. Slots are write-once; an
/// application-supplied instance is never replaced.
///
/// [`initialize`]: CosRegistry::initialize
#[derive(Debug, Default)]
pub struct CosRegistry {
    builder: OnceLock<Arc<CosClientBuilder>>,
    client: OnceLock<Arc<CosClient>>,
}

impl CosRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs an application-supplied builder ahead of [`initialize`].
    ///
    /// [`initialize`]: CosRegistry::initialize
    ///
    /// # Errors
    ///
    /// Returns [`Error::BuilderAlreadyRegistered`] if the slot is occupied.
    pub fn register_builder(&self, builder: CosClientBuilder) -> Result<()> {
        self.builder
            .set(Arc::new(builder))
            .map_err(|_| Error::BuilderAlreadyRegistered)
    }

    /// Installs an application-supplied client ahead of [`initialize`].
    ///
    /// [`initialize`]: CosRegistry::initialize
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClientAlreadyRegistered`] if the slot is occupied.
    pub fn register_client(&self, client: CosClient) -> Result<()> {
        self.client
            .set(Arc::new(client))
            .map_err(|_| Error::ClientAlreadyRegistered)
    }

    /// Validates the configuration and fills the empty slots.
    ///
    /// Builds a client builder from `config` unless an override is present,
    /// then realizes a client from the registered builder unless a client
    /// override is present. Filled slots are left untouched, so repeated
    /// initialization with the same configuration is a no-op.
    ///
    /// # Errors
    ///
    /// Propagates factory and transport failures. On error nothing new is
    /// registered and the dependent client slot stays empty.
    pub fn initialize(&self, config: &CosConfig) -> Result<()> {
        let builder = match self.builder.get() {
            Some(existing) => Arc::clone(existing),
            None => {
                let built = Arc::new(CosClientBuilder::from_config(config)?);
                Arc::clone(self.builder.get_or_init(|| built))
            }
        };

        if self.client.get().is_none() {
            let client = Arc::new(CosClient::new(&builder)?);
            let _ = self.client.get_or_init(|| client);
        }

        tracing::info!(
            target: TRACING_TARGET_REGISTRY,
            endpoint = %builder.endpoint(),
            credentials = builder.credentials().kind(),
            "COS registry initialized"
        );

        Ok(())
    }

    /// Returns the registered client builder, if any.
    pub fn builder(&self) -> Option<Arc<CosClientBuilder>> {
        self.builder.get().map(Arc::clone)
    }

    /// Returns the registered client, if any.
    pub fn client(&self) -> Option<Arc<CosClient>> {
        self.client.get().map(Arc::clone)
    }
}
