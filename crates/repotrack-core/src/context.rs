//! Application context wiring.

use std::sync::Arc;

use crate::{
    auth::Authorizer,
    config::TrackerConfig,
    error::Result,
    store::PackageStore,
};

/// Everything the module's entry points need, constructed once at startup.
///
/// Replaces any notion of a process-wide singleton: the host builds one
/// context and hands out references.
pub struct TrackerContext {
    store: PackageStore,
    authorizer: Arc<dyn Authorizer>,
    manage_capability: String,
}

impl TrackerContext {
    /// Builds a context from configuration, opening the store.
    pub fn new(config: &TrackerConfig, authorizer: Arc<dyn Authorizer>) -> Result<Self> {
        let store = PackageStore::open(&config.db_path)?;
        Ok(Self {
            store,
            authorizer,
            manage_capability: config.manage_capability.clone(),
        })
    }

    /// Builds a context around an existing store.
    pub fn with_store(
        store: PackageStore,
        authorizer: Arc<dyn Authorizer>,
        manage_capability: impl Into<String>,
    ) -> Self {
        Self {
            store,
            authorizer,
            manage_capability: manage_capability.into(),
        }
    }

    pub fn store(&self) -> &PackageStore {
        &self.store
    }

    pub fn authorizer(&self) -> &dyn Authorizer {
        self.authorizer.as_ref()
    }

    /// Capability required to change the package list.
    pub fn manage_capability(&self) -> &str {
        &self.manage_capability
    }
}
