//! Top-level data client
//!
//! Owns the persisted local store and the optional hosted-backend client,
//! and hands out per-entity facades plus the simulated-action entry point.
//! Cheap to clone; all handles share the same store.

use std::sync::Arc;

use tracing::info;

use crate::actions::{self, ActionOutcome};
use crate::config::RemoteConfig;
use crate::entity::{EmptyRemotePolicy, EntityHandle};
use crate::error::Result;
use crate::model::{InfrastructureAsset, InvestmentProject, RiskAlert};
use crate::remote::RemoteTableClient;
use crate::store::{LocalStore, MemoryBackend, StorageBackend};

/// Unified access to all entity kinds over whichever backend is configured
#[derive(Clone)]
pub struct DataClient {
    store: LocalStore,
    remote: Option<RemoteTableClient>,
    policy: EmptyRemotePolicy,
}

impl DataClient {
    /// Build a client from resolved configuration and a persistence backend
    pub fn new(config: &RemoteConfig, backend: Arc<dyn StorageBackend>) -> Self {
        let remote = RemoteTableClient::from_config(config);
        info!(
            mode = if remote.is_some() { "remote" } else { "local" },
            "data client ready"
        );
        Self {
            store: LocalStore::new(backend),
            remote,
            policy: EmptyRemotePolicy::default(),
        }
    }

    /// Client running entirely on seeded in-memory fixtures
    pub fn in_memory() -> Self {
        Self::new(&RemoteConfig::disabled(), Arc::new(MemoryBackend::new()))
    }

    /// Override what reads do when a remote table holds zero rows
    pub fn with_empty_remote_policy(mut self, policy: EmptyRemotePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Infrastructure assets (remote-backed when configured)
    pub fn assets(&self) -> EntityHandle<InfrastructureAsset> {
        self.handle()
    }

    /// Investment projects (remote-backed when configured)
    pub fn projects(&self) -> EntityHandle<InvestmentProject> {
        self.handle()
    }

    /// Risk alerts (always local)
    pub fn alerts(&self) -> EntityHandle<RiskAlert> {
        self.handle()
    }

    fn handle<E: crate::entity::Entity>(&self) -> EntityHandle<E> {
        EntityHandle::new(self.store.clone(), self.remote.clone(), self.policy)
    }

    /// Invoke a simulated external action by name
    ///
    /// Unknown names succeed as no-ops.
    pub async fn invoke(&self, name: &str) -> Result<ActionOutcome> {
        actions::invoke(&self.store, name)
    }
}
