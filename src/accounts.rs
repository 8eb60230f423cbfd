//! Cache-backed directory of account metadata used by the configuration UI
//! (account, web property, and profile pickers).

use crate::{
    cache::TtlCache,
    client::{AnalyticsClient, ClientFactory},
    config::{CacheConfig, DatasourceSettings},
    error::{DatasourceError, Result},
};
use std::{collections::HashMap, future::Future, sync::Arc};
use tracing::debug;

/// Immutable id → display-name snapshot shared with every caller.
pub type NameMapping = Arc<HashMap<String, String>>;

/// Serves account-listing requests, contacting the upstream management API
/// only when the cache has no live entry for the datasource configuration.
///
/// The directory is process-wide shared state: construct it once per data
/// source and hand out clones of the `Arc` it lives in. Concurrent callers
/// missing on the same key may each trigger an upstream call; the cache
/// guarantees correctness, not minimal API usage.
pub struct AccountDirectory {
    factory: Arc<dyn ClientFactory>,
    cache: TtlCache<NameMapping>,
    config: CacheConfig,
}

impl AccountDirectory {
    pub fn new(factory: Arc<dyn ClientFactory>) -> Self {
        Self::with_config(factory, CacheConfig::default())
    }

    pub fn with_config(factory: Arc<dyn ClientFactory>, config: CacheConfig) -> Self {
        Self {
            factory,
            cache: TtlCache::new(),
            config,
        }
    }

    /// Lists accounts visible to the configured credentials.
    pub async fn accounts(&self, settings: &DatasourceSettings) -> Result<NameMapping> {
        let key = format!("{}:accounts", settings.cache_fingerprint());
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }
        debug!(%key, "metadata cache miss");

        let client = self.build_client(settings).await?;
        let accounts = self.call_upstream(client.list_accounts()).await?;
        let mapping: NameMapping = Arc::new(
            accounts
                .into_iter()
                .map(|account| (account.id, account.name))
                .collect(),
        );
        self.store(key, &mapping);
        Ok(mapping)
    }

    /// Lists web properties under one account.
    pub async fn web_properties(
        &self,
        settings: &DatasourceSettings,
        account_id: &str,
    ) -> Result<NameMapping> {
        let key = format!(
            "{}:webproperties:{account_id}",
            settings.cache_fingerprint()
        );
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }
        debug!(%key, "metadata cache miss");

        let client = self.build_client(settings).await?;
        let properties = self
            .call_upstream(client.list_web_properties(account_id))
            .await?;
        let mapping: NameMapping = Arc::new(
            properties
                .into_iter()
                .map(|property| (property.id, property.name))
                .collect(),
        );
        self.store(key, &mapping);
        Ok(mapping)
    }

    /// Lists profiles (views) under one web property.
    pub async fn profiles(
        &self,
        settings: &DatasourceSettings,
        account_id: &str,
        web_property_id: &str,
    ) -> Result<NameMapping> {
        let key = format!(
            "{}:profiles:{account_id}:{web_property_id}",
            settings.cache_fingerprint()
        );
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }
        debug!(%key, "metadata cache miss");

        let client = self.build_client(settings).await?;
        let profiles = self
            .call_upstream(client.list_profiles(account_id, web_property_id))
            .await?;
        let mapping: NameMapping = Arc::new(
            profiles
                .into_iter()
                .map(|profile| (profile.id, profile.name))
                .collect(),
        );
        self.store(key, &mapping);
        Ok(mapping)
    }

    /// Drops every cached listing for the given configuration. Call when
    /// the datasource settings change.
    pub fn invalidate(&self, settings: &DatasourceSettings) {
        self.cache
            .invalidate_prefix(&format!("{}:", settings.cache_fingerprint()));
    }

    async fn build_client(
        &self,
        settings: &DatasourceSettings,
    ) -> Result<Arc<dyn AnalyticsClient>> {
        self.factory
            .build(settings)
            .await
            .map_err(DatasourceError::ClientConstruction)
    }

    /// Runs one upstream call on the caller's task. Dropping the caller's
    /// future cancels the call; a configured deadline additionally bounds
    /// it so a hung upstream cannot stall the requester.
    async fn call_upstream<T>(
        &self,
        call: impl Future<Output = anyhow::Result<T>>,
    ) -> Result<T> {
        let outcome = match self.config.upstream_timeout {
            Some(deadline) => match tokio::time::timeout(deadline, call).await {
                Ok(result) => result,
                Err(_) => Err(anyhow::anyhow!(
                    "upstream call exceeded {}s deadline",
                    deadline.as_secs()
                )),
            },
            None => call.await,
        };
        outcome.map_err(DatasourceError::Upstream)
    }

    fn store(&self, key: String, mapping: &NameMapping) {
        self.cache
            .insert(key, Arc::clone(mapping), self.config.account_ttl);
    }
}
