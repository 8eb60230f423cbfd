use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    hash::{Hash, Hasher},
    time::Duration,
};

/// How long a cached metadata listing stays valid unless overridden via
/// `GA_ACCOUNT_CACHE_TTL_SECS` or [`CacheConfig`].
pub const DEFAULT_ACCOUNT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Authentication scheme configured on the datasource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoogleAuthType {
    #[default]
    Key,
    Jwt,
}

/// Per-datasource configuration supplied by the host when a data source is
/// provisioned. Secure fields arrive already decrypted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatasourceSettings {
    pub auth_type: GoogleAuthType,
    pub api_key: Option<String>,
    pub jwt: Option<String>,
    pub default_profile_id: Option<String>,
}

impl DatasourceSettings {
    /// Cache key component derived from credential identity only. Transient
    /// per-request state (deadlines, ref ids) must never feed this, or two
    /// requests against the same datasource would miss each other's entries.
    pub fn cache_fingerprint(&self) -> String {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.auth_type.hash(&mut hasher);
        self.api_key.hash(&mut hasher);
        self.jwt.hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }
}

/// Process-wide cache tuning, read from `GA_*` environment variables.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub account_ttl: Duration,
    pub upstream_timeout: Option<Duration>,
}

#[derive(Debug, Deserialize)]
struct RawCacheConfig {
    #[serde(default = "default_account_ttl_secs")]
    ga_account_cache_ttl_secs: u64,
    #[serde(default)]
    ga_upstream_timeout_secs: Option<u64>,
}

const fn default_account_ttl_secs() -> u64 {
    300
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            account_ttl: DEFAULT_ACCOUNT_CACHE_TTL,
            upstream_timeout: None,
        }
    }
}

impl CacheConfig {
    pub fn from_env() -> Result<Self> {
        let raw: RawCacheConfig =
            envy::from_env().context("failed to parse GA_* environment variables")?;

        Ok(Self {
            account_ttl: Duration::from_secs(raw.ga_account_cache_ttl_secs.max(1)),
            upstream_timeout: raw.ga_upstream_timeout_secs.map(Duration::from_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_for_identical_settings() {
        let a = DatasourceSettings {
            auth_type: GoogleAuthType::Key,
            api_key: Some("k-123".into()),
            jwt: None,
            default_profile_id: Some("p-1".into()),
        };
        let mut b = a.clone();
        assert_eq!(a.cache_fingerprint(), b.cache_fingerprint());

        // Transient-ish fields do not participate.
        b.default_profile_id = Some("p-2".into());
        assert_eq!(a.cache_fingerprint(), b.cache_fingerprint());
    }

    #[test]
    fn fingerprint_tracks_credential_identity() {
        let key = DatasourceSettings {
            api_key: Some("k-123".into()),
            ..DatasourceSettings::default()
        };
        let other_key = DatasourceSettings {
            api_key: Some("k-456".into()),
            ..DatasourceSettings::default()
        };
        let jwt = DatasourceSettings {
            auth_type: GoogleAuthType::Jwt,
            jwt: Some("{\"client_email\":\"svc@example\"}".into()),
            ..DatasourceSettings::default()
        };
        assert_ne!(key.cache_fingerprint(), other_key.cache_fingerprint());
        assert_ne!(key.cache_fingerprint(), jwt.cache_fingerprint());
    }

    #[test]
    fn settings_deserialize_from_host_json() {
        let settings: DatasourceSettings = serde_json::from_value(serde_json::json!({
            "authType": "jwt",
            "jwt": "{}",
            "defaultProfileId": "12345"
        }))
        .unwrap();
        assert_eq!(settings.auth_type, GoogleAuthType::Jwt);
        assert_eq!(settings.default_profile_id.as_deref(), Some("12345"));
        assert!(settings.api_key.is_none());
    }
}
