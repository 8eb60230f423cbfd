//! Upstream analytics client capabilities, modeled as injected traits so the
//! network client stays outside this crate. Implementations speak
//! `anyhow::Error` at the seam; [`crate::accounts`] maps those into the
//! datasource error taxonomy.

use crate::config::DatasourceSettings;
use crate::models::{ColumnDefinition, QueryModel};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

/// One account as returned by the management API. Anything beyond the id
/// and display name is dropped before caching.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountSummary {
    pub id: String,
    pub name: String,
}

/// One web property under an account.
#[derive(Debug, Clone, Deserialize)]
pub struct WebPropertySummary {
    pub id: String,
    pub name: String,
}

/// One profile (view) under a web property.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileSummary {
    pub id: String,
    pub name: String,
}

/// Column header as declared by the reporting API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportColumnHeader {
    pub name: String,
    /// DIMENSION or METRIC; carried through for the rendering layer.
    pub column_type: String,
    /// Declared value type (INTEGER, FLOAT, TIME, ...); input to the
    /// semantic column classifier.
    pub data_type: String,
}

/// One page of report data returned for a normalized query.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Report {
    pub column_headers: Vec<ReportColumnHeader>,
    pub rows: Vec<Vec<String>>,
    pub next_page_token: Option<String>,
    pub total_results: Option<i64>,
}

impl Report {
    /// Classifies every header, preserving column order.
    pub fn column_definitions(&self) -> Vec<ColumnDefinition> {
        self.column_headers
            .iter()
            .enumerate()
            .map(|(index, header)| ColumnDefinition::new(&header.name, index, &header.data_type))
            .collect()
    }
}

/// A client scoped to one datasource configuration. Calls run on the
/// caller's task; dropping the caller's future cancels them.
#[async_trait]
pub trait AnalyticsClient: Send + Sync {
    async fn list_accounts(&self) -> anyhow::Result<Vec<AccountSummary>>;

    async fn list_web_properties(
        &self,
        account_id: &str,
    ) -> anyhow::Result<Vec<WebPropertySummary>>;

    async fn list_profiles(
        &self,
        account_id: &str,
        web_property_id: &str,
    ) -> anyhow::Result<Vec<ProfileSummary>>;

    async fn run_report(&self, query: &QueryModel) -> anyhow::Result<Report>;
}

/// Builds a client from datasource settings. Construction validates the
/// credential shape, so a failure here means the configuration is bad.
#[async_trait]
pub trait ClientFactory: Send + Sync {
    async fn build(
        &self,
        settings: &DatasourceSettings,
    ) -> anyhow::Result<Arc<dyn AnalyticsClient>>;
}
