//! Data models for dashboard queries and typed report columns.

use serde::{Deserialize, Serialize};

/// Maximum page size the reporting API accepts; also the default when the
/// dashboard leaves `pageSize` unset.
pub const GA_REPORT_MAX_RESULT: i64 = 10_000;

/// Raw query payload as sent by the dashboard. Every field is optional so
/// that an absent field can be told apart from an explicitly empty or zero
/// one; the merge onto defaults happens in [`crate::query::normalize_query`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawQuery {
    pub account_id: Option<String>,
    pub web_property_id: Option<String>,
    pub profile_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub ref_id: Option<String>,
    pub metrics: Option<Vec<String>>,
    pub dimensions: Option<Vec<String>>,
    pub page_size: Option<i64>,
    pub page_token: Option<String>,
    pub use_nextpage: Option<bool>,
    pub timezone: Option<String>,
}

/// Fully normalized report request, immutable once built. Metric and
/// dimension order is preserved verbatim; it decides report column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryModel {
    pub account_id: String,
    pub web_property_id: String,
    pub profile_id: String,
    pub start_date: String,
    pub end_date: String,
    pub ref_id: String,
    pub metrics: Vec<String>,
    pub dimensions: Vec<String>,
    pub page_size: i64,
    pub page_token: String,
    pub use_nextpage: bool,
    pub timezone: String,
}

impl Default for QueryModel {
    fn default() -> Self {
        Self {
            account_id: String::new(),
            web_property_id: String::new(),
            profile_id: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            ref_id: String::new(),
            metrics: Vec::new(),
            dimensions: Vec::new(),
            page_size: GA_REPORT_MAX_RESULT,
            page_token: String::new(),
            use_nextpage: true,
            timezone: String::new(),
        }
    }
}

/// Semantic type of a result column, used by the rendering layer to pick a
/// field format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    Time,
    Number,
    String,
}

impl ColumnType {
    /// Maps an upstream-declared data type label onto a semantic type.
    /// Total over all strings: labels not listed here render as text, so a
    /// new upstream label degrades to STRING until it is added explicitly.
    pub fn from_data_type(data_type: &str) -> Self {
        match data_type {
            "INTEGER" | "FLOAT" | "CURRENCY" | "PERCENT" => ColumnType::Number,
            "TIME" => ColumnType::Time,
            _ => ColumnType::String,
        }
    }
}

/// One result column's identity and semantic type. The type is computed at
/// construction from the upstream label and cannot be set to anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub header: String,
    pub column_index: usize,
    column_type: ColumnType,
}

impl ColumnDefinition {
    pub fn new(header: &str, index: usize, data_type: &str) -> Self {
        Self {
            header: header.to_string(),
            column_index: index,
            column_type: ColumnType::from_data_type(data_type),
        }
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }
}
