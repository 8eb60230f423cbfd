//! End-to-end shape of one dashboard request: normalize the payload, hand
//! the model to a client, type the returned columns.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gaquery::client::{
    AccountSummary, AnalyticsClient, ProfileSummary, Report, ReportColumnHeader,
    WebPropertySummary,
};
use gaquery::models::{ColumnType, QueryModel, GA_REPORT_MAX_RESULT};
use gaquery::query::normalize_query;
use gaquery::time::TimeRange;
use pretty_assertions::assert_eq;

struct FixtureClient;

#[async_trait]
impl AnalyticsClient for FixtureClient {
    async fn list_accounts(&self) -> anyhow::Result<Vec<AccountSummary>> {
        Ok(Vec::new())
    }

    async fn list_web_properties(&self, _: &str) -> anyhow::Result<Vec<WebPropertySummary>> {
        Ok(Vec::new())
    }

    async fn list_profiles(&self, _: &str, _: &str) -> anyhow::Result<Vec<ProfileSummary>> {
        Ok(Vec::new())
    }

    async fn run_report(&self, query: &QueryModel) -> anyhow::Result<Report> {
        anyhow::ensure!(query.page_size > 0, "page size must be positive");
        let mut headers: Vec<ReportColumnHeader> = query
            .dimensions
            .iter()
            .map(|name| ReportColumnHeader {
                name: name.clone(),
                column_type: "DIMENSION".into(),
                data_type: if name == "ga:date" { "TIME" } else { "STRING" }.into(),
            })
            .collect();
        headers.extend(query.metrics.iter().map(|name| ReportColumnHeader {
            name: name.clone(),
            column_type: "METRIC".into(),
            data_type: "INTEGER".into(),
        }));
        Ok(Report {
            column_headers: headers,
            rows: vec![vec![
                format!("{}0105", &query.start_date[..4]),
                "Iceland".into(),
                "42".into(),
            ]],
            next_page_token: None,
            total_results: Some(1),
        })
    }
}

#[tokio::test]
async fn normalized_query_yields_typed_columns() {
    let window = TimeRange {
        start: DateTime::parse_from_rfc3339("2023-01-05T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc),
        end: DateTime::parse_from_rfc3339("2023-01-07T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc),
    };
    let payload = serde_json::json!({
        "profileId": "99",
        "refId": "A",
        "timezone": "UTC",
        "dimensions": ["ga:date", "ga:country"],
        "metrics": ["ga:sessions"]
    });

    let model = normalize_query(&payload, &window).unwrap();
    assert_eq!(model.start_date, "2023-01-05");
    assert_eq!(model.page_size, GA_REPORT_MAX_RESULT);

    let report = FixtureClient.run_report(&model).await.unwrap();
    let columns = report.column_definitions();

    let kinds: Vec<ColumnType> = columns.iter().map(|c| c.column_type()).collect();
    assert_eq!(
        kinds,
        vec![ColumnType::Time, ColumnType::String, ColumnType::Number]
    );
    let headers: Vec<&str> = columns.iter().map(|c| c.header.as_str()).collect();
    assert_eq!(headers, vec!["ga:date", "ga:country", "ga:sessions"]);
    assert_eq!(report.rows.len(), 1);
}
