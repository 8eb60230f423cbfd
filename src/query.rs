//! Query normalization: raw dashboard payload + absolute time window in,
//! validated timezone-resolved [`QueryModel`] out.

use crate::{
    error::{DatasourceError, Result},
    models::{QueryModel, RawQuery},
    time::{local_date, resolve_timezone, TimeRange},
};
use tracing::debug;

/// Builds the normalized query model for one inbound request.
///
/// Merge semantics are structural, not value-based: the model starts from
/// [`QueryModel::default`] and only fields present in the payload overlay
/// it, so an explicit `"pageSize": 0` overrides the default while an absent
/// `pageSize` keeps it. The start/end dates are always recomputed from the
/// caller's time window in the query's timezone; payload-supplied dates
/// never survive.
pub fn normalize_query(payload: &serde_json::Value, window: &TimeRange) -> Result<QueryModel> {
    let raw: RawQuery = serde_json::from_value(payload.clone())
        .map_err(|err| DatasourceError::Parse(err.to_string()))?;
    normalize_raw(raw, window)
}

/// Same as [`normalize_query`] for hosts that hand over the raw JSON bytes.
pub fn normalize_query_bytes(payload: &[u8], window: &TimeRange) -> Result<QueryModel> {
    let raw: RawQuery =
        serde_json::from_slice(payload).map_err(|err| DatasourceError::Parse(err.to_string()))?;
    normalize_raw(raw, window)
}

fn normalize_raw(raw: RawQuery, window: &TimeRange) -> Result<QueryModel> {
    let mut model = QueryModel::default();

    if let Some(account_id) = raw.account_id {
        model.account_id = account_id;
    }
    if let Some(web_property_id) = raw.web_property_id {
        model.web_property_id = web_property_id;
    }
    if let Some(profile_id) = raw.profile_id {
        model.profile_id = profile_id;
    }
    if let Some(start_date) = raw.start_date {
        model.start_date = start_date;
    }
    if let Some(end_date) = raw.end_date {
        model.end_date = end_date;
    }
    if let Some(ref_id) = raw.ref_id {
        model.ref_id = ref_id;
    }
    if let Some(metrics) = raw.metrics {
        model.metrics = metrics;
    }
    if let Some(dimensions) = raw.dimensions {
        model.dimensions = dimensions;
    }
    if let Some(page_size) = raw.page_size {
        model.page_size = page_size;
    }
    if let Some(page_token) = raw.page_token {
        model.page_token = page_token;
    }
    if let Some(use_nextpage) = raw.use_nextpage {
        model.use_nextpage = use_nextpage;
    }
    if let Some(timezone) = raw.timezone {
        model.timezone = timezone;
    }

    let tz = resolve_timezone(&model.timezone)?;
    debug!(timezone = %tz, ref_id = %model.ref_id, "resolved query timezone");

    model.start_date = local_date(window.start, tz);
    model.end_date = local_date(window.end, tz);

    Ok(model)
}
