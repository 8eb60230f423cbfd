//! Backend query layer for the Google Analytics dashboard datasource:
//! normalizes inbound dashboard queries into timezone-resolved report
//! requests, types result columns for tabular rendering, and caches
//! account metadata listings.

pub mod accounts;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod telemetry;
pub mod time;
