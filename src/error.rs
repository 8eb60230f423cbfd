use thiserror::Error;

pub type Result<T> = std::result::Result<T, DatasourceError>;

/// Errors surfaced to the host. None of these are retried internally; a
/// query that fails normalization never reaches the upstream service.
#[derive(Debug, Error)]
pub enum DatasourceError {
    #[error("error reading query: {0}")]
    Parse(String),

    #[error("unknown timezone '{0}'")]
    Timezone(String),

    #[error("failed to create Google API client: {0}")]
    ClientConstruction(anyhow::Error),

    #[error(transparent)]
    Upstream(anyhow::Error),
}

impl DatasourceError {
    /// True when the request itself is at fault and resubmitting it
    /// unchanged cannot succeed.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Timezone(_))
    }
}
