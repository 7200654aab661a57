use elasticsearch::http::{transport::BuildError, StatusCode};
use thiserror::Error;

/// Type reported by the cluster when an index does not exist.
pub const INDEX_NOT_FOUND: &str = "index_not_found_exception";

#[derive(Debug, Error)]
pub enum ElasticsearchError {
    #[error("invalid Elasticsearch URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("failed to build transport: {0}")]
    TransportBuild(#[from] BuildError),
    #[error("transport error: {0}")]
    Transport(#[from] elasticsearch::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Elasticsearch returned {status} [{error_type}]: {reason}")]
    Status {
        status: StatusCode,
        error_type: String,
        reason: String,
    },
    #[error("Elasticsearch health check failed with status {0}")]
    HealthCheck(StatusCode),
}

impl ElasticsearchError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ElasticsearchError::Status { status, .. } | ElasticsearchError::HealthCheck(status) => {
                Some(*status)
            }
            ElasticsearchError::Transport(err) => err.status_code(),
            _ => None,
        }
    }

    /// True when the cluster rejected the request because the index is missing.
    pub fn is_index_not_found(&self) -> bool {
        match self {
            ElasticsearchError::Status {
                status, error_type, ..
            } => *status == StatusCode::NOT_FOUND && error_type == INDEX_NOT_FOUND,
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
    #[error("ELASTICSEARCH_USERNAME and ELASTICSEARCH_PASSWORD must be set together")]
    PartialCredentials,
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("search backend error: {0}")]
    Search(#[from] ElasticsearchError),
    #[error("step `{step}` expected {expected}, got {actual}")]
    Mismatch {
        step: &'static str,
        expected: String,
        actual: String,
    },
}
