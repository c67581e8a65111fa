use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Missing or invalid credentials/index name. Fatal: the process
    /// should not proceed to accept queries.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// The service rejected the request (malformed filter, unsupported
    /// mode/filter combination). User-visible, never retried here.
    #[error("Query rejected: {0}")]
    Query(String),

    /// Network or service unavailability. Retrying is caller policy.
    #[error("Service unavailable: {0}")]
    Transient(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
