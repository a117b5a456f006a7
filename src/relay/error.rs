use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("no satellites provided")]
    EmptySelection,
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),
    #[error("malformed upstream response: {0}")]
    Malformed(String),
    #[error("fetch task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
