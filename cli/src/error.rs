use std::path::PathBuf;

use contract::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("session expired; run `smc-admin login`")]
    SessionExpired,
    #[error("{0}")]
    Api(ApiError),
    #[error("invalid API URL: {0}")]
    InvalidApiUrl(String),
    #[error("http client setup failed: {0}")]
    Client(#[from] reqwest::Error),
    #[error("session file {}: {source}", path.display())]
    SessionIo { path: PathBuf, source: std::io::Error },
    #[error("session file {} is not valid JSON: {source}", path.display())]
    SessionFormat { path: PathBuf, source: serde_json::Error },
    #[error("missing password; pass --password or set SMC_ADMIN_PASSWORD")]
    MissingPassword,
    #[error("{0}")]
    Usage(String),
    #[error("failed to write {}: {source}", path.display())]
    Output { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized { .. } | ApiError::Http { status: 401 } => Self::SessionExpired,
            other => Self::Api(other),
        }
    }
}
