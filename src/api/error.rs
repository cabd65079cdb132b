use reqwest::StatusCode;
use thiserror::Error;

/// Login or logout failure.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("platform rejected the credentials (status {0})")]
    Rejected(StatusCode),

    #[error("login response carried no session token")]
    MissingToken,

    #[error("transport failure during authentication: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Status-check failure.
#[derive(Debug, Error)]
pub enum ConnectivityError {
    #[error("platform status endpoint answered {0}")]
    UnexpectedStatus(StatusCode),

    #[error("could not reach the platform: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Data-block upload failure.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("platform rejected the upload (status {0})")]
    Rejected(StatusCode),

    #[error("transport failure during upload: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Query failure.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("platform rejected the query (status {0})")]
    Rejected(StatusCode),

    #[error("query result was not a JSON array: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("transport failure during query: {0}")]
    Transport(#[from] reqwest::Error),
}
