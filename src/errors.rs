use std::time::Duration;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Cli(String),

    #[error("failed to load private key {path}: {reason}")]
    KeyLoad { path: String, reason: String },

    #[error("failed to sign app JWT: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("github token exchange failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("failed to decode github response: {0}")]
    ResponseDecode(#[source] reqwest::Error),

    #[error("unexpected token in github response: {0}")]
    UnexpectedToken(String),

    #[error("kubernetes error: {0}")]
    Kube(#[from] kube::Error),

    #[error("failed to read secret {name}: {source}")]
    SecretRead {
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("failed to write secret {name}: {source}")]
    SecretWrite {
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("run did not complete within {0:?}")]
    DeadlineExceeded(Duration),
}

impl AppError {
    /// Usage errors exit 2, everything else exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Cli(_) => 2,
            _ => 1,
        }
    }
}
