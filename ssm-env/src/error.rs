use std::{io, path::PathBuf};

use thiserror::Error;

use crate::store::repository::StoreError;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("invalid parameter name: {0}")]
    InvalidParameterName(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("parameter not found: {0}")]
    NotFound(String),

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("malformed value in parameter '{parameter}': {reason}")]
    MalformedValue { parameter: String, reason: String },

    #[error("failed to write '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parameter store unavailable: {0}")]
    StoreUnavailable(String),
}

impl ExportError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidParameterName(_) => "InvalidParameterName",
            Self::Authentication(_) => "AuthenticationError",
            Self::NotFound(_) => "NotFoundError",
            Self::AccessDenied(_) => "AccessDeniedError",
            Self::MalformedValue { .. } => "MalformedValueError",
            Self::Io { .. } => "IOError",
            Self::StoreUnavailable(_) => "StoreUnavailable",
        }
    }
}

impl From<StoreError> for ExportError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AuthenticationFailed(msg) => Self::Authentication(msg),
            StoreError::ParameterNotFound(msg) => Self::NotFound(msg),
            StoreError::AccessDenied(msg) => Self::AccessDenied(msg),
            StoreError::Unavailable(msg) => Self::StoreUnavailable(msg),
        }
    }
}
