use std::fmt;

use crate::domain::{Parameter, ParameterName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    AuthenticationFailed(String),
    ParameterNotFound(String),
    AccessDenied(String),
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AuthenticationFailed(msg) => write!(f, "Authentication failed: {}", msg),
            Self::ParameterNotFound(msg) => write!(f, "Parameter not found: {}", msg),
            Self::AccessDenied(msg) => write!(f, "Access denied: {}", msg),
            Self::Unavailable(msg) => write!(f, "Store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Read-only access to a parameter store
#[async_trait::async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetches `name` as given. A bare name resolves to the current value; a
    /// `:version` or `:label` selector in the name is passed through to the store.
    async fn get_parameter(&self, name: &ParameterName) -> Result<Parameter, StoreError>;
}
