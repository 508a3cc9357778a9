use kui_domain::rbac::RbacConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KuiError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("RBAC configuration error: {0}")]
    Rbac(#[from] RbacConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for KuiError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        KuiError::Internal(err.to_string())
    }
}

impl From<&str> for KuiError {
    fn from(err: &str) -> Self {
        KuiError::Internal(err.to_string())
    }
}

impl From<String> for KuiError {
    fn from(err: String) -> Self {
        KuiError::Internal(err)
    }
}

pub type Result<T> = std::result::Result<T, KuiError>;
