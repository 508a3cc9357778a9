use kui_domain::rbac::InvariantViolation;
use thiserror::Error;

/// 访问控制错误
#[derive(Error, Debug)]
pub enum AccessControlError {
    /// 授权失败，终态结果，不重试
    #[error("Access denied")]
    AccessDenied,

    #[error("Invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),

    #[error("Failed to resolve user: {0}")]
    UserResolution(String),
}
