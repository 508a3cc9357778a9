use thiserror::Error;

use crate::rbac::Resource;

/// 加载角色配置时的错误
/// 配置无效时进程拒绝启动
#[derive(Error, Debug)]
pub enum RbacConfigError {
    #[error("role name must not be empty")]
    EmptyRoleName,

    #[error("unknown resource: {0}")]
    UnknownResource(String),

    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    #[error("unknown action {action} for resource {resource}")]
    UnknownAction { resource: Resource, action: String },

    #[error("invalid value pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// 调用方构造上下文时违反前置条件
/// 这是编程错误，必须快速失败，不能被当作允许或拒绝处理
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("cluster value is empty")]
    EmptyCluster,

    #[error("{0} actions are empty")]
    ActionsNotPresent(Resource),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RbacConfigError::UnknownAction {
            resource: Resource::Topic,
            action: "FLY".to_string(),
        };
        assert_eq!(err.to_string(), "unknown action FLY for resource TOPIC");

        let err = InvariantViolation::ActionsNotPresent(Resource::Schema);
        assert_eq!(err.to_string(), "SCHEMA actions are empty");
        assert_eq!(InvariantViolation::EmptyCluster.to_string(), "cluster value is empty");
    }
}
