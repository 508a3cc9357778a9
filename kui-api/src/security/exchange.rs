use std::collections::HashSet;

/// 安全上下文
/// 由认证层填充，持有当前请求的主体名称，以及已经从Session读出的用户组
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityContext {
    pub principal: Option<String>,
    /// None表示用户组尚未加载
    pub groups: Option<HashSet<String>>,
}

impl SecurityContext {
    pub fn authenticated(principal: impl Into<String>) -> Self {
        Self {
            principal: Some(principal.into()),
            groups: None,
        }
    }

    pub fn with_groups(mut self, groups: HashSet<String>) -> Self {
        self.groups = Some(groups);
        self
    }
}

/// 请求交换信息
/// 每个请求一份，包含安全上下文和Session ID，不会在请求之间共享
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exchange {
    pub security_context: SecurityContext,
    pub session_id: Option<String>,
}

impl Exchange {
    pub fn new(security_context: SecurityContext, session_id: Option<String>) -> Self {
        Self {
            security_context,
            session_id,
        }
    }

    /// 未认证的请求
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn principal_name(&self) -> Option<&str> {
        self.security_context.principal.as_deref()
    }
}
