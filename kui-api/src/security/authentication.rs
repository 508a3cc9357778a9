use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::security::Exchange;

/// 认证后的用户信息
/// groups是用户所属的组（即可匹配的角色名称），永远不为null，默认为空集合
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub name: String,
    #[serde(default)]
    pub groups: HashSet<String>,
}

impl AuthenticatedUser {
    pub fn new<I, S>(name: impl Into<String>, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            groups: groups.into_iter().map(Into::into).collect(),
        }
    }

    /// 检查用户是否属于指定的组（大小写敏感）
    pub fn in_group(&self, group: &str) -> bool {
        self.groups.contains(group)
    }
}

/// 用户解析器trait
/// 从当前请求的安全上下文和Session中解析出已认证的用户
#[async_trait]
pub trait UserResolver: Send + Sync {
    /// 解析当前请求的用户
    ///
    /// # 返回
    /// - `Ok(Some(user))`: 已认证的用户
    /// - `Ok(None)`: 安全上下文中没有已认证的主体
    /// - `Err`: Session存储访问失败
    async fn get_user(
        &self,
        exchange: &Exchange,
    ) -> Result<Option<AuthenticatedUser>, Box<dyn std::error::Error + Send + Sync>>;
}
