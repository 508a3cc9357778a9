use kui_domain::rbac::{RbacConfigError, RbacProperties, Role};
use std::sync::Arc;

use crate::rbac::Extractors;

/// RBAC启动结果
/// 由启动时的一次加载产生，之后不可变，可以在请求之间廉价克隆共享
#[derive(Debug, Clone, Default)]
pub struct RbacState {
    enabled: bool,
    roles: Arc<Vec<Role>>,
    extractors: Extractors,
}

impl RbacState {
    /// 禁用状态：所有检查直接放行
    pub fn disabled() -> Self {
        Self::default()
    }

    /// 从配置加载角色
    ///
    /// # 参数
    /// - `properties`: `rbac`配置节
    /// - `auth_mechanisms`: 已注册的认证方式（例如oauth2、ldap）
    pub fn load(properties: RbacProperties, auth_mechanisms: &[String]) -> Result<Self, RbacConfigError> {
        let roles = properties.into_roles()?;
        Ok(Self::from_roles(roles, !auth_mechanisms.is_empty()))
    }

    pub fn from_roles(roles: Vec<Role>, has_auth_mechanisms: bool) -> Self {
        if roles.is_empty() {
            tracing::trace!("No roles provided, disabling RBAC");
            return Self::disabled();
        }

        let extractors = Extractors::from_roles(&roles);

        if !has_auth_mechanisms {
            tracing::error!("Roles are configured but no authentication methods are present. Authentication might fail.");
        }

        tracing::info!(
            roles = roles.len(),
            extractors = ?extractors.kinds(),
            "RBAC enabled"
        );

        Self {
            enabled: true,
            roles: Arc::new(roles),
            extractors,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn extractors(&self) -> &Extractors {
        &self.extractors
    }
}
