use serde::{Deserialize, Serialize};

use crate::rbac::{Permission, Provider, RbacConfigError, Resource, Role, Subject};

/// 基于角色的访问控制配置（`rbac`配置节）
/// 角色列表为空时整个RBAC引擎被禁用
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RbacProperties {
    #[serde(default)]
    pub roles: Vec<RoleDefinition>,
}

/// 配置中的角色定义
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleDefinition {
    pub name: String,
    #[serde(default)]
    pub subjects: Vec<SubjectDefinition>,
    #[serde(default)]
    pub clusters: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<PermissionDefinition>,
}

/// 配置中的Subject定义
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectDefinition {
    pub provider: String,
    #[serde(rename = "type")]
    pub subject_type: String,
    pub value: String,
}

/// 配置中的权限定义
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionDefinition {
    pub resource: String,
    /// 值匹配正则表达式，缺省表示匹配任意值
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub actions: Vec<String>,
}

impl RbacProperties {
    /// 校验并编译所有角色，保持配置中的顺序
    pub fn into_roles(self) -> Result<Vec<Role>, RbacConfigError> {
        self.roles.into_iter().map(Role::try_from).collect()
    }
}

impl TryFrom<SubjectDefinition> for Subject {
    type Error = RbacConfigError;

    fn try_from(def: SubjectDefinition) -> Result<Self, Self::Error> {
        let provider: Provider = def.provider.parse()?;
        Ok(Subject::new(provider, def.subject_type, def.value))
    }
}

impl TryFrom<PermissionDefinition> for Permission {
    type Error = RbacConfigError;

    fn try_from(def: PermissionDefinition) -> Result<Self, Self::Error> {
        let resource: Resource = def.resource.parse()?;
        Permission::new(resource, def.value.as_deref(), &def.actions)
    }
}

impl TryFrom<RoleDefinition> for Role {
    type Error = RbacConfigError;

    fn try_from(def: RoleDefinition) -> Result<Self, Self::Error> {
        let subjects = def
            .subjects
            .into_iter()
            .map(Subject::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let permissions = def
            .permissions
            .into_iter()
            .map(Permission::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Role::new(def.name, subjects, def.clusters, permissions)
    }
}
