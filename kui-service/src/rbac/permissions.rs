use kui_domain::rbac::{Resource, Role};
use serde::Serialize;

/// 用户在某些集群上拥有的一条权限
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermission {
    pub clusters: Vec<String>,
    pub resource: Resource,
    pub value: Option<String>,
    pub actions: Vec<String>,
}

/// 当前用户信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub username: String,
    pub permissions: Vec<UserPermission>,
}

/// 认证信息响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationInfo {
    pub rbac_enabled: bool,
    pub user_info: Option<UserInfo>,
}

impl UserPermission {
    pub(crate) fn from_role(role: &Role) -> impl Iterator<Item = UserPermission> + '_ {
        role.permissions().iter().map(move |permission| UserPermission {
            clusters: role.clusters().to_vec(),
            resource: permission.resource(),
            value: permission.value().map(str::to_string),
            actions: permission.actions().to_vec(),
        })
    }
}
