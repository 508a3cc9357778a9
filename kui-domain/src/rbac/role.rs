use kui_api::security::AuthenticatedUser;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::rbac::{Permission, RbacConfigError};

/// 身份提供者类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Provider {
    OauthGoogle,
    OauthGithub,
    OauthCognito,
    Ldap,
    LdapAd,
}

impl Provider {
    pub const ALL: [Provider; 5] = [
        Provider::OauthGoogle,
        Provider::OauthGithub,
        Provider::OauthCognito,
        Provider::Ldap,
        Provider::LdapAd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OauthGoogle => "OAUTH_GOOGLE",
            Provider::OauthGithub => "OAUTH_GITHUB",
            Provider::OauthCognito => "OAUTH_COGNITO",
            Provider::Ldap => "LDAP",
            Provider::LdapAd => "LDAP_AD",
        }
    }
}

impl FromStr for Provider {
    type Err = RbacConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RbacConfigError::UnknownProvider(s.to_string()))
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Provider {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Subject把角色绑定到身份提供者中的用户、组或域
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub provider: Provider,
    /// 绑定类型，如 user / group / domain / organization
    pub subject_type: String,
    pub value: String,
}

impl Subject {
    pub fn new(provider: Provider, subject_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            provider,
            subject_type: subject_type.into(),
            value: value.into(),
        }
    }

    /// 检查绑定类型（大小写不敏感）
    pub fn is_type(&self, subject_type: &str) -> bool {
        self.subject_type.eq_ignore_ascii_case(subject_type)
    }
}

/// Role实体
/// 启动时从配置加载，之后在整个进程生命周期内只读
#[derive(Debug, Clone)]
pub struct Role {
    name: String,
    subjects: Vec<Subject>,
    clusters: Vec<String>,
    permissions: Vec<Permission>,
}

impl Role {
    pub fn new(
        name: impl Into<String>,
        subjects: Vec<Subject>,
        clusters: Vec<String>,
        permissions: Vec<Permission>,
    ) -> Result<Self, RbacConfigError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RbacConfigError::EmptyRoleName);
        }
        Ok(Self {
            name,
            subjects,
            clusters,
            permissions,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn clusters(&self) -> &[String] {
        &self.clusters
    }

    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    /// 用户的组中包含角色名称时，角色才对用户生效（大小写敏感）
    pub fn is_granted_to(&self, user: &AuthenticatedUser) -> bool {
        user.in_group(&self.name)
    }

    /// 检查角色是否适用于指定集群（大小写不敏感）
    pub fn applies_to_cluster(&self, cluster: &str) -> bool {
        let cluster = cluster.to_lowercase();
        self.clusters.iter().any(|c| c.to_lowercase() == cluster)
    }
}
