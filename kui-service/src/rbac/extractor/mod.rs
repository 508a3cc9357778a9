pub mod cognito;
pub mod github;
pub mod google;
pub mod ldap;

use kui_domain::rbac::{Provider, Role, Subject};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

pub use cognito::CognitoAuthorityExtractor;
pub use github::GithubAuthorityExtractor;
pub use google::GoogleAuthorityExtractor;
pub use ldap::LdapAuthorityExtractor;

/// 身份提供者认证成功后的载荷
/// 协议交互（OAuth2/LDAP）由外部完成，这里只接收已经验证过的结果
#[derive(Debug, Clone, Default)]
pub struct ProviderPrincipal {
    pub name: String,
    /// OAuth2用户属性（claims）
    pub attributes: HashMap<String, Value>,
    /// LDAP授予的权限（组）
    pub authorities: Vec<String>,
}

impl ProviderPrincipal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    pub fn with_authorities<I, S>(mut self, authorities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authorities.extend(authorities.into_iter().map(Into::into));
        self
    }

    pub fn attribute_str(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(Value::as_str)
    }

    /// 读取字符串列表属性，单个字符串视为只有一个元素的列表
    pub fn attribute_strings(&self, name: &str) -> Vec<String> {
        match self.attributes.get(name) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            Some(Value::String(item)) => vec![item.clone()],
            _ => Vec::new(),
        }
    }
}

/// 身份提供者权限提取器
/// 无状态，可以在所有请求之间共享
pub trait ProviderAuthorityExtractor: Send + Sync + fmt::Debug {
    fn kind(&self) -> ExtractorKind;

    fn is_applicable(&self, provider: Provider) -> bool {
        ExtractorKind::for_provider(provider) == self.kind()
    }

    /// 返回用户所属角色的名称（即用户组）
    fn extract(&self, roles: &[Role], principal: &ProviderPrincipal) -> HashSet<String>;
}

/// 提取器类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorKind {
    Cognito,
    Google,
    Github,
    Ldap,
}

impl ExtractorKind {
    /// 两种LDAP变体共用一个提取器，三种OAuth2提供者各有一个
    pub fn for_provider(provider: Provider) -> Self {
        match provider {
            Provider::OauthCognito => ExtractorKind::Cognito,
            Provider::OauthGoogle => ExtractorKind::Google,
            Provider::OauthGithub => ExtractorKind::Github,
            Provider::Ldap | Provider::LdapAd => ExtractorKind::Ldap,
        }
    }

    fn create(self) -> Arc<dyn ProviderAuthorityExtractor> {
        match self {
            ExtractorKind::Cognito => Arc::new(CognitoAuthorityExtractor),
            ExtractorKind::Google => Arc::new(GoogleAuthorityExtractor),
            ExtractorKind::Github => Arc::new(GithubAuthorityExtractor),
            ExtractorKind::Ldap => Arc::new(LdapAuthorityExtractor),
        }
    }
}

/// 当前生效的提取器集合
/// 启动时根据角色的subject一次性构建，之后只读
#[derive(Debug, Clone, Default)]
pub struct Extractors {
    by_kind: BTreeMap<ExtractorKind, Arc<dyn ProviderAuthorityExtractor>>,
}

impl Extractors {
    pub fn from_roles(roles: &[Role]) -> Self {
        let mut by_kind = BTreeMap::new();
        for subject in roles.iter().flat_map(|role| role.subjects()) {
            let kind = ExtractorKind::for_provider(subject.provider);
            by_kind.entry(kind).or_insert_with(|| kind.create());
        }
        Self { by_kind }
    }

    pub fn for_provider(&self, provider: Provider) -> Option<&Arc<dyn ProviderAuthorityExtractor>> {
        self.by_kind.get(&ExtractorKind::for_provider(provider))
    }

    pub fn kinds(&self) -> Vec<ExtractorKind> {
        self.by_kind.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.by_kind.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_kind.is_empty()
    }
}

/// 收集有subject满足条件的角色名称，只考虑指定提供者的subject
pub(crate) fn matching_roles<F>(roles: &[Role], providers: &[Provider], matches: F) -> HashSet<String>
where
    F: Fn(&Subject) -> bool,
{
    roles
        .iter()
        .filter(|role| {
            role.subjects()
                .iter()
                .filter(|subject| providers.contains(&subject.provider))
                .any(&matches)
        })
        .map(|role| role.name().to_string())
        .collect()
}
