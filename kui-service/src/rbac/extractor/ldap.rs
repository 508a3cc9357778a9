use kui_domain::rbac::{Provider, Role};
use std::collections::HashSet;

use super::{matching_roles, ExtractorKind, ProviderAuthorityExtractor, ProviderPrincipal};

/// LDAP / Active Directory权限提取器
/// 按LDAP组（group）绑定，组名大小写敏感
#[derive(Debug, Default, Clone, Copy)]
pub struct LdapAuthorityExtractor;

impl ProviderAuthorityExtractor for LdapAuthorityExtractor {
    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Ldap
    }

    fn extract(&self, roles: &[Role], principal: &ProviderPrincipal) -> HashSet<String> {
        matching_roles(roles, &[Provider::Ldap, Provider::LdapAd], |subject| {
            subject.is_type("group") && principal.authorities.iter().any(|a| *a == subject.value)
        })
    }
}
