use kui_domain::rbac::{Provider, Role};
use std::collections::HashSet;

use super::{matching_roles, ExtractorKind, ProviderAuthorityExtractor, ProviderPrincipal};

const LOGIN_ATTRIBUTE: &str = "login";
/// 组织列表需要由OAuth2回调预先查询后放入载荷
pub const ORGANIZATIONS_ATTRIBUTE: &str = "organizations";

/// GitHub权限提取器
/// 支持按登录名（user）和组织（organization）绑定
#[derive(Debug, Default, Clone, Copy)]
pub struct GithubAuthorityExtractor;

impl ProviderAuthorityExtractor for GithubAuthorityExtractor {
    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Github
    }

    fn extract(&self, roles: &[Role], principal: &ProviderPrincipal) -> HashSet<String> {
        let login = principal.attribute_str(LOGIN_ATTRIBUTE);
        let organizations = principal.attribute_strings(ORGANIZATIONS_ATTRIBUTE);

        matching_roles(roles, &[Provider::OauthGithub], |subject| {
            if subject.is_type("user") {
                login.is_some_and(|login| subject.value.eq_ignore_ascii_case(login))
            } else if subject.is_type("organization") {
                organizations
                    .iter()
                    .any(|org| subject.value.eq_ignore_ascii_case(org))
            } else {
                false
            }
        })
    }
}
