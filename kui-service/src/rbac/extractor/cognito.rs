use kui_domain::rbac::{Provider, Role};
use std::collections::HashSet;

use super::{matching_roles, ExtractorKind, ProviderAuthorityExtractor, ProviderPrincipal};

/// Cognito用户组所在的claim
pub const COGNITO_GROUPS_CLAIM: &str = "cognito:groups";

/// AWS Cognito权限提取器
/// 支持按用户名（user）和Cognito用户组（group）绑定
#[derive(Debug, Default, Clone, Copy)]
pub struct CognitoAuthorityExtractor;

impl ProviderAuthorityExtractor for CognitoAuthorityExtractor {
    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Cognito
    }

    fn extract(&self, roles: &[Role], principal: &ProviderPrincipal) -> HashSet<String> {
        let groups = principal.attribute_strings(COGNITO_GROUPS_CLAIM);

        matching_roles(roles, &[Provider::OauthCognito], |subject| {
            if subject.is_type("user") {
                subject.value.eq_ignore_ascii_case(&principal.name)
            } else if subject.is_type("group") {
                groups.iter().any(|g| *g == subject.value)
            } else {
                false
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kui_domain::rbac::Subject;
    use serde_json::json;

    fn roles() -> Vec<Role> {
        vec![
            Role::new("by-user", vec![Subject::new(Provider::OauthCognito, "user", "Alice")], Vec::new(), Vec::new()).unwrap(),
            Role::new("by-group", vec![Subject::new(Provider::OauthCognito, "group", "admins")], Vec::new(), Vec::new()).unwrap(),
            Role::new("other-provider", vec![Subject::new(Provider::OauthGoogle, "user", "alice")], Vec::new(), Vec::new()).unwrap(),
        ]
    }

    #[test]
    fn test_extract_by_user_and_group() {
        let principal = ProviderPrincipal::new("alice")
            .with_attribute(COGNITO_GROUPS_CLAIM, json!(["admins", "devs"]));

        let groups = CognitoAuthorityExtractor.extract(&roles(), &principal);
        assert_eq!(groups, HashSet::from(["by-user".to_string(), "by-group".to_string()]));
    }

    #[test]
    fn test_group_match_is_case_sensitive() {
        let principal = ProviderPrincipal::new("bob")
            .with_attribute(COGNITO_GROUPS_CLAIM, json!(["Admins"]));

        assert!(CognitoAuthorityExtractor.extract(&roles(), &principal).is_empty());
    }
}
