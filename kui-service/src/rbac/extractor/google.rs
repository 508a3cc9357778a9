use kui_domain::rbac::{Provider, Role};
use std::collections::HashSet;

use super::{matching_roles, ExtractorKind, ProviderAuthorityExtractor, ProviderPrincipal};

const EMAIL_ATTRIBUTE: &str = "email";
/// Google Workspace的托管域
const DOMAIN_ATTRIBUTE: &str = "hd";

/// Google权限提取器
/// 支持按邮箱（user）和托管域（domain）绑定
#[derive(Debug, Default, Clone, Copy)]
pub struct GoogleAuthorityExtractor;

impl ProviderAuthorityExtractor for GoogleAuthorityExtractor {
    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Google
    }

    fn extract(&self, roles: &[Role], principal: &ProviderPrincipal) -> HashSet<String> {
        let email = principal.attribute_str(EMAIL_ATTRIBUTE);
        let domain = principal.attribute_str(DOMAIN_ATTRIBUTE);

        matching_roles(roles, &[Provider::OauthGoogle], |subject| {
            let candidate = if subject.is_type("user") {
                email
            } else if subject.is_type("domain") {
                domain
            } else {
                None
            };
            candidate.is_some_and(|value| subject.value.eq_ignore_ascii_case(value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kui_domain::rbac::Subject;
    use serde_json::json;

    #[test]
    fn test_extract_by_email_and_domain() {
        let roles = vec![
            Role::new("by-email", vec![Subject::new(Provider::OauthGoogle, "user", "alice@example.com")], Vec::new(), Vec::new()).unwrap(),
            Role::new("by-domain", vec![Subject::new(Provider::OauthGoogle, "domain", "example.com")], Vec::new(), Vec::new()).unwrap(),
            Role::new("other-domain", vec![Subject::new(Provider::OauthGoogle, "domain", "acme.io")], Vec::new(), Vec::new()).unwrap(),
        ];
        let principal = ProviderPrincipal::new("1234567890")
            .with_attribute("email", json!("Alice@Example.com"))
            .with_attribute("hd", json!("example.com"));

        let groups = GoogleAuthorityExtractor.extract(&roles, &principal);
        assert_eq!(groups, HashSet::from(["by-email".to_string(), "by-domain".to_string()]));
    }

    #[test]
    fn test_missing_attributes_match_nothing() {
        let roles = vec![
            Role::new("by-domain", vec![Subject::new(Provider::OauthGoogle, "domain", "example.com")], Vec::new(), Vec::new()).unwrap(),
        ];
        let principal = ProviderPrincipal::new("1234567890");

        assert!(GoogleAuthorityExtractor.extract(&roles, &principal).is_empty());
    }
}
