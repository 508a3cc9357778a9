pub mod rbac;
pub mod security;

pub use rbac::{
    AccessControlService, AccessControlError, AccessEvaluator, RbacState,
    AuthenticationInfo, UserInfo, UserPermission,
    Extractors, ExtractorKind, ProviderAuthorityExtractor, ProviderPrincipal,
};
pub use security::{AuthoritiesMapper, SessionUserResolver};
