pub mod access_control_service;
pub mod error;
pub mod evaluator;
pub mod extractor;
pub mod permissions;
pub mod state;

pub use access_control_service::AccessControlService;
pub use error::AccessControlError;
pub use evaluator::AccessEvaluator;
pub use extractor::{Extractors, ExtractorKind, ProviderAuthorityExtractor, ProviderPrincipal};
pub use permissions::{AuthenticationInfo, UserInfo, UserPermission};
pub use state::RbacState;
