pub mod access_context;
pub mod action;
pub mod error;
pub mod permission;
pub mod properties;
pub mod resource;
pub mod role;

pub use access_context::{AccessContext, AccessContextBuilder};
pub use action::{
    PermissibleAction,
    ClusterConfigAction, TopicAction, ConsumerGroupAction, SchemaAction, ConnectAction, KsqlAction,
};
pub use error::{InvariantViolation, RbacConfigError};
pub use permission::Permission;
pub use properties::{RbacProperties, RoleDefinition, SubjectDefinition, PermissionDefinition};
pub use resource::Resource;
pub use role::{Role, Subject, Provider};
