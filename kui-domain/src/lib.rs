pub mod rbac;

pub use rbac::{
    AccessContext, AccessContextBuilder,
    Permission, PermissibleAction, Resource,
    ClusterConfigAction, TopicAction, ConsumerGroupAction, SchemaAction, ConnectAction, KsqlAction,
    Role, Subject, Provider,
    RbacProperties, RoleDefinition, SubjectDefinition, PermissionDefinition,
    InvariantViolation, RbacConfigError,
};
