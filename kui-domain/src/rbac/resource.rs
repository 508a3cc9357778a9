use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::rbac::action::{
    ClusterConfigAction, ConnectAction, ConsumerGroupAction, KsqlAction, SchemaAction, TopicAction,
};
use crate::rbac::RbacConfigError;

/// 权限可以授予的资源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resource {
    ClusterConfig,
    Topic,
    Consumer,
    Schema,
    Connect,
    Ksql,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::ClusterConfig,
        Resource::Topic,
        Resource::Consumer,
        Resource::Schema,
        Resource::Connect,
        Resource::Ksql,
    ];

    /// 配置中使用的规范名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::ClusterConfig => "CLUSTERCONFIG",
            Resource::Topic => "TOPIC",
            Resource::Consumer => "CONSUMER",
            Resource::Schema => "SCHEMA",
            Resource::Connect => "CONNECT",
            Resource::Ksql => "KSQL",
        }
    }

    /// 该资源类型可用的全部操作
    pub fn actions(&self) -> &'static [&'static str] {
        match self {
            Resource::ClusterConfig => ClusterConfigAction::NAMES,
            Resource::Topic => TopicAction::NAMES,
            Resource::Consumer => ConsumerGroupAction::NAMES,
            Resource::Schema => SchemaAction::NAMES,
            Resource::Connect => ConnectAction::NAMES,
            Resource::Ksql => KsqlAction::NAMES,
        }
    }

    pub fn supports_action(&self, action: &str) -> bool {
        self.actions().iter().any(|a| a.eq_ignore_ascii_case(action))
    }
}

impl FromStr for Resource {
    type Err = RbacConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RbacConfigError::UnknownResource(s.to_string()))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
