use std::fmt;

/// 可以被权限授予的操作
/// 每种资源类型有自己的操作词汇表
pub trait PermissibleAction: Copy + fmt::Debug + Send + Sync {
    /// 规范化（大写）的操作名称
    fn name(&self) -> &'static str;
}

macro_rules! permissible_action {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const NAMES: &'static [&'static str] = &[$($value),+];
        }

        impl PermissibleAction for $name {
            fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

permissible_action!(
    /// 集群配置操作
    ClusterConfigAction {
        View => "VIEW",
        Edit => "EDIT",
    }
);

permissible_action!(
    /// Topic操作
    TopicAction {
        View => "VIEW",
        Create => "CREATE",
        Edit => "EDIT",
        Delete => "DELETE",
        MessagesRead => "MESSAGES_READ",
        MessagesProduce => "MESSAGES_PRODUCE",
        MessagesDelete => "MESSAGES_DELETE",
    }
);

permissible_action!(
    /// 消费者组操作
    ConsumerGroupAction {
        View => "VIEW",
        Delete => "DELETE",
        ResetOffsets => "RESET_OFFSETS",
    }
);

permissible_action!(
    /// Schema操作
    SchemaAction {
        View => "VIEW",
        Create => "CREATE",
        Delete => "DELETE",
        Edit => "EDIT",
        ModifyGlobalCompatibility => "MODIFY_GLOBAL_COMPATIBILITY",
    }
);

permissible_action!(
    /// Kafka Connect操作（同时用于connector）
    ConnectAction {
        View => "VIEW",
        Edit => "EDIT",
        Create => "CREATE",
    }
);

permissible_action!(
    /// KSQL操作
    KsqlAction {
        Execute => "EXECUTE",
    }
);
