use crate::rbac::{
    ClusterConfigAction, ConnectAction, ConsumerGroupAction, InvariantViolation, KsqlAction,
    Resource, SchemaAction, TopicAction,
};

/// 访问请求上下文
/// 描述一次操作要访问的集群，以及每种资源类型的目标值和所需操作。
/// 一次HTTP操作可能同时涉及多种资源（例如connect和connector），所以这里把所有子检查聚合在一起。
/// 通过`AccessContext::builder()`构造，构造完成后不可变。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessContext {
    cluster: Option<String>,
    cluster_config_actions: Vec<ClusterConfigAction>,
    topic: Option<String>,
    topic_actions: Vec<TopicAction>,
    consumer_group: Option<String>,
    consumer_group_actions: Vec<ConsumerGroupAction>,
    connect: Option<String>,
    connect_actions: Vec<ConnectAction>,
    connector: Option<String>,
    schema: Option<String>,
    schema_actions: Vec<SchemaAction>,
    ksql_actions: Vec<KsqlAction>,
}

impl AccessContext {
    pub fn builder() -> AccessContextBuilder {
        AccessContextBuilder::default()
    }

    pub fn cluster(&self) -> Option<&str> {
        self.cluster.as_deref()
    }

    pub fn cluster_config_actions(&self) -> &[ClusterConfigAction] {
        &self.cluster_config_actions
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn topic_actions(&self) -> &[TopicAction] {
        &self.topic_actions
    }

    pub fn consumer_group(&self) -> Option<&str> {
        self.consumer_group.as_deref()
    }

    pub fn consumer_group_actions(&self) -> &[ConsumerGroupAction] {
        &self.consumer_group_actions
    }

    pub fn connect(&self) -> Option<&str> {
        self.connect.as_deref()
    }

    pub fn connect_actions(&self) -> &[ConnectAction] {
        &self.connect_actions
    }

    /// connector名称目前只被接收，不参与权限过滤
    pub fn connector(&self) -> Option<&str> {
        self.connector.as_deref()
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn schema_actions(&self) -> &[SchemaAction] {
        &self.schema_actions
    }

    pub fn ksql_actions(&self) -> &[KsqlAction] {
        &self.ksql_actions
    }
}

/// AccessContext构造器
#[derive(Debug, Default)]
pub struct AccessContextBuilder {
    context: AccessContext,
}

impl AccessContextBuilder {
    pub fn cluster(mut self, cluster: impl Into<String>) -> Self {
        self.context.cluster = Some(cluster.into());
        self
    }

    pub fn cluster_config_actions(mut self, actions: impl IntoIterator<Item = ClusterConfigAction>) -> Self {
        self.context.cluster_config_actions.extend(actions);
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.context.topic = Some(topic.into());
        self
    }

    pub fn topic_actions(mut self, actions: impl IntoIterator<Item = TopicAction>) -> Self {
        self.context.topic_actions.extend(actions);
        self
    }

    pub fn consumer_group(mut self, consumer_group: impl Into<String>) -> Self {
        self.context.consumer_group = Some(consumer_group.into());
        self
    }

    pub fn consumer_group_actions(mut self, actions: impl IntoIterator<Item = ConsumerGroupAction>) -> Self {
        self.context.consumer_group_actions.extend(actions);
        self
    }

    pub fn connect(mut self, connect: impl Into<String>) -> Self {
        self.context.connect = Some(connect.into());
        self
    }

    pub fn connect_actions(mut self, actions: impl IntoIterator<Item = ConnectAction>) -> Self {
        self.context.connect_actions.extend(actions);
        self
    }

    pub fn connector(mut self, connector: impl Into<String>) -> Self {
        self.context.connector = Some(connector.into());
        self
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.context.schema = Some(schema.into());
        self
    }

    pub fn schema_actions(mut self, actions: impl IntoIterator<Item = SchemaAction>) -> Self {
        self.context.schema_actions.extend(actions);
        self
    }

    pub fn ksql_actions(mut self, actions: impl IntoIterator<Item = KsqlAction>) -> Self {
        self.context.ksql_actions.extend(actions);
        self
    }

    /// 构造上下文
    /// 给出了目标值却没有给出所需操作是调用方的编程错误
    pub fn build(self) -> Result<AccessContext, InvariantViolation> {
        let ctx = self.context;

        if ctx.topic.is_some() && ctx.topic_actions.is_empty() {
            return Err(InvariantViolation::ActionsNotPresent(Resource::Topic));
        }
        if ctx.consumer_group.is_some() && ctx.consumer_group_actions.is_empty() {
            return Err(InvariantViolation::ActionsNotPresent(Resource::Consumer));
        }
        if ctx.connect.is_some() && ctx.connect_actions.is_empty() {
            return Err(InvariantViolation::ActionsNotPresent(Resource::Connect));
        }
        if ctx.schema.is_some() && ctx.schema_actions.is_empty() {
            return Err(InvariantViolation::ActionsNotPresent(Resource::Schema));
        }

        Ok(ctx)
    }
}
