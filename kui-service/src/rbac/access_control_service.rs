use kui_api::security::{AuthenticatedUser, Exchange, UserResolver};
use kui_domain::rbac::{
    AccessContext, ConnectAction, ConsumerGroupAction, InvariantViolation, PermissibleAction,
    Resource, Role, SchemaAction, TopicAction,
};
use std::collections::HashSet;
use std::sync::Arc;

use crate::rbac::{
    AccessControlError, AccessEvaluator, AuthenticationInfo, Extractors, RbacState, UserInfo,
    UserPermission,
};

/// 访问控制服务
/// 对一个AccessContext执行全部资源类型的子检查（逻辑与），并提供单对象的便捷检查入口。
/// RBAC禁用时所有检查直接放行，也不会解析用户身份。
pub struct AccessControlService {
    state: RbacState,
    user_resolver: Arc<dyn UserResolver>,
}

impl AccessControlService {
    pub fn new(state: RbacState, user_resolver: Arc<dyn UserResolver>) -> Self {
        Self {
            state,
            user_resolver,
        }
    }

    pub fn is_rbac_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    pub fn roles(&self) -> &[Role] {
        self.state.roles()
    }

    pub fn extractors(&self) -> &Extractors {
        self.state.extractors()
    }

    /// 校验当前请求是否满足上下文要求的全部操作
    ///
    /// 用户只解析一次，所有子检查共用同一个用户。
    /// 无法解析出用户时视为拒绝。
    pub async fn validate_access(
        &self,
        exchange: &Exchange,
        context: &AccessContext,
    ) -> Result<(), AccessControlError> {
        if !self.state.is_enabled() {
            return Ok(());
        }

        let Some(user) = self.get_user(exchange).await? else {
            tracing::debug!(cluster = ?context.cluster(), "No authenticated user, access denied");
            return Err(AccessControlError::AccessDenied);
        };

        let granted = self.is_cluster_accessible(context, &user)?
            && self.is_cluster_config_accessible(context, &user)?
            && self.is_topic_accessible(context, &user)?
            && self.is_consumer_group_accessible(context, &user)?
            && self.is_connect_accessible(context, &user)?
            && self.is_connector_accessible(context, &user)?
            && self.is_schema_accessible(context, &user)?
            && self.is_ksql_accessible(context, &user)?;

        if !granted {
            tracing::debug!(user = %user.name, cluster = ?context.cluster(), "Access denied");
            return Err(AccessControlError::AccessDenied);
        }

        Ok(())
    }

    /// 从安全上下文和Session解析当前用户
    pub async fn get_user(
        &self,
        exchange: &Exchange,
    ) -> Result<Option<AuthenticatedUser>, AccessControlError> {
        self.user_resolver
            .get_user(exchange)
            .await
            .map_err(|e| AccessControlError::UserResolution(e.to_string()))
    }

    pub fn is_cluster_accessible(
        &self,
        context: &AccessContext,
        user: &AuthenticatedUser,
    ) -> Result<bool, InvariantViolation> {
        if !self.state.is_enabled() {
            return Ok(true);
        }

        let cluster = require_cluster(context)?;
        Ok(self.evaluator().is_cluster_accessible(user, cluster))
    }

    /// 集群配置以集群名称作为目标值，只根据操作是否为空决定是否检查
    pub fn is_cluster_config_accessible(
        &self,
        context: &AccessContext,
        user: &AuthenticatedUser,
    ) -> Result<bool, InvariantViolation> {
        if !self.state.is_enabled() {
            return Ok(true);
        }

        if context.cluster_config_actions().is_empty() {
            return Ok(true);
        }
        let cluster = require_cluster(context)?;

        self.evaluate(
            Resource::ClusterConfig,
            Some(cluster),
            context.cluster_config_actions(),
            context,
            user,
        )
    }

    pub fn is_topic_accessible(
        &self,
        context: &AccessContext,
        user: &AuthenticatedUser,
    ) -> Result<bool, InvariantViolation> {
        self.check_resource(
            Resource::Topic,
            context.topic(),
            context.topic_actions(),
            context,
            user,
        )
    }

    pub fn is_consumer_group_accessible(
        &self,
        context: &AccessContext,
        user: &AuthenticatedUser,
    ) -> Result<bool, InvariantViolation> {
        self.check_resource(
            Resource::Consumer,
            context.consumer_group(),
            context.consumer_group_actions(),
            context,
            user,
        )
    }

    pub fn is_schema_accessible(
        &self,
        context: &AccessContext,
        user: &AuthenticatedUser,
    ) -> Result<bool, InvariantViolation> {
        self.check_resource(
            Resource::Schema,
            context.schema(),
            context.schema_actions(),
            context,
            user,
        )
    }

    pub fn is_connect_accessible(
        &self,
        context: &AccessContext,
        user: &AuthenticatedUser,
    ) -> Result<bool, InvariantViolation> {
        self.check_resource(
            Resource::Connect,
            context.connect(),
            context.connect_actions(),
            context,
            user,
        )
    }

    /// connector名称目前不参与判断，结果与connect检查相同
    pub fn is_connector_accessible(
        &self,
        context: &AccessContext,
        user: &AuthenticatedUser,
    ) -> Result<bool, InvariantViolation> {
        self.is_connect_accessible(context, user)
    }

    /// KSQL没有目标值，权限上的值匹配器不参与判断
    pub fn is_ksql_accessible(
        &self,
        context: &AccessContext,
        user: &AuthenticatedUser,
    ) -> Result<bool, InvariantViolation> {
        if !self.state.is_enabled() {
            return Ok(true);
        }

        if context.ksql_actions().is_empty() {
            return Ok(true);
        }

        self.evaluate(Resource::Ksql, None, context.ksql_actions(), context, user)
    }

    pub async fn is_cluster_visible(
        &self,
        exchange: &Exchange,
        cluster: &str,
    ) -> Result<bool, AccessControlError> {
        if !self.state.is_enabled() {
            return Ok(true);
        }

        let context = AccessContext::builder().cluster(cluster).build()?;
        self.check_with_user(exchange, &context, Self::is_cluster_accessible).await
    }

    pub async fn is_topic_visible(
        &self,
        exchange: &Exchange,
        cluster: &str,
        topic: &str,
    ) -> Result<bool, AccessControlError> {
        if !self.state.is_enabled() {
            return Ok(true);
        }

        let context = AccessContext::builder()
            .cluster(cluster)
            .topic(topic)
            .topic_actions([TopicAction::View])
            .build()?;
        self.check_with_user(exchange, &context, Self::is_topic_accessible).await
    }

    pub async fn is_consumer_group_visible(
        &self,
        exchange: &Exchange,
        cluster: &str,
        group_id: &str,
    ) -> Result<bool, AccessControlError> {
        if !self.state.is_enabled() {
            return Ok(true);
        }

        let context = AccessContext::builder()
            .cluster(cluster)
            .consumer_group(group_id)
            .consumer_group_actions([ConsumerGroupAction::View])
            .build()?;
        self.check_with_user(exchange, &context, Self::is_consumer_group_accessible).await
    }

    pub async fn is_schema_visible(
        &self,
        exchange: &Exchange,
        cluster: &str,
        schema: &str,
    ) -> Result<bool, AccessControlError> {
        if !self.state.is_enabled() {
            return Ok(true);
        }

        let context = AccessContext::builder()
            .cluster(cluster)
            .schema(schema)
            .schema_actions([SchemaAction::View])
            .build()?;
        self.check_with_user(exchange, &context, Self::is_schema_accessible).await
    }

    pub async fn is_connect_visible(
        &self,
        exchange: &Exchange,
        cluster: &str,
        connect: &str,
    ) -> Result<bool, AccessControlError> {
        if !self.state.is_enabled() {
            return Ok(true);
        }

        let context = AccessContext::builder()
            .cluster(cluster)
            .connect(connect)
            .connect_actions([ConnectAction::View])
            .build()?;
        self.check_with_user(exchange, &context, Self::is_connect_accessible).await
    }

    pub async fn is_connector_visible(
        &self,
        exchange: &Exchange,
        cluster: &str,
        connect: &str,
        connector: &str,
    ) -> Result<bool, AccessControlError> {
        if !self.state.is_enabled() {
            return Ok(true);
        }

        let context = AccessContext::builder()
            .cluster(cluster)
            .connect(connect)
            .connect_actions([ConnectAction::View])
            .connector(connector)
            .build()?;
        self.check_with_user(exchange, &context, Self::is_connector_accessible).await
    }

    /// 列出对用户生效的角色中的全部权限
    pub fn user_permissions(&self, user: &AuthenticatedUser) -> Vec<UserPermission> {
        self.state
            .roles()
            .iter()
            .filter(|role| role.is_granted_to(user))
            .flat_map(UserPermission::from_role)
            .collect()
    }

    /// 当前请求的认证信息（RBAC是否启用，以及用户的权限）
    pub async fn authentication_info(
        &self,
        exchange: &Exchange,
    ) -> Result<AuthenticationInfo, AccessControlError> {
        let user_info = self.get_user(exchange).await?.map(|user| UserInfo {
            permissions: self.user_permissions(&user),
            username: user.name,
        });

        Ok(AuthenticationInfo {
            rbac_enabled: self.state.is_enabled(),
            user_info,
        })
    }

    fn evaluator(&self) -> AccessEvaluator<'_> {
        AccessEvaluator::new(self.state.roles())
    }

    /// 带目标值的资源类型的通用检查
    fn check_resource<A: PermissibleAction>(
        &self,
        resource: Resource,
        value: Option<&str>,
        actions: &[A],
        context: &AccessContext,
        user: &AuthenticatedUser,
    ) -> Result<bool, InvariantViolation> {
        if !self.state.is_enabled() {
            return Ok(true);
        }

        // 本次操作不涉及该资源类型
        if value.is_none() && actions.is_empty() {
            return Ok(true);
        }
        if actions.is_empty() {
            return Err(InvariantViolation::ActionsNotPresent(resource));
        }

        self.evaluate(resource, value, actions, context, user)
    }

    fn evaluate<A: PermissibleAction>(
        &self,
        resource: Resource,
        value: Option<&str>,
        actions: &[A],
        context: &AccessContext,
        user: &AuthenticatedUser,
    ) -> Result<bool, InvariantViolation> {
        require_cluster(context)?;

        let required: HashSet<String> = actions
            .iter()
            .map(|action| action.name().to_uppercase())
            .collect();

        Ok(self.evaluator().is_accessible(resource, value, user, context, &required))
    }

    async fn check_with_user<F>(
        &self,
        exchange: &Exchange,
        context: &AccessContext,
        check: F,
    ) -> Result<bool, AccessControlError>
    where
        F: FnOnce(&Self, &AccessContext, &AuthenticatedUser) -> Result<bool, InvariantViolation>,
    {
        match self.get_user(exchange).await? {
            Some(user) => Ok(check(self, context, &user)?),
            None => Ok(false),
        }
    }
}

fn require_cluster(context: &AccessContext) -> Result<&str, InvariantViolation> {
    match context.cluster() {
        Some(cluster) if !cluster.is_empty() => Ok(cluster),
        _ => Err(InvariantViolation::EmptyCluster),
    }
}
