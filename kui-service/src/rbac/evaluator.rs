use kui_api::security::AuthenticatedUser;
use kui_domain::rbac::{AccessContext, Resource, Role};
use std::collections::HashSet;

/// 访问判定器
/// 无状态的谓词引擎，只读地借用已加载的角色
#[derive(Debug, Clone, Copy)]
pub struct AccessEvaluator<'a> {
    roles: &'a [Role],
}

impl<'a> AccessEvaluator<'a> {
    pub fn new(roles: &'a [Role]) -> Self {
        Self { roles }
    }

    /// 对用户生效且适用于目标集群的角色
    fn applicable_roles<'u>(
        &self,
        user: &'u AuthenticatedUser,
        cluster: &'u str,
    ) -> impl Iterator<Item = &'a Role> + 'u
    where
        'a: 'u,
    {
        let roles: &'a [Role] = self.roles;
        roles
            .iter()
            .filter(move |role| role.is_granted_to(user))
            .filter(move |role| role.applies_to_cluster(cluster))
    }

    /// 是否有任何对用户生效的角色包含该集群
    pub fn is_cluster_accessible(&self, user: &AuthenticatedUser, cluster: &str) -> bool {
        self.applicable_roles(user, cluster).next().is_some()
    }

    /// 汇总所有匹配权限授予的操作（大写）
    pub fn granted_actions(
        &self,
        resource: Resource,
        value: Option<&str>,
        user: &AuthenticatedUser,
        cluster: &str,
    ) -> HashSet<String> {
        self.applicable_roles(user, cluster)
            .flat_map(|role| role.permissions())
            .filter(|permission| permission.resource() == resource)
            .filter(|permission| permission.matches_value(value))
            .flat_map(|permission| permission.actions())
            .map(|action| action.to_uppercase())
            .collect()
    }

    /// 授予的操作必须覆盖全部所需操作，缺少任何一个都拒绝
    pub fn is_accessible(
        &self,
        resource: Resource,
        value: Option<&str>,
        user: &AuthenticatedUser,
        context: &AccessContext,
        required_actions: &HashSet<String>,
    ) -> bool {
        let Some(cluster) = context.cluster() else {
            return false;
        };

        let granted = self.granted_actions(resource, value, user, cluster);
        required_actions
            .iter()
            .all(|action| granted.contains(&action.to_uppercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kui_domain::rbac::{Permission, TopicAction};

    fn required(actions: &[&str]) -> HashSet<String> {
        actions.iter().map(|a| a.to_string()).collect()
    }

    fn ops_role(actions: &[&str]) -> Role {
        Role::new(
            "ops",
            Vec::new(),
            vec!["prod".to_string()],
            vec![Permission::new(Resource::Topic, Some(".*"), actions).unwrap()],
        )
        .unwrap()
    }

    fn prod_context() -> AccessContext {
        AccessContext::builder()
            .cluster("prod")
            .topic("orders")
            .topic_actions([TopicAction::Edit])
            .build()
            .unwrap()
    }

    #[test]
    fn test_superset_required() {
        let roles = vec![ops_role(&["VIEW", "EDIT"])];
        let evaluator = AccessEvaluator::new(&roles);
        let user = AuthenticatedUser::new("alice", ["ops"]);
        let ctx = prod_context();

        assert!(evaluator.is_accessible(Resource::Topic, Some("orders"), &user, &ctx, &required(&["EDIT"])));
        assert!(evaluator.is_accessible(Resource::Topic, Some("orders"), &user, &ctx, &required(&["view", "edit"])));
        // 缺少一个操作即拒绝，没有部分授权
        assert!(!evaluator.is_accessible(Resource::Topic, Some("orders"), &user, &ctx, &required(&["EDIT", "DELETE"])));
    }

    #[test]
    fn test_role_name_must_match_group() {
        let roles = vec![ops_role(&["VIEW"])];
        let evaluator = AccessEvaluator::new(&roles);
        let outsider = AuthenticatedUser::new("bob", ["dev"]);

        assert!(!evaluator.is_accessible(Resource::Topic, Some("orders"), &outsider, &prod_context(), &required(&["VIEW"])));
        assert!(evaluator.granted_actions(Resource::Topic, None, &outsider, "prod").is_empty());
    }

    #[test]
    fn test_cluster_must_match() {
        let roles = vec![ops_role(&["VIEW"])];
        let evaluator = AccessEvaluator::new(&roles);
        let user = AuthenticatedUser::new("alice", ["ops"]);

        assert!(evaluator.is_cluster_accessible(&user, "PROD"));
        assert!(!evaluator.is_cluster_accessible(&user, "staging"));
        assert!(evaluator.granted_actions(Resource::Topic, Some("orders"), &user, "staging").is_empty());
    }

    #[test]
    fn test_union_across_roles() {
        let roles = vec![
            ops_role(&["VIEW"]),
            Role::new(
                "writers",
                Vec::new(),
                vec!["prod".to_string()],
                vec![Permission::new(Resource::Topic, Some("orders"), ["EDIT"]).unwrap()],
            )
            .unwrap(),
        ];
        let evaluator = AccessEvaluator::new(&roles);
        let user = AuthenticatedUser::new("alice", ["ops", "writers"]);

        let granted = evaluator.granted_actions(Resource::Topic, Some("orders"), &user, "prod");
        assert_eq!(granted, required(&["VIEW", "EDIT"]));

        let granted = evaluator.granted_actions(Resource::Topic, Some("payments"), &user, "prod");
        assert_eq!(granted, required(&["VIEW"]));
    }

    #[test]
    fn test_other_resource_kinds_ignored() {
        let roles = vec![ops_role(&["VIEW"])];
        let evaluator = AccessEvaluator::new(&roles);
        let user = AuthenticatedUser::new("alice", ["ops"]);

        assert!(evaluator.granted_actions(Resource::Schema, Some("orders"), &user, "prod").is_empty());
    }

    #[test]
    fn test_monotonic_in_granted_actions() {
        let user = AuthenticatedUser::new("alice", ["ops"]);
        let ctx = prod_context();
        let needed = [required(&["VIEW"]), required(&["EDIT"]), required(&["VIEW", "EDIT"])];

        let narrow = vec![ops_role(&["VIEW"])];
        let wide = vec![ops_role(&["VIEW", "EDIT"])];
        for req in &needed {
            let before = AccessEvaluator::new(&narrow).is_accessible(Resource::Topic, Some("orders"), &user, &ctx, req);
            let after = AccessEvaluator::new(&wide).is_accessible(Resource::Topic, Some("orders"), &user, &ctx, req);
            assert!(!before || after);
        }
    }
}
