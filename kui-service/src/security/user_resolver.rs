use async_trait::async_trait;
use kui_api::security::{AuthenticatedUser, Exchange, UserResolver};
use kui_infra::security::SessionService;
use std::sync::Arc;

/// 基于Session的用户解析
/// 主体名称来自安全上下文，用户组来自认证成功时写入Session的属性。
/// 安全上下文中已经带有用户组时（由session_middleware加载）不再读取Session。
pub struct SessionUserResolver {
    session_service: Arc<dyn SessionService>,
}

impl SessionUserResolver {
    pub fn new(session_service: Arc<dyn SessionService>) -> Self {
        Self { session_service }
    }
}

#[async_trait]
impl UserResolver for SessionUserResolver {
    async fn get_user(
        &self,
        exchange: &Exchange,
    ) -> Result<Option<AuthenticatedUser>, Box<dyn std::error::Error + Send + Sync>> {
        let Some(principal) = exchange.principal_name() else {
            return Ok(None);
        };

        if let Some(groups) = &exchange.security_context.groups {
            return Ok(Some(AuthenticatedUser::new(principal, groups.iter().cloned())));
        }

        let groups = match exchange.session_id.as_deref() {
            Some(session_id) => self
                .session_service
                .get(session_id)
                .await?
                .map(|session| session.groups())
                .unwrap_or_default(),
            None => Default::default(),
        };

        Ok(Some(AuthenticatedUser::new(principal, groups)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kui_api::security::SecurityContext;
    use kui_infra::cache::MemoryCache;
    use kui_infra::security::CacheSessionService;
    use std::collections::HashSet;

    fn session_service() -> Arc<dyn SessionService> {
        Arc::new(CacheSessionService::new(Arc::new(MemoryCache::new(100, 60)), 60))
    }

    #[tokio::test]
    async fn test_anonymous_exchange_has_no_user() {
        let resolver = SessionUserResolver::new(session_service());
        assert!(resolver.get_user(&Exchange::anonymous()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_groups_loaded_from_session() {
        let sessions = session_service();
        let groups: HashSet<String> = ["ops".to_string(), "dev".to_string()].into();
        let session_id = sessions.create("alice", &groups, None).await.unwrap();

        let resolver = SessionUserResolver::new(sessions);
        let exchange = Exchange::new(SecurityContext::authenticated("alice"), Some(session_id));
        let user = resolver.get_user(&exchange).await.unwrap().unwrap();

        assert_eq!(user.name, "alice");
        assert_eq!(user.groups, groups);
    }

    #[tokio::test]
    async fn test_preloaded_groups_skip_session_lookup() {
        // Session中没有记录，结果只能来自安全上下文
        let resolver = SessionUserResolver::new(session_service());
        let context = SecurityContext::authenticated("carol")
            .with_groups(HashSet::from(["readonly".to_string()]));
        let exchange = Exchange::new(context, Some("unknown".to_string()));
        let user = resolver.get_user(&exchange).await.unwrap().unwrap();

        assert_eq!(user.groups, HashSet::from(["readonly".to_string()]));
    }

    #[tokio::test]
    async fn test_missing_session_yields_no_groups() {
        let resolver = SessionUserResolver::new(session_service());
        let exchange = Exchange::new(SecurityContext::authenticated("bob"), Some("unknown".to_string()));
        let user = resolver.get_user(&exchange).await.unwrap().unwrap();

        assert_eq!(user.name, "bob");
        assert!(user.groups.is_empty());
    }
}
