use kui_domain::rbac::Provider;
use kui_infra::security::SessionService;
use std::collections::HashSet;
use std::sync::Arc;

use crate::rbac::{ProviderPrincipal, RbacState};

/// 认证成功后的权限映射
/// 用提供者对应的提取器计算用户组，并写入新建的Session
pub struct AuthoritiesMapper {
    state: RbacState,
    session_service: Arc<dyn SessionService>,
    session_ttl: Option<u64>,
}

impl AuthoritiesMapper {
    pub fn new(state: RbacState, session_service: Arc<dyn SessionService>) -> Self {
        Self {
            state,
            session_service,
            session_ttl: None,
        }
    }

    pub fn with_session_ttl(mut self, ttl: u64) -> Self {
        self.session_ttl = Some(ttl);
        self
    }

    /// 计算用户所属的组
    ///
    /// RBAC禁用或该提供者没有配置任何subject时返回空集合
    pub fn map_authorities(&self, provider: Provider, principal: &ProviderPrincipal) -> HashSet<String> {
        if !self.state.is_enabled() {
            return HashSet::new();
        }

        match self.state.extractors().for_provider(provider) {
            Some(extractor) => extractor.extract(self.state.roles(), principal),
            None => {
                tracing::debug!(%provider, "No authority extractor for provider");
                HashSet::new()
            }
        }
    }

    /// 认证成功回调，返回新建的Session ID
    pub async fn on_authentication_success(
        &self,
        provider: Provider,
        principal: &ProviderPrincipal,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let groups = self.map_authorities(provider, principal);
        tracing::debug!(
            principal = %principal.name,
            %provider,
            groups = ?groups,
            "Authorities mapped"
        );

        self.session_service
            .create(&principal.name, &groups, self.session_ttl)
            .await
    }
}
