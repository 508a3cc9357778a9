use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::cache::Cache;

/// 保存用户组的Session属性名
pub const GROUPS_ATTRIBUTE: &str = "GROUPS";

/// Session记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    /// 已认证的主体名称
    pub principal: String,
    #[serde(default)]
    pub attributes: HashMap<String, Value>,
}

impl Session {
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// 读取用户组属性，缺失或格式不对时返回空集合
    pub fn groups(&self) -> HashSet<String> {
        self.attribute(GROUPS_ATTRIBUTE)
            .and_then(|value| serde_json::from_value::<HashSet<String>>(value.clone()).ok())
            .unwrap_or_default()
    }
}

/// Session服务trait
#[async_trait]
pub trait SessionService: Send + Sync {
    /// 创建Session，保存主体名称和用户组
    async fn create(&self, principal: &str, groups: &HashSet<String>, ttl: Option<u64>)
        -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// 获取Session
    async fn get(&self, session_id: &str)
        -> Result<Option<Session>, Box<dyn std::error::Error + Send + Sync>>;

    /// 删除Session
    async fn delete(&self, session_id: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// 基于Cache的Session服务实现（Redis或内存）
pub struct CacheSessionService {
    cache: Arc<dyn Cache>,
    default_ttl: u64,
    session_prefix: String,
}

impl CacheSessionService {
    pub fn new(cache: Arc<dyn Cache>, default_ttl: u64) -> Self {
        Self {
            cache,
            default_ttl,
            session_prefix: "session:".to_string(),
        }
    }

    fn session_key(&self, session_id: &str) -> String {
        format!("{}{}", self.session_prefix, session_id)
    }

    async fn store(&self, session: &Session, ttl: u64) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let session_json = serde_json::to_string(session)
            .map_err(|e| format!("Serialize session error: {}", e))?;
        self.cache.set(&self.session_key(&session.id), &session_json, Some(ttl)).await
    }
}

#[async_trait]
impl SessionService for CacheSessionService {
    async fn create(&self, principal: &str, groups: &HashSet<String>, ttl: Option<u64>)
        -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        use uuid::Uuid;

        let session_id = Uuid::new_v4().to_string();
        let mut attributes = HashMap::new();
        attributes.insert(GROUPS_ATTRIBUTE.to_string(), serde_json::to_value(groups)?);

        let session = Session {
            id: session_id.clone(),
            principal: principal.to_string(),
            attributes,
        };
        self.store(&session, ttl.unwrap_or(self.default_ttl)).await?;
        tracing::debug!(principal, groups = groups.len(), "Session created");

        Ok(session_id)
    }

    async fn get(&self, session_id: &str)
        -> Result<Option<Session>, Box<dyn std::error::Error + Send + Sync>> {
        let key = self.session_key(session_id);

        match self.cache.get(&key).await? {
            Some(session_json) => {
                let session: Session = serde_json::from_str(&session_json)
                    .map_err(|e| format!("Deserialize session error: {}", e))?;
                Ok(Some(session))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, session_id: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let key = self.session_key(session_id);
        self.cache.delete(&key).await?;
        tracing::debug!(session_id, "Session deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;

    fn service() -> CacheSessionService {
        CacheSessionService::new(Arc::new(MemoryCache::new(100, 600)), 600)
    }

    #[tokio::test]
    async fn test_create_and_get_session() {
        let service = service();
        let groups: HashSet<String> = ["ops".to_string(), "readonly".to_string()].into();

        let id = service.create("alice", &groups, None).await.unwrap();
        let session = service.get(&id).await.unwrap().unwrap();

        assert_eq!(session.id, id);
        assert_eq!(session.principal, "alice");
        assert_eq!(session.groups(), groups);
    }

    #[tokio::test]
    async fn test_delete_session() {
        let service = service();
        let id = service.create("alice", &HashSet::new(), Some(60)).await.unwrap();

        assert!(service.get(&id).await.unwrap().is_some());

        service.delete(&id).await.unwrap();
        assert!(service.get(&id).await.unwrap().is_none());
    }

    #[test]
    fn test_missing_groups_attribute_is_empty() {
        let session = Session {
            id: "s".to_string(),
            principal: "bob".to_string(),
            attributes: HashMap::new(),
        };
        assert!(session.groups().is_empty());
    }
}
