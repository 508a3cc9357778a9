pub mod memory;
pub mod redis;

use async_trait::async_trait;

pub use self::memory::MemoryCache;
pub use self::redis::RedisCache;

/// Cache trait 定义缓存操作
#[async_trait]
pub trait Cache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>>;
    async fn set(&self, key: &str, value: &str, ttl: Option<u64>) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    async fn delete(&self, key: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_trait_object_safety() {
        // 测试trait可以作为trait object使用
        fn takes_cache(_cache: &dyn Cache) {}
        takes_cache(&MemoryCache::new(16, 60));
    }
}
