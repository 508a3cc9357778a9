pub mod cache;
pub mod security;

pub use cache::{Cache, MemoryCache, RedisCache};
pub use security::{CacheSessionService, Session, SessionService, GROUPS_ATTRIBUTE};
