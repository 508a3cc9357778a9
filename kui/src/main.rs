mod config;
mod error;
mod server;

use crate::config::{CacheType, Config};
use crate::error::{KuiError, Result};
use kui_infra::{
    cache::{Cache, MemoryCache, RedisCache},
    security::{CacheSessionService, SessionService},
};
use kui_service::RbacState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use axum::serve;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志，默认info级别，可通过RUST_LOG覆盖
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| format!("Failed to set tracing subscriber: {}", e))?;

    info!("Starting Kui application...");

    // 加载配置
    let config = Config::load()?;
    info!("Configuration loaded successfully");

    // 初始化缓存
    let cache: Arc<dyn Cache> = match config.cache.cache_type {
        CacheType::Memory => Arc::new(MemoryCache::new(
            config.cache.memory_max_size,
            config.cache.memory_ttl,
        )),
        CacheType::Redis => Arc::new(
            RedisCache::open(&config.redis.url).map_err(|e| KuiError::Cache(e.to_string()))?,
        ),
    };
    info!(cache = ?config.cache.cache_type, "Cache initialized");

    // 初始化Session服务
    let session_service: Arc<dyn SessionService> =
        Arc::new(CacheSessionService::new(cache, config.session.ttl));

    // 加载RBAC角色，配置错误时拒绝启动
    let rbac = RbacState::load(config.rbac.clone(), &config.auth.mechanisms)?;

    let app_state = server::init_app_state(rbac, session_service);
    let app = server::create_router(app_state);

    // 启动HTTP服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| format!("Invalid address: {}", e))?;

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    serve(listener, app.into_make_service()).await?;

    Ok(())
}
