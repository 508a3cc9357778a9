use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use kui_infra::security::SessionService;
use kui_service::{AccessControlService, RbacState, SessionUserResolver};
use kui_web::AppState;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// 创建应用路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/authorization", get(kui_web::get_authentication_info))
        .route("/api/logout", post(kui_web::logout))
        .layer(
            ServiceBuilder::new()
                // 先添加的层在外层执行：trace -> CORS -> session -> handler
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    kui_web::session_middleware,
                )),
        )
        .with_state(state)
}

/// 健康检查端点
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// 初始化应用状态
pub fn init_app_state(rbac: RbacState, session_service: Arc<dyn SessionService>) -> AppState {
    let user_resolver = Arc::new(SessionUserResolver::new(session_service.clone()));

    AppState {
        access_control: Arc::new(AccessControlService::new(rbac, user_resolver)),
        session_service,
    }
}
