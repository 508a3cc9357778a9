use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use crate::security::EXPIRED_SESSION_COOKIE;
use crate::{AppState, CurrentExchange};

/// 登出端点
/// POST /api/logout
pub async fn logout(
    State(state): State<AppState>,
    CurrentExchange(exchange): CurrentExchange,
) -> Response {
    if let Some(session_id) = exchange.session_id.as_deref() {
        // Session删除失败不影响登出，Cookie仍然会被清除
        if let Err(e) = state.session_service.delete(session_id).await {
            tracing::warn!(error = %e, "Failed to delete session during logout");
        }
    }

    let mut response = StatusCode::NO_CONTENT.into_response();
    response
        .headers_mut()
        .insert(SET_COOKIE, HeaderValue::from_static(EXPIRED_SESSION_COOKIE));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_middleware;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::post;
    use axum::Router;
    use kui_infra::cache::MemoryCache;
    use kui_infra::security::{CacheSessionService, SessionService};
    use kui_service::{AccessControlService, RbacState, SessionUserResolver};
    use std::collections::HashSet;
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_logout_deletes_session() {
        let sessions: Arc<dyn SessionService> =
            Arc::new(CacheSessionService::new(Arc::new(MemoryCache::new(16, 60)), 60));
        let app_state = AppState {
            access_control: Arc::new(AccessControlService::new(
                RbacState::disabled(),
                Arc::new(SessionUserResolver::new(sessions.clone())),
            )),
            session_service: sessions.clone(),
        };
        let router = Router::new()
            .route("/api/logout", post(logout))
            .layer(axum::middleware::from_fn_with_state(app_state.clone(), session_middleware))
            .with_state(app_state);

        let session_id = sessions.create("alice", &HashSet::new(), None).await.unwrap();
        let request = Request::builder()
            .method("POST")
            .uri("/api/logout")
            .header("cookie", format!("SESSION={}", session_id))
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(response.headers()[SET_COOKIE], EXPIRED_SESSION_COOKIE);
        assert!(sessions.get(&session_id).await.unwrap().is_none());
    }
}
