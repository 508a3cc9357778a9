use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kui_api::security::{Exchange, SecurityContext};
use kui_service::AccessControlError;
use crate::{ApiError, AppState};

/// Session Cookie名称
pub const SESSION_COOKIE: &str = "SESSION";

/// 使浏览器删除Session Cookie的Set-Cookie值
pub const EXPIRED_SESSION_COOKIE: &str = "SESSION=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0";

/// Session中间件
/// 根据SESSION Cookie加载Session，将带有主体和用户组的Exchange注入请求扩展。
/// 没有Cookie或Session不存在时注入匿名Exchange，由后续的访问检查决定是否拒绝；
/// Session存储不可用时直接返回500。
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let exchange = match get_session_id_from_headers(request.headers()) {
        Some(session_id) => match state.session_service.get(&session_id).await {
            Ok(Some(session)) => {
                let groups = session.groups();
                Exchange::new(
                    SecurityContext::authenticated(session.principal).with_groups(groups),
                    Some(session.id),
                )
            }
            Ok(None) => {
                tracing::debug!("Session not found or expired");
                Exchange::anonymous()
            }
            Err(e) => {
                let error = AccessControlError::UserResolution(e.to_string());
                return ApiError(error).into_response();
            }
        },
        None => Exchange::anonymous(),
    };

    request.extensions_mut().insert(exchange);
    next.run(request).await
}

/// 从请求头中获取Session ID（从Cookie）
fn get_session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all("cookie")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|cookie| cookie.trim().split_once('='))
        .find(|(name, _)| name.trim() == SESSION_COOKIE)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_session_cookie_parsing() {
        let mut headers = HeaderMap::new();
        headers.insert("cookie", HeaderValue::from_static("theme=dark; SESSION=abc-123; lang=en"));
        assert_eq!(get_session_id_from_headers(&headers).as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_missing_session_cookie() {
        let mut headers = HeaderMap::new();
        assert_eq!(get_session_id_from_headers(&headers), None);

        headers.insert("cookie", HeaderValue::from_static("SESSIONID=x; SESSION="));
        assert_eq!(get_session_id_from_headers(&headers), None);
    }
}
