use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use kui_api::security::Exchange;
use std::convert::Infallible;

/// 当前请求的Exchange提取器
/// 从请求扩展中读取session_middleware注入的Exchange，缺失时视为匿名请求
pub struct CurrentExchange(pub Exchange);

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for CurrentExchange
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentExchange(
            parts.extensions.get::<Exchange>().cloned().unwrap_or_default(),
        ))
    }
}
