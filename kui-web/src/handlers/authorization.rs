use axum::{extract::State, Json};
use kui_service::AuthenticationInfo;
use crate::{ApiError, AppState, CurrentExchange};

/// 获取当前用户的授权信息
/// GET /api/authorization
pub async fn get_authentication_info(
    State(state): State<AppState>,
    CurrentExchange(exchange): CurrentExchange,
) -> Result<Json<AuthenticationInfo>, ApiError> {
    let info = state.access_control.authentication_info(&exchange).await?;
    Ok(Json(info))
}
