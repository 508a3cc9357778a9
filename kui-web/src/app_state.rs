use kui_infra::security::SessionService;
use kui_service::AccessControlService;
use std::sync::Arc;

/// 应用状态
/// 包含所有需要的服务实例
#[derive(Clone)]
pub struct AppState {
    pub access_control: Arc<AccessControlService>,
    pub session_service: Arc<dyn SessionService>,
}
