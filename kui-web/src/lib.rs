pub mod security;
pub mod app_state;
pub mod handlers;
pub mod extractors;
pub mod error;

pub use security::session_middleware;
pub use app_state::AppState;
pub use error::ApiError;
pub use extractors::CurrentExchange;
pub use handlers::*;
