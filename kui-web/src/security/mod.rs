pub mod middleware;

pub use middleware::{session_middleware, EXPIRED_SESSION_COOKIE, SESSION_COOKIE};
