pub mod session;

pub use session::{CacheSessionService, Session, SessionService, GROUPS_ATTRIBUTE};
