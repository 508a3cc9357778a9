pub mod authentication;
pub mod exchange;

pub use authentication::{AuthenticatedUser, UserResolver};
pub use exchange::{Exchange, SecurityContext};
