pub mod security;

pub use security::{AuthenticatedUser, Exchange, SecurityContext, UserResolver};
