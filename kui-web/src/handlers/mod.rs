pub mod authorization;
pub mod logout;

pub use authorization::*;
pub use logout::*;
