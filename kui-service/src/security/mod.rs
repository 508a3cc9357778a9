pub mod authorities_mapper;
pub mod user_resolver;

pub use authorities_mapper::AuthoritiesMapper;
pub use user_resolver::SessionUserResolver;
