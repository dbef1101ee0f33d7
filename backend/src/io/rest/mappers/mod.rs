pub mod product_mapper;
pub mod session_mapper;

pub use product_mapper::ProductMapper;
pub use session_mapper::SessionMapper;
