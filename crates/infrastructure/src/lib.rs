pub mod memory;
pub mod models;
pub mod postgres;
pub mod repositories;

pub use memory::*;
pub use models::*;
pub use postgres::*;
pub use repositories::*;
