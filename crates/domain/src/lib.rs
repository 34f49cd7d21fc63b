pub mod bulk;
pub mod errors;
pub mod todo;

pub use bulk::*;
pub use errors::*;
pub use todo::*;
