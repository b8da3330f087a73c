pub mod boundaries;
pub mod routes;

pub use boundaries::*;
pub use routes::*;
