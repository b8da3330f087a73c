pub mod airports;
pub mod basemap;
pub mod chart;
pub mod routes;

pub use airports::*;
pub use basemap::*;
pub use chart::*;
pub use routes::*;
