pub mod selection;
pub mod session;

pub use selection::*;
pub use session::*;
