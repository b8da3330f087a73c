pub mod airlines;
pub mod airports;

pub use airlines::*;
pub use airports::*;
