pub mod coordinator;
pub mod loader;

pub use coordinator::*;
pub use loader::*;
