pub mod layout;
pub mod math;
pub mod scale;

// Foundation crate: small, well-tested primitives only.
pub use layout::*;
pub use scale::*;
