pub mod element;
pub mod surface;
pub mod svg;

pub use element::*;
pub use surface::*;
pub use svg::*;
