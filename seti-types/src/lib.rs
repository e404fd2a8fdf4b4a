pub mod error;
pub mod geometry;
pub mod scales;

pub use error::*;
pub use geometry::*;
pub use scales::*;
