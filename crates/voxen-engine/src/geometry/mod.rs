//! Scene-space geometry types.
//!
//! Responsibilities:
//! - integer grid coordinates (`Position`)
//! - positive volume extents (`Dimensions`) with containment/clamping helpers

mod dims;
mod position;

pub use dims::Dimensions;
pub use position::Position;
