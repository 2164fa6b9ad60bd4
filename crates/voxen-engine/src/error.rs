//! Error taxonomy for the core scene and presentation operations.

use thiserror::Error;

use crate::geometry::{Dimensions, Position};
use crate::scene::ObjectId;

/// Errors produced by scene, table and screen operations.
///
/// The event loop never surfaces these; listener-side failures stay on the
/// listener's side of the dispatch boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The referenced object does not exist or was already removed.
    #[error("object {0} not found")]
    NotFound(ObjectId),

    /// The coordinate lies outside the scene's current bounds.
    #[error("position {pos} is outside scene bounds {dims}")]
    OutOfBounds { pos: Position, dims: Dimensions },

    /// Another live object already occupies the target cell.
    #[error("cell {pos} is already occupied by object {occupant}")]
    SlotOccupied { pos: Position, occupant: ObjectId },

    /// A volume extent was zero.
    #[error("dimensions must be positive, got {x}x{y}x{z}")]
    InvalidDimensions { x: u32, y: u32, z: u32 },

    /// A scalar parameter was outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
}

pub type Result<T> = std::result::Result<T, EngineError>;
