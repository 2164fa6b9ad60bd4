use std::fmt;

use crate::error::EngineError;

use super::Position;

/// Extents of a scene volume along each axis.
///
/// All components are strictly positive; construction rejects zero.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Dimensions {
    pub fn new(x: u32, y: u32, z: u32) -> Result<Self, EngineError> {
        if x == 0 || y == 0 || z == 0 {
            return Err(EngineError::InvalidDimensions { x, y, z });
        }
        Ok(Self { x, y, z })
    }

    /// Component-wise `position < dimensions` check.
    #[inline]
    pub fn contains(self, pos: Position) -> bool {
        pos.x < self.x && pos.y < self.y && pos.z < self.z
    }

    /// Total number of cells in the volume.
    #[inline]
    pub fn cell_count(self) -> usize {
        self.x as usize * self.y as usize * self.z as usize
    }

    /// Linear index of `pos` in x-major cell order.
    ///
    /// Caller must ensure `contains(pos)`.
    #[inline]
    pub fn cell_index(self, pos: Position) -> usize {
        pos.x as usize
            + pos.y as usize * self.x as usize
            + pos.z as usize * self.x as usize * self.y as usize
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}
