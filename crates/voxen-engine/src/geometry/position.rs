use std::fmt;

use super::Dimensions;

/// Grid coordinate inside a scene volume.
///
/// Components are non-negative cell indices, not continuous world units.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Position {
    #[inline]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Returns this position with every out-of-range component pulled back
    /// to the last valid cell along that axis.
    ///
    /// In-range components are left untouched.
    #[inline]
    pub fn clamped_to(self, dims: Dimensions) -> Position {
        Position {
            x: self.x.min(dims.x - 1),
            y: self.y.min(dims.y - 1),
            z: self.z.min(dims.z - 1),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
