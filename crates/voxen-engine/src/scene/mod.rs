//! Scene model: typed objects in a mutable 3D grid.
//!
//! Responsibilities:
//! - unique, never-reused object identity (`ObjectId`)
//! - one-object-per-cell occupancy (`ObjectTable`)
//! - resize/clone semantics for whole scenes (`Scene`, `SceneHandle`)

mod object;
mod scene;
mod table;

pub use object::{Object, ObjectId};
pub use scene::{Scene, SceneHandle};
pub use table::ObjectTable;
