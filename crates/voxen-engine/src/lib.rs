//! Voxen engine crate.
//!
//! Core of a small real-time interactive engine: a mutable 3D scene of
//! typed objects, a window/screen presentation layer, and an event loop
//! multiplexing input providers into registered listeners. Rendering and
//! platform windowing stay behind narrow collaborator traits.

pub mod api;
pub mod error;
pub mod event;
pub mod geometry;
pub mod logging;
pub mod present;
pub mod scene;
pub mod time;

pub use error::EngineError;
