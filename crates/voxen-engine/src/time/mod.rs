//! Cycle pacing for the event loop.

mod loop_clock;

pub use loop_clock::LoopClock;
