//! Event model and dispatch loop.
//!
//! Responsibilities:
//! - the tagged event union and its kind index (`Event`, `EventKind`)
//! - listener and provider abstractions at the loop's seams
//! - the poll/dispatch state machine (`EventLoop`)
//! - stock providers (console reader, file watcher)

mod event;
mod event_loop;
mod listener;
mod provider;

pub mod providers;

pub use event::{Event, EventKind};
pub use event_loop::{EventLoop, LoopState};
pub use listener::EventListener;
pub use provider::{EventProvider, ProviderHandle, ProviderId};
