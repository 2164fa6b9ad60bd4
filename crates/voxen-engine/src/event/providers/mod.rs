//! Stock event providers.
//!
//! Each provider decides what event kinds it emits; the loop treats them
//! all as opaque [`EventProvider`](super::EventProvider) sources.

mod console;
mod file;

pub use console::ConsoleProvider;
pub use file::FileProvider;
