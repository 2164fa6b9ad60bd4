use std::sync::Arc;

use crossbeam_channel::Sender;

use super::Event;

/// Index of a provider slot within one event loop.
pub type ProviderId = usize;

/// A source of events for the loop.
///
/// [`poll`] must never block: drain whatever is ready into `buf` and
/// return. Providers backed by threads or I/O hand fully-formed events
/// over a channel and drain it here.
///
/// [`poll`]: EventProvider::poll
pub trait EventProvider {
    fn poll(&mut self, buf: &mut Vec<Event>);

    fn name(&self) -> &str {
        "provider"
    }
}

/// Scripted provider: drains itself on every poll. Useful for tests and
/// batch drivers.
impl EventProvider for Vec<Event> {
    fn poll(&mut self, buf: &mut Vec<Event>) {
        buf.append(self);
    }

    fn name(&self) -> &str {
        "script"
    }
}

/// Handle identifying one registered provider slot.
///
/// Listeners receive the handle of the event's originating provider and
/// may throw new events at it; those land in the slot's injection queue
/// and are dispatched in a later cycle, never synchronously. Clones are
/// cheap and may cross threads.
#[derive(Debug, Clone)]
pub struct ProviderHandle {
    id: ProviderId,
    name: Arc<str>,
    injector: Sender<Event>,
}

impl ProviderHandle {
    pub(crate) fn new(id: ProviderId, name: Arc<str>, injector: Sender<Event>) -> Self {
        Self { id, name, injector }
    }

    #[inline]
    pub fn id(&self) -> ProviderId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Injects an event into this provider's queue.
    ///
    /// After loop teardown the queue is gone; the event is dropped with a
    /// warning rather than surfacing an error into listener code.
    pub fn throw_event(&self, event: Event) {
        if self.injector.send(event).is_err() {
            log::warn!("event thrown at '{}' after its loop was torn down", self.name);
        }
    }
}
