use super::{Event, ProviderHandle};

/// Receives dispatched events.
///
/// One dispatch method so plain closures work through the blanket impl;
/// captured state replaces the manual context threading of
/// function-pointer callback APIs. The handle identifies the provider the
/// event originated from and is the injection point for event chains.
pub trait EventListener {
    fn on_event(&mut self, event: &Event, provider: &ProviderHandle);
}

impl<F> EventListener for F
where
    F: FnMut(&Event, &ProviderHandle),
{
    fn on_event(&mut self, event: &Event, provider: &ProviderHandle) {
        self(event, provider)
    }
}

pub(crate) type BoxedListener = Box<dyn EventListener>;
