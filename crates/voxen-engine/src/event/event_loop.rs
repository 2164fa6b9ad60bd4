use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, unbounded};

use crate::present::{ScenePresenter, ScreenHandle, WindowHandle};
use crate::scene::SceneHandle;
use crate::time::LoopClock;

use super::listener::BoxedListener;
use super::{Event, EventKind, EventListener, EventProvider, ProviderHandle, ProviderId};

/// Lifecycle of an event loop. `Stopped` is terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

struct ProviderSlot {
    provider: Box<dyn EventProvider>,
    handle: ProviderHandle,
    injected: Receiver<Event>,
}

/// Polls no events; backs the loop's own slot so tick events have an
/// origin and external code has an injection point.
struct LoopSource;

impl EventProvider for LoopSource {
    fn poll(&mut self, _buf: &mut Vec<Event>) {}

    fn name(&self) -> &str {
        "loop"
    }
}

/// Central dispatcher binding a scene/window/screen triple to registered
/// providers and listeners.
///
/// Each cycle while running:
/// 1. polls every provider slot in registration order (injected events
///    first, then fresh ones), collecting the cycle's batch
/// 2. dispatches each batched event to its kind listeners, then — for
///    keyboard kinds — to the listeners scoped to its key code, each
///    table in registration order
/// 3. dispatches a `Loop { ticks }` event attributed to the loop's own
///    slot, then runs the presenter if one is attached
///
/// Dispatching an `Exit` event stops the loop after Exit's own listeners
/// have run; the rest of the batch is discarded.
///
/// Events thrown at a [`ProviderHandle`] during dispatch land in that
/// slot's injection queue and surface in a later cycle, so listener
/// chains cannot recurse.
///
/// Scene mutation is only safe from the dispatching thread; by convention
/// a scene is bound to at most one loop at a time (not enforced).
pub struct EventLoop {
    scene: SceneHandle,
    window: WindowHandle,
    screen: ScreenHandle,
    providers: Vec<ProviderSlot>,
    kind_listeners: HashMap<EventKind, Vec<BoxedListener>>,
    key_listeners: HashMap<i32, Vec<BoxedListener>>,
    presenter: Option<Box<dyn ScenePresenter>>,
    clock: LoopClock,
    state: LoopState,
}

// Slot 0 is always the loop's own source.
const LOOP_SLOT: ProviderId = 0;

impl EventLoop {
    pub fn new(scene: SceneHandle, window: WindowHandle, screen: ScreenHandle) -> Self {
        let mut event_loop = Self {
            scene,
            window,
            screen,
            providers: Vec::new(),
            kind_listeners: HashMap::new(),
            key_listeners: HashMap::new(),
            presenter: None,
            clock: LoopClock::default(),
            state: LoopState::Idle,
        };
        event_loop.add_provider(LoopSource);
        event_loop
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn scene(&self) -> &SceneHandle {
        &self.scene
    }

    pub fn window(&self) -> &WindowHandle {
        &self.window
    }

    pub fn screen(&self) -> &ScreenHandle {
        &self.screen
    }

    /// Handle of the loop's own slot. Lets external code inject events
    /// (typically `Exit`) without registering a provider.
    pub fn handle(&self) -> ProviderHandle {
        self.providers[LOOP_SLOT].handle.clone()
    }

    pub fn set_presenter(&mut self, presenter: Box<dyn ScenePresenter>) {
        self.presenter = Some(presenter);
    }

    /// Overrides the cycle pacing. `Duration::ZERO` disables sleeping.
    pub fn set_tick_interval(&mut self, interval: Duration) {
        self.clock = LoopClock::new(interval);
    }

    /// Registers a provider and returns the handle listeners will see for
    /// events it produces.
    pub fn add_provider(&mut self, provider: impl EventProvider + 'static) -> ProviderHandle {
        let id = self.providers.len();
        let name: Arc<str> = Arc::from(provider.name());
        let (injector, injected) = unbounded();
        let handle = ProviderHandle::new(id, name, injector);
        self.providers.push(ProviderSlot {
            provider: Box::new(provider),
            handle: handle.clone(),
            injected,
        });
        log::debug!("registered event provider '{}' as slot {id}", handle.name());
        handle
    }

    /// Appends a listener for one event kind. No deduplication: the same
    /// callback registered twice runs twice per matching event.
    pub fn add_event_listener(&mut self, kind: EventKind, listener: impl EventListener + 'static) {
        self.kind_listeners
            .entry(kind)
            .or_default()
            .push(Box::new(listener));
    }

    /// Appends a listener scoped to one key code. It fires for both
    /// `KeyboardButtonDown` and `KeyboardButtonUp` of that key, after the
    /// kind-level listeners.
    pub fn add_keyboard_listener(&mut self, key: i32, listener: impl EventListener + 'static) {
        self.key_listeners
            .entry(key)
            .or_default()
            .push(Box::new(listener));
    }

    /// Runs the poll/dispatch cycle on the calling thread until an `Exit`
    /// event is observed. On a stopped loop this returns immediately.
    pub fn start(&mut self) {
        match self.state {
            LoopState::Stopped => {
                log::warn!("start called on a stopped event loop");
                return;
            }
            LoopState::Running => return,
            LoopState::Idle => {}
        }
        self.state = LoopState::Running;
        self.clock.reset();
        log::info!("event loop running with {} provider slot(s)", self.providers.len());

        let mut fresh: Vec<Event> = Vec::new();
        let mut batch: Vec<(ProviderId, Event)> = Vec::new();

        'run: loop {
            // Fixed round-robin poll order = registration order. Events
            // injected during the previous cycle come out first per slot.
            batch.clear();
            for (id, slot) in self.providers.iter_mut().enumerate() {
                for event in slot.injected.try_iter() {
                    batch.push((id, event));
                }
                slot.provider.poll(&mut fresh);
                for event in fresh.drain(..) {
                    batch.push((id, event));
                }
            }

            for (origin, event) in batch.drain(..) {
                let exit = matches!(event, Event::Exit);
                self.dispatch(origin, &event);
                if exit {
                    self.state = LoopState::Stopped;
                    break 'run;
                }
            }

            let ticks = self.clock.tick();
            self.dispatch(LOOP_SLOT, &Event::Loop { ticks });
            self.present();
        }

        log::info!("event loop stopped");
    }

    fn dispatch(&mut self, origin: ProviderId, event: &Event) {
        let handle = self.providers[origin].handle.clone();

        if let Some(listeners) = self.kind_listeners.get_mut(&event.kind()) {
            for listener in listeners.iter_mut() {
                invoke(listener.as_mut(), event, &handle);
            }
        }
        if let Some(key) = event.key() {
            if let Some(listeners) = self.key_listeners.get_mut(&key) {
                for listener in listeners.iter_mut() {
                    invoke(listener.as_mut(), event, &handle);
                }
            }
        }
    }

    fn present(&mut self) {
        if let Some(presenter) = self.presenter.as_mut() {
            let scene = self.scene.borrow();
            let screen = self.screen.borrow();
            let window = self.window.borrow();
            presenter.present(&scene, &screen, &window);
        }
    }
}

/// A listener's unhandled failure must not take the dispatch cycle down
/// with it; the panic is logged and the remaining listeners still run.
fn invoke(listener: &mut dyn EventListener, event: &Event, origin: &ProviderHandle) {
    let outcome = catch_unwind(AssertUnwindSafe(|| listener.on_event(event, origin)));
    if outcome.is_err() {
        log::error!(
            "listener panicked on {:?} from '{}'; dispatch continues",
            event.kind(),
            origin.name()
        );
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::geometry::Dimensions;

    use super::*;

    fn test_loop() -> EventLoop {
        let scene = SceneHandle::new(Dimensions::new(2, 2, 2).unwrap());
        let mut event_loop = EventLoop::new(scene, WindowHandle::new(320, 240), ScreenHandle::new());
        event_loop.set_tick_interval(Duration::ZERO);
        event_loop
    }

    fn counter() -> (Rc<RefCell<u32>>, impl FnMut(&Event, &ProviderHandle)) {
        let count = Rc::new(RefCell::new(0u32));
        let inner = Rc::clone(&count);
        (count, move |_: &Event, _: &ProviderHandle| {
            *inner.borrow_mut() += 1;
        })
    }

    // ── key scoping ───────────────────────────────────────────────────────

    #[test]
    fn keyboard_listener_fires_only_for_its_key() {
        let mut event_loop = test_loop();
        let (hits_a, on_a) = counter();
        let (hits_b, on_b) = counter();
        event_loop.add_keyboard_listener(65, on_a);
        event_loop.add_keyboard_listener(66, on_b);

        event_loop.add_provider(vec![
            Event::KeyboardButtonDown { key: 65 },
            Event::KeyboardButtonDown { key: 65 },
            Event::Exit,
        ]);
        event_loop.start();

        assert_eq!(*hits_a.borrow(), 2);
        assert_eq!(*hits_b.borrow(), 0);
    }

    #[test]
    fn kind_listeners_run_before_key_listeners_in_registration_order() {
        let mut event_loop = test_loop();
        let order = Rc::new(RefCell::new(Vec::new()));

        for label in ["kind-1", "kind-2"] {
            let order = Rc::clone(&order);
            event_loop.add_event_listener(
                EventKind::KeyboardButtonDown,
                move |_: &Event, _: &ProviderHandle| order.borrow_mut().push(label),
            );
        }
        let key_order = Rc::clone(&order);
        event_loop.add_keyboard_listener(13, move |_: &Event, _: &ProviderHandle| {
            key_order.borrow_mut().push("key")
        });

        event_loop.add_provider(vec![Event::KeyboardButtonDown { key: 13 }, Event::Exit]);
        event_loop.start();

        assert_eq!(*order.borrow(), vec!["kind-1", "kind-2", "key"]);
    }

    #[test]
    fn duplicate_registration_dispatches_twice() {
        let mut event_loop = test_loop();
        let (hits, on_cmd) = counter();
        let again = {
            let hits = Rc::clone(&hits);
            move |_: &Event, _: &ProviderHandle| *hits.borrow_mut() += 1
        };
        event_loop.add_event_listener(EventKind::Command, on_cmd);
        event_loop.add_event_listener(EventKind::Command, again);

        event_loop.add_provider(vec![
            Event::Command {
                command: "spawn".into(),
            },
            Event::Exit,
        ]);
        event_loop.start();

        assert_eq!(*hits.borrow(), 2);
    }

    // ── exit semantics ────────────────────────────────────────────────────

    #[test]
    fn exit_runs_its_listeners_then_stops_dispatch() {
        let mut event_loop = test_loop();
        let (exit_hits, on_exit) = counter();
        let (key_hits, on_key) = counter();
        event_loop.add_event_listener(EventKind::Exit, on_exit);
        event_loop.add_keyboard_listener(65, on_key);

        event_loop.add_provider(vec![
            Event::KeyboardButtonDown { key: 65 },
            Event::Exit,
            // Behind Exit in the same batch: must never be delivered.
            Event::KeyboardButtonDown { key: 65 },
        ]);
        event_loop.start();

        assert_eq!(event_loop.state(), LoopState::Stopped);
        assert_eq!(*exit_hits.borrow(), 1);
        assert_eq!(*key_hits.borrow(), 1);
    }

    #[test]
    fn start_on_a_stopped_loop_returns_immediately() {
        let mut event_loop = test_loop();
        event_loop.add_provider(vec![Event::Exit]);
        event_loop.start();
        assert_eq!(event_loop.state(), LoopState::Stopped);

        let (hits, on_tick) = counter();
        event_loop.add_event_listener(EventKind::Loop, on_tick);
        event_loop.start();
        assert_eq!(*hits.borrow(), 0);
    }

    // ── injection ─────────────────────────────────────────────────────────

    #[test]
    fn thrown_events_are_dispatched_in_a_later_cycle() {
        let mut event_loop = test_loop();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let chain = Rc::clone(&seen);
        event_loop.add_event_listener(
            EventKind::Command,
            move |event: &Event, provider: &ProviderHandle| {
                chain.borrow_mut().push(event.kind());
                provider.throw_event(Event::FileInput {
                    file_name: "save.dat".into(),
                });
            },
        );
        let tail = Rc::clone(&seen);
        event_loop.add_event_listener(
            EventKind::FileInput,
            move |event: &Event, provider: &ProviderHandle| {
                tail.borrow_mut().push(event.kind());
                provider.throw_event(Event::Exit);
            },
        );

        event_loop.add_provider(vec![Event::Command {
            command: "load save.dat".into(),
        }]);
        event_loop.start();

        assert_eq!(event_loop.state(), LoopState::Stopped);
        assert_eq!(*seen.borrow(), vec![EventKind::Command, EventKind::FileInput]);
    }

    #[test]
    fn loop_ticks_reach_loop_listeners_via_the_loop_slot() {
        let mut event_loop = test_loop();
        let ticks_seen = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&ticks_seen);
        event_loop.add_event_listener(
            EventKind::Loop,
            move |event: &Event, provider: &ProviderHandle| {
                if let Event::Loop { ticks } = event {
                    log.borrow_mut().push(*ticks);
                    if *ticks >= 2 {
                        provider.throw_event(Event::Exit);
                    }
                }
            },
        );
        event_loop.start();

        assert_eq!(event_loop.state(), LoopState::Stopped);
        assert_eq!(&ticks_seen.borrow()[..3], &[0, 1, 2]);
    }

    // ── isolation ─────────────────────────────────────────────────────────

    #[test]
    fn panicking_listener_does_not_take_down_the_loop() {
        let mut event_loop = test_loop();
        event_loop.add_event_listener(EventKind::Message, |_: &Event, _: &ProviderHandle| {
            panic!("listener bug")
        });
        let (hits, on_msg) = counter();
        event_loop.add_event_listener(EventKind::Message, on_msg);

        event_loop.add_provider(vec![
            Event::Message { data: b"hi".to_vec() },
            Event::Exit,
        ]);
        event_loop.start();

        assert_eq!(event_loop.state(), LoopState::Stopped);
        assert_eq!(*hits.borrow(), 1);
    }
}
