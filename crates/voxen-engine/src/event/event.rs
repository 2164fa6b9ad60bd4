use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Everything a provider can hand to the loop.
///
/// Exactly one variant's fields are meaningful per instance. This is the
/// authoritative fine-grained schema; earlier engines collapsed keyboard
/// and mouse traffic into coarse `Keyboard`/`Mouse` kinds.
#[derive(Clone)]
pub enum Event {
    KeyboardButtonDown {
        key: i32,
    },
    KeyboardButtonUp {
        key: i32,
    },
    MouseButtonDown {
        button: i32,
        x: i32,
        y: i32,
    },
    MouseButtonUp {
        button: i32,
        x: i32,
        y: i32,
    },
    MouseWheel {
        x_dir: i32,
        y_dir: i32,
        x: i32,
        y: i32,
    },
    MouseMotion {
        x: i32,
        y: i32,
        x_rel: i32,
        y_rel: i32,
    },
    Custom {
        kind: i32,
        payload: Arc<dyn Any + Send + Sync>,
    },
    ServerSync {
        data: Vec<u8>,
    },
    Message {
        data: Vec<u8>,
    },
    FileInput {
        file_name: String,
    },
    Command {
        command: String,
    },
    Loop {
        ticks: u64,
    },
    Exit,
}

/// Listener-table index: the variant tag without its payload.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EventKind {
    KeyboardButtonDown,
    KeyboardButtonUp,
    MouseButtonDown,
    MouseButtonUp,
    MouseWheel,
    MouseMotion,
    Custom,
    ServerSync,
    Message,
    FileInput,
    Command,
    Loop,
    Exit,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::KeyboardButtonDown { .. } => EventKind::KeyboardButtonDown,
            Event::KeyboardButtonUp { .. } => EventKind::KeyboardButtonUp,
            Event::MouseButtonDown { .. } => EventKind::MouseButtonDown,
            Event::MouseButtonUp { .. } => EventKind::MouseButtonUp,
            Event::MouseWheel { .. } => EventKind::MouseWheel,
            Event::MouseMotion { .. } => EventKind::MouseMotion,
            Event::Custom { .. } => EventKind::Custom,
            Event::ServerSync { .. } => EventKind::ServerSync,
            Event::Message { .. } => EventKind::Message,
            Event::FileInput { .. } => EventKind::FileInput,
            Event::Command { .. } => EventKind::Command,
            Event::Loop { .. } => EventKind::Loop,
            Event::Exit => EventKind::Exit,
        }
    }

    /// Key code for the keyboard kinds, `None` for everything else.
    pub fn key(&self) -> Option<i32> {
        match self {
            Event::KeyboardButtonDown { key } | Event::KeyboardButtonUp { key } => Some(*key),
            _ => None,
        }
    }
}

// Custom payloads are opaque, so Debug is written by hand.
impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::KeyboardButtonDown { key } => {
                f.debug_struct("KeyboardButtonDown").field("key", key).finish()
            }
            Event::KeyboardButtonUp { key } => {
                f.debug_struct("KeyboardButtonUp").field("key", key).finish()
            }
            Event::MouseButtonDown { button, x, y } => f
                .debug_struct("MouseButtonDown")
                .field("button", button)
                .field("x", x)
                .field("y", y)
                .finish(),
            Event::MouseButtonUp { button, x, y } => f
                .debug_struct("MouseButtonUp")
                .field("button", button)
                .field("x", x)
                .field("y", y)
                .finish(),
            Event::MouseWheel { x_dir, y_dir, x, y } => f
                .debug_struct("MouseWheel")
                .field("x_dir", x_dir)
                .field("y_dir", y_dir)
                .field("x", x)
                .field("y", y)
                .finish(),
            Event::MouseMotion { x, y, x_rel, y_rel } => f
                .debug_struct("MouseMotion")
                .field("x", x)
                .field("y", y)
                .field("x_rel", x_rel)
                .field("y_rel", y_rel)
                .finish(),
            Event::Custom { kind, .. } => f
                .debug_struct("Custom")
                .field("kind", kind)
                .finish_non_exhaustive(),
            Event::ServerSync { data } => {
                f.debug_struct("ServerSync").field("len", &data.len()).finish()
            }
            Event::Message { data } => {
                f.debug_struct("Message").field("len", &data.len()).finish()
            }
            Event::FileInput { file_name } => f
                .debug_struct("FileInput")
                .field("file_name", file_name)
                .finish(),
            Event::Command { command } => {
                f.debug_struct("Command").field("command", command).finish()
            }
            Event::Loop { ticks } => f.debug_struct("Loop").field("ticks", ticks).finish(),
            Event::Exit => f.write_str("Exit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Event::Exit.kind(), EventKind::Exit);
        assert_eq!(
            Event::KeyboardButtonDown { key: 32 }.kind(),
            EventKind::KeyboardButtonDown
        );
        assert_eq!(Event::Loop { ticks: 9 }.kind(), EventKind::Loop);
    }

    #[test]
    fn key_is_only_set_for_keyboard_kinds() {
        assert_eq!(Event::KeyboardButtonUp { key: 27 }.key(), Some(27));
        assert_eq!(
            Event::MouseButtonDown {
                button: 1,
                x: 0,
                y: 0
            }
            .key(),
            None
        );
        assert_eq!(Event::Exit.key(), None);
    }

    #[test]
    fn custom_payload_downcasts_across_a_clone() {
        let event = Event::Custom {
            kind: 7,
            payload: Arc::new(42u32),
        };
        let copy = event.clone();
        if let Event::Custom { kind, payload } = &copy {
            assert_eq!(*kind, 7);
            assert_eq!(payload.downcast_ref::<u32>(), Some(&42));
        } else {
            panic!("clone changed the variant");
        }
    }
}
