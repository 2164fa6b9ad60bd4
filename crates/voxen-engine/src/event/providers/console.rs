use std::io::BufRead;
use std::thread;

use anyhow::Context;
use crossbeam_channel::{Receiver, unbounded};

use crate::event::{Event, EventProvider};

/// Reads stdin on a background thread and surfaces each line as an event.
///
/// Lines starting with `/` become `Command` (prefix stripped); everything
/// else becomes `Message` carrying the line's bytes. The reader thread
/// ends on EOF, read error, or loop teardown; the poll side just drains
/// whatever has arrived.
pub struct ConsoleProvider {
    rx: Receiver<Event>,
}

impl ConsoleProvider {
    pub fn spawn() -> anyhow::Result<Self> {
        let (tx, rx) = unbounded();

        thread::Builder::new()
            .name("voxen-console".into())
            .spawn(move || {
                let stdin = std::io::stdin();
                for line in stdin.lock().lines() {
                    let line = match line {
                        Ok(line) => line,
                        Err(err) => {
                            log::warn!("console reader stopping: {err}");
                            break;
                        }
                    };
                    if tx.send(parse_line(line)).is_err() {
                        break;
                    }
                }
                log::debug!("console reader thread finished");
            })
            .context("failed to spawn console reader thread")?;

        Ok(Self { rx })
    }
}

impl EventProvider for ConsoleProvider {
    fn poll(&mut self, buf: &mut Vec<Event>) {
        buf.extend(self.rx.try_iter());
    }

    fn name(&self) -> &str {
        "console"
    }
}

fn parse_line(line: String) -> Event {
    match line.strip_prefix('/') {
        Some(command) => Event::Command {
            command: command.trim().to_string(),
        },
        None => Event::Message {
            data: line.into_bytes(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    #[test]
    fn slash_lines_become_commands() {
        let event = parse_line("/resize 4 4 4".to_string());
        match event {
            Event::Command { command } => assert_eq!(command, "resize 4 4 4"),
            other => panic!("expected Command, got {:?}", other.kind()),
        }
    }

    #[test]
    fn plain_lines_become_messages() {
        let event = parse_line("hello there".to_string());
        match event {
            Event::Message { data } => assert_eq!(data, b"hello there"),
            other => panic!("expected Message, got {:?}", other.kind()),
        }
    }
}
