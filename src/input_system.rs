use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use ratatui::crossterm::event::{self, Event};
use tracing::trace;

use crate::input::Key;

/// Source of key presses for the run loop
pub trait EventSource {
    /// Wait at most `timeout` for the next key; `None` when nothing arrived.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<Key>>;
}

/// Reads key presses from the terminal through crossterm
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<Key>> {
        if !event::poll(timeout).context("Failed to poll terminal events")? {
            return Ok(None);
        }

        match event::read().context("Failed to read terminal event")? {
            Event::Key(key) => match Key::try_from(key) {
                Ok(key) => Ok(Some(key)),
                Err(ignored) => {
                    trace!(?ignored, "ignored key event");
                    Ok(None)
                }
            },
            // Resize is picked up by the next draw.
            _ => Ok(None),
        }
    }
}

/// Replays a fixed key sequence; errors once it runs dry so a loop that
/// never quits cannot spin forever.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    keys: VecDeque<Key>,
}

impl ScriptedEvents {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Script from raw terminal bytes, see [`Key::from_byte`].
    pub fn from_text(text: &str) -> Self {
        Self::new(Key::sequence(text))
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl EventSource for ScriptedEvents {
    fn poll_key(&mut self, _timeout: Duration) -> Result<Option<Key>> {
        self.keys
            .pop_front()
            .map(Some)
            .ok_or_else(|| anyhow!("Input script exhausted"))
    }
}
