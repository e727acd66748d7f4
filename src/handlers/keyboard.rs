use anyhow::Result;
use tracing::{debug, trace};

use crate::input::Key;
use crate::mode::Mode;
use crate::App;

/// Cursor delta for an arrow key
fn arrow_delta(key: Key) -> Option<(isize, isize)> {
    match key {
        Key::Left => Some((-1, 0)),
        Key::Right => Some((1, 0)),
        Key::Down => Some((0, 1)),
        Key::Up => Some((0, -1)),
        _ => None,
    }
}

fn printable(key: Key) -> Option<u8> {
    match key {
        Key::Char(b) if (0x20..=0x7E).contains(&b) => Some(b),
        _ => None,
    }
}

impl App {
    /// Feed one key through the mode state machine
    pub async fn handle_key(&mut self, key: Key) -> Result<()> {
        trace!(?key, mode = self.mode.as_str(), "key input");

        if key == Key::Ctrl(b'q') {
            self.quit();
            return Ok(());
        }

        match self.mode {
            Mode::Normal => self.handle_normal_mode_key(key),
            Mode::Insert => self.handle_insert_mode_key(key),
            Mode::Command => self.handle_command_mode_key(key).await?,
        }

        Ok(())
    }

    /// Handle keyboard input in normal mode
    fn handle_normal_mode_key(&mut self, key: Key) {
        let delta = match key {
            Key::Char(b'i') => {
                self.mode = Mode::Insert;
                debug!("mode -> insert");
                return;
            }
            Key::Char(b':') => {
                self.open_command_line();
                debug!("mode -> command");
                return;
            }
            Key::Char(b'h') => (-1, 0),
            Key::Char(b'l') => (1, 0),
            Key::Char(b'j') => (0, 1),
            Key::Char(b'k') => (0, -1),
            other => match arrow_delta(other) {
                Some(delta) => delta,
                None => return,
            },
        };

        self.active_buffer_mut().move_cursor(delta.0, delta.1);
    }

    /// Handle keyboard input in insert mode
    fn handle_insert_mode_key(&mut self, key: Key) {
        let buffer = self.active_buffer_mut();
        match key {
            Key::Enter => buffer.insert_newline(),
            Key::Backspace => buffer.delete_char(),
            Key::Escape => {
                self.mode = Mode::Normal;
                debug!("mode -> normal");
            }
            other => {
                if let Some(byte) = printable(other) {
                    buffer.insert_char(byte);
                } else if let Some((dx, dy)) = arrow_delta(other) {
                    buffer.move_cursor(dx, dy);
                }
            }
        }
    }

    /// Handle keyboard input in command mode
    async fn handle_command_mode_key(&mut self, key: Key) -> Result<()> {
        match key {
            Key::Enter => {
                let command = self.close_command_line().unwrap_or_default();
                self.execute_command(&command).await?;
            }
            Key::Escape => {
                self.close_command_line();
                debug!("command cancelled");
            }
            Key::Backspace => self.focused_buffer_mut().delete_char(),
            // The command line has a single line, so horizontal moves never wrap.
            Key::Left => self.focused_buffer_mut().move_cursor(-1, 0),
            Key::Right => self.focused_buffer_mut().move_cursor(1, 0),
            other => {
                if let Some(byte) = printable(other) {
                    self.focused_buffer_mut().insert_char(byte);
                }
            }
        }

        Ok(())
    }
}
