use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, error, info, warn};

use crate::buffer::{BufferError, TextBuffer};
use crate::config::Config;
use crate::input_system::EventSource;
use crate::mode::Mode;

/// Editor state: every open buffer plus the modal input state
pub struct App {
    /// Whether the application is running
    pub running: bool,

    /// Current input mode
    pub mode: Mode,

    /// List of open buffers, never empty
    pub buffers: Vec<TextBuffer>,

    /// Currently active buffer index
    pub active_buffer: usize,

    /// Single-line buffer collecting a `:` command; present only in Command mode
    pub command_buffer: Option<TextBuffer>,

    /// Message to display on status bar
    pub status_message: Option<String>,

    pub config: Config,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            running: true,
            mode: Mode::Normal,
            buffers: vec![TextBuffer::new()],
            active_buffer: 0,
            command_buffer: None,
            status_message: None,
            config,
        }
    }

    /// Load `path` into the active buffer.
    ///
    /// A missing file leaves an empty buffer that remembers `path`, so a
    /// later `:w` creates it. Any other error keeps the buffer untitled so
    /// an unreadable file is never overwritten.
    pub async fn open_initial(&mut self, path: PathBuf) -> Result<(), BufferError> {
        let result = self.active_buffer_mut().load_file(&path).await;
        if let Err(e) = &result {
            let message = format!("Error opening file '{}': {}", path.display(), e);
            if matches!(e, BufferError::Io(io) if io.kind() == ErrorKind::NotFound) {
                *self.active_buffer_mut() = TextBuffer::with_path(path);
            }
            self.set_status_message(message);
        }
        result
    }

    /// Run the poll → update → render loop until a quit is requested.
    ///
    /// Errors while handling a key or drawing a frame are logged and the loop
    /// goes on; only a failing event source ends it early.
    pub async fn run<B: Backend, E: EventSource>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut E,
    ) -> Result<()> {
        let tick = Duration::from_millis(self.config.editor.tick_ms);
        info!(buffers = self.buffers.len(), "editor started");

        while self.running {
            if let Err(e) = terminal.draw(|f| self.render(f)) {
                error!("Rendering error: {}", e);
            }

            match events.poll_key(Duration::ZERO)? {
                Some(key) => {
                    if let Err(e) = self.handle_key(key).await {
                        error!("Error handling key {:?}: {:#}", key, e);
                    }
                }
                None => tokio::time::sleep(tick).await,
            }
        }

        info!("editor stopped");
        Ok(())
    }

    /// Request shutdown; checked once per loop iteration
    pub fn quit(&mut self) {
        if self.has_unsaved_changes() {
            warn!("quitting with unsaved changes");
        } else {
            debug!("quit requested");
        }
        self.running = false;
    }

    /// Get the currently active buffer
    pub fn active_buffer(&self) -> &TextBuffer {
        &self.buffers[self.active_buffer]
    }

    /// Get a mutable reference to the currently active buffer
    pub fn active_buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffers[self.active_buffer]
    }

    /// The buffer receiving input: the command buffer when present
    pub fn focused_buffer_mut(&mut self) -> &mut TextBuffer {
        match self.command_buffer.as_mut() {
            Some(command) => command,
            None => &mut self.buffers[self.active_buffer],
        }
    }

    /// Add a buffer and make it active
    pub fn add_buffer(&mut self, buffer: TextBuffer) -> usize {
        self.buffers.push(buffer);
        self.active_buffer = self.buffers.len() - 1;
        self.active_buffer
    }

    pub fn next_buffer(&mut self) {
        self.active_buffer = (self.active_buffer + 1) % self.buffers.len();
        self.announce_active_buffer();
    }

    pub fn prev_buffer(&mut self) {
        self.active_buffer = match self.active_buffer {
            0 => self.buffers.len() - 1,
            n => n - 1,
        };
        self.announce_active_buffer();
    }

    fn announce_active_buffer(&mut self) {
        let message = format!(
            "Buffer {}/{}: {}",
            self.active_buffer + 1,
            self.buffers.len(),
            self.active_buffer().name
        );
        self.set_status_message(message);
    }

    /// Enter Command mode with a fresh command buffer
    pub fn open_command_line(&mut self) {
        self.command_buffer = Some(TextBuffer::new());
        self.clear_status_message();
        self.mode = Mode::Command;
    }

    /// Drop the command buffer and return to Normal mode, yielding the typed line
    pub fn close_command_line(&mut self) -> Option<String> {
        self.mode = Mode::Normal;
        self.command_buffer
            .take()
            .map(|buffer| String::from_utf8_lossy(buffer.line(0).unwrap_or_default()).into_owned())
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    /// Check if any buffers have unsaved changes
    pub fn has_unsaved_changes(&self) -> bool {
        self.buffers.iter().any(TextBuffer::is_modified)
    }
}
