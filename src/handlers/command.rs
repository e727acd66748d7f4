use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::buffer::{BufferError, TextBuffer};
use crate::commands::Command;
use crate::App;

impl App {
    /// Execute a command typed on the command line.
    ///
    /// Failures are reported through the status message; nothing here ends
    /// the run loop except an explicit quit.
    pub async fn execute_command(&mut self, input: &str) -> Result<()> {
        let command = Command::parse(input);
        debug!(?command, "execute command");

        match command {
            Command::Empty => {}
            Command::Quit => self.quit(),
            Command::Write(path) => {
                self.write_active_buffer(path).await;
            }
            Command::WriteQuit => {
                if self.write_active_buffer(None).await {
                    self.quit();
                }
            }
            Command::Edit(path) => self.open_file(path).await,
            Command::NewBuffer => {
                self.add_buffer(TextBuffer::new());
                self.set_status_message("New buffer created");
            }
            Command::NextBuffer => self.next_buffer(),
            Command::PrevBuffer => self.prev_buffer(),
            Command::SetLineNumbers(show) => self.config.editor.show_line_numbers = show,
            Command::Usage(hint) => self.set_status_message(hint),
            Command::Unknown(input) => {
                debug!(%input, "unknown command");
                self.set_status_message("Unknown command");
            }
        }

        Ok(())
    }

    /// Save the active buffer, to `path` when given. Returns whether it was written.
    async fn write_active_buffer(&mut self, path: Option<PathBuf>) -> bool {
        let buffer = self.active_buffer_mut();
        let result = match path {
            Some(path) => buffer.save_file_as(path).await,
            None => buffer.save_file().await,
        };

        match result {
            Ok(bytes) => {
                let buffer = self.active_buffer();
                let message = format!(
                    "\"{}\" {}L, {}B written",
                    buffer.name,
                    buffer.line_count(),
                    bytes
                );
                info!(name = %buffer.name, bytes, "buffer written");
                self.set_status_message(message);
                true
            }
            Err(BufferError::NoPath) => {
                self.set_status_message(BufferError::NoPath.to_string());
                false
            }
            Err(e) => {
                warn!("Error saving file: {}", e);
                self.set_status_message(format!("Error saving file: {}", e));
                false
            }
        }
    }

    /// Open `path` in a new buffer; a missing file opens as a new, empty one.
    async fn open_file(&mut self, path: PathBuf) {
        match TextBuffer::from_path_async(path.clone()).await {
            Ok(buffer) => {
                let message = format!("\"{}\" {}L", buffer.name, buffer.line_count());
                self.add_buffer(buffer);
                self.set_status_message(message);
            }
            Err(BufferError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                let buffer = TextBuffer::with_path(path);
                let message = format!("\"{}\" [New]", buffer.name);
                self.add_buffer(buffer);
                self.set_status_message(message);
            }
            Err(e) => {
                warn!(path = %path.display(), "Error opening file: {}", e);
                self.set_status_message(format!(
                    "Error opening file '{}': {}",
                    path.display(),
                    e
                ));
            }
        }
    }
}
