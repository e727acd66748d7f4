//! File persistence for [`TextBuffer`].
//!
//! Reads are CRLF tolerant; writes always use `\n`.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::{split_lines, TextBuffer};

#[derive(Debug, Error)]
pub enum BufferError {
    #[error("No file name")]
    NoPath,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|s| s.to_owned())
        .unwrap_or_else(|| "untitled".to_owned())
}

impl TextBuffer {
    /// Create an empty buffer that will be written to `path` on save.
    pub fn with_path(path: PathBuf) -> Self {
        let mut buffer = Self::new();
        buffer.name = display_name(&path);
        buffer.path = Some(path);
        buffer
    }

    pub async fn from_path_async(path: PathBuf) -> Result<Self, BufferError> {
        let mut buffer = Self::new();
        buffer.load_file(path).await?;
        Ok(buffer)
    }

    /// Replace the whole buffer with the contents of `path`.
    ///
    /// Cursor and viewport go back to the origin. On error nothing changes.
    pub async fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), BufferError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;

        self.lines = split_lines(&bytes);
        self.cursor_x = 0;
        self.cursor_y = 0;
        self.viewport_x = 0;
        self.viewport_y = 0;
        self.modified = false;
        self.name = display_name(path);
        self.path = Some(path.to_path_buf());

        info!(path = %path.display(), lines = self.lines.len(), "file loaded");
        Ok(())
    }

    /// Write to the path the buffer was loaded from or last saved as.
    pub async fn save_file(&mut self) -> Result<usize, BufferError> {
        let path = self.path.clone().ok_or(BufferError::NoPath)?;
        self.save_file_as(path).await
    }

    /// Write the buffer to `path` and adopt it as the buffer's file.
    ///
    /// Returns the number of bytes written.
    pub async fn save_file_as(&mut self, path: impl AsRef<Path>) -> Result<usize, BufferError> {
        let path = path.as_ref();
        let bytes = self.to_bytes();
        tokio::fs::write(path, &bytes).await?;

        self.modified = false;
        self.name = display_name(path);
        self.path = Some(path.to_path_buf());

        debug!(path = %path.display(), bytes = bytes.len(), "file saved");
        Ok(bytes.len())
    }
}
