//! # Text Buffer
//!
//! Line-oriented document with a byte cursor and a scroll viewport.
//!
//! ## What it does
//!
//! - Stores text as lines of raw bytes (never decoded for editing)
//! - Tracks the cursor as a (column, line) byte position
//! - Tracks the viewport as top-left scroll offsets
//! - Handles file loading/saving (see [`file`])
//!
//! ## Invariants
//!
//! - There is always at least one line, even when everything is deleted.
//! - `cursor_y < line_count()` and `cursor_x <= line_len(cursor_y)`.
//! - After [`TextBuffer::update_viewport`] the cursor cell lies inside the
//!   visible window.

pub mod file;

pub use file::BufferError;

use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct TextBuffer {
    lines: Vec<Vec<u8>>,
    cursor_x: usize,
    cursor_y: usize,
    viewport_x: usize,
    viewport_y: usize,
    pub path: Option<PathBuf>,
    pub name: String,
    modified: bool,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
            cursor_x: 0,
            cursor_y: 0,
            viewport_x: 0,
            viewport_y: 0,
            path: None,
            name: String::from("untitled"),
            modified: false,
        }
    }

    /// Build a buffer from raw bytes, splitting on `\n` and dropping one
    /// trailing `\r` per line.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buffer = Self::new();
        buffer.lines = split_lines(bytes);
        buffer
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&[u8]> {
        self.lines.get(index).map(Vec::as_slice)
    }

    pub fn line_len(&self, index: usize) -> usize {
        self.lines.get(index).map_or(0, Vec::len)
    }

    /// Cursor as `(x, y)`: byte column and line index.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_x, self.cursor_y)
    }

    /// Viewport as `(x, y)`: first visible column and first visible line.
    pub fn viewport(&self) -> (usize, usize) {
        (self.viewport_x, self.viewport_y)
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Place the cursor, clamping both coordinates into the buffer.
    pub fn set_cursor(&mut self, x: usize, y: usize) {
        self.cursor_y = y.min(self.lines.len() - 1);
        self.cursor_x = x.min(self.current_line_len());
    }

    fn current_line_len(&self) -> usize {
        self.lines[self.cursor_y].len()
    }

    pub fn insert_char(&mut self, byte: u8) {
        let x = self.cursor_x;
        self.lines[self.cursor_y].insert(x, byte);
        self.cursor_x += 1;
        self.modified = true;
    }

    /// Split the current line at the cursor; the tail becomes a new line below.
    pub fn insert_newline(&mut self) {
        let tail = self.lines[self.cursor_y].split_off(self.cursor_x);
        self.lines.insert(self.cursor_y + 1, tail);
        self.cursor_y += 1;
        self.cursor_x = 0;
        self.modified = true;
    }

    /// Backspace: remove the byte before the cursor, or join the current line
    /// onto the previous one when the cursor sits at column 0.
    pub fn delete_char(&mut self) {
        if self.cursor_x > 0 {
            self.lines[self.cursor_y].remove(self.cursor_x - 1);
            self.cursor_x -= 1;
        } else if self.cursor_y > 0 {
            let current = self.lines.remove(self.cursor_y);
            self.cursor_y -= 1;
            let previous = &mut self.lines[self.cursor_y];
            self.cursor_x = previous.len();
            previous.extend_from_slice(&current);
        } else {
            return;
        }
        self.modified = true;
    }

    /// Move vertically by `dy`, then horizontally by `dx`.
    ///
    /// A vertical step that would leave the buffer is dropped entirely. A
    /// horizontal step past either end of the line wraps onto the adjacent
    /// line when there is one.
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        if dy != 0 {
            if let Some(y) = self
                .cursor_y
                .checked_add_signed(dy)
                .filter(|y| *y < self.lines.len())
            {
                self.cursor_y = y;
                self.cursor_x = self.cursor_x.min(self.current_line_len());
            }
        }

        if dx != 0 {
            match self.cursor_x.checked_add_signed(dx) {
                Some(x) if x <= self.current_line_len() => self.cursor_x = x,
                None if self.cursor_y > 0 => {
                    self.cursor_y -= 1;
                    self.cursor_x = self.current_line_len();
                }
                Some(_) if self.cursor_y + 1 < self.lines.len() => {
                    self.cursor_y += 1;
                    self.cursor_x = 0;
                }
                _ => {}
            }
        }
    }

    /// Scroll just enough to keep the cursor inside a `view_height` x
    /// `view_width` window.
    pub fn update_viewport(&mut self, view_height: usize, view_width: usize) {
        self.viewport_y = scroll_axis(self.viewport_y, self.cursor_y, view_height);
        self.viewport_x = scroll_axis(self.viewport_x, self.cursor_x, view_width);
    }

    /// Count the number of digits in a number
    pub fn count_digits(mut n: usize) -> usize {
        let mut digits = 1;
        while n >= 10 {
            digits += 1;
            n /= 10;
        }
        digits
    }

    /// Width of the line-number gutter, separator included.
    /// Reserves three digits so short files don't shift while typing.
    pub fn line_number_width(&self) -> usize {
        Self::count_digits(self.lines.len()).max(3) + 1
    }

    /// Serialized file contents: every line gets a `\n` except a final empty line.
    pub fn to_bytes(&self) -> Vec<u8> {
        let total: usize = self.lines.iter().map(|line| line.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        let last = self.lines.len() - 1;
        for (i, line) in self.lines.iter().enumerate() {
            out.extend_from_slice(line);
            if i < last || !line.is_empty() {
                out.push(b'\n');
            }
        }
        out
    }
}

fn scroll_axis(offset: usize, cursor: usize, size: usize) -> usize {
    if size == 0 {
        offset
    } else if cursor < offset {
        cursor
    } else if cursor >= offset + size {
        cursor + 1 - size
    } else {
        offset
    }
}

fn split_lines(bytes: &[u8]) -> Vec<Vec<u8>> {
    bytes
        .split(|b| *b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextBuffer {
        let mut buffer = TextBuffer::new();
        for b in text.bytes() {
            if b == b'\n' {
                buffer.insert_newline();
            } else {
                buffer.insert_char(b);
            }
        }
        buffer
    }

    #[test]
    fn test_new_buffer_has_one_empty_line() {
        let buffer = TextBuffer::new();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0), Some(&b""[..]));
        assert_eq!(buffer.cursor(), (0, 0));
        assert_eq!(buffer.viewport(), (0, 0));
        assert!(!buffer.is_modified());
        assert_eq!(buffer.name, "untitled");
    }

    #[test]
    fn test_insert_tracks_cursor() {
        let mut buffer = TextBuffer::new();
        for (i, b) in b"hello".iter().enumerate() {
            buffer.insert_char(*b);
            assert_eq!(buffer.line_len(0), i + 1);
            assert_eq!(buffer.cursor(), (i + 1, 0));
        }
        buffer.set_cursor(2, 0);
        buffer.insert_char(b'X');
        assert_eq!(buffer.line(0), Some(&b"heXllo"[..]));
        assert_eq!(buffer.cursor(), (3, 0));
        assert!(buffer.is_modified());
    }

    #[test]
    fn test_newline_then_backspace_round_trips_at_every_split() {
        let original = b"abcdef";
        for split in 0..=original.len() {
            let mut buffer = TextBuffer::from_bytes(original);
            buffer.set_cursor(split, 0);
            buffer.insert_newline();
            assert_eq!(buffer.line_count(), 2);
            assert_eq!(buffer.line(0), Some(&original[..split]));
            assert_eq!(buffer.line(1), Some(&original[split..]));
            assert_eq!(buffer.cursor(), (0, 1));

            buffer.delete_char();
            assert_eq!(buffer.lines(), &[original.to_vec()]);
            assert_eq!(buffer.cursor(), (split, 0));
        }
    }

    #[test]
    fn test_delete_at_origin_is_noop() {
        let mut buffer = TextBuffer::from_bytes(b"abc\ndef");
        buffer.delete_char();
        assert_eq!(buffer.lines(), &[b"abc".to_vec(), b"def".to_vec()]);
        assert_eq!(buffer.cursor(), (0, 0));
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_delete_everything_keeps_one_line() {
        let mut buffer = typed("ab\ncd");
        for _ in 0..10 {
            buffer.delete_char();
        }
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0), Some(&b""[..]));
        assert_eq!(buffer.cursor(), (0, 0));
    }

    #[test]
    fn test_vertical_move_clamps_column() {
        let mut buffer = TextBuffer::from_bytes(b"long line\nab\nlonger line");
        buffer.set_cursor(8, 0);
        buffer.move_cursor(0, 1);
        assert_eq!(buffer.cursor(), (2, 1));
        // Column is never increased back.
        buffer.move_cursor(0, 1);
        assert_eq!(buffer.cursor(), (2, 2));
    }

    #[test]
    fn test_vertical_move_out_of_range_is_rejected() {
        let mut buffer = TextBuffer::from_bytes(b"one\ntwo\nthree");
        buffer.set_cursor(1, 1);
        buffer.move_cursor(0, 5);
        assert_eq!(buffer.cursor(), (1, 1));
        buffer.move_cursor(0, -2);
        assert_eq!(buffer.cursor(), (1, 1));
    }

    #[test]
    fn test_horizontal_wrap() {
        let mut buffer = TextBuffer::from_bytes(b"ab\ncd");
        buffer.set_cursor(0, 1);
        buffer.move_cursor(-1, 0);
        assert_eq!(buffer.cursor(), (2, 0));
        buffer.move_cursor(1, 0);
        assert_eq!(buffer.cursor(), (0, 1));

        // Buffer boundaries.
        buffer.set_cursor(0, 0);
        buffer.move_cursor(-1, 0);
        assert_eq!(buffer.cursor(), (0, 0));
        buffer.set_cursor(2, 1);
        buffer.move_cursor(1, 0);
        assert_eq!(buffer.cursor(), (2, 1));
    }

    #[test]
    fn test_move_cursor_stays_in_bounds_for_large_deltas() {
        let mut buffer = TextBuffer::from_bytes(b"a\n\nabcdef\nxy\n");
        let deltas = [
            (isize::MAX, 0),
            (isize::MIN, 0),
            (0, isize::MAX),
            (0, isize::MIN),
            (1000, -1000),
            (-3, 2),
            (7, 1),
            (-1, -1),
            (1, 1),
        ];
        for _ in 0..3 {
            for (dx, dy) in deltas {
                buffer.move_cursor(dx, dy);
                let (x, y) = buffer.cursor();
                assert!(y < buffer.line_count());
                assert!(x <= buffer.line_len(y));
            }
        }
    }

    #[test]
    fn test_viewport_scrolls_minimally() {
        let mut buffer = TextBuffer::from_bytes(&b"x\n".repeat(50));
        buffer.set_cursor(0, 30);
        buffer.update_viewport(10, 80);
        assert_eq!(buffer.viewport(), (0, 21));

        // Inside the window: no scroll.
        buffer.set_cursor(0, 25);
        buffer.update_viewport(10, 80);
        assert_eq!(buffer.viewport(), (0, 21));

        buffer.set_cursor(0, 3);
        buffer.update_viewport(10, 80);
        assert_eq!(buffer.viewport(), (0, 3));
    }

    #[test]
    fn test_viewport_horizontal_and_idempotent() {
        let mut buffer = TextBuffer::from_bytes(&[b'a'; 100]);
        buffer.set_cursor(100, 0);
        buffer.update_viewport(5, 20);
        assert_eq!(buffer.viewport(), (81, 0));
        buffer.update_viewport(5, 20);
        assert_eq!(buffer.viewport(), (81, 0));

        buffer.set_cursor(10, 0);
        buffer.update_viewport(5, 20);
        assert_eq!(buffer.viewport(), (10, 0));
    }

    #[test]
    fn test_viewport_zero_size_is_left_alone() {
        let mut buffer = TextBuffer::from_bytes(b"abc\ndef");
        buffer.set_cursor(3, 1);
        buffer.update_viewport(0, 0);
        assert_eq!(buffer.viewport(), (0, 0));
    }

    #[test]
    fn test_from_bytes_strips_crlf() {
        let buffer = TextBuffer::from_bytes(b"one\r\ntwo\ra\r\n");
        assert_eq!(
            buffer.lines(),
            &[b"one".to_vec(), b"two\ra".to_vec(), Vec::new()]
        );
    }

    #[test]
    fn test_to_bytes_trailing_empty_line() {
        assert_eq!(TextBuffer::from_bytes(b"a\nb").to_bytes(), b"a\nb\n");
        assert_eq!(TextBuffer::from_bytes(b"a\nb\n").to_bytes(), b"a\nb\n");
        assert_eq!(TextBuffer::new().to_bytes(), b"");
    }

    #[test]
    fn test_line_number_width() {
        assert_eq!(TextBuffer::count_digits(0), 1);
        assert_eq!(TextBuffer::count_digits(12345), 5);
        assert_eq!(TextBuffer::new().line_number_width(), 4);
        let big = TextBuffer::from_bytes(&b"\n".repeat(12_000));
        assert_eq!(big.line_number_width(), 6);
    }
}
