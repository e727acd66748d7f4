use ratatui::layout::{Position, Rect};

/// Trait for widgets that can place the terminal cursor
pub trait CursorSupport {
    /// Calculate the screen cell for a logical `(x, y)` position inside `area`
    fn calculate_cursor_position(&self, logical_pos: (usize, usize), area: Rect) -> Position;

    /// Get the cursor context identifier for this widget
    fn get_cursor_context(&self) -> &str;
}

/// Offset `logical` by `scroll` and pin it inside `[start, start + len)`.
pub(crate) fn screen_coord(start: u16, len: u16, logical: usize, scroll: usize) -> u16 {
    let offset = logical.saturating_sub(scroll).min(u16::MAX as usize) as u16;
    start.saturating_add(offset.min(len.saturating_sub(1)))
}
