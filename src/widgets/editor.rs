use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::buffer::TextBuffer;
use crate::widgets::cursor::{screen_coord, CursorSupport};

const GUTTER_STYLE: Style = Style::new().fg(Color::Rgb(100, 100, 120));
const EMPTY_LINE_MARKER: &str = "~";

/// One cell per byte: printable ASCII as is, tabs as a space, anything else `?`.
pub fn display_byte(byte: u8) -> char {
    match byte {
        0x20..=0x7E => byte as char,
        b'\t' => ' ',
        _ => '?',
    }
}

/// Renders the visible window of a [`TextBuffer`] with an optional
/// line-number gutter. Scrolling is read from the buffer's viewport.
pub struct BufferView<'a> {
    pub buffer: &'a TextBuffer,
    pub show_line_numbers: bool,
}

impl<'a> BufferView<'a> {
    pub fn new(buffer: &'a TextBuffer) -> Self {
        Self {
            buffer,
            show_line_numbers: true,
        }
    }

    pub fn show_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    /// Columns taken by the gutter, separator included
    pub fn gutter_width(&self) -> usize {
        if self.show_line_numbers {
            self.buffer.line_number_width()
        } else {
            0
        }
    }

    /// Columns left for text once the gutter is drawn
    pub fn text_width(&self, area: Rect) -> usize {
        (area.width as usize).saturating_sub(self.gutter_width())
    }

    fn gutter_span(&self, row: usize) -> Span<'static> {
        let width = self.gutter_width().saturating_sub(1);
        Span::styled(format!("{:>width$} ", row + 1), GUTTER_STYLE)
    }
}

impl Widget for BufferView<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        let (scroll_col, scroll_row) = self.buffer.viewport();
        let text_width = self.text_width(area);

        let lines: Vec<Line> = (scroll_row..scroll_row + area.height as usize)
            .map(|row| match self.buffer.line(row) {
                Some(content) => {
                    let visible: String = content
                        .iter()
                        .skip(scroll_col)
                        .take(text_width)
                        .map(|&b| display_byte(b))
                        .collect();

                    if self.show_line_numbers {
                        Line::from(vec![self.gutter_span(row), Span::raw(visible)])
                    } else {
                        Line::from(visible)
                    }
                }
                None => Line::from(Span::styled(EMPTY_LINE_MARKER, GUTTER_STYLE)),
            })
            .collect();

        Paragraph::new(lines)
            .style(Style::default().fg(Color::White).bg(Color::Black))
            .render(area, buf);
    }
}

impl CursorSupport for BufferView<'_> {
    fn calculate_cursor_position(&self, logical_pos: (usize, usize), area: Rect) -> Position {
        let (scroll_col, scroll_row) = self.buffer.viewport();
        let gutter = self.gutter_width().min(area.width.saturating_sub(1) as usize) as u16;

        Position::new(
            screen_coord(
                area.x + gutter,
                area.width - gutter,
                logical_pos.0,
                scroll_col,
            ),
            screen_coord(area.y, area.height, logical_pos.1, scroll_row),
        )
    }

    fn get_cursor_context(&self) -> &str {
        "editor"
    }
}
