use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::mode::Mode;

const BACKGROUND: Style = Style::new().fg(Color::White).bg(Color::LightBlue);

/// Bottom status row: mode, file, message on the left; buffer index and
/// `line:column` on the right. The right side wins when space runs out.
pub struct StatusLine<'a> {
    pub mode: Mode,
    pub name: &'a str,
    pub modified: bool,
    /// Cursor as `(x, y)`, zero-based
    pub cursor: (usize, usize),
    /// Active buffer index and buffer count
    pub buffer_index: (usize, usize),
    pub message: Option<&'a str>,
}

impl<'a> StatusLine<'a> {
    pub fn new(mode: Mode, name: &'a str) -> Self {
        Self {
            mode,
            name,
            modified: false,
            cursor: (0, 0),
            buffer_index: (0, 1),
            message: None,
        }
    }

    pub fn modified(mut self, modified: bool) -> Self {
        self.modified = modified;
        self
    }

    pub fn cursor(mut self, cursor: (usize, usize)) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn buffer_index(mut self, index: usize, count: usize) -> Self {
        self.buffer_index = (index, count);
        self
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    fn mode_style(&self) -> Style {
        let bg = match self.mode {
            Mode::Normal => Color::DarkGray,
            Mode::Insert => Color::Green,
            Mode::Command => Color::Magenta,
        };
        Style::default()
            .fg(Color::White)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    /// 1-based `line:column`
    pub fn position_text(&self) -> String {
        format!("{}:{}", self.cursor.1 + 1, self.cursor.0 + 1)
    }

    fn left_line(&self) -> Line<'a> {
        let mut spans = vec![
            Span::styled(format!(" {} ", self.mode.as_str()), self.mode_style()),
            Span::raw(format!(" {}", self.name)),
        ];
        if self.modified {
            spans.push(Span::raw(" [+]"));
        }
        if let Some(message) = self.message {
            spans.push(Span::styled(
                format!("  {}", message),
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    }

    fn right_line(&self) -> Line<'a> {
        let (index, count) = self.buffer_index;
        let mut spans = Vec::new();
        if count > 1 {
            spans.push(Span::raw(format!("Buffer {}/{} | ", index + 1, count)));
        }
        spans.push(Span::raw(format!("{} ", self.position_text())));
        Line::from(spans)
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, BACKGROUND);

        let left = self.left_line();
        let right = self.right_line();
        let right_width = (right.width() as u16).min(area.width);

        buf.set_line(area.x, area.y, &left, area.width - right_width);
        buf.set_line(area.right() - right_width, area.y, &right, right_width);
    }
}
