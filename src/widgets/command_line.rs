use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::buffer::TextBuffer;
use crate::widgets::cursor::{screen_coord, CursorSupport};
use crate::widgets::editor::display_byte;

const PROMPT: &str = ":";
const MAX_WIDTH: u16 = 60;
const HEIGHT: u16 = 3;

/// Overlay window editing the `:` command buffer
pub struct CommandLine<'a> {
    buffer: &'a TextBuffer,
}

impl<'a> CommandLine<'a> {
    pub fn new(buffer: &'a TextBuffer) -> Self {
        Self { buffer }
    }

    /// Window placed in the upper third of `area`, centered horizontally
    pub fn window_rect(area: Rect) -> Rect {
        let width = area.width.saturating_sub(4).min(MAX_WIDTH).max(area.width.min(10));
        let height = HEIGHT.min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 3,
            width,
            height,
        )
    }

    fn input_rect(area: Rect) -> Rect {
        Block::default()
            .borders(Borders::ALL)
            .inner(Self::window_rect(area))
    }

    /// Columns available for command text after the prompt
    pub fn input_width(area: Rect) -> usize {
        (Self::input_rect(area).width as usize).saturating_sub(PROMPT.len())
    }
}

impl Widget for CommandLine<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        let window = Self::window_rect(area);
        Clear.render(window, buf);

        let block = Block::default()
            .title(Span::styled(
                " Command ",
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Rgb(0, 100, 200))
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(Color::Rgb(0, 150, 255))
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(Color::Rgb(20, 20, 30)));

        let inner = block.inner(window);
        block.render(window, buf);

        let (scroll_col, _) = self.buffer.viewport();
        let text: String = self
            .buffer
            .line(0)
            .unwrap_or_default()
            .iter()
            .skip(scroll_col)
            .take(Self::input_width(area))
            .map(|&b| display_byte(b))
            .collect();

        let input_line = Line::from(vec![
            Span::styled(
                PROMPT,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(text, Style::default().fg(Color::White)),
        ]);
        Paragraph::new(input_line).render(inner, buf);
    }
}

impl CursorSupport for CommandLine<'_> {
    fn calculate_cursor_position(&self, logical_pos: (usize, usize), area: Rect) -> Position {
        let inner = Self::input_rect(area);
        let prompt = (PROMPT.len() as u16).min(inner.width.saturating_sub(1));
        let (scroll_col, _) = self.buffer.viewport();

        Position::new(
            screen_coord(
                inner.x + prompt,
                inner.width - prompt,
                logical_pos.0,
                scroll_col,
            ),
            inner.y,
        )
    }

    fn get_cursor_context(&self) -> &str {
        "command_line"
    }
}
