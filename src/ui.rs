use ratatui::prelude::*;
use tracing::trace;

use crate::widgets::{BufferView, CommandLine, CursorSupport, StatusLine};
use crate::App;

impl App {
    /// Main render function for the application UI
    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Editor area
                Constraint::Length(1), // Status line
            ])
            .split(area);

        let editor_cursor = self.render_editor(f, chunks[0]);
        self.render_status_line(f, chunks[1]);

        // The command window draws over everything and takes the cursor.
        let cursor = match self.render_command_line(f, area) {
            Some(position) => position,
            None => editor_cursor,
        };
        f.set_cursor_position(cursor);
    }

    /// Render the active buffer, returning the screen cell of its cursor
    fn render_editor(&mut self, f: &mut Frame, area: Rect) -> Position {
        let show_line_numbers = self.config.editor.show_line_numbers;

        let text_width = BufferView::new(self.active_buffer())
            .show_line_numbers(show_line_numbers)
            .text_width(area);
        self.active_buffer_mut()
            .update_viewport(area.height as usize, text_width);

        let buffer = self.active_buffer();
        let view = BufferView::new(buffer).show_line_numbers(show_line_numbers);
        let position = view.calculate_cursor_position(buffer.cursor(), area);
        trace!(context = view.get_cursor_context(), x = position.x, y = position.y, "cursor");

        f.render_widget(view, area);
        position
    }

    /// Render the status line
    fn render_status_line(&self, f: &mut Frame, area: Rect) {
        let buffer = self.active_buffer();
        let status = StatusLine::new(self.mode, &buffer.name)
            .modified(buffer.is_modified())
            .cursor(buffer.cursor())
            .buffer_index(self.active_buffer, self.buffers.len())
            .message(self.status_message.as_deref());

        f.render_widget(status, area);
    }

    /// Render the command window when a command is being typed
    fn render_command_line(&mut self, f: &mut Frame, area: Rect) -> Option<Position> {
        let command = self.command_buffer.as_mut()?;
        command.update_viewport(1, CommandLine::input_width(area));

        let command = &*command;
        let widget = CommandLine::new(command);
        let position = widget.calculate_cursor_position(command.cursor(), area);
        trace!(context = widget.get_cursor_context(), x = position.x, y = position.y, "cursor");

        f.render_widget(widget, area);
        Some(position)
    }
}
