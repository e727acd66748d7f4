//! Integration tests for the widget system
//!
//! Renders the App into a test backend and inspects the resulting cells

use ratatui::{backend::TestBackend, layout::Position, Terminal};

use mined::{App, Key, TextBuffer};

fn draw(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal
}

fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

async fn press(app: &mut App, keys: &str) {
    for key in Key::sequence(keys) {
        app.handle_key(key).await.unwrap();
    }
}

#[test]
fn test_viewport_follows_cursor_down() {
    let mut app = App::default();
    app.buffers[0] = TextBuffer::from_bytes(
        (1..=30)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n")
            .as_bytes(),
    );
    app.active_buffer_mut().set_cursor(0, 29);

    let mut terminal = draw(&mut app, 20, 6);
    assert_eq!(app.active_buffer().viewport(), (0, 25));
    assert!(row(&terminal, 0).starts_with(" 26 line 26"));
    assert!(row(&terminal, 4).starts_with(" 30 line 30"));
    assert_eq!(
        terminal.get_cursor_position().unwrap(),
        Position::new(4, 4)
    );
}

#[test]
fn test_horizontal_scroll_and_no_gutter() {
    let mut app = App::default();
    app.config.editor.show_line_numbers = false;
    app.buffers[0] = TextBuffer::from_bytes(b"0123456789abcdefghij");
    app.active_buffer_mut().set_cursor(20, 0);

    let mut terminal = draw(&mut app, 10, 3);
    // Cursor sits one past the last byte, on the last visible column.
    assert_eq!(app.active_buffer().viewport(), (11, 0));
    assert!(row(&terminal, 0).starts_with("bcdefghij"));
    assert_eq!(
        terminal.get_cursor_position().unwrap(),
        Position::new(9, 0)
    );
}

#[test]
fn test_non_printable_bytes_take_one_cell() {
    let mut app = App::default();
    app.config.editor.show_line_numbers = false;
    app.buffers[0] = TextBuffer::from_bytes(b"a\xff\rb");
    app.active_buffer_mut().set_cursor(4, 0);

    let mut terminal = draw(&mut app, 10, 3);
    assert!(row(&terminal, 0).starts_with("a??b"));
    assert_eq!(
        terminal.get_cursor_position().unwrap(),
        Position::new(4, 0)
    );
}

#[tokio::test]
async fn test_command_window_takes_cursor() {
    let mut app = App::default();
    press(&mut app, ":wq").await;

    let mut terminal = draw(&mut app, 40, 10);
    // 36 wide window at (2, 2); input row inside the border.
    assert!(row(&terminal, 2).contains("Command"));
    let input: String = row(&terminal, 3).chars().skip(3).take(3).collect();
    assert_eq!(input, ":wq");
    assert_eq!(
        terminal.get_cursor_position().unwrap(),
        Position::new(6, 3)
    );
    assert!(row(&terminal, 9).starts_with(" COMMAND "));
}

#[tokio::test]
async fn test_cursor_returns_to_editor_after_escape() {
    let mut app = App::default();
    press(&mut app, "iabc\x1b:w\x1b").await;

    let mut terminal = draw(&mut app, 40, 10);
    assert_eq!(
        terminal.get_cursor_position().unwrap(),
        Position::new(7, 0)
    );
    assert!(!row(&terminal, 3).contains(":w"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = App::default();
    app.buffers[0] = TextBuffer::from_bytes(b"hello\nworld");
    app.active_buffer_mut().set_cursor(5, 1);
    let _ = draw(&mut app, 2, 2);
    let _ = draw(&mut app, 1, 1);
}
