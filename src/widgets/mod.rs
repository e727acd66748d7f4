pub mod command_line;
pub mod cursor;
pub mod editor;
pub mod status_bar;

pub use command_line::CommandLine;
pub use cursor::CursorSupport;
pub use editor::BufferView;
pub use status_bar::StatusLine;
