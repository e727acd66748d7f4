//! Minimal modal terminal text editor

pub mod app;
pub mod buffer;
pub mod commands;
pub mod config;
pub mod handlers;
pub mod input;
pub mod input_system;
pub mod logging;
pub mod mode;
pub mod ui;
pub mod widgets;

// Re-export main types for convenience
pub use app::App;
pub use buffer::TextBuffer;
pub use input::Key;
pub use mode::Mode;
