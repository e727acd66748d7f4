/// Input handlers for the application
pub mod command;
pub mod keyboard;
