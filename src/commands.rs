//! `:` command mini-language
//!
//! Parsing is kept apart from execution so the grammar can be tested
//! without an [`App`](crate::App).

use std::path::PathBuf;

/// A parsed `:` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank input
    Empty,
    Quit,
    /// Save the active buffer, optionally under a new path
    Write(Option<PathBuf>),
    WriteQuit,
    /// Open a file into a new buffer
    Edit(PathBuf),
    NewBuffer,
    NextBuffer,
    PrevBuffer,
    SetLineNumbers(bool),
    /// Known command used the wrong way; holds the usage hint
    Usage(&'static str),
    Unknown(String),
}

impl Command {
    /// Parse a command line, ignoring surrounding spaces.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (name, arg) = match input.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (input, ""),
        };

        match (name, arg) {
            ("", _) => Command::Empty,
            ("q" | "quit", "") => Command::Quit,
            ("w" | "write", "") => Command::Write(None),
            ("w" | "write", path) => Command::Write(Some(PathBuf::from(path))),
            ("wq" | "x", "") => Command::WriteQuit,
            ("e" | "edit", "") => Command::Usage("Usage: e <file>"),
            ("e" | "edit", path) => Command::Edit(PathBuf::from(path)),
            ("new", "") => Command::NewBuffer,
            ("bn" | "bnext", "") => Command::NextBuffer,
            ("bp" | "bprev", "") => Command::PrevBuffer,
            ("set", "nu" | "number") => Command::SetLineNumbers(true),
            ("set", "nonu" | "nonumber") => Command::SetLineNumbers(false),
            _ => Command::Unknown(input.to_string()),
        }
    }
}
