//! Editor modes

/// Active input-interpretation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Navigation
    #[default]
    Normal,
    /// Text entry into the active buffer
    Insert,
    /// Collecting a `:` command in the command buffer
    Command,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Command => "COMMAND",
        }
    }
}
