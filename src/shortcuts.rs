/// Editor key combinations handled instead of the platform default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd+L
    Clear,
    /// Ctrl/Cmd+S
    ForceSave,
}

impl Shortcut {
    /// `command` is true when either Ctrl or Cmd is held.
    pub fn from_key(key: &str, command: bool) -> Option<Self> {
        if !command {
            return None;
        }
        match key {
            "l" => Some(Shortcut::Clear),
            "s" => Some(Shortcut::ForceSave),
            _ => None,
        }
    }
}
