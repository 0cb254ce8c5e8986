pub const RECOVERED: &str = "Draft recovered";
pub const AUTO_SAVED: &str = "Draft auto-saved";
pub const SAVING: &str = "Saving...";
pub const READY: &str = "Ready to save";
pub const REMOVED: &str = "Draft removed";

/// What the status line is currently telling the user. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Cleared,
}

impl SaveStatus {
    /// Drives the saved indicator next to the status message.
    pub fn is_saved(self) -> bool {
        matches!(self, SaveStatus::Saved)
    }

    pub fn default_message(self) -> &'static str {
        match self {
            SaveStatus::Idle => READY,
            SaveStatus::Saving => SAVING,
            SaveStatus::Saved => AUTO_SAVED,
            SaveStatus::Cleared => REMOVED,
        }
    }
}
