use iced::widget::text_editor;

use autosave::status::SaveStatus;
use autosave::surface::EditorSurface;

/// The editor widget's content plus everything drawn around it.
pub(super) struct EditorPane {
    pub(super) content: text_editor::Content,
    pub(super) count: usize,
    pub(super) status: String,
    pub(super) saved: bool,
    pub(super) focus_requested: bool,
}

impl EditorPane {
    pub(super) fn new() -> Self {
        Self {
            content: text_editor::Content::new(),
            count: 0,
            status: SaveStatus::Idle.default_message().to_string(),
            saved: false,
            focus_requested: false,
        }
    }

    /// Returns true once per focus request.
    pub(super) fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}

impl EditorSurface for EditorPane {
    fn text(&self) -> String {
        self.content.text()
    }

    fn set_text(&mut self, text: &str) {
        self.content = text_editor::Content::with_text(text);
    }

    fn show_count(&mut self, count: usize) {
        self.count = count;
    }

    fn show_status(&mut self, message: &str, saved: bool) {
        self.status = message.to_string();
        self.saved = saved;
    }

    fn focus(&mut self) {
        self.focus_requested = true;
    }
}
