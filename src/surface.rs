//! Collaborators the draft component drives.
//!
//! The editable field, count label and status line live in whatever UI hosts
//! the component; edit events and clear requests flow the other way, as calls
//! into [`crate::draft::DraftPersistence`].

/// The editable text field plus the displays around it.
pub trait EditorSurface {
    fn text(&self) -> String;

    fn set_text(&mut self, text: &str);

    fn show_count(&mut self, count: usize);

    /// `saved` toggles the saved indicator.
    fn show_status(&mut self, message: &str, saved: bool);

    /// Give keyboard focus back to the editable field.
    fn focus(&mut self);
}

/// A blocking yes/no question put to the user.
pub trait ConfirmPrompt {
    fn confirm(&mut self, question: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, question: &str) -> bool {
        self(question)
    }
}
