use std::time::Duration;

use iced::keyboard;
use iced::time::{self, Instant};
use iced::widget::{operation, text_editor, Id};
use iced::{Element, Subscription, Task, Theme};

use autosave::config::Timings;
use autosave::draft::{ClearOutcome, DraftPersistence};
use autosave::error::StorageError;
use autosave::shortcuts::Shortcut;
use autosave::storage::ConfyStore;
use autosave::surface::EditorSurface;

use super::pane::EditorPane;

/// How often deadlines are checked while any are pending.
const TICK_MS: u64 = 50;

const WRITE_FAILED: &str = "Could not save the draft";

pub(super) fn editor_id() -> Id {
    Id::new("draft-editor")
}

#[derive(Debug, Clone)]
pub enum Message {
    EditorAction(text_editor::Action),
    Shortcut(Shortcut),
    RequestClear,
    ConfirmClear(bool),
    Tick(Instant),
}

pub struct State {
    pub(super) draft: DraftPersistence<ConfyStore, EditorPane>,
    pub(super) confirming_clear: bool,
}

impl State {
    pub(super) fn pane(&self) -> &EditorPane {
        self.draft.surface()
    }

    fn report<T>(&mut self, result: Result<T, StorageError>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "draft write failed, will retry on next edit");
            self.draft.surface_mut().show_status(WRITE_FAILED, false);
        }
    }

    fn focus_task(&mut self) -> Task<Message> {
        if self.draft.surface_mut().take_focus_request() {
            operation::focus(editor_id())
        } else {
            Task::none()
        }
    }
}

/// Builds the window state around a store `main` has already opened.
pub fn new(store: ConfyStore, timings: Timings) -> (State, Task<Message>) {
    let mut state = State {
        draft: DraftPersistence::new(store, EditorPane::new(), timings),
        confirming_clear: false,
    };
    let result = state.draft.initialize(Instant::now());
    state.report(result);

    let task = state.focus_task();
    (state, task)
}

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::EditorAction(action) => {
            let is_edit = action.is_edit();
            state.draft.surface_mut().content.perform(action);
            if is_edit {
                let text = state.pane().text();
                let result = state.draft.on_text_changed(&text, Instant::now());
                state.report(result);
            }
        }
        Message::Shortcut(Shortcut::Clear) | Message::RequestClear => {
            state.confirming_clear = true;
        }
        Message::Shortcut(Shortcut::ForceSave) => {
            let result = state.draft.force_save(Instant::now());
            state.report(result);
        }
        Message::ConfirmClear(confirmed) => {
            state.confirming_clear = false;
            let result = state.draft.clear(confirmed, Instant::now());
            if matches!(result, Ok(ClearOutcome::Declined)) {
                // dismissing the dialog still hands the cursor back
                state.draft.surface_mut().focus();
            }
            state.report(result);
        }
        Message::Tick(now) => {
            let result = state.draft.tick(now);
            state.report(result);
        }
    }

    state.focus_task()
}

pub fn view(state: &State) -> Element<'_, Message> {
    super::ui::view(state)
}

pub fn subscription(state: &State) -> Subscription<Message> {
    if state.draft.next_deadline().is_some() {
        time::every(Duration::from_millis(TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Ctrl/Cmd+L and Ctrl/Cmd+S replace the editor's own handling; everything
/// else goes through the default bindings.
pub(super) fn key_binding(
    key_press: text_editor::KeyPress,
) -> Option<text_editor::Binding<Message>> {
    shortcut_binding(&key_press.key, key_press.modifiers)
        .or_else(|| text_editor::Binding::from_key_press(key_press))
}

fn shortcut_binding(
    key: &keyboard::Key,
    modifiers: keyboard::Modifiers,
) -> Option<text_editor::Binding<Message>> {
    let command = modifiers.control() || modifiers.logo();
    match key.as_ref() {
        keyboard::Key::Character(key) => Shortcut::from_key(key, command)
            .map(|shortcut| text_editor::Binding::Custom(Message::Shortcut(shortcut))),
        _ => None,
    }
}

pub fn theme(_state: &State) -> Theme {
    Theme::TokyoNight
}

pub fn settings() -> iced::Settings {
    iced::Settings {
        default_text_size: iced::Pixels(15.0),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(c: &str) -> keyboard::Key {
        keyboard::Key::Character(c.into())
    }

    #[test]
    fn test_ctrl_s_becomes_force_save() {
        let binding = shortcut_binding(&character("s"), keyboard::Modifiers::CTRL);
        assert!(matches!(
            binding,
            Some(text_editor::Binding::Custom(Message::Shortcut(
                Shortcut::ForceSave
            )))
        ));
    }

    #[test]
    fn test_cmd_l_becomes_clear() {
        let binding = shortcut_binding(&character("l"), keyboard::Modifiers::LOGO);
        assert!(matches!(
            binding,
            Some(text_editor::Binding::Custom(Message::Shortcut(Shortcut::Clear)))
        ));
    }

    #[test]
    fn test_other_keys_keep_default_handling() {
        assert!(shortcut_binding(&character("s"), keyboard::Modifiers::empty()).is_none());
        assert!(shortcut_binding(&character("x"), keyboard::Modifiers::CTRL).is_none());
        assert!(shortcut_binding(
            &keyboard::Key::Named(keyboard::key::Named::Enter),
            keyboard::Modifiers::CTRL
        )
        .is_none());
    }
}
