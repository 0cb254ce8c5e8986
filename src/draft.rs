//! Debounced save/load/clear lifecycle for a single draft.
//!
//! Timers are plain deadlines owned by [`DraftPersistence`]; the host calls
//! [`DraftPersistence::tick`] with the current instant and whatever came due
//! runs. That keeps the component single-threaded and lets tests drive time
//! explicitly.

use std::time::Instant;

use crate::config::Timings;
use crate::error::StorageError;
use crate::status::{SaveStatus, AUTO_SAVED, READY, RECOVERED, REMOVED, SAVING};
use crate::storage::{KeyValueStore, COUNT_KEY, DRAFT_KEY};
use crate::surface::{ConfirmPrompt, EditorSurface};

pub const CLEAR_QUESTION: &str = "Clear the draft? This cannot be undone.";

/// Length of a draft as shown to the user, in UTF-16 code units, so
/// characters outside the Basic Multilingual Plane count as two.
pub fn character_count(text: &str) -> usize {
    text.encode_utf16().count()
}

/// The draft and count as found in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedState {
    pub draft: String,
    /// `None` when the count key is missing or not a number.
    pub count: Option<usize>,
}

impl PersistedState {
    /// Returns `None` when there is no draft; a count without a draft is ignored.
    pub fn read(store: &impl KeyValueStore) -> Result<Option<Self>, StorageError> {
        let Some(draft) = store.get(DRAFT_KEY)? else {
            return Ok(None);
        };
        let count = store
            .get(COUNT_KEY)?
            .and_then(|raw| raw.trim().parse().ok());
        Ok(Some(Self { draft, count }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    /// The user said no; nothing changed.
    Declined,
}

pub struct DraftPersistence<S, U> {
    store: S,
    surface: U,
    timings: Timings,
    status: SaveStatus,
    pending_save: Option<Instant>,
    status_reverts: Vec<Instant>,
}

impl<S: KeyValueStore, U: EditorSurface> DraftPersistence<S, U> {
    pub fn new(store: S, surface: U, timings: Timings) -> Self {
        Self {
            store,
            surface,
            timings,
            status: SaveStatus::Idle,
            pending_save: None,
            status_reverts: Vec::new(),
        }
    }

    /// Restores a saved draft into the surface, if there is one.
    ///
    /// The count is written back even when there is no draft.
    pub fn initialize(&mut self, now: Instant) -> Result<(), StorageError> {
        match PersistedState::read(&self.store)? {
            // An empty stored draft counts as nothing to restore.
            Some(saved) if !saved.draft.is_empty() => {
                tracing::info!(
                    chars = character_count(&saved.draft),
                    stored_count = ?saved.count,
                    "restoring saved draft"
                );
                self.surface.set_text(&saved.draft);
                self.refresh_count(&saved.draft)?;
                self.show(SaveStatus::Saved, RECOVERED, now);
            }
            _ => {
                tracing::debug!("no saved draft");
                let text = self.surface.text();
                self.refresh_count(&text)?;
            }
        }
        self.surface.focus();
        Ok(())
    }

    /// Call on every edit. Restarts the debounce window.
    pub fn on_text_changed(
        &mut self,
        current_text: &str,
        now: Instant,
    ) -> Result<(), StorageError> {
        let count = self.display_count(current_text);
        self.show(SaveStatus::Saving, SAVING, now);

        if self.pending_save.replace(now + self.timings.debounce).is_some() {
            tracing::trace!("pending save rescheduled");
        }

        self.store.set(COUNT_KEY, &count.to_string())
    }

    /// Fires whatever timers are due at `now`, in deadline order.
    pub fn tick(&mut self, now: Instant) -> Result<(), StorageError> {
        match self.pending_save.filter(|deadline| *deadline <= now) {
            Some(save_at) => {
                self.revert_due(|deadline| deadline < save_at);
                self.debounced_save(now)?;
                self.revert_due(|deadline| deadline <= now);
            }
            None => self.revert_due(|deadline| deadline <= now),
        }
        Ok(())
    }

    /// The save a debounce deadline stands for; [`Self::tick`] runs it once the
    /// window has passed without edits.
    pub fn debounced_save(&mut self, now: Instant) -> Result<(), StorageError> {
        self.pending_save = None;
        self.save(now)
    }

    /// Saves right away. A pending debounced save still fires later.
    pub fn force_save(&mut self, now: Instant) -> Result<(), StorageError> {
        tracing::debug!("forced save");
        self.save(now)
    }

    pub fn clear(&mut self, confirmed: bool, now: Instant) -> Result<ClearOutcome, StorageError> {
        if !confirmed {
            tracing::debug!("clear declined");
            return Ok(ClearOutcome::Declined);
        }

        self.store.remove_all(&[DRAFT_KEY, COUNT_KEY])?;

        self.surface.set_text("");
        self.display_count("");
        self.show(SaveStatus::Cleared, REMOVED, now);
        self.surface.focus();

        tracing::info!("draft cleared");
        Ok(ClearOutcome::Cleared)
    }

    /// Asks `prompt` first, then clears if the answer was yes.
    pub fn request_clear(
        &mut self,
        prompt: &mut impl ConfirmPrompt,
        now: Instant,
    ) -> Result<ClearOutcome, StorageError> {
        let confirmed = prompt.confirm(CLEAR_QUESTION);
        self.clear(confirmed, now)
    }

    pub fn status(&self) -> SaveStatus {
        self.status
    }

    pub fn has_pending_save(&self) -> bool {
        self.pending_save.is_some()
    }

    /// Earliest instant at which [`Self::tick`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_save
            .into_iter()
            .chain(self.status_reverts.iter().copied())
            .min()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut U {
        &mut self.surface
    }

    fn save(&mut self, now: Instant) -> Result<(), StorageError> {
        let text = self.surface.text();
        self.store.set(DRAFT_KEY, &text)?;
        self.refresh_count(&text)?;
        self.show(SaveStatus::Saved, AUTO_SAVED, now);
        tracing::debug!(chars = character_count(&text), "draft saved");
        Ok(())
    }

    fn display_count(&mut self, text: &str) -> usize {
        let count = character_count(text);
        self.surface.show_count(count);
        count
    }

    fn refresh_count(&mut self, text: &str) -> Result<(), StorageError> {
        let count = self.display_count(text);
        self.store.set(COUNT_KEY, &count.to_string())
    }

    fn show(&mut self, status: SaveStatus, message: &str, now: Instant) {
        self.status = status;
        self.surface.show_status(message, status.is_saved());
        if status.is_saved() {
            self.status_reverts.push(now + self.timings.notification);
        }
    }

    // Reversions are never cancelled; a late one simply writes the idle message
    // over whatever is showing.
    fn revert_due(&mut self, is_due: impl Fn(Instant) -> bool) {
        let before = self.status_reverts.len();
        self.status_reverts.retain(|deadline| !is_due(*deadline));
        if self.status_reverts.len() < before {
            self.status = SaveStatus::Idle;
            self.surface.show_status(READY, false);
        }
    }
}
