use std::time::{Duration, Instant};

use autosave::config::Timings;
use autosave::draft::{ClearOutcome, DraftPersistence, CLEAR_QUESTION};
use autosave::status::{SaveStatus, AUTO_SAVED, READY, RECOVERED, REMOVED, SAVING};
use autosave::storage::{KeyValueStore, MemoryStore, COUNT_KEY, DRAFT_KEY};
use autosave::surface::EditorSurface;

/// Records everything the component shows so tests can assert on it.
#[derive(Debug, Default)]
struct RecordingSurface {
    text: String,
    count: usize,
    statuses: Vec<(String, bool)>,
    focus_calls: usize,
}

impl RecordingSurface {
    fn last_status(&self) -> Option<(&str, bool)> {
        self.statuses.last().map(|(m, saved)| (m.as_str(), *saved))
    }
}

impl EditorSurface for RecordingSurface {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn show_count(&mut self, count: usize) {
        self.count = count;
    }

    fn show_status(&mut self, message: &str, saved: bool) {
        self.statuses.push((message.to_string(), saved));
    }

    fn focus(&mut self) {
        self.focus_calls += 1;
    }
}

type Draft = DraftPersistence<MemoryStore, RecordingSurface>;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn fresh() -> Draft {
    DraftPersistence::new(MemoryStore::new(), RecordingSurface::default(), Timings::default())
}

/// Types `text` into the field the way the shell does: buffer first, then the event.
fn type_text(draft: &mut Draft, text: &str, at: Instant) {
    draft.surface_mut().set_text(text);
    draft.on_text_changed(text, at).unwrap();
}

fn stored(draft: &Draft, key: &str) -> Option<String> {
    draft.store().get(key).unwrap()
}

#[test]
fn test_edit_is_saved_after_debounce_window() {
    let start = Instant::now();
    let mut draft = fresh();
    draft.initialize(start).unwrap();

    type_text(&mut draft, "Olá, mundo", start);
    assert_eq!(draft.status(), SaveStatus::Saving);
    assert_eq!(draft.surface().last_status(), Some((SAVING, false)));
    assert_eq!(draft.surface().count, 10);
    assert_eq!(stored(&draft, COUNT_KEY).as_deref(), Some("10"));
    assert_eq!(stored(&draft, DRAFT_KEY), None);

    draft.tick(start + ms(499)).unwrap();
    assert_eq!(stored(&draft, DRAFT_KEY), None);

    draft.tick(start + ms(500)).unwrap();
    assert_eq!(stored(&draft, DRAFT_KEY).as_deref(), Some("Olá, mundo"));
    assert_eq!(stored(&draft, COUNT_KEY).as_deref(), Some("10"));
    assert_eq!(draft.status(), SaveStatus::Saved);
    assert_eq!(draft.surface().last_status(), Some((AUTO_SAVED, true)));
}

#[test]
fn test_burst_of_edits_saves_only_the_last() {
    let start = Instant::now();
    let mut draft = fresh();
    draft.initialize(start).unwrap();

    let mut at = start;
    for text in ["h", "he", "hel", "hell", "hello"] {
        type_text(&mut draft, text, at);
        at += ms(300);
        draft.tick(at).unwrap();
        assert_eq!(stored(&draft, DRAFT_KEY), None, "saved mid-burst at {text:?}");
    }

    // last edit was at start + 1200ms
    draft.tick(start + ms(1700)).unwrap();
    assert_eq!(stored(&draft, DRAFT_KEY).as_deref(), Some("hello"));

    let saves = draft
        .surface()
        .statuses
        .iter()
        .filter(|(m, _)| m == AUTO_SAVED)
        .count();
    assert_eq!(saves, 1);
    assert!(!draft.has_pending_save());
}

#[test]
fn test_declined_clear_changes_nothing() {
    let start = Instant::now();
    let mut draft = fresh();
    type_text(&mut draft, "keep me", start);
    draft.tick(start + ms(500)).unwrap();
    let shown = draft.surface().statuses.len();

    let outcome = draft.clear(false, start + ms(600)).unwrap();
    assert_eq!(outcome, ClearOutcome::Declined);
    assert_eq!(draft.surface().text, "keep me");
    assert_eq!(draft.surface().count, 7);
    assert_eq!(stored(&draft, DRAFT_KEY).as_deref(), Some("keep me"));
    assert_eq!(stored(&draft, COUNT_KEY).as_deref(), Some("7"));
    assert_eq!(draft.surface().statuses.len(), shown);
    assert_eq!(draft.status(), SaveStatus::Saved);
}

#[test]
fn test_confirmed_clear_removes_everything() {
    let start = Instant::now();
    let mut draft = fresh();
    type_text(&mut draft, "throw away", start);
    draft.tick(start + ms(500)).unwrap();
    let focus_before = draft.surface().focus_calls;

    let outcome = draft.clear(true, start + ms(600)).unwrap();
    assert_eq!(outcome, ClearOutcome::Cleared);
    assert!(!draft.store().contains(DRAFT_KEY));
    assert!(!draft.store().contains(COUNT_KEY));
    assert_eq!(draft.surface().text, "");
    assert_eq!(draft.surface().count, 0);
    assert_eq!(draft.status(), SaveStatus::Cleared);
    assert_eq!(draft.surface().last_status(), Some((REMOVED, false)));
    assert_eq!(draft.surface().focus_calls, focus_before + 1);
}

#[test]
fn test_request_clear_asks_before_clearing() {
    let start = Instant::now();
    let mut draft = fresh();
    type_text(&mut draft, "draft", start);
    draft.force_save(start).unwrap();

    let mut asked = Vec::new();
    let mut say_no = |question: &str| {
        asked.push(question.to_string());
        false
    };
    let outcome = draft.request_clear(&mut say_no, start + ms(10)).unwrap();
    assert_eq!(outcome, ClearOutcome::Declined);
    assert_eq!(asked, vec![CLEAR_QUESTION.to_string()]);
    assert!(draft.store().contains(DRAFT_KEY));

    let mut say_yes = |_: &str| true;
    let outcome = draft.request_clear(&mut say_yes, start + ms(20)).unwrap();
    assert_eq!(outcome, ClearOutcome::Cleared);
    assert!(!draft.store().contains(DRAFT_KEY));
}

#[test]
fn test_initialize_recovers_saved_draft() {
    let start = Instant::now();
    let mut store = MemoryStore::new();
    store.set(DRAFT_KEY, "hello").unwrap();
    store.set(COUNT_KEY, "5").unwrap();

    let mut draft = DraftPersistence::new(store, RecordingSurface::default(), Timings::default());
    draft.initialize(start).unwrap();

    assert_eq!(draft.surface().text, "hello");
    assert_eq!(draft.surface().count, 5);
    assert_eq!(draft.status(), SaveStatus::Saved);
    assert_eq!(draft.surface().last_status(), Some((RECOVERED, true)));
    assert_eq!(draft.surface().focus_calls, 1);
}

#[test]
fn test_initialize_without_draft_still_writes_count() {
    let start = Instant::now();
    let mut store = MemoryStore::new();
    store.set(COUNT_KEY, "42").unwrap();

    let mut draft = DraftPersistence::new(store, RecordingSurface::default(), Timings::default());
    draft.initialize(start).unwrap();

    assert_eq!(draft.surface().text, "");
    assert_eq!(draft.surface().count, 0);
    assert_eq!(draft.status(), SaveStatus::Idle);
    assert!(draft.surface().statuses.is_empty());
    assert_eq!(stored(&draft, COUNT_KEY).as_deref(), Some("0"));
    assert_eq!(stored(&draft, DRAFT_KEY), None);
    assert_eq!(draft.surface().focus_calls, 1);
}

#[test]
fn test_force_save_skips_the_wait() {
    let start = Instant::now();
    let mut draft = fresh();
    type_text(&mut draft, "now please", start);

    draft.force_save(start + ms(10)).unwrap();
    assert_eq!(stored(&draft, DRAFT_KEY).as_deref(), Some("now please"));
    assert_eq!(stored(&draft, COUNT_KEY).as_deref(), Some("10"));
    assert_eq!(draft.status(), SaveStatus::Saved);
    // the debounce timer is left alone
    assert!(draft.has_pending_save());
}

#[test]
fn test_saved_status_reverts_to_idle() {
    let start = Instant::now();
    let mut draft = fresh();
    type_text(&mut draft, "x", start);
    draft.tick(start + ms(500)).unwrap();
    assert_eq!(draft.status(), SaveStatus::Saved);

    draft.tick(start + ms(1999)).unwrap();
    assert_eq!(draft.status(), SaveStatus::Saved);

    draft.tick(start + ms(2000)).unwrap();
    assert_eq!(draft.status(), SaveStatus::Idle);
    assert_eq!(draft.surface().last_status(), Some((READY, false)));
    assert_eq!(draft.next_deadline(), None);
}

#[test]
fn test_stale_reversion_overwrites_newer_status() {
    let start = Instant::now();
    let mut draft = fresh();
    type_text(&mut draft, "a", start);
    draft.tick(start + ms(500)).unwrap();

    // a new edit lands while the first saved notice is still showing
    type_text(&mut draft, "ab", start + ms(1800));
    assert_eq!(draft.status(), SaveStatus::Saving);

    draft.tick(start + ms(2000)).unwrap();
    assert_eq!(draft.status(), SaveStatus::Idle);
    assert_eq!(draft.surface().last_status(), Some((READY, false)));

    draft.tick(start + ms(2300)).unwrap();
    assert_eq!(stored(&draft, DRAFT_KEY).as_deref(), Some("ab"));
    assert_eq!(draft.status(), SaveStatus::Saved);
}

#[test]
fn test_due_save_runs_before_a_later_due_reversion() {
    let start = Instant::now();
    let mut draft = fresh();
    type_text(&mut draft, "a", start);
    draft.force_save(start + ms(520)).unwrap();

    // save deadline at 2010, reversion of the forced save at 2020
    type_text(&mut draft, "ab", start + ms(1510));
    draft.tick(start + ms(2030)).unwrap();

    assert_eq!(stored(&draft, DRAFT_KEY).as_deref(), Some("ab"));
    assert_eq!(draft.status(), SaveStatus::Idle);
    assert_eq!(draft.surface().last_status(), Some((READY, false)));
}

#[test]
fn test_pending_save_after_clear_stores_empty_draft() {
    let start = Instant::now();
    let mut draft = fresh();
    type_text(&mut draft, "oops", start);
    draft.clear(true, start + ms(100)).unwrap();
    assert!(!draft.store().contains(DRAFT_KEY));

    draft.tick(start + ms(500)).unwrap();
    assert_eq!(stored(&draft, DRAFT_KEY).as_deref(), Some(""));
    assert_eq!(stored(&draft, COUNT_KEY).as_deref(), Some("0"));

    // and an empty draft is not "recovered" next time
    let store = draft.store().clone();
    let mut reopened = DraftPersistence::new(store, RecordingSurface::default(), Timings::default());
    reopened.initialize(start + ms(600)).unwrap();
    assert_eq!(reopened.status(), SaveStatus::Idle);
}

#[test]
fn test_custom_timings_are_honoured() {
    let start = Instant::now();
    let timings = Timings {
        debounce: ms(50),
        notification: ms(100),
    };
    let mut draft = DraftPersistence::new(MemoryStore::new(), RecordingSurface::default(), timings);
    type_text(&mut draft, "quick", start);

    draft.tick(start + ms(50)).unwrap();
    assert_eq!(stored(&draft, DRAFT_KEY).as_deref(), Some("quick"));

    draft.tick(start + ms(150)).unwrap();
    assert_eq!(draft.status(), SaveStatus::Idle);
}
