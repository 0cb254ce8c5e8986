//! Auto-save for a single text draft.
//!
//! [`draft::DraftPersistence`] keeps one editable buffer in sync with a local
//! key-value store: edits are debounced, the character count is stored next to
//! the text, and clearing requires confirmation. The presentation layer is
//! injected through the traits in [`surface`].

pub mod config;
pub mod draft;
pub mod error;
pub mod shortcuts;
pub mod status;
pub mod storage;
pub mod surface;
