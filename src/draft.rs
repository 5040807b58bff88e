//! Draft persistence for the content textarea.
//!
//! The draft is a single raw string in origin-scoped localStorage. It is
//! written after typing pauses, read back once on page load, and removed
//! a few seconds after the form is submitted.

/// The one key this module owns in localStorage.
pub const DRAFT_KEY: &str = "ai-pptx-draft";

/// Quiet period after the last keystroke before the draft is written.
pub const AUTOSAVE_DEBOUNCE_MS: i32 = 1000;

/// Delay between a submit event and removal of the saved draft.
pub const CLEAR_DELAY_MS: i32 = 3000;

/// Storage seam for the draft, so tests can swap in an in-memory fake.
pub trait DraftStore {
    fn load(&self) -> Option<String>;
    fn save(&self, content: &str);
    fn clear(&self);
}

/// The real store, backed by the browser's `localStorage`.
///
/// Every operation degrades to a no-op when storage is unavailable
/// (private browsing, sandboxed frames).
#[derive(Clone, Copy, Default)]
pub struct LocalStorageDraft;

impl LocalStorageDraft {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl DraftStore for LocalStorageDraft {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(DRAFT_KEY).ok().flatten()
    }

    fn save(&self, content: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if storage.set_item(DRAFT_KEY, content).is_err() {
            web_sys::console::warn_1(&"Draft autosave failed; storage quota exceeded?".into());
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(DRAFT_KEY);
        }
    }
}

/// Returns the draft to put into the textarea at startup, if any.
///
/// A saved draft never overwrites content already in the textarea, and
/// an empty-string draft is treated as absent.
pub fn restore_if_empty(store: &impl DraftStore, current: &str) -> Option<String> {
    if !current.is_empty() {
        return None;
    }
    store.load().filter(|draft| !draft.is_empty())
}
