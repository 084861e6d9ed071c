use leptos::prelude::*;

use super::sanitize::sanitize;
use super::validate::{ContactDraft, Field, FieldErrors};

/// Reactive state for one contact-form instance: the draft, per-field
/// errors, the in-flight flag, and the clock of the last accepted submit.
///
/// Tracked reads (`value`, `error`, `is_busy`) are for the view layer;
/// the orchestrator takes untracked snapshots.
#[derive(Clone, Copy)]
pub struct FormStore {
    draft: RwSignal<ContactDraft>,
    errors: RwSignal<FieldErrors>,
    busy: RwSignal<bool>,
    last_submission: RwSignal<i64>,
}

impl FormStore {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(ContactDraft::default()),
            errors: RwSignal::new(FieldErrors::new()),
            busy: RwSignal::new(false),
            last_submission: RwSignal::new(0),
        }
    }

    /// Tracked read of one field's current value.
    pub fn value(&self, field: Field) -> String {
        self.draft.with(|d| d.value(field).to_string())
    }

    /// Tracked read of one field's current error message, if any.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.with(|e| e.get(&field).copied())
    }

    /// Tracked read of the in-flight flag.
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    pub fn snapshot(&self) -> ContactDraft {
        self.draft.get_untracked()
    }

    pub fn busy(&self) -> bool {
        self.busy.get_untracked()
    }

    pub fn last_submission(&self) -> i64 {
        self.last_submission.get_untracked()
    }

    /// Sanitizes the raw input, stores it, and clears any stale error on
    /// that field.
    pub fn edit(&self, field: Field, raw: &str) {
        let clean = sanitize(raw);
        self.draft.update(|d| *d.value_mut(field) = clean);
        if self.errors.with_untracked(|e| e.contains_key(&field)) {
            self.errors.update(|e| {
                e.remove(&field);
            });
        }
    }

    pub fn set_errors(&self, errors: FieldErrors) {
        self.errors.set(errors);
    }

    pub fn clear_errors(&self) {
        if !self.errors.with_untracked(|e| e.is_empty()) {
            self.errors.set(FieldErrors::new());
        }
    }

    pub fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    /// Advances the submission clock. The clock never moves backwards.
    pub fn mark_submitted(&self, now_ms: i64) {
        self.last_submission.update(|last| *last = (*last).max(now_ms));
    }

    /// Returns the draft to the empty-strings record.
    pub fn reset(&self) {
        self.draft.set(ContactDraft::default());
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_sanitizes_before_storing() {
        let store = FormStore::new();
        store.edit(Field::Name, "<script>alert(1)</script>Ada");
        assert_eq!(store.snapshot().name, "Ada");
    }

    #[test]
    fn edit_clears_only_that_fields_error() {
        let store = FormStore::new();
        let mut errors = FieldErrors::new();
        errors.insert(Field::Name, "Name must be at least 2 characters");
        errors.insert(Field::Email, "Please enter a valid email address");
        store.set_errors(errors);

        store.edit(Field::Name, "Ada");
        assert_eq!(store.error(Field::Name), None);
        assert_eq!(store.error(Field::Email), Some("Please enter a valid email address"));
    }

    #[test]
    fn edit_to_same_sanitized_value_is_stable() {
        let store = FormStore::new();
        store.edit(Field::Subject, "Hello there");
        let before = store.snapshot();
        store.edit(Field::Subject, "Hello there");
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn reset_returns_draft_to_empty_strings() {
        let store = FormStore::new();
        store.edit(Field::Name, "Ada");
        store.edit(Field::Message, "A long enough message.");
        store.reset();
        assert_eq!(store.snapshot(), ContactDraft::default());
    }

    #[test]
    fn submission_clock_is_monotonic() {
        let store = FormStore::new();
        store.mark_submitted(1_000_000);
        store.mark_submitted(500_000);
        assert_eq!(store.last_submission(), 1_000_000);
    }
}
