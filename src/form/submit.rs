use std::future::Future;

use thiserror::Error;

use super::notify::Notification;
use super::rate_limit::admit;
use super::store::FormStore;
use super::validate::{validate, ContactDraft};

/// Failure of the dispatch step. Anything the dispatcher throws collapses
/// into this; the visitor only ever sees the send-failed notification.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    #[error("message dispatch failed: {0}")]
    Failed(String),
}

/// How a submit attempt ended. The UI ignores this; tests assert on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    AlreadySending,
    RateLimited,
    Invalid,
    Sent,
    Failed,
}

/// Runs one submit attempt to completion.
///
/// Ordering is strict: busy gate, error clearing, rate check, validation,
/// then the dispatch. The submission clock advances before the dispatch
/// resolves, so a failed send still starts the cooldown. The busy flag is
/// cleared on every path once the dispatch has begun.
pub async fn handle_submit<D, Fut>(
    store: FormStore,
    notify: impl Fn(Notification),
    now_ms: i64,
    dispatch: D,
) -> SubmitOutcome
where
    D: FnOnce(ContactDraft) -> Fut,
    Fut: Future<Output = Result<(), DispatchError>>,
{
    if store.busy() {
        // The submit button is disabled while sending; a second attempt
        // that slips through is a no-op.
        return SubmitOutcome::AlreadySending;
    }

    store.clear_errors();

    if !admit(now_ms, store.last_submission()) {
        notify(Notification::rate_limited());
        return SubmitOutcome::RateLimited;
    }

    let draft = store.snapshot();
    let errors = validate(&draft);
    if !errors.is_empty() {
        store.set_errors(errors);
        notify(Notification::validation_failed());
        return SubmitOutcome::Invalid;
    }

    store.set_busy(true);
    store.mark_submitted(now_ms);

    let result = dispatch(draft).await;
    let outcome = match result {
        Ok(()) => {
            notify(Notification::send_succeeded());
            store.reset();
            SubmitOutcome::Sent
        }
        Err(err) => {
            log::warn!("contact form dispatch failed: {err}");
            notify(Notification::send_failed());
            SubmitOutcome::Failed
        }
    };
    store.set_busy(false);
    outcome
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::form::validate::Field;
    use crate::form::NotificationKind;

    fn valid_store() -> FormStore {
        let store = FormStore::new();
        store.edit(Field::Name, "Ada Lovelace");
        store.edit(Field::Email, "ada@x.io");
        store.edit(Field::Subject, "Hello");
        store.edit(Field::Message, "This is a ten-plus char note.");
        store
    }

    fn capture() -> (Rc<RefCell<Vec<Notification>>>, impl Fn(Notification)) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let seen = Rc::clone(&seen);
            move |n| seen.borrow_mut().push(n)
        };
        (seen, sink)
    }

    fn kinds(seen: &Rc<RefCell<Vec<Notification>>>) -> Vec<NotificationKind> {
        seen.borrow().iter().map(|n| n.kind).collect()
    }

    #[tokio::test]
    async fn happy_path_sends_and_resets() {
        let store = valid_store();
        let (seen, sink) = capture();

        let outcome = handle_submit(store, sink, 1_000_000, |_| async { Ok(()) }).await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(kinds(&seen), vec![NotificationKind::SendSucceeded]);
        assert_eq!(store.snapshot(), ContactDraft::default());
        assert_eq!(store.last_submission(), 1_000_000);
        assert!(!store.busy());
    }

    #[tokio::test]
    async fn rate_limited_attempt_skips_validation() {
        let store = FormStore::new();
        store.mark_submitted(1_000_000);
        let (seen, sink) = capture();
        let dispatched = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&dispatched);

        let outcome = handle_submit(store, sink, 1_020_000, move |_| {
            *flag.borrow_mut() = true;
            async { Ok(()) }
        })
        .await;

        assert_eq!(outcome, SubmitOutcome::RateLimited);
        assert_eq!(kinds(&seen), vec![NotificationKind::RateLimited]);
        // The empty draft would have failed validation; no errors were set.
        assert_eq!(store.error(Field::Name), None);
        assert!(!*dispatched.borrow());
        assert!(!store.busy());
        assert_eq!(store.last_submission(), 1_000_000);
    }

    #[tokio::test]
    async fn invalid_draft_populates_every_failing_field() {
        let store = FormStore::new();
        store.edit(Field::Name, "A");
        store.edit(Field::Email, "bad");
        store.edit(Field::Subject, "hi");
        store.edit(Field::Message, "short");
        let (seen, sink) = capture();

        let outcome = handle_submit(store, sink, 1_000_000, |_| async { Ok(()) }).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(kinds(&seen), vec![NotificationKind::ValidationFailed]);
        assert_eq!(store.error(Field::Name), Some("Name must be at least 2 characters"));
        assert_eq!(store.error(Field::Email), Some("Please enter a valid email address"));
        assert_eq!(store.error(Field::Subject), Some("Subject must be at least 5 characters"));
        assert_eq!(store.error(Field::Message), Some("Message must be at least 10 characters"));
        assert!(!store.busy());
        assert_eq!(store.last_submission(), 0);
    }

    #[tokio::test]
    async fn dispatch_failure_keeps_draft_and_advances_clock() {
        let store = valid_store();
        let before = store.snapshot();
        let (seen, sink) = capture();

        let outcome = handle_submit(store, sink, 1_000_000, |_| async {
            Err(DispatchError::Failed("boom".to_string()))
        })
        .await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(kinds(&seen), vec![NotificationKind::SendFailed]);
        assert_eq!(store.snapshot(), before);
        assert!(!store.busy());
        // A retry within the cooldown is itself rate-limited.
        assert_eq!(store.last_submission(), 1_000_000);
    }

    #[tokio::test]
    async fn retry_after_failed_dispatch_is_rate_limited() {
        let store = valid_store();
        let (seen, sink) = capture();

        handle_submit(store, &sink, 1_000_000, |_| async {
            Err(DispatchError::Failed("boom".to_string()))
        })
        .await;
        let outcome = handle_submit(store, &sink, 1_010_000, |_| async { Ok(()) }).await;

        assert_eq!(outcome, SubmitOutcome::RateLimited);
        assert_eq!(
            kinds(&seen),
            vec![NotificationKind::SendFailed, NotificationKind::RateLimited]
        );
    }

    #[tokio::test]
    async fn busy_store_ignores_a_second_attempt() {
        let store = valid_store();
        store.set_busy(true);
        let (seen, sink) = capture();

        let outcome = handle_submit(store, sink, 1_000_000, |_| async { Ok(()) }).await;

        assert_eq!(outcome, SubmitOutcome::AlreadySending);
        assert!(kinds(&seen).is_empty());
        assert!(store.busy());
    }

    #[tokio::test]
    async fn submit_clears_stale_errors_before_rate_check() {
        let store = FormStore::new();
        store.mark_submitted(1_000_000);
        let mut errors = crate::form::FieldErrors::new();
        errors.insert(Field::Name, "Name must be at least 2 characters");
        store.set_errors(errors);
        let (_, sink) = capture();

        handle_submit(store, sink, 1_020_000, |_| async { Ok(()) }).await;

        assert_eq!(store.error(Field::Name), None);
    }
}
