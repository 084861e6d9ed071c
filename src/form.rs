mod notify;
mod rate_limit;
mod sanitize;
mod store;
mod submit;
mod validate;

pub use notify::{Notification, NotificationKind};
pub use rate_limit::{admit, SUBMIT_COOLDOWN_MS};
pub use sanitize::sanitize;
pub use store::FormStore;
pub use submit::{handle_submit, DispatchError, SubmitOutcome};
pub use validate::{validate, ContactDraft, Field, FieldErrors};
