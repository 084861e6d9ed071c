/// The four user-visible outcomes of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    RateLimited,
    ValidationFailed,
    SendFailed,
    SendSucceeded,
}

impl NotificationKind {
    pub fn is_destructive(&self) -> bool {
        !matches!(self, NotificationKind::SendSucceeded)
    }
}

/// A transient message delivered through the injected sink — in the app,
/// a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub body: &'static str,
}

impl Notification {
    pub fn rate_limited() -> Self {
        Self {
            kind: NotificationKind::RateLimited,
            title: "Please wait",
            body: "You can only submit one message every 30 seconds.",
        }
    }

    pub fn validation_failed() -> Self {
        Self {
            kind: NotificationKind::ValidationFailed,
            title: "Validation Error",
            body: "Please check the form fields and try again.",
        }
    }

    pub fn send_failed() -> Self {
        Self {
            kind: NotificationKind::SendFailed,
            title: "Failed to send message",
            body: "Please try again later or contact me directly via email.",
        }
    }

    pub fn send_succeeded() -> Self {
        Self {
            kind: NotificationKind::SendSucceeded,
            title: "Message sent successfully!",
            body: "Thank you for your message. I'll get back to you soon.",
        }
    }
}
