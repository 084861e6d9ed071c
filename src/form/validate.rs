use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static NAME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern compiles"));
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// The closed set of contact-form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The `name`/`id` attribute value for this field's input element.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

/// The visitor's in-progress message. Every value held here has already
/// passed through the sanitizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }
}

/// At most one message per field: the first failing rule in declaration
/// order.
pub type FieldErrors = HashMap<Field, &'static str>;

enum Constraint {
    MinChars(usize),
    MaxChars(usize),
    LettersAndSpaces,
    EmailShape,
}

impl Constraint {
    fn holds(&self, value: &str) -> bool {
        match self {
            Constraint::MinChars(n) => value.chars().count() >= *n,
            Constraint::MaxChars(n) => value.chars().count() <= *n,
            Constraint::LettersAndSpaces => NAME_SHAPE.is_match(value),
            Constraint::EmailShape => EMAIL_SHAPE.is_match(value),
        }
    }
}

struct Rule {
    constraint: Constraint,
    message: &'static str,
}

const fn rule(constraint: Constraint, message: &'static str) -> Rule {
    Rule { constraint, message }
}

static NAME_RULES: [Rule; 3] = [
    rule(Constraint::MinChars(2), "Name must be at least 2 characters"),
    rule(Constraint::MaxChars(50), "Name must be less than 50 characters"),
    rule(
        Constraint::LettersAndSpaces,
        "Name can only contain letters and spaces",
    ),
];
static EMAIL_RULES: [Rule; 2] = [
    rule(Constraint::EmailShape, "Please enter a valid email address"),
    rule(Constraint::MaxChars(100), "Email must be less than 100 characters"),
];
static SUBJECT_RULES: [Rule; 2] = [
    rule(Constraint::MinChars(5), "Subject must be at least 5 characters"),
    rule(Constraint::MaxChars(100), "Subject must be less than 100 characters"),
];
static MESSAGE_RULES: [Rule; 2] = [
    rule(Constraint::MinChars(10), "Message must be at least 10 characters"),
    rule(
        Constraint::MaxChars(1000),
        "Message must be less than 1000 characters",
    ),
];

fn rules(field: Field) -> &'static [Rule] {
    match field {
        Field::Name => &NAME_RULES,
        Field::Email => &EMAIL_RULES,
        Field::Subject => &SUBJECT_RULES,
        Field::Message => &MESSAGE_RULES,
    }
}

/// Checks every field against its schema. A field contributes no entry iff
/// all of its rules hold; otherwise the entry carries the first failure.
pub fn validate(draft: &ContactDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in Field::ALL {
        let value = draft.value(field);
        if let Some(failed) = rules(field).iter().find(|r| !r.constraint.holds(value)) {
            errors.insert(field, failed.message);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ContactDraft {
        ContactDraft {
            name: "Ada Lovelace".to_string(),
            email: "ada@x.io".to_string(),
            subject: "Hello".to_string(),
            message: "This is a ten-plus char note.".to_string(),
        }
    }

    #[test]
    fn accepts_a_valid_draft() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn name_length_boundaries() {
        let mut draft = valid_draft();
        draft.name = "Ab".to_string();
        assert!(!validate(&draft).contains_key(&Field::Name));

        draft.name = "A".to_string();
        assert_eq!(
            validate(&draft)[&Field::Name],
            "Name must be at least 2 characters"
        );

        draft.name = "A".repeat(51);
        assert_eq!(
            validate(&draft)[&Field::Name],
            "Name must be less than 50 characters"
        );

        draft.name = "A".repeat(50);
        assert!(!validate(&draft).contains_key(&Field::Name));
    }

    #[test]
    fn name_rejects_non_letters_after_length_rules() {
        let mut draft = valid_draft();
        draft.name = "Ada1".to_string();
        assert_eq!(
            validate(&draft)[&Field::Name],
            "Name can only contain letters and spaces"
        );
    }

    #[test]
    fn email_shape_is_checked_before_length() {
        let mut draft = valid_draft();
        draft.email = "bad".to_string();
        assert_eq!(
            validate(&draft)[&Field::Email],
            "Please enter a valid email address"
        );

        draft.email = format!("{}@example.com", "a".repeat(100));
        assert_eq!(
            validate(&draft)[&Field::Email],
            "Email must be less than 100 characters"
        );

        draft.email = "name with space@example.com".to_string();
        assert!(validate(&draft).contains_key(&Field::Email));
    }

    #[test]
    fn subject_length_boundaries() {
        let mut draft = valid_draft();
        draft.subject = "Hiya!".to_string();
        assert!(!validate(&draft).contains_key(&Field::Subject));

        draft.subject = "Hiya".to_string();
        assert_eq!(
            validate(&draft)[&Field::Subject],
            "Subject must be at least 5 characters"
        );
    }

    #[test]
    fn message_length_boundaries() {
        let mut draft = valid_draft();
        draft.message = "0123456789".to_string();
        assert!(!validate(&draft).contains_key(&Field::Message));

        draft.message = "x".repeat(1000);
        assert!(!validate(&draft).contains_key(&Field::Message));

        draft.message = "x".repeat(1001);
        assert_eq!(
            validate(&draft)[&Field::Message],
            "Message must be less than 1000 characters"
        );

        draft.message = "too short".to_string();
        assert_eq!(
            validate(&draft)[&Field::Message],
            "Message must be at least 10 characters"
        );
    }

    #[test]
    fn aggregates_first_failure_per_field() {
        let draft = ContactDraft {
            name: "A".to_string(),
            email: "bad".to_string(),
            subject: "hi".to_string(),
            message: "short".to_string(),
        };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&Field::Name], "Name must be at least 2 characters");
        assert_eq!(errors[&Field::Email], "Please enter a valid email address");
        assert_eq!(errors[&Field::Subject], "Subject must be at least 5 characters");
        assert_eq!(errors[&Field::Message], "Message must be at least 10 characters");
    }
}
