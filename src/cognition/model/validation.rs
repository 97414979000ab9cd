//! Field validation for users, quizzes and flashcards.
//!
//! Rules:
//! - Usernames: 3 to 35 characters, letters, digits and `-` only
//! - Passwords: at least 6 characters, not blank
//! - Quiz names: not blank, at most [`MAX_NAME_LENGTH`] characters
//! - Quiz descriptions: not blank, at most [`MAX_DESCRIPTION_LENGTH`] characters
//! - Flashcard front and answer: not blank
//!
//! Lengths are counted in characters, not bytes. Blank means only spaces and
//! control characters.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const MAX_NAME_LENGTH: usize = 60;
pub const MAX_DESCRIPTION_LENGTH: usize = 260;
pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 35;
pub const MIN_PASSWORD_LENGTH: usize = 6;

// The doubled `A` in the class is redundant and the trailing `-` is a literal,
// so hyphenated usernames such as `valid-username` are accepted. Stored
// documents depend on that.
static USERNAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9A-]*$").expect("username pattern is a valid regex")
});

/// Outcome of checking a username or password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserValidation {
    Ok,
    /// Too short, too long, or blank.
    IllegalInputLength,
    /// Contains characters outside the allowed set.
    IllegalInput,
}

impl UserValidation {
    pub fn is_ok(self) -> bool {
        self == UserValidation::Ok
    }
}

impl std::fmt::Display for UserValidation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserValidation::Ok => write!(f, "ok"),
            UserValidation::IllegalInputLength => write!(f, "illegal length"),
            UserValidation::IllegalInput => write!(f, "illegal characters"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("'{0}' is not a valid identifier")]
    InvalidUuid(String),

    #[error("username has {0} (3-35 letters, digits or '-')")]
    Username(UserValidation),

    #[error("password has {0} (at least 6 characters, not blank)")]
    Password(UserValidation),

    #[error("quiz name must be non-blank and at most 60 characters")]
    QuizName,

    #[error("quiz description must be non-blank and at most 260 characters")]
    QuizDescription,

    #[error("flashcard front cannot be blank")]
    FlashcardFront,

    #[error("flashcard answer cannot be blank")]
    FlashcardAnswer,
}

/// Blank means nothing but spaces and control characters (`<= U+0020`).
/// Other Unicode whitespace such as U+3000 counts as content; stored
/// documents rely on that.
fn is_blank(s: &str) -> bool {
    s.trim_matches(|c: char| c <= ' ').is_empty()
}

/// Length is checked before the character class, so `"a b"` reports
/// [`UserValidation::IllegalInput`] while `"ab"` reports
/// [`UserValidation::IllegalInputLength`].
///
/// ```
/// use cognition::model::{validate_username, UserValidation};
///
/// assert_eq!(validate_username("alice123"), UserValidation::Ok);
/// assert_eq!(validate_username("valid-username"), UserValidation::Ok);
/// assert_eq!(validate_username("ab"), UserValidation::IllegalInputLength);
/// assert_eq!(validate_username("alice_1"), UserValidation::IllegalInput);
/// ```
pub fn validate_username(username: &str) -> UserValidation {
    let len = username.chars().count();
    if is_blank(username) || !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        return UserValidation::IllegalInputLength;
    }

    if !USERNAME_PATTERN.is_match(username) {
        return UserValidation::IllegalInput;
    }

    UserValidation::Ok
}

pub fn validate_password(password: &str) -> UserValidation {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return UserValidation::IllegalInputLength;
    }

    if is_blank(password) {
        return UserValidation::IllegalInput;
    }

    UserValidation::Ok
}

pub fn is_valid_name(name: &str) -> bool {
    !is_blank(name) && name.chars().count() <= MAX_NAME_LENGTH
}

pub fn is_valid_description(description: &str) -> bool {
    !is_blank(description) && description.chars().count() <= MAX_DESCRIPTION_LENGTH
}

/// Shared by flashcard front and answer.
pub fn is_valid_card_text(text: &str) -> bool {
    !is_blank(text)
}

pub(crate) fn check_uuid(uuid: &str) -> Result<(), ValidationError> {
    if crate::tools::is_valid_uuid(uuid) {
        Ok(())
    } else {
        Err(ValidationError::InvalidUuid(uuid.to_string()))
    }
}
