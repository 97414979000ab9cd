//! Persisted document shape.
//!
//! The document is a JSON array of user records:
//!
//! ```json
//! [
//!   {
//!     "username": "alice123",
//!     "password": "secret12",
//!     "quizzes": [
//!       {
//!         "uuid": "…",
//!         "name": "Capitals",
//!         "description": "Europe",
//!         "flashcards": [{ "uuid": "…", "front": "Norway", "answer": "Oslo" }]
//!       }
//!     ]
//!   }
//! ]
//! ```
//!
//! Field names and their order are fixed; older documents written by other
//! clients must keep loading. Records are plain data and are converted into
//! validated aggregates on the way in, so a hand-edited document with a bad
//! field fails to load instead of producing an invalid `User`.

use crate::error::{CognitionError, Result};
use crate::model::{Flashcard, Quiz, User, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardRecord {
    pub uuid: String,
    pub front: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRecord {
    pub uuid: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub flashcards: Vec<FlashcardRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub quizzes: Vec<QuizRecord>,
}

impl From<&Flashcard> for FlashcardRecord {
    fn from(card: &Flashcard) -> Self {
        Self {
            uuid: card.id().to_string(),
            front: card.front().to_string(),
            answer: card.answer().to_string(),
        }
    }
}

impl From<&Quiz> for QuizRecord {
    fn from(quiz: &Quiz) -> Self {
        Self {
            uuid: quiz.id().to_string(),
            name: quiz.name().to_string(),
            description: quiz.description().to_string(),
            flashcards: quiz.flashcards_iter().map(FlashcardRecord::from).collect(),
        }
    }
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            username: user.username().to_string(),
            password: user.password().to_string(),
            quizzes: user.quizzes_iter().map(QuizRecord::from).collect(),
        }
    }
}

impl TryFrom<FlashcardRecord> for Flashcard {
    type Error = ValidationError;

    fn try_from(record: FlashcardRecord) -> std::result::Result<Self, Self::Error> {
        Flashcard::new(record.uuid, record.front, record.answer)
    }
}

impl TryFrom<QuizRecord> for Quiz {
    type Error = ValidationError;

    fn try_from(record: QuizRecord) -> std::result::Result<Self, Self::Error> {
        let mut quiz = Quiz::new(record.uuid, record.name, record.description)?;
        for card in record.flashcards {
            quiz.add_flashcard(Flashcard::try_from(card)?);
        }
        Ok(quiz)
    }
}

impl TryFrom<UserRecord> for User {
    type Error = ValidationError;

    fn try_from(record: UserRecord) -> std::result::Result<Self, Self::Error> {
        let mut user = User::new(record.username, record.password)?;
        for quiz in record.quizzes {
            user.add_quiz(Quiz::try_from(quiz)?);
        }
        Ok(user)
    }
}

/// Parses a whole document into users, in document order.
pub fn decode(content: &str) -> Result<Vec<User>> {
    let records: Vec<UserRecord> =
        serde_json::from_str(content).map_err(CognitionError::Serialization)?;

    records
        .into_iter()
        .enumerate()
        .map(|(pos, record)| {
            let username = record.username.clone();
            User::try_from(record).map_err(|e| {
                CognitionError::Store(format!(
                    "Invalid user record #{} ('{}'): {}",
                    pos + 1,
                    username,
                    e
                ))
            })
        })
        .collect()
}

pub fn encode(users: &[User]) -> Result<String> {
    let records: Vec<UserRecord> = users.iter().map(UserRecord::from).collect();
    serde_json::to_string_pretty(&records).map_err(CognitionError::Serialization)
}
