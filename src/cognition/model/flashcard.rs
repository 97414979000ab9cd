use super::validation::{check_uuid, is_valid_card_text, ValidationError};
use crate::tools::create_uuid;
use std::hash::{Hash, Hasher};

/// A single question/answer card belonging to a [`Quiz`](super::Quiz).
///
/// Cards are immutable after construction. Editing a card means building a
/// new one with the same id and replacing it in its quiz.
#[derive(Debug, Clone)]
pub struct Flashcard {
    id: String,
    front: String,
    answer: String,
}

impl Flashcard {
    pub fn new(
        id: impl Into<String>,
        front: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        let front = front.into();
        let answer = answer.into();

        check_uuid(&id)?;
        if !is_valid_card_text(&front) {
            return Err(ValidationError::FlashcardFront);
        }
        if !is_valid_card_text(&answer) {
            return Err(ValidationError::FlashcardAnswer);
        }

        Ok(Self { id, front, answer })
    }

    /// Builds a card with a freshly generated id.
    pub fn create(
        front: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(create_uuid(), front, answer)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

// Identity is the id alone.
impl PartialEq for Flashcard {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Flashcard {}

impl Hash for Flashcard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
