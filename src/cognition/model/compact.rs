use super::quiz::Quiz;
use super::validation::{check_uuid, is_valid_name, ValidationError};
use serde::Serialize;

/// Id and name of a quiz, without its flashcards.
///
/// Listings only need titles; the full quiz is fetched on demand by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompactQuiz {
    #[serde(rename = "uuid")]
    id: String,
    name: String,
}

impl CompactQuiz {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let name = name.into();
        check_uuid(&id)?;
        if !is_valid_name(&name) {
            return Err(ValidationError::QuizName);
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&Quiz> for CompactQuiz {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id().to_string(),
            name: quiz.name().to_string(),
        }
    }
}
