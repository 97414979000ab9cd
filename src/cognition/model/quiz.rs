use super::compact::CompactQuiz;
use super::flashcard::Flashcard;
use super::validation::{check_uuid, is_valid_description, is_valid_name, ValidationError};
use crate::tools::create_uuid;

/// A named, described collection of flashcards.
///
/// The flashcard list keeps insertion order and never holds two cards with
/// the same id. Adding a card whose id is already present does nothing.
#[derive(Debug, Clone)]
pub struct Quiz {
    id: String,
    name: String,
    description: String,
    flashcards: Vec<Flashcard>,
}

impl Quiz {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        check_uuid(&id)?;

        let mut quiz = Self {
            id,
            name: String::new(),
            description: String::new(),
            flashcards: Vec::new(),
        };
        quiz.set_name(name)?;
        quiz.set_description(description)?;
        Ok(quiz)
    }

    /// Builds a quiz with a freshly generated id.
    pub fn create(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(create_uuid(), name, description)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(ValidationError::QuizName);
        }
        self.name = name;
        Ok(())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let description = description.into();
        if !is_valid_description(&description) {
            return Err(ValidationError::QuizDescription);
        }
        self.description = description;
        Ok(())
    }

    /// Returns a copy of the flashcards. Changing it does not touch the quiz.
    pub fn flashcards(&self) -> Vec<Flashcard> {
        self.flashcards.clone()
    }

    pub fn flashcards_iter(&self) -> impl Iterator<Item = &Flashcard> {
        self.flashcards.iter()
    }

    pub fn flashcard(&self, id: &str) -> Option<&Flashcard> {
        self.flashcards.iter().find(|f| f.id() == id)
    }

    pub fn flashcard_count(&self) -> usize {
        self.flashcards.len()
    }

    /// Appends the card unless one with the same id is present.
    /// Returns whether the card was added.
    pub fn add_flashcard(&mut self, flashcard: Flashcard) -> bool {
        if self.flashcards.contains(&flashcard) {
            return false;
        }
        self.flashcards.push(flashcard);
        true
    }

    /// Adds each card in order, skipping duplicates. Returns how many were added.
    pub fn add_flashcards<I>(&mut self, flashcards: I) -> usize
    where
        I: IntoIterator<Item = Flashcard>,
    {
        let mut added = 0;
        for flashcard in flashcards {
            if self.add_flashcard(flashcard) {
                added += 1;
            }
        }
        added
    }

    /// Removes the card with the same id, if any.
    pub fn remove_flashcard(&mut self, flashcard: &Flashcard) -> bool {
        self.remove_flashcard_by_id(flashcard.id())
    }

    pub fn remove_flashcard_by_id(&mut self, id: &str) -> bool {
        match self.flashcards.iter().position(|f| f.id() == id) {
            Some(pos) => {
                self.flashcards.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replaces the whole card list. Later duplicates of an id are dropped.
    pub fn set_flashcards(&mut self, flashcards: Vec<Flashcard>) {
        self.flashcards.clear();
        self.add_flashcards(flashcards);
    }

    pub fn compact(&self) -> CompactQuiz {
        CompactQuiz::from(self)
    }
}

// Identity is the id alone.
impl PartialEq for Quiz {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Quiz {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::validation::MAX_DESCRIPTION_LENGTH;

    fn quiz() -> Quiz {
        Quiz::create("Capitals", "Europe").unwrap()
    }

    fn card(front: &str) -> Flashcard {
        Flashcard::create(front, "answer").unwrap()
    }

    #[test]
    fn description_length_boundary() {
        let ok = Quiz::create("name", "d".repeat(MAX_DESCRIPTION_LENGTH));
        assert!(ok.is_ok());

        let too_long = Quiz::create("name", "d".repeat(MAX_DESCRIPTION_LENGTH + 1));
        assert_eq!(too_long.unwrap_err(), ValidationError::QuizDescription);
    }

    #[test]
    fn name_must_not_be_blank_or_too_long() {
        assert_eq!(
            Quiz::create("   ", "description").unwrap_err(),
            ValidationError::QuizName
        );
        assert_eq!(
            Quiz::create("n".repeat(61), "description").unwrap_err(),
            ValidationError::QuizName
        );
        assert!(Quiz::create("n".repeat(60), "description").is_ok());
    }

    #[test]
    fn rejects_invalid_id() {
        let short = &create_uuid()[..35];
        assert!(matches!(
            Quiz::new(short, "name", "description"),
            Err(ValidationError::InvalidUuid(_))
        ));
    }

    #[test]
    fn failed_setter_keeps_old_value() {
        let mut q = quiz();
        assert!(q.set_name("").is_err());
        assert_eq!(q.name(), "Capitals");
        assert!(q.set_description("x".repeat(300)).is_err());
        assert_eq!(q.description(), "Europe");

        q.set_name("Rivers").unwrap();
        assert_eq!(q.name(), "Rivers");
    }

    #[test]
    fn no_duplicate_flashcards() {
        let mut q = quiz();
        let c = card("front");
        assert!(q.add_flashcard(c.clone()));
        assert!(!q.add_flashcard(c.clone()));

        let same_id = Flashcard::new(c.id(), "different", "card").unwrap();
        assert!(!q.add_flashcard(same_id));
        assert_eq!(q.flashcard_count(), 1);
        assert_eq!(q.flashcards()[0].front(), "front");
    }

    #[test]
    fn add_flashcards_keeps_order_and_skips_duplicates() {
        let mut q = quiz();
        let a = card("a");
        let b = card("b");
        let added = q.add_flashcards(vec![a.clone(), b.clone(), a.clone()]);
        assert_eq!(added, 2);
        let fronts: Vec<_> = q.flashcards_iter().map(|f| f.front().to_string()).collect();
        assert_eq!(fronts, vec!["a", "b"]);
    }

    #[test]
    fn removing_absent_flashcard_is_a_noop() {
        let mut q = quiz();
        let present = card("present");
        q.add_flashcard(present.clone());

        assert!(!q.remove_flashcard(&card("absent")));
        assert_eq!(q.flashcard_count(), 1);

        assert!(q.remove_flashcard(&present));
        assert_eq!(q.flashcard_count(), 0);
    }

    #[test]
    fn flashcards_accessor_returns_a_copy() {
        let mut q = quiz();
        q.add_flashcard(card("one"));

        let mut copy = q.flashcards();
        copy.clear();
        copy.push(card("two"));
        copy.push(card("three"));

        assert_eq!(q.flashcard_count(), 1);
        assert_eq!(q.flashcards()[0].front(), "one");
    }

    #[test]
    fn set_flashcards_deduplicates() {
        let mut q = quiz();
        q.add_flashcard(card("old"));
        let a = card("a");
        q.set_flashcards(vec![a.clone(), a]);
        assert_eq!(q.flashcard_count(), 1);
        assert_eq!(q.flashcards()[0].front(), "a");
    }

    #[test]
    fn compact_projection() {
        let q = quiz();
        let c = q.compact();
        assert_eq!(c.id(), q.id());
        assert_eq!(c.name(), "Capitals");
    }
}
