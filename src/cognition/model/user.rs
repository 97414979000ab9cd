use super::compact::CompactQuiz;
use super::quiz::Quiz;
use super::validation::{validate_password, validate_username, ValidationError};
use std::hash::{Hash, Hasher};

/// An account owning an ordered set of quizzes.
///
/// Two users are equal when their usernames are equal. Quizzes are unique by
/// id within a user; uniqueness across users is enforced by the command layer.
#[derive(Debug, Clone)]
pub struct User {
    username: String,
    password: String,
    quizzes: Vec<Quiz>,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let mut user = Self {
            username: String::new(),
            password: String::new(),
            quizzes: Vec::new(),
        };
        user.set_username(username)?;
        user.set_password(password)?;
        Ok(user)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: impl Into<String>) -> Result<(), ValidationError> {
        let username = username.into();
        let check = validate_username(&username);
        if !check.is_ok() {
            return Err(ValidationError::Username(check));
        }
        self.username = username;
        Ok(())
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, password: impl Into<String>) -> Result<(), ValidationError> {
        let password = password.into();
        let check = validate_password(&password);
        if !check.is_ok() {
            return Err(ValidationError::Password(check));
        }
        self.password = password;
        Ok(())
    }

    /// Returns a copy of the quizzes. Changing it does not touch the user.
    pub fn quizzes(&self) -> Vec<Quiz> {
        self.quizzes.clone()
    }

    pub fn quizzes_iter(&self) -> impl Iterator<Item = &Quiz> {
        self.quizzes.iter()
    }

    pub fn quiz(&self, id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id() == id)
    }

    pub fn has_quiz(&self, id: &str) -> bool {
        self.quiz(id).is_some()
    }

    pub fn quiz_count(&self) -> usize {
        self.quizzes.len()
    }

    pub fn compact_quizzes(&self) -> Vec<CompactQuiz> {
        self.quizzes.iter().map(CompactQuiz::from).collect()
    }

    /// Appends the quiz unless one with the same id is present.
    pub fn add_quiz(&mut self, quiz: Quiz) -> bool {
        if self.quizzes.contains(&quiz) {
            return false;
        }
        self.quizzes.push(quiz);
        true
    }

    /// Removes the first quiz with the same id. Absent quizzes are ignored.
    pub fn remove_quiz(&mut self, quiz: &Quiz) -> bool {
        self.remove_quiz_by_id(quiz.id())
    }

    pub fn remove_quiz_by_id(&mut self, id: &str) -> bool {
        match self.quizzes.iter().position(|q| q.id() == id) {
            Some(pos) => {
                self.quizzes.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Swaps in `updated` at the position of the quiz sharing its id.
    ///
    /// Returns `false` and leaves the user untouched if no quiz matches.
    /// Callers that need a "not found" failure must check the result.
    pub fn update_quiz(&mut self, updated: Quiz) -> bool {
        match self.quizzes.iter_mut().find(|q| q.id() == updated.id()) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.username.hash(state);
    }
}
