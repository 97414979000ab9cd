//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point for
//! every UI (the bundled CLI, a web router, tests).
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Builds domain values** from raw strings (new ids, validated fields)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business rules; those belong in
//! `commands/*.rs`.
//!
//! ## Generic Over UserStore
//!
//! `CognitionApi<S: UserStore>` works with any backend:
//! - Production: `CognitionApi<FileStore>`
//! - Testing: `CognitionApi<InMemoryStore>`

use crate::commands::{self, CmdResult};
use crate::error::{CognitionError, Result};
use crate::model::{Flashcard, Quiz, User};
use crate::store::UserStore;

pub use crate::commands::{CmdMessage, MessageLevel};

/// Field changes for [`CognitionApi::edit_quiz`]. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct QuizEdit {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub struct CognitionApi<S: UserStore> {
    store: S,
}

impl<S: UserStore> CognitionApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // --- Users ---

    pub fn list_users(&self) -> Result<CmdResult> {
        commands::users::list(&self.store)
    }

    pub fn get_user(&self, username: &str) -> Result<CmdResult> {
        commands::users::get(&self.store, username)
    }

    pub fn register_user(&mut self, username: &str, password: &str) -> Result<CmdResult> {
        let user = User::new(username, password)?;
        commands::users::create(&mut self.store, user)
    }

    pub fn update_user(&mut self, user: User) -> Result<CmdResult> {
        commands::users::update(&mut self.store, user)
    }

    pub fn rename_user(&mut self, username: &str, new_username: &str) -> Result<CmdResult> {
        commands::users::rename(&mut self.store, username, new_username)
    }

    pub fn change_password(&mut self, username: &str, password: &str) -> Result<CmdResult> {
        commands::users::set_password(&mut self.store, username, password)
    }

    pub fn delete_user(&mut self, username: &str) -> Result<CmdResult> {
        commands::users::delete(&mut self.store, username)
    }

    // --- Quizzes ---

    pub fn list_quizzes(&self, username: &str) -> Result<CmdResult> {
        commands::quizzes::list(&self.store, username)
    }

    pub fn quiz_titles(&self, username: &str) -> Result<CmdResult> {
        commands::quizzes::titles(&self.store, username)
    }

    pub fn get_quiz(&self, quiz_id: &str) -> Result<CmdResult> {
        commands::quizzes::get(&self.store, quiz_id)
    }

    /// Creates a quiz with a fresh id for `username`.
    pub fn create_quiz(
        &mut self,
        username: &str,
        name: &str,
        description: &str,
    ) -> Result<CmdResult> {
        let quiz = Quiz::create(name, description)?;
        commands::quizzes::create(&mut self.store, username, quiz)
    }

    /// Stores a caller-built quiz, keeping its id.
    pub fn add_quiz(&mut self, username: &str, quiz: Quiz) -> Result<CmdResult> {
        commands::quizzes::create(&mut self.store, username, quiz)
    }

    pub fn update_quiz(&mut self, quiz: Quiz) -> Result<CmdResult> {
        commands::quizzes::update(&mut self.store, quiz)
    }

    pub fn edit_quiz(&mut self, quiz_id: &str, edit: QuizEdit) -> Result<CmdResult> {
        let mut quiz = commands::quizzes::get(&self.store, quiz_id)?
            .listed_quizzes
            .into_iter()
            .next()
            .ok_or_else(|| CognitionError::QuizNotFound(quiz_id.to_string()))?;
        if let Some(name) = edit.name {
            quiz.set_name(name)?;
        }
        if let Some(description) = edit.description {
            quiz.set_description(description)?;
        }
        commands::quizzes::update(&mut self.store, quiz)
    }

    pub fn delete_quiz(&mut self, quiz_id: &str) -> Result<CmdResult> {
        commands::quizzes::delete(&mut self.store, quiz_id)
    }

    // --- Flashcards ---

    /// Creates a flashcard with a fresh id in the quiz.
    pub fn add_flashcard(
        &mut self,
        quiz_id: &str,
        front: &str,
        answer: &str,
    ) -> Result<CmdResult> {
        let card = Flashcard::create(front, answer)?;
        commands::flashcards::add(&mut self.store, quiz_id, card)
    }

    pub fn remove_flashcard(&mut self, quiz_id: &str, card_id: &str) -> Result<CmdResult> {
        commands::flashcards::remove(&mut self.store, quiz_id, card_id)
    }
}
