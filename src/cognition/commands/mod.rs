//! # Command Layer
//!
//! Business rules that sit above the store. The store is deliberately dumb
//! whole-collection CRUD; everything that needs to look across records lives
//! here:
//!
//! - A username is taken at most once ([`users::create`], [`users::rename`]).
//! - A quiz id is unique across **all** users ([`quizzes::create`]).
//! - Quizzes and flashcards are addressed by id without knowing their owner
//!   ([`quizzes::get`], [`quizzes::update`], [`flashcards::add`], ...).
//!
//! Each command takes a [`UserStore`](crate::store::UserStore), returns a
//! [`CmdResult`], and never prints. Failures come back as
//! [`CognitionError`](crate::error::CognitionError) values for the caller to
//! present.

use crate::model::{CompactQuiz, Quiz, User};

pub mod flashcards;
mod helpers;
pub mod quizzes;
pub mod users;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Users written by the command, in their stored state.
    pub affected_users: Vec<User>,
    pub listed_users: Vec<User>,
    pub listed_quizzes: Vec<Quiz>,
    pub quiz_titles: Vec<CompactQuiz>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_affected_users(mut self, users: Vec<User>) -> Self {
        self.affected_users = users;
        self
    }

    pub fn with_listed_users(mut self, users: Vec<User>) -> Self {
        self.listed_users = users;
        self
    }

    pub fn with_listed_quizzes(mut self, quizzes: Vec<Quiz>) -> Self {
        self.listed_quizzes = quizzes;
        self
    }

    pub fn with_quiz_titles(mut self, titles: Vec<CompactQuiz>) -> Self {
        self.quiz_titles = titles;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
