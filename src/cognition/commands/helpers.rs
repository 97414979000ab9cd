use crate::error::{CognitionError, Result};
use crate::model::{Quiz, User};
use crate::store::UserStore;
use tracing::info;

/// First user owning a quiz with `quiz_id`.
pub(super) fn find_quiz_owner(users: Vec<User>, quiz_id: &str) -> Option<User> {
    users.into_iter().find(|u| u.has_quiz(quiz_id))
}

/// Loads the owner of `quiz_id` together with a copy of the quiz.
pub(super) fn load_quiz<S: UserStore>(store: &S, quiz_id: &str) -> Result<(User, Quiz)> {
    let owner = find_quiz_owner(store.read_all()?, quiz_id)
        .ok_or_else(|| CognitionError::QuizNotFound(quiz_id.to_string()))?;
    let quiz = owner
        .quiz(quiz_id)
        .cloned()
        .ok_or_else(|| CognitionError::QuizNotFound(quiz_id.to_string()))?;
    Ok((owner, quiz))
}

/// Swaps `quiz` into `owner` and persists the owner.
pub(super) fn save_quiz<S: UserStore>(store: &mut S, mut owner: User, quiz: Quiz) -> Result<User> {
    let quiz_id = quiz.id().to_string();
    if !owner.update_quiz(quiz) {
        return Err(CognitionError::QuizNotFound(quiz_id));
    }
    let username = owner.username().to_string();
    store.update(&username, &owner)?;
    info!(user = %username, quiz = %quiz_id, "quiz saved");
    Ok(owner)
}

pub(super) fn username_taken(users: &[User], username: &str) -> bool {
    users.iter().any(|u| u.username() == username)
}

pub(super) fn quiz_id_taken(users: &[User], quiz_id: &str) -> bool {
    users.iter().any(|u| u.has_quiz(quiz_id))
}
