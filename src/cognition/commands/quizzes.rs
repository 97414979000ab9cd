use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CognitionError, Result};
use crate::model::Quiz;
use crate::store::UserStore;
use tracing::info;

use super::helpers::{find_quiz_owner, load_quiz, quiz_id_taken, save_quiz};

/// Full quizzes of one user.
pub fn list<S: UserStore>(store: &S, username: &str) -> Result<CmdResult> {
    let user = store.read(username)?;
    Ok(CmdResult::default().with_listed_quizzes(user.quizzes()))
}

/// Id and name of each quiz of one user.
pub fn titles<S: UserStore>(store: &S, username: &str) -> Result<CmdResult> {
    let user = store.read(username)?;
    Ok(CmdResult::default().with_quiz_titles(user.compact_quizzes()))
}

/// Looks a quiz up by id across all users.
pub fn get<S: UserStore>(store: &S, quiz_id: &str) -> Result<CmdResult> {
    let (_, quiz) = load_quiz(store, quiz_id)?;
    Ok(CmdResult::default().with_listed_quizzes(vec![quiz]))
}

/// Adds `quiz` to `username`. The quiz id must not be used by any user.
pub fn create<S: UserStore>(store: &mut S, username: &str, quiz: Quiz) -> Result<CmdResult> {
    let mut user = store.read(username)?;
    let users = store.read_all()?;
    if quiz_id_taken(&users, quiz.id()) {
        return Err(CognitionError::IdentifierInUse(quiz.id().to_string()));
    }

    let message = CmdMessage::success(format!("Quiz created: {} ({})", quiz.name(), quiz.id()));
    let quiz_id = quiz.id().to_string();
    user.add_quiz(quiz);
    store.update(username, &user)?;
    info!(user = %username, quiz = %quiz_id, "quiz created");

    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_users(vec![user]))
}

/// Replaces the stored quiz sharing `quiz`'s id, wherever it lives.
pub fn update<S: UserStore>(store: &mut S, quiz: Quiz) -> Result<CmdResult> {
    let owner = find_quiz_owner(store.read_all()?, quiz.id())
        .ok_or_else(|| CognitionError::QuizNotFound(quiz.id().to_string()))?;

    let message = CmdMessage::success(format!("Quiz updated: {}", quiz.name()));
    let owner = save_quiz(store, owner, quiz)?;

    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_users(vec![owner]))
}

pub fn delete<S: UserStore>(store: &mut S, quiz_id: &str) -> Result<CmdResult> {
    let (mut owner, quiz) = load_quiz(store, quiz_id)?;
    owner.remove_quiz(&quiz);

    let username = owner.username().to_string();
    store.update(&username, &owner)?;
    info!(user = %username, quiz = %quiz_id, "quiz deleted");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Quiz deleted: {}", quiz.name())))
        .with_affected_users(vec![owner]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::User;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::tools::create_uuid;

    #[test]
    fn create_adds_quiz_to_user() {
        let mut fixture = StoreFixture::new().with_user("alice123");
        let id = create_uuid();
        let quiz = Quiz::new(id.clone(), "Capitals", "Europe").unwrap();
        create(&mut fixture.store, "alice123", quiz).unwrap();

        let quizzes = list(&fixture.store, "alice123").unwrap().listed_quizzes;
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].id(), id);
        assert_eq!(quizzes[0].description(), "Europe");
    }

    #[test]
    fn create_for_missing_user_is_not_found() {
        let mut fixture = StoreFixture::new();
        let quiz = Quiz::create("Capitals", "Europe").unwrap();
        let err = create(&mut fixture.store, "ghost", quiz).unwrap_err();
        assert!(matches!(err, CognitionError::UserNotFound(_)));
    }

    #[test]
    fn quiz_ids_are_unique_across_users() {
        let (fixture, quiz_id) = StoreFixture::new()
            .with_user("alice")
            .with_user("bob")
            .with_quiz("alice", "Capitals", 0);
        let mut store = fixture.store;

        let clash = Quiz::new(quiz_id, "Copy", "Same id").unwrap();
        let err = create(&mut store, "bob", clash).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(store.read("bob").unwrap().quiz_count(), 0);
    }

    #[test]
    fn titles_are_compact() {
        let (fixture, quiz_id) = StoreFixture::new()
            .with_user("alice")
            .with_quiz("alice", "Capitals", 4);
        let result = titles(&fixture.store, "alice").unwrap();
        assert_eq!(result.quiz_titles.len(), 1);
        assert_eq!(result.quiz_titles[0].id(), quiz_id);
        assert_eq!(result.quiz_titles[0].name(), "Capitals");
    }

    #[test]
    fn get_finds_quiz_of_any_user() {
        let (fixture, quiz_id) = StoreFixture::new()
            .with_users(2)
            .with_quiz("user2", "Rivers", 2);
        let result = get(&fixture.store, &quiz_id).unwrap();
        assert_eq!(result.listed_quizzes[0].name(), "Rivers");
        assert_eq!(result.listed_quizzes[0].flashcard_count(), 2);

        assert!(get(&fixture.store, &create_uuid())
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn update_replaces_quiz_in_place() {
        let (fixture, first) = StoreFixture::new()
            .with_user("alice")
            .with_quiz("alice", "First", 0);
        let (fixture, _second) = fixture.with_quiz("alice", "Second", 0);
        let mut store = fixture.store;

        let mut quiz = get(&store, &first).unwrap().listed_quizzes.remove(0);
        quiz.set_name("Renamed").unwrap();
        update(&mut store, quiz).unwrap();

        let names: Vec<_> = store
            .read("alice")
            .unwrap()
            .quizzes_iter()
            .map(|q| q.name().to_string())
            .collect();
        assert_eq!(names, vec!["Renamed", "Second"]);
    }

    #[test]
    fn update_unknown_quiz_is_not_found() {
        let mut fixture = StoreFixture::new().with_user("alice");
        let stray = Quiz::create("Stray", "Nobody owns this").unwrap();
        assert!(update(&mut fixture.store, stray).unwrap_err().is_not_found());
    }

    #[test]
    fn delete_removes_quiz_and_fails_on_repeat() {
        let (fixture, quiz_id) = StoreFixture::new()
            .with_user("alice")
            .with_quiz("alice", "Capitals", 1);
        let mut store = fixture.store;

        delete(&mut store, &quiz_id).unwrap();
        assert_eq!(store.read("alice").unwrap().quiz_count(), 0);
        assert!(delete(&mut store, &quiz_id).unwrap_err().is_not_found());
    }

    #[test]
    fn in_memory_remove_is_silent_while_delete_fails() {
        // User::remove_quiz ignores absent quizzes; the command reports them.
        let mut user = User::new("alice", "password").unwrap();
        let absent = Quiz::create("Absent", "Never added").unwrap();
        assert!(!user.remove_quiz(&absent));

        let mut fixture = StoreFixture::new().with_user("alice");
        assert!(delete(&mut fixture.store, absent.id())
            .unwrap_err()
            .is_not_found());
    }
}
