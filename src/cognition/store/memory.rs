use super::UserStore;
use crate::error::Result;
use crate::model::User;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: Vec<User>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryStore {
    fn read_all(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }

    fn write_all(&mut self, users: &[User]) -> Result<()> {
        self.users = users.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Flashcard, Quiz};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_user(mut self, username: &str) -> Self {
            let user = User::new(username, "password").unwrap();
            self.store.create(&user).unwrap();
            self
        }

        pub fn with_users(mut self, count: usize) -> Self {
            for i in 0..count {
                let user = User::new(format!("user{}", i + 1), "password").unwrap();
                self.store.create(&user).unwrap();
            }
            self
        }

        /// Adds a quiz with `cards` generated flashcards to an existing user.
        /// Returns the fixture and the new quiz id.
        pub fn with_quiz(mut self, username: &str, name: &str, cards: usize) -> (Self, String) {
            let mut user = self.store.read(username).unwrap();
            let mut quiz = Quiz::create(name, format!("{} description", name)).unwrap();
            for i in 0..cards {
                let card = Flashcard::create(
                    format!("Question {}", i + 1),
                    format!("Answer {}", i + 1),
                )
                .unwrap();
                quiz.add_flashcard(card);
            }
            let id = quiz.id().to_string();
            user.add_quiz(quiz);
            self.store.update(username, &user).unwrap();
            (self, id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn mirrors_file_store_semantics() {
        let mut store = InMemoryStore::new();
        assert!(store.read_all().unwrap().is_empty());
        assert!(store.read("alice").unwrap_err().is_not_found());
        assert!(store.delete("alice").unwrap_err().is_not_found());

        store.create(&User::new("alice", "password").unwrap()).unwrap();
        store
            .update("alice", &User::new("bob", "password").unwrap())
            .unwrap();
        assert!(store.read("alice").unwrap_err().is_not_found());
        assert_eq!(store.read("bob").unwrap().username(), "bob");
    }

    #[test]
    fn fixture_builds_users_and_quizzes() {
        let (fixture, quiz_id) = StoreFixture::new()
            .with_users(2)
            .with_user("alice")
            .with_quiz("alice", "Capitals", 3);
        let users = fixture.store.read_all().unwrap();
        assert_eq!(users.len(), 3);
        let quiz = users[2].quiz(&quiz_id).unwrap();
        assert_eq!(quiz.flashcard_count(), 3);
    }
}
