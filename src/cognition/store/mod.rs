//! # Storage Layer
//!
//! Users are persisted as a single document holding the whole collection.
//! The [`UserStore`] trait splits the work in two:
//!
//! - Backends implement raw whole-collection I/O: [`UserStore::read_all`] and
//!   [`UserStore::write_all`].
//! - CRUD by username ([`create`](UserStore::create), [`read`](UserStore::read),
//!   [`update`](UserStore::update), [`delete`](UserStore::delete)) is provided
//!   once on top of those two calls.
//!
//! ## Whole-Collection CRUD
//!
//! Every operation reads the full collection, changes it in memory, and
//! writes the full collection back. Lookup is a linear scan on username.
//! Nothing is cached between calls, so two stores on the same path see each
//! other's committed writes.
//!
//! There is no locking. Two concurrent read-modify-write cycles on the same
//! document can lose one writer's change.
//!
//! ## Policy Lives Above the Store
//!
//! `create` appends without checking for an existing username, and nothing
//! here looks at quiz ids across users. Uniqueness is enforced by the command
//! layer (`commands::users`, `commands::quizzes`).
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON document on disk, see [`schema`] for the format.
//! - [`memory::InMemoryStore`]: `Vec<User>` for tests, no persistence.

use crate::error::{CognitionError, Result};
use crate::model::User;

pub mod fs;
pub mod memory;
pub mod schema;

pub trait UserStore {
    /// Loads every user in document order. An absent or empty document yields
    /// an empty list.
    fn read_all(&self) -> Result<Vec<User>>;

    /// Replaces the whole document with `users`.
    fn write_all(&mut self, users: &[User]) -> Result<()>;

    /// Appends `user`. Does not check for an existing username.
    fn create(&mut self, user: &User) -> Result<()> {
        let mut users = self.read_all()?;
        users.push(user.clone());
        self.write_all(&users)
    }

    /// Returns the first user named `username`.
    fn read(&self, username: &str) -> Result<User> {
        self.read_all()?
            .into_iter()
            .find(|u| u.username() == username)
            .ok_or_else(|| CognitionError::UserNotFound(username.to_string()))
    }

    /// Replaces the user named `username` with `user`.
    ///
    /// `user` may carry a different username, which renames the entry.
    fn update(&mut self, username: &str, user: &User) -> Result<()> {
        let mut users = self.read_all()?;
        let pos = position_of(&users, username)?;
        users[pos] = user.clone();
        self.write_all(&users)
    }

    /// Removes the first user named `username`.
    fn delete(&mut self, username: &str) -> Result<()> {
        let mut users = self.read_all()?;
        let pos = position_of(&users, username)?;
        users.remove(pos);
        self.write_all(&users)
    }
}

fn position_of(users: &[User], username: &str) -> Result<usize> {
    users
        .iter()
        .position(|u| u.username() == username)
        .ok_or_else(|| CognitionError::UserNotFound(username.to_string()))
}
