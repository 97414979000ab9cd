use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CognitionError, Result};
use crate::model::User;
use crate::store::UserStore;
use tracing::info;

use super::helpers::username_taken;

pub fn list<S: UserStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_users(store.read_all()?))
}

pub fn get<S: UserStore>(store: &S, username: &str) -> Result<CmdResult> {
    let user = store.read(username)?;
    Ok(CmdResult::default().with_listed_users(vec![user]))
}

/// Stores a new user, refusing a username that is already taken.
pub fn create<S: UserStore>(store: &mut S, user: User) -> Result<CmdResult> {
    let users = store.read_all()?;
    if username_taken(&users, user.username()) {
        return Err(CognitionError::IdentifierInUse(user.username().to_string()));
    }

    store.create(&user)?;
    info!(user = %user.username(), "user created");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "User created: {}",
            user.username()
        )))
        .with_affected_users(vec![user]))
}

/// Replaces the stored user sharing `user`'s username.
pub fn update<S: UserStore>(store: &mut S, user: User) -> Result<CmdResult> {
    store.update(user.username(), &user)?;
    info!(user = %user.username(), "user updated");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "User updated: {}",
            user.username()
        )))
        .with_affected_users(vec![user]))
}

pub fn rename<S: UserStore>(
    store: &mut S,
    username: &str,
    new_username: &str,
) -> Result<CmdResult> {
    let mut user = store.read(username)?;
    if username == new_username {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info(format!("User unchanged: {}", username))));
    }

    user.set_username(new_username)?;
    let users = store.read_all()?;
    if username_taken(&users, new_username) {
        return Err(CognitionError::IdentifierInUse(new_username.to_string()));
    }

    store.update(username, &user)?;
    info!(from = %username, to = %new_username, "user renamed");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "User renamed: {} -> {}",
            username, new_username
        )))
        .with_affected_users(vec![user]))
}

pub fn set_password<S: UserStore>(
    store: &mut S,
    username: &str,
    password: &str,
) -> Result<CmdResult> {
    let mut user = store.read(username)?;
    user.set_password(password)?;
    store.update(username, &user)?;
    info!(user = %username, "password changed");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Password changed: {}",
            username
        )))
        .with_affected_users(vec![user]))
}

pub fn delete<S: UserStore>(store: &mut S, username: &str) -> Result<CmdResult> {
    let user = store.read(username)?;
    store.delete(username)?;
    info!(user = %username, "user deleted");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "User deleted: {} ({} quizzes)",
            username,
            user.quiz_count()
        )))
        .with_affected_users(vec![user]))
}
