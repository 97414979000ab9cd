use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Flashcard;
use crate::store::UserStore;

use super::helpers::{load_quiz, save_quiz};

/// Appends `flashcard` to the quiz with `quiz_id`.
///
/// A card whose id is already in the quiz is skipped with a warning and
/// nothing is written.
pub fn add<S: UserStore>(store: &mut S, quiz_id: &str, flashcard: Flashcard) -> Result<CmdResult> {
    let (owner, mut quiz) = load_quiz(store, quiz_id)?;

    let card_id = flashcard.id().to_string();
    let front = flashcard.front().to_string();
    if !quiz.add_flashcard(flashcard) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Flashcard {} is already in {}",
            card_id,
            quiz.name()
        ))));
    }

    let message = CmdMessage::success(format!("Flashcard added to {}: {}", quiz.name(), front));
    let owner = save_quiz(store, owner, quiz)?;

    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_users(vec![owner]))
}

/// Removes the card with `card_id` from the quiz. Absent cards are reported,
/// not treated as errors.
pub fn remove<S: UserStore>(store: &mut S, quiz_id: &str, card_id: &str) -> Result<CmdResult> {
    let (owner, mut quiz) = load_quiz(store, quiz_id)?;

    if !quiz.remove_flashcard_by_id(card_id) {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "No flashcard {} in {}",
            card_id,
            quiz.name()
        ))));
    }

    let message = CmdMessage::success(format!("Flashcard removed from {}", quiz.name()));
    let owner = save_quiz(store, owner, quiz)?;

    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_users(vec![owner]))
}
