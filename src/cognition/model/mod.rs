//! # Domain Model
//!
//! Three nested aggregates, each validated at construction:
//!
//! ```text
//! User (username)
//! └── Quiz (id)           ordered, unique by id
//!     └── Flashcard (id)  ordered, unique by id
//! ```
//!
//! No invalid value is ever observable: constructors and setters return
//! [`ValidationError`] and leave the target untouched. Child collections are
//! owned by their parent; accessors hand out copies, and the only way to change
//! them is through the containment operations (`add_*`, `remove_*`,
//! `update_quiz`).
//!
//! [`CompactQuiz`] is a title-only projection used by listings.
//!
//! `User`, `Quiz` and `Flashcard` carry no serde derives. The persisted shape
//! lives in `store::schema`, which converts records into validated aggregates.

mod compact;
mod flashcard;
mod quiz;
mod user;
pub mod validation;

pub use compact::CompactQuiz;
pub use flashcard::Flashcard;
pub use quiz::Quiz;
pub use user::User;
pub use validation::{validate_password, validate_username, UserValidation, ValidationError};
