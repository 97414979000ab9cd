//! Identifier helpers and small string utilities.

use uuid::Uuid;

/// Length of a hyphenated identifier, e.g. `123e4567-e89b-12d3-a456-426614174000`.
pub const UUID_LENGTH: usize = 36;

const UUID_SEGMENTS: usize = 5;

/// Creates a random identifier that passes [`is_valid_uuid`].
pub fn create_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Shape check for identifiers: 36 characters split into 5 segments by `-`.
///
/// Segments are counted both with and without trailing empty ones, so
/// `…-b-c-d-e-` passes alongside ids with four hyphens anywhere. Hex content
/// and version nibbles are not inspected. Documents written by older clients
/// carry identifiers that only satisfy this looser shape.
pub fn is_valid_uuid(uuid: &str) -> bool {
    if uuid.chars().count() != UUID_LENGTH {
        return false;
    }

    let segments: Vec<&str> = uuid.split('-').collect();
    let without_trailing = segments
        .iter()
        .rposition(|s| !s.is_empty())
        .map_or(0, |last| last + 1);
    segments.len() == UUID_SEGMENTS || without_trailing == UUID_SEGMENTS
}

/// Uppercases the first character and leaves the rest untouched.
/// An empty string comes back empty.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
