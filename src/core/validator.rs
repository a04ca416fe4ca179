//! Input legality checks, one per translation direction.

/// Expects text that has already been upper-cased.
pub fn is_valid_for_encode(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    let allowed = text
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == ' ');

    allowed && !text.chars().all(|c| c == ' ')
}

/// A mix of only spaces and slashes is accepted; only all-space or
/// all-slash text is rejected.
pub fn is_valid_for_decode(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    let allowed = text.chars().all(|c| matches!(c, '.' | '-' | ' ' | '/'));
    let all_spaces = text.chars().all(|c| c == ' ');
    let all_slashes = text.chars().all(|c| c == '/');

    allowed && !all_spaces && !all_slashes
}
