//! Display helpers for result text.

/// Default character budget for result bodies.
pub const DEFAULT_TRUNCATE_LENGTH: usize = 64;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Shorten `text` to `max_length` characters, appending [`ELLIPSIS`] when anything was cut.
///
/// Length is counted in Unicode scalar values, so multi-byte characters are never split.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    match text.char_indices().nth(max_length) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
    }
}
