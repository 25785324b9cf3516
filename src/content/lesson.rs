//! Lesson file format: source text, the `--korean--` marker, then the translation.

/// Marker separating the source text from its Korean translation.
pub const SENTINEL: &str = "--korean--";

/// Extension of lesson files (case-sensitive).
pub const TEXT_EXTENSION: &str = ".txt";

/// A lesson file after splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonContent {
    pub title: String,
    pub primary_text: String,
    /// Empty when the file has no marker
    pub secondary_text: String,
}

/// Split lesson text at the first marker, trimming both halves.
///
/// Without a marker the whole (trimmed) text is primary.
pub fn split_lesson(text: &str) -> (String, String) {
    match text.trim().split_once(SENTINEL) {
        Some((primary, secondary)) => (primary.trim().to_string(), secondary.trim().to_string()),
        None => (text.trim().to_string(), String::new()),
    }
}

/// Display title for a lesson file name.
pub fn lesson_title(file_name: &str) -> &str {
    file_name.strip_suffix(TEXT_EXTENSION).unwrap_or(file_name)
}

/// True if the file name has the lesson extension.
pub fn is_lesson_file(file_name: &str) -> bool {
    file_name.ends_with(TEXT_EXTENSION)
}
