//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// `max_len` counts bytes; the cut is moved back to the nearest character
/// boundary.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3).min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// Count words the way a `\w+` scan would: maximal runs of alphanumerics
/// or underscores.
pub fn word_count(s: &str) -> usize {
    s.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .count()
}

/// Lower-case and replace spaces with underscores, for download file names.
pub fn file_slug(s: &str) -> String {
    s.trim().to_lowercase().replace(' ', "_")
}

/// Normalize a user-typed option label for comparison.
///
/// `"Bullet Points"`, `"bullet-points"` and `"bullet_points"` all compare equal.
pub fn normalize_label(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric() || *c == '+')
        .flat_map(char::to_lowercase)
        .collect()
}
