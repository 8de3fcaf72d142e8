//! Hover read-aloud text selection

/// Trimmed text worth speaking: strictly longer than `min_chars` characters.
#[must_use]
pub fn speakable_text(raw: &str, min_chars: usize) -> Option<String> {
    let text = raw.trim();
    (text.chars().count() > min_chars).then(|| text.to_string())
}
