/// Silently shorten `s` to at most `max` characters.
///
/// String fields in the catalog are capped at a fixed length at
/// construction time and never rejected. Counts characters, not bytes,
/// so multi-byte input is never split mid-character.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
