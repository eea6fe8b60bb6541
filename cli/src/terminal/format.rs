/// Clips `content` to `length` characters, spending the last three on an
/// ellipsis. Content strictly shorter than `length` passes through.
pub fn smart_truncate(content: &str, length: usize) -> String {
    if content.chars().count() < length {
        return content.to_string();
    }
    let keep: usize = length.saturating_sub(3);
    let truncated: String = content.chars().take(keep).collect();
    format!("{truncated}...")
}
