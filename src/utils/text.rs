/// Shortens a text for logs and error metadata. If it has more than
/// `max_length` characters, it is cut to `max_length` characters and an
/// ellipsis (`...`) is appended.
pub fn truncate(input: &str, max_length: usize) -> String {
    match input.char_indices().nth(max_length) {
        Some((end, _)) => format!("{}...", &input[..end]),
        None => input.to_string(),
    }
}
