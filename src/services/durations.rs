use crate::models::Book;

/// Display durations for titles the API serves without one. Keyed by
/// book id; title keys proved fragile to renames.
const DURATION_FALLBACKS: &[(&str, &str)] = &[
    ("5bxl50cz4bt", "03:24"),
    ("f9gy1gpai8", "04:52"),
    ("2l0idxm1rvw", "04:40"),
    ("g4el8bdzgp", "03:24"),
    ("hyqzmlbtz9", "05:45"),
    ("xmnke9qxmb", "04:01"),
    ("cyyzfvkpceb", "03:19"),
];

pub fn fallback_duration(book_id: &str) -> Option<&'static str> {
    DURATION_FALLBACKS
        .iter()
        .find(|(id, _)| *id == book_id)
        .map(|(_, duration)| *duration)
}

/// Duration shown on detail and player pages, when known from either
/// source.
pub fn display_duration(book: &Book) -> Option<String> {
    if let Some(duration) = book.duration.as_deref() {
        if !duration.trim().is_empty() {
            return Some(duration.to_string());
        }
    }
    fallback_duration(&book.id).map(|d| d.to_string())
}
