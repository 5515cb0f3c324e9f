use crate::models::Book;

/// Hosted narrations for titles the API serves without an
/// `audioLink`. Keyed by book id.
const AUDIO_FALLBACKS: &[(&str, &str)] = &[
    (
        "5bxl50cz4bt",
        "https://firebasestorage.googleapis.com/v0/b/summaristt.appspot.com/o/books%2Faudios%2Fhow-to-win-friends-and-influence-people.mp3?alt=media",
    ),
    (
        "f9gy1gpai8",
        "https://firebasestorage.googleapis.com/v0/b/summaristt.appspot.com/o/books%2Faudios%2Fcant-hurt-me.mp3?alt=media",
    ),
    (
        "2l0idxm1rvw",
        "https://firebasestorage.googleapis.com/v0/b/summaristt.appspot.com/o/books%2Faudios%2Fmastery.mp3?alt=media",
    ),
    (
        "g4el8bdzgp",
        "https://firebasestorage.googleapis.com/v0/b/summaristt.appspot.com/o/books%2Faudios%2Fzero-to-one.mp3?alt=media",
    ),
    (
        "hyqzmlbtz9",
        "https://firebasestorage.googleapis.com/v0/b/summaristt.appspot.com/o/books%2Faudios%2Frich-dad-poor-dad.mp3?alt=media",
    ),
];

pub fn fallback_audio(book_id: &str) -> Option<&'static str> {
    AUDIO_FALLBACKS
        .iter()
        .find(|(id, _)| *id == book_id)
        .map(|(_, url)| *url)
}

/// Source resolution policy: the API's `audioLink` wins; otherwise the
/// fallback table; otherwise no audio controls are rendered.
pub fn resolve_audio(book: &Book) -> Option<String> {
    if let Some(link) = book.audio_link.as_deref() {
        if !link.trim().is_empty() {
            return Some(link.to_string());
        }
    }
    fallback_audio(&book.id).map(|url| url.to_string())
}
