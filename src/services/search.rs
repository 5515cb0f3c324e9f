use crate::models::Book;
use crate::services::book_api::{BookApi, Category};

/// The dropdown shows at most this many results.
pub const MAX_RESULTS: usize = 5;

/// Case-insensitive substring match against title or author.
pub fn matches_query(book: &Book, query: &str) -> bool {
    let q = query.to_lowercase();
    book.title.to_lowercase().contains(&q) || book.author.to_lowercase().contains(&q)
}

/// Drops later duplicates of an id, keeping first-seen order. The same
/// book can appear in more than one source category.
pub fn dedupe_by_id(books: Vec<Book>) -> Vec<Book> {
    let mut seen = std::collections::HashSet::new();
    books
        .into_iter()
        .filter(|b| seen.insert(b.id.clone()))
        .collect()
}

/// Full result pipeline over an already-fetched corpus: dedupe,
/// filter, cap.
pub fn filter_books(books: Vec<Book>, query: &str) -> Vec<Book> {
    dedupe_by_id(books)
        .into_iter()
        .filter(|b| matches_query(b, query))
        .take(MAX_RESULTS)
        .collect()
}

/// Message shown when a query has no matches; contains the literal
/// query text.
pub fn empty_state_message(query: &str) -> String {
    format!("No books found for \"{}\"", query)
}

/// Gathers the three source categories and runs the pipeline. A failed
/// category contributes nothing and is only logged; the caller renders
/// whatever remains (an all-failed search reads as empty).
pub async fn search(api: &BookApi, query: &str) -> Vec<Book> {
    let mut corpus = Vec::new();

    for category in Category::ALL {
        match api.get_books(category).await {
            Ok(books) => corpus.extend(books),
            Err(e) => {
                log::warn!("search: fetching {} books failed: {}", category, e);
            }
        }
    }

    filter_books(corpus, query)
}
