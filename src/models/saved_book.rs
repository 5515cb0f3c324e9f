use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::Book;

/// A snapshot of a book taken when the user added it to their library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedBookRecord {
    pub book_id: String,
    pub book: Book,
    pub saved_at: DateTime<Utc>,
}

/// Raw row shape; the `book` column is the JSONB snapshot.
#[derive(Debug, FromRow)]
pub struct SavedBookRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub book_id: String,
    pub book: serde_json::Value,
    pub saved_at: DateTime<Utc>,
}

impl TryFrom<SavedBookRow> for SavedBookRecord {
    type Error = serde_json::Error;

    fn try_from(row: SavedBookRow) -> Result<Self, Self::Error> {
        Ok(SavedBookRecord {
            book_id: row.book_id,
            book: serde_json::from_value(row.book)?,
            saved_at: row.saved_at,
        })
    }
}

/// List operations over a saved list. The database serializes writers;
/// these model the same semantics for in-memory lists and tests.
pub fn is_saved(list: &[SavedBookRecord], book_id: &str) -> bool {
    list.iter().any(|r| r.book_id == book_id)
}

/// Adds the book if absent, removes it if present. Returns the new
/// list; ids stay unique under any sequence of toggles.
pub fn toggle(mut list: Vec<SavedBookRecord>, book: &Book, now: DateTime<Utc>) -> Vec<SavedBookRecord> {
    if is_saved(&list, &book.id) {
        list.retain(|r| r.book_id != book.id);
    } else {
        list.push(SavedBookRecord {
            book_id: book.id.clone(),
            book: book.clone(),
            saved_at: now,
        });
    }
    list
}
