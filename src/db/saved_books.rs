use sqlx::PgPool;
use uuid::Uuid;

use crate::common::LibraryError;
use crate::models::{Book, SavedBookRecord, SavedBookRow};

pub async fn list_saved(pool: &PgPool, user_id: Uuid) -> Result<Vec<SavedBookRecord>, LibraryError> {
    let rows = sqlx::query_as::<_, SavedBookRow>(
        r#"
        SELECT *
        FROM saved_books
        WHERE user_id = $1
        ORDER BY saved_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| SavedBookRecord::try_from(row).map_err(LibraryError::from))
        .collect()
}

pub async fn is_saved(pool: &PgPool, user_id: Uuid, book_id: &str) -> Result<bool, LibraryError> {
    let found: Option<(Uuid,)> = sqlx::query_as(
        r#"
        SELECT id
        FROM saved_books
        WHERE user_id = $1 AND book_id = $2
        "#,
    )
    .bind(user_id)
    .bind(book_id)
    .fetch_optional(pool)
    .await?;

    Ok(found.is_some())
}

/// Adds the book to the user's library, or removes it if already
/// saved. Returns whether the book is saved afterwards. The unique
/// `(user_id, book_id)` index keeps the list duplicate-free even when
/// two toggles race; the loser of an insert race falls through to the
/// conflict arm and reads back as saved.
pub async fn toggle_saved(pool: &PgPool, user_id: Uuid, book: &Book) -> Result<bool, LibraryError> {
    let removed = sqlx::query(
        r#"
        DELETE FROM saved_books
        WHERE user_id = $1 AND book_id = $2
        "#,
    )
    .bind(user_id)
    .bind(&book.id)
    .execute(pool)
    .await?;

    if removed.rows_affected() > 0 {
        return Ok(false);
    }

    let snapshot = serde_json::to_value(book)?;

    sqlx::query(
        r#"
        INSERT INTO saved_books (user_id, book_id, book)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id, book_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(&book.id)
    .bind(snapshot)
    .execute(pool)
    .await?;

    Ok(true)
}
