use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{clamp_font_index, Preferences};

pub async fn get_preferences(pool: &PgPool, user_id: Uuid) -> Result<Option<Preferences>, sqlx::Error> {
    sqlx::query_as::<_, Preferences>(
        r#"
        SELECT *
        FROM preferences
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Upsert, last write wins. The index is clamped to the preset bounds
/// before it is stored.
pub async fn set_font_index(
    pool: &PgPool,
    user_id: Uuid,
    font_index: i64,
) -> Result<Preferences, sqlx::Error> {
    let clamped = clamp_font_index(font_index) as i16;

    sqlx::query_as::<_, Preferences>(
        r#"
        INSERT INTO preferences (user_id, font_index)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO UPDATE
        SET font_index = EXCLUDED.font_index, edited_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(clamped)
    .fetch_one(pool)
    .await
}

pub async fn set_dark_mode(
    pool: &PgPool,
    user_id: Uuid,
    dark_mode: bool,
) -> Result<Preferences, sqlx::Error> {
    sqlx::query_as::<_, Preferences>(
        r#"
        INSERT INTO preferences (user_id, dark_mode)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO UPDATE
        SET dark_mode = EXCLUDED.dark_mode, edited_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(dark_mode)
    .fetch_one(pool)
    .await
}
