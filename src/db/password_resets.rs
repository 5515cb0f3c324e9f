use sqlx::PgPool;
use uuid::Uuid;

/// Issues a single-use reset token for the user.
pub async fn create_password_reset(pool: &PgPool, user_id: Uuid) -> Result<Uuid, sqlx::Error> {
    let row: (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO password_resets (user_id)
        VALUES ($1)
        RETURNING token
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(row.0)
}

/// Marks the token used and returns its user, or `None` when the token
/// is unknown or already consumed.
pub async fn consume_password_reset(pool: &PgPool, token: Uuid) -> Result<Option<Uuid>, sqlx::Error> {
    let row: Option<(Uuid,)> = sqlx::query_as(
        r#"
        UPDATE password_resets
        SET used_at = now()
        WHERE token = $1 AND used_at IS NULL
        RETURNING user_id
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.0))
}

/// A token is valid while unused.
pub async fn reset_token_exists(pool: &PgPool, token: Uuid) -> Result<bool, sqlx::Error> {
    let row: Option<(Uuid,)> = sqlx::query_as(
        r#"
        SELECT user_id
        FROM password_resets
        WHERE token = $1 AND used_at IS NULL
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.is_some())
}
