use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{LoginMethod, Plan, User};

/// Returns `Ok(None)` when the email is already registered.
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
    login_method: LoginMethod,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password_hash, login_method)
        VALUES ($1, $2, $3)
        ON CONFLICT (email) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(login_method.as_str())
    .fetch_optional(pool)
    .await
}

pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// For Google sign-in: the account is keyed by the verified email; an
/// existing row is reused regardless of its original login method.
pub async fn get_or_create_google_user(pool: &PgPool, email: &str) -> Result<User, sqlx::Error> {
    if let Some(user) = get_user_by_email(pool, email).await? {
        return Ok(user);
    }

    // No password for OAuth accounts; the hash column stays non-null.
    let created = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password_hash, login_method)
        VALUES ($1, 'OAUTH', 'google')
        ON CONFLICT (email) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    match created {
        Some(user) => Ok(user),
        // Lost a race with a concurrent first sign-in; the row exists now.
        None => sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_one(pool)
            .await,
    }
}

pub async fn set_user_plan(pool: &PgPool, id: Uuid, plan: Plan) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET plan = $1, edited_at = now()
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(plan.as_str())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn set_user_password(
    pool: &PgPool,
    id: Uuid,
    password_hash: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET password_hash = $1, edited_at = now()
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(password_hash)
    .bind(id)
    .fetch_optional(pool)
    .await
}
