use sqlx::SqlitePool;

use crate::db::DbError;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

#[tracing::instrument(skip(pool))]
pub async fn username_exists(pool: &SqlitePool, username: &str) -> Result<bool, DbError> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM users WHERE users.username = ?1
        "#,
    )
    .bind(username)
    .fetch_one(pool)
    .await?;
    Ok(count > 0)
}

/// Creates an account unless the username is already taken.
///
/// The check and the insert are separate statements, which is fine for a
/// single console but not for concurrent writers.
#[tracing::instrument(skip(pool, password))]
pub async fn sign_up(
    pool: &SqlitePool,
    username: &str,
    password: &str,
    is_admin: bool,
) -> Result<i64, DbError> {
    if username_exists(pool, username).await? {
        return Err(DbError::UsernameTaken(username.to_owned()));
    }
    let mut conn = pool.acquire().await?;

    let id = sqlx::query(
        r#"
        INSERT INTO users (username, password, is_admin) VALUES (?1, ?2, ?3)
        "#,
    )
    .bind(username)
    .bind(password)
    .bind(is_admin)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    tracing::debug!(id, "User created");
    Ok(id)
}

/// Looks up the account matching all three fields exactly.
#[tracing::instrument(skip(pool, password))]
pub async fn login(
    pool: &SqlitePool,
    username: &str,
    password: &str,
    is_admin: bool,
) -> Result<Option<User>, DbError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password, is_admin FROM users
        WHERE users.username = ?1 AND users.password = ?2 AND users.is_admin = ?3
        ORDER BY id
        LIMIT 1
        "#,
    )
    .bind(username)
    .bind(password)
    .bind(is_admin)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn authenticate(
    pool: &SqlitePool,
    username: &str,
    password: &str,
    is_admin: bool,
) -> Result<bool, DbError> {
    Ok(login(pool, username, password, is_admin).await?.is_some())
}
