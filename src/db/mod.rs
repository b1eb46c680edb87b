pub mod error;
pub mod queries;
mod schema;

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Error;

pub use error::DbError;
pub use queries::questions::Question;
pub use queries::results::QuizResult;
pub use queries::users::User;
pub use schema::initialize_schema;

/// Opens the database file at `path`, creating it when absent.
///
/// The pool is capped at a single connection: every operation shares one
/// handle, and `results.user_id` is checked against `users` on every insert.
pub async fn establish_connection(path: impl AsRef<Path>) -> Result<SqlitePool, Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);
    connect_with(options).await
}

/// A private store that lives as long as the returned pool.
pub async fn establish_in_memory() -> Result<SqlitePool, Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    connect_with(options).await
}

async fn connect_with(options: SqliteConnectOptions) -> Result<SqlitePool, Error> {
    // an in-memory database dies with its connection, so never recycle it
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = establish_in_memory().await.unwrap();
    initialize_schema(&pool).await.unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::queries::{questions, users};

    #[tokio::test]
    async fn schema_init_is_idempotent_and_data_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz_system.db");

        let pool = establish_connection(&path).await.unwrap();
        initialize_schema(&pool).await.unwrap();
        initialize_schema(&pool).await.unwrap();
        users::sign_up(&pool, "alice", "secret", true).await.unwrap();
        questions::add_question(&pool, "Q1", "2+2?", "4").await.unwrap();
        pool.close().await;

        let pool = establish_connection(&path).await.unwrap();
        initialize_schema(&pool).await.unwrap();
        assert!(users::username_exists(&pool, "alice").await.unwrap());
        assert_eq!(questions::get_questions_by_quiz(&pool, "Q1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn in_memory_stores_are_isolated() {
        let first = test_pool().await;
        let second = test_pool().await;

        users::sign_up(&first, "alice", "secret", false).await.unwrap();

        assert!(users::username_exists(&first, "alice").await.unwrap());
        assert!(!users::username_exists(&second, "alice").await.unwrap());
    }

    #[tokio::test]
    async fn operations_fail_without_schema() {
        let pool = establish_in_memory().await.unwrap();

        let err = users::username_exists(&pool, "alice").await.unwrap_err();

        assert!(matches!(err, DbError::Database(_)));
    }
}
